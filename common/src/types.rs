//! Модель данных меню
//!
//! Общие типы для CLI и рендереров:
//! - ShiftKind / Weekday / MealType: закрытые наборы смен, дней и приёмов пищи
//! - Dish / Meals / DayEntry / WeekEntry: содержимое дня
//! - ShiftMenu / MenuModel: меню смены и всё меню целиком
//!
//! JSON-документы бывают двух поколений (плоский список `days` или `weeks`
//! с неделями, блюдо строкой или объектом). Оба варианта приводятся к одной
//! канонической форме сразу при десериализации.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Смена питания
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftKind {
    First,
    Second,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; 2] = [ShiftKind::First, ShiftKind::Second];

    /// Ключ смены в JSON и в id контейнера
    pub fn key(&self) -> &'static str {
        match self {
            ShiftKind::First => "first",
            ShiftKind::Second => "second",
        }
    }

    /// Отображаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ShiftKind::First => "Первая смена",
            ShiftKind::Second => "Вторая смена",
        }
    }

    /// Смена по имени файла: «первая» в имени → первая, иначе вторая
    pub fn from_file_name(name: &str) -> Self {
        if name.to_lowercase().contains("первая") {
            ShiftKind::First
        } else {
            ShiftKind::Second
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for ShiftKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" | "1" | "первая" => Ok(ShiftKind::First),
            "second" | "2" | "вторая" => Ok(ShiftKind::Second),
            _ => Err(format!("Unknown shift: {}. Use first or second", s)),
        }
    }
}

/// День недели (только учебные дни)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "понедельник",
            Weekday::Tuesday => "вторник",
            Weekday::Wednesday => "среда",
            Weekday::Thursday => "четверг",
            Weekday::Friday => "пятница",
        }
    }

    /// Первый день из списка, встречающийся в тексте (текст уже в нижнем регистре)
    pub fn find_in(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| text.contains(day.label()))
    }
}

/// Тип приёма пищи
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealType {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Snack,
        MealType::Dinner,
    ];

    /// Ключ корзины в `meals`
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "завтрак",
            MealType::Lunch => "обед",
            MealType::Snack => "полдник",
            MealType::Dinner => "ужин",
        }
    }

    pub fn find_in(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|meal| text.contains(meal.label()))
    }
}

/// Первая буква в верхний регистр
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Блюдо
///
/// В JSON встречается строкой (`"Каша"`) или объектом
/// (`{"name": "Каша", "calories": 180}`). Сериализуется обратно строкой,
/// если калорийность не указана.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DishRepr", into = "DishRepr")]
pub struct Dish {
    pub name: String,
    pub calories: Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DishRepr {
    Plain(String),
    Detailed {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        calories: Option<f64>,
    },
}

impl From<DishRepr> for Dish {
    fn from(repr: DishRepr) -> Self {
        match repr {
            DishRepr::Plain(name) => Dish { name, calories: None },
            DishRepr::Detailed { name, calories } => Dish { name, calories },
        }
    }
}

impl From<Dish> for DishRepr {
    fn from(dish: Dish) -> Self {
        match dish.calories {
            None => DishRepr::Plain(dish.name),
            Some(calories) => DishRepr::Detailed {
                name: dish.name,
                calories: Some(calories),
            },
        }
    }
}

impl Dish {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), calories: None }
    }

    pub fn with_calories(name: impl Into<String>, calories: f64) -> Self {
        Self { name: name.into(), calories: Some(calories) }
    }

    /// Калорийность для показа (0 не показывается)
    pub fn shown_calories(&self) -> Option<f64> {
        self.calories.filter(|c| *c != 0.0)
    }

    /// Текст пункта меню: имя и, если есть, «(N ккал)»
    pub fn display_text(&self) -> String {
        match self.shown_calories() {
            Some(calories) => format!("{} ({} ккал)", self.name, calories),
            None => self.name.clone(),
        }
    }
}

/// Корзины приёмов пищи в порядке появления
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Meals {
    entries: Vec<(String, Vec<Dish>)>,
}

impl Meals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Корзина по метке; создаётся в конце, если её ещё нет
    pub fn bucket_mut(&mut self, label: &str) -> &mut Vec<Dish> {
        let index = match self.entries.iter().position(|(l, _)| l == label) {
            Some(index) => index,
            None => {
                self.entries.push((label.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    pub fn get(&self, label: &str) -> Option<&[Dish]> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, dishes)| dishes.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Dish])> {
        self.entries
            .iter()
            .map(|(label, dishes)| (label.as_str(), dishes.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Есть ли хотя бы одна непустая корзина
    pub fn has_dishes(&self) -> bool {
        self.entries.iter().any(|(_, dishes)| !dishes.is_empty())
    }
}

impl<L: Into<String>> FromIterator<(L, Vec<Dish>)> for Meals {
    fn from_iter<I: IntoIterator<Item = (L, Vec<Dish>)>>(iter: I) -> Self {
        let mut meals = Meals::new();
        for (label, dishes) in iter {
            let label: String = label.into();
            meals.bucket_mut(&label).extend(dishes);
        }
        meals
    }
}

impl Serialize for Meals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, dishes) in &self.entries {
            map.serialize_entry(label, dishes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Meals {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MealsVisitor;

        impl<'de> Visitor<'de> for MealsVisitor {
            type Value = Meals;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of meal type to dishes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Meals, A::Error> {
                let mut meals = Meals::new();
                while let Some((label, dishes)) = access.next_entry::<String, Vec<Dish>>()? {
                    meals.bucket_mut(&label).extend(dishes);
                }
                Ok(meals)
            }
        }

        deserializer.deserialize_map(MealsVisitor)
    }
}

/// Один день меню
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub day: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub meals: Meals,
}

/// Неделя (новая схема)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekEntry {
    pub week_number: u32,
    #[serde(default)]
    pub days: Vec<DayEntry>,
}

/// Расписание смены: плоский список дней или недели
#[derive(Debug, Clone, PartialEq)]
pub enum Schedule {
    Days(Vec<DayEntry>),
    Weeks(Vec<WeekEntry>),
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule::Days(Vec::new())
    }
}

/// Блок для отображения: номер недели (если есть) и её дни
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    pub week_number: Option<u32>,
    pub days: &'a [DayEntry],
}

/// Меню одной смены
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ShiftMenuRepr", into = "ShiftMenuRepr")]
pub struct ShiftMenu {
    pub shift_type: ShiftKind,
    pub shift_name: String,
    pub schedule: Schedule,
}

#[derive(Serialize, Deserialize)]
struct ShiftMenuRepr {
    shift_type: ShiftKind,
    #[serde(default)]
    shift_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    days: Option<Vec<DayEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weeks: Option<Vec<WeekEntry>>,
}

impl From<ShiftMenuRepr> for ShiftMenu {
    fn from(repr: ShiftMenuRepr) -> Self {
        // weeks приоритетнее, если не пуст
        let schedule = match repr.weeks {
            Some(weeks) if !weeks.is_empty() => Schedule::Weeks(weeks),
            _ => Schedule::Days(repr.days.unwrap_or_default()),
        };
        let shift_name = if repr.shift_name.is_empty() {
            repr.shift_type.display_name().to_string()
        } else {
            repr.shift_name
        };
        ShiftMenu {
            shift_type: repr.shift_type,
            shift_name,
            schedule,
        }
    }
}

impl From<ShiftMenu> for ShiftMenuRepr {
    fn from(menu: ShiftMenu) -> Self {
        let (days, weeks) = match menu.schedule {
            Schedule::Days(days) => (Some(days), None),
            Schedule::Weeks(weeks) => (None, Some(weeks)),
        };
        ShiftMenuRepr {
            shift_type: menu.shift_type,
            shift_name: menu.shift_name,
            days,
            weeks,
        }
    }
}

impl ShiftMenu {
    pub fn from_days(shift: ShiftKind, days: Vec<DayEntry>) -> Self {
        Self {
            shift_type: shift,
            shift_name: shift.display_name().to_string(),
            schedule: Schedule::Days(days),
        }
    }

    pub fn from_weeks(shift: ShiftKind, weeks: Vec<WeekEntry>) -> Self {
        Self {
            shift_type: shift,
            shift_name: shift.display_name().to_string(),
            schedule: Schedule::Weeks(weeks),
        }
    }

    /// Непустой ли список days/weeks
    pub fn has_content(&self) -> bool {
        match &self.schedule {
            Schedule::Days(days) => !days.is_empty(),
            Schedule::Weeks(weeks) => !weeks.is_empty(),
        }
    }

    /// Блоки для отображения в порядке документа
    pub fn sections(&self) -> Vec<Section<'_>> {
        match &self.schedule {
            Schedule::Days(days) => vec![Section { week_number: None, days }],
            Schedule::Weeks(weeks) => weeks
                .iter()
                .map(|week| Section {
                    week_number: Some(week.week_number),
                    days: &week.days,
                })
                .collect(),
        }
    }

    /// Все дни подряд: недели по порядку, внутри недели дни по порядку
    pub fn days(&self) -> Vec<&DayEntry> {
        self.sections()
            .into_iter()
            .flat_map(|section| section.days.iter())
            .collect()
    }
}

/// Всё меню: смена → меню смены
///
/// При чтении ключ верхнего уровня определяет смену. Посторонние ключи
/// пропускаются, `shift_type` внутри смены можно не указывать.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MenuModel {
    shifts: BTreeMap<ShiftKind, ShiftMenu>,
}

impl<'de> Deserialize<'de> for MenuModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;

        let mut model = MenuModel::new();
        for (key, mut value) in entries {
            let Some(shift) = ShiftKind::ALL.into_iter().find(|s| s.key() == key) else {
                log::warn!("Пропущен неизвестный ключ меню: {}", key);
                continue;
            };
            if let Some(fields) = value.as_object_mut() {
                fields
                    .entry("shift_type")
                    .or_insert_with(|| serde_json::Value::from(shift.key()));
            }
            let mut menu: ShiftMenu =
                serde_json::from_value(value).map_err(serde::de::Error::custom)?;
            menu.shift_type = shift;
            model.insert(menu);
        }
        Ok(model)
    }
}

impl MenuModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить или заменить меню смены
    pub fn insert(&mut self, menu: ShiftMenu) {
        self.shifts.insert(menu.shift_type, menu);
    }

    pub fn get(&self, shift: ShiftKind) -> Option<&ShiftMenu> {
        self.shifts.get(&shift)
    }

    pub fn shifts(&self) -> impl Iterator<Item = &ShiftMenu> {
        self.shifts.values()
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Хотя бы одна смена с непустыми days/weeks
    pub fn has_data(&self) -> bool {
        self.shifts.values().any(ShiftMenu::has_content)
    }

    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// JSON с отступами (для сохранения в файл)
    pub fn to_pretty_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<ShiftMenu> for MenuModel {
    fn from_iter<I: IntoIterator<Item = ShiftMenu>>(iter: I) -> Self {
        let mut model = MenuModel::new();
        for menu in iter {
            model.insert(menu);
        }
        model
    }
}
