//! Разбор листа Excel в недельное меню смены
//!
//! Один проход сверху вниз по первой колонке. Каждая строка классифицируется
//! по порядку правил: заголовок дня, заголовок приёма пищи, иначе строка блюда.
//! Сопоставление нечёткое (вхождение подстроки), поэтому «лишние» слова
//! в заголовке не мешают. Некорректная разметка даёт пустой или неполный
//! результат, а не ошибку.

use crate::cell::Cell;
use crate::types::{capitalize, DayEntry, Dish, MealType, Meals, ShiftKind, ShiftMenu, Weekday};
use regex::Regex;

lazy_static::lazy_static! {
    // «2.09», «02-09», «2/9»
    static ref DATE_RE: Regex = Regex::new(r"\d{1,2}[.\-/]\d{1,2}").unwrap();
    // «3. », «12 »
    static ref NUMBERING_RE: Regex = Regex::new(r"^\d+\.?\s*").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref FILLER_RE: Regex = Regex::new(r"^[.\-\s]*$").unwrap();
}

/// Минимальная длина строки блюда (в символах, больше этого значения)
const MIN_DISH_CHARS: usize = 2;

/// Класс строки листа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    Day(Weekday),
    Meal(MealType),
    Line,
}

type Rule = fn(&str) -> Option<RowClass>;

/// Правила в порядке приоритета
const RULES: &[Rule] = &[day_header, meal_header];

fn day_header(text: &str) -> Option<RowClass> {
    Weekday::find_in(text).map(RowClass::Day)
}

fn meal_header(text: &str) -> Option<RowClass> {
    MealType::find_in(text).map(RowClass::Meal)
}

/// Классифицировать текст первой ячейки (уже trim + lowercase)
pub fn classify(text: &str) -> RowClass {
    RULES
        .iter()
        .find_map(|rule| rule(text))
        .unwrap_or(RowClass::Line)
}

/// Дата из заголовка дня; пустая строка, если не найдена
pub fn extract_date(raw: &str) -> String {
    DATE_RE
        .find(raw)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Очистить строку блюда: убрать нумерацию, схлопнуть пробелы
///
/// Возвращает `None` для пустых строк, "undefined" и строк из одних
/// точек/дефисов/пробелов.
pub fn clean_dish(raw: &str) -> Option<String> {
    let stripped = NUMBERING_RE.replace(raw.trim(), "");
    let dish = WHITESPACE_RE.replace_all(&stripped, " ");

    if dish.is_empty() || dish == "undefined" || FILLER_RE.is_match(&dish) {
        return None;
    }
    Some(dish.into_owned())
}

/// Состояние разбора
#[derive(Default)]
struct WeekBuilder {
    days: Vec<DayEntry>,
    current_day: Option<Weekday>,
    current_date: String,
    current_meals: Meals,
    current_meal: Option<MealType>,
}

impl WeekBuilder {
    fn start_day(&mut self, day: Weekday, date: String) {
        self.flush();
        self.current_day = Some(day);
        self.current_date = date;
        self.current_meal = None;
    }

    fn start_meal(&mut self, meal: MealType) {
        self.current_meal = Some(meal);
        self.current_meals.bucket_mut(meal.label());
    }

    fn push_line(&mut self, raw: &str) {
        let Some(meal) = self.current_meal else {
            return;
        };
        if let Some(name) = clean_dish(raw) {
            self.current_meals.bucket_mut(meal.label()).push(Dish::new(name));
        }
    }

    /// Закрыть текущий день; день без блюд не попадает в результат
    fn flush(&mut self) {
        let meals = std::mem::take(&mut self.current_meals);
        let date = std::mem::take(&mut self.current_date);
        if let Some(day) = self.current_day {
            if meals.has_dishes() {
                self.days.push(DayEntry {
                    day: capitalize(day.label()),
                    date,
                    meals,
                });
            }
        }
    }

    fn finish(mut self) -> Vec<DayEntry> {
        self.flush();
        self.days
    }
}

/// Разобрать строки первого листа в меню смены
pub fn extract(rows: &[Vec<Cell>], shift: ShiftKind) -> ShiftMenu {
    let mut builder = WeekBuilder::default();

    for row in rows {
        let Some(first) = row.first() else {
            continue;
        };
        let raw = first.to_text();
        let text = raw.trim().to_lowercase();
        if text.is_empty() || text == "undefined" {
            continue;
        }

        match classify(&text) {
            RowClass::Day(day) => builder.start_day(day, extract_date(&raw)),
            RowClass::Meal(meal) => builder.start_meal(meal),
            RowClass::Line => {
                if text.chars().count() > MIN_DISH_CHARS {
                    builder.push_line(&raw);
                }
            }
        }
    }

    ShiftMenu::from_days(shift, builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::column_rows;
    use crate::types::Schedule;

    fn days_of(menu: &ShiftMenu) -> &[DayEntry] {
        match &menu.schedule {
            Schedule::Days(days) => days,
            Schedule::Weeks(_) => panic!("extractor must produce flat days"),
        }
    }

    fn names(dishes: &[Dish]) -> Vec<&str> {
        dishes.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_two_days_example() {
        let rows = column_rows(&[
            "Понедельник 2.09",
            "Завтрак",
            "Каша",
            "Обед",
            "Суп",
            "Вторник 3.09",
            "Завтрак",
            "Каша рисовая",
        ]);
        let menu = extract(&rows, ShiftKind::First);
        let days = days_of(&menu);

        assert_eq!(menu.shift_type, ShiftKind::First);
        assert_eq!(menu.shift_name, "Первая смена");
        assert_eq!(days.len(), 2);

        assert_eq!(days[0].day, "Понедельник");
        assert_eq!(days[0].date, "2.09");
        assert_eq!(names(days[0].meals.get("завтрак").unwrap()), vec!["Каша"]);
        assert_eq!(names(days[0].meals.get("обед").unwrap()), vec!["Суп"]);

        assert_eq!(days[1].day, "Вторник");
        assert_eq!(days[1].date, "3.09");
        assert_eq!(names(days[1].meals.get("завтрак").unwrap()), vec!["Каша рисовая"]);
        assert!(days[1].meals.get("обед").is_none());
    }

    #[test]
    fn test_no_day_headers_gives_empty_menu() {
        let rows = column_rows(&["Завтрак", "Каша", "Обед", "Суп гороховый"]);
        let menu = extract(&rows, ShiftKind::Second);
        assert!(days_of(&menu).is_empty());
        assert_eq!(menu.shift_name, "Вторая смена");
    }

    #[test]
    fn test_day_without_dishes_is_dropped() {
        let rows = column_rows(&[
            "Понедельник",
            "Завтрак",
            "Вторник",
            "Обед",
            "Суп",
            "Среда",
        ]);
        let menu = extract(&rows, ShiftKind::First);
        let days = days_of(&menu);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].day, "Вторник");
        assert!(days.iter().all(|d| d.meals.has_dishes()));
    }

    #[test]
    fn test_day_header_with_surrounding_text() {
        let rows = column_rows(&["  Меню: ПОНЕДЕЛЬНИК 2.09 (неделя 1)", "обед", "Суп"]);
        let menu = extract(&rows, ShiftKind::First);
        let days = days_of(&menu);
        assert_eq!(days[0].day, "Понедельник");
        assert_eq!(days[0].date, "2.09");
    }

    #[test]
    fn test_date_separators() {
        assert_eq!(extract_date("Понедельник 2.09"), "2.09");
        assert_eq!(extract_date("Среда 04-09-2024"), "04-09");
        assert_eq!(extract_date("Пятница 6/9"), "6/9");
        assert_eq!(extract_date("Четверг"), "");
    }

    #[test]
    fn test_numbering_stripped() {
        assert_eq!(clean_dish("3. Салат из капусты").as_deref(), Some("Салат из капусты"));
        assert_eq!(clean_dish("12 Компот").as_deref(), Some("Компот"));
        assert_eq!(clean_dish("  Чай   с   сахаром ").as_deref(), Some("Чай с сахаром"));
    }

    #[test]
    fn test_filler_lines_rejected() {
        assert_eq!(clean_dish("---"), None);
        assert_eq!(clean_dish(" . - . "), None);
        assert_eq!(clean_dish("7."), None);
        assert_eq!(clean_dish("undefined"), None);
    }

    #[test]
    fn test_clean_dish_is_idempotent() {
        for raw in [
            "3. Салат из капусты",
            "Каша  овсяная\tмолочная",
            "1.Хлеб пшеничный",
            "Компот из сухофруктов",
        ] {
            let once = clean_dish(raw).unwrap();
            assert_eq!(clean_dish(&once).as_deref(), Some(once.as_str()));
        }
    }

    #[test]
    fn test_numbered_dish_row() {
        let rows = column_rows(&["Понедельник", "Обед", "3. Салат из капусты"]);
        let menu = extract(&rows, ShiftKind::First);
        let lunch = days_of(&menu)[0].meals.get("обед").unwrap();
        assert_eq!(names(lunch), vec!["Салат из капусты"]);
    }

    #[test]
    fn test_short_and_blank_rows_skipped() {
        let rows = vec![
            vec![Cell::from("Понедельник")],
            vec![],
            vec![Cell::Empty, Cell::from("игнорируется")],
            vec![Cell::from("Завтрак")],
            vec![Cell::from("ок")],
            vec![Cell::from("undefined")],
            vec![Cell::from("Каша")],
        ];
        let menu = extract(&rows, ShiftKind::First);
        let breakfast = days_of(&menu)[0].meals.get("завтрак").unwrap();
        assert_eq!(names(breakfast), vec!["Каша"]);
    }

    #[test]
    fn test_lines_before_meal_header_ignored() {
        let rows = column_rows(&["Понедельник", "Примечание к меню", "Обед", "Суп"]);
        let menu = extract(&rows, ShiftKind::First);
        let day = &days_of(&menu)[0];
        assert_eq!(day.meals.len(), 1);
        assert_eq!(names(day.meals.get("обед").unwrap()), vec!["Суп"]);
    }

    #[test]
    fn test_meal_order_follows_sheet() {
        let rows = column_rows(&["Вторник", "Полдник", "Булочка", "Обед", "Суп", "Полдник", "Молоко"]);
        let menu = extract(&rows, ShiftKind::Second);
        let meals = &days_of(&menu)[0].meals;
        let labels: Vec<&str> = meals.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["полдник", "обед"]);
        assert_eq!(names(meals.get("полдник").unwrap()), vec!["Булочка", "Молоко"]);
    }

    #[test]
    fn test_meals_before_first_day_are_discarded() {
        let rows = column_rows(&["Завтрак", "Каша", "Среда 4.09", "Обед", "Щи кислые"]);
        let menu = extract(&rows, ShiftKind::First);
        let days = days_of(&menu);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].day, "Среда");
        assert!(days[0].meals.get("завтрак").is_none());
    }

    #[test]
    fn test_numeric_first_cell() {
        let rows = vec![
            vec![Cell::from("Четверг")],
            vec![Cell::from("Обед")],
            vec![Cell::Number(2024.0)],
        ];
        let menu = extract(&rows, ShiftKind::First);
        // «2024» целиком съедается как нумерация, день остаётся без блюд
        assert!(days_of(&menu).is_empty());
    }

    #[test]
    fn test_classify_priority() {
        // день важнее приёма пищи
        assert_eq!(classify("обед в понедельник"), RowClass::Day(Weekday::Monday));
        assert_eq!(classify("ужин"), RowClass::Meal(MealType::Dinner));
        assert_eq!(classify("котлета"), RowClass::Line);
    }
}
