//! Встроенные примерные данные
//!
//! Используются, когда ни один Excel-файл не загрузился, и для ручного
//! переключения на резервные данные.

use crate::types::{DayEntry, Dish, MenuModel, Meals, ShiftKind, ShiftMenu};

const DATES: [(&str, &str); 5] = [
    ("Понедельник", "2 сентября"),
    ("Вторник", "3 сентября"),
    ("Среда", "4 сентября"),
    ("Четверг", "5 сентября"),
    ("Пятница", "6 сентября"),
];

/// Понедельник первой смены, с калорийностью
const FIRST_MONDAY_BREAKFAST: [(&str, f64); 4] = [
    ("Каша овсяная молочная с маслом сливочным", 180.0),
    ("Бутерброд с маслом сливочным", 145.0),
    ("Чай с сахаром", 35.0),
    ("Хлеб пшеничный", 85.0),
];

const FIRST_MONDAY_LUNCH: [(&str, f64); 6] = [
    ("Борщ со сметаной", 125.0),
    ("Котлета куриная паровая", 210.0),
    ("Пюре картофельное", 95.0),
    ("Салат из свежей капусты", 45.0),
    ("Компот из сухофруктов", 65.0),
    ("Хлеб ржаной", 75.0),
];

const FIRST_BREAKFAST: [[&str; 4]; 4] = [
    ["Каша рисовая молочная с изюмом", "Яйцо куриное вареное", "Какао на молоке", "Хлеб пшеничный с маслом"],
    ["Каша гречневая с молоком", "Сосиска молочная отварная", "Чай с лимоном и сахаром", "Хлеб пшеничный"],
    ["Омлет натуральный", "Хлеб с джемом абрикосовым", "Молоко пастеризованное", "Масло сливочное"],
    ["Каша пшенная молочная", "Творог со сметаной", "Чай с медом натуральным", "Печенье овсяное"],
];

const FIRST_LUNCH: [[&str; 6]; 4] = [
    ["Суп гороховый с мясом", "Рыба запеченная с овощами", "Рис отварной рассыпчатый", "Салат витаминный", "Сок яблочный натуральный", "Хлеб ржаной"],
    ["Щи из свежей капусты", "Гуляш говяжий тушеный", "Макароны отварные", "Салат из моркови с яблоком", "Кисель ягодный", "Хлеб ржаной"],
    ["Суп куриный с домашней лапшой", "Тефтели мясные в томатном соусе", "Гречка отварная рассыпчатая", "Салат из свежих огурцов", "Компот из свежих яблок", "Хлеб ржаной"],
    ["Солянка мясная сборная", "Курица отварная диетическая", "Картофель отварной с укропом", "Салат из отварной свеклы", "Морс клюквенный", "Хлеб ржаной"],
];

const SECOND_LUNCH: [[&str; 6]; 5] = [
    ["Суп овощной с брокколи", "Котлеты рыбные паровые", "Рис с овощами тушеными", "Салат витаминный из капусты", "Компот из сухофруктов", "Хлеб ржаной"],
    ["Борщ украинский со сметаной", "Котлета свиная на пару", "Пюре картофельное с маслом", "Салат из помидоров и огурцов", "Сок апельсиновый натуральный", "Хлеб ржаной"],
    ["Рассольник с перловкой", "Курица запеченная с травами", "Гречка рассыпчатая с маслом", "Салат из белокочанной капусты", "Кисель вишневый", "Хлеб ржаной"],
    ["Суп молочный с вермишелью", "Биточки рыбные запеченные", "Макароны твердых сортов", "Салат огуречный с зеленью", "Компот яблочный домашний", "Хлеб ржаной"],
    ["Щи кислые с мясом", "Тефтели в сметанном соусе", "Рис отварной с зеленью", "Салат морковный с медом", "Морс брусничный", "Хлеб ржаной"],
];

const SECOND_SNACK: [[&str; 4]; 5] = [
    ["Булочка с повидлом домашним", "Молоко топленое", "Яблоко свежее", "Орехи грецкие"],
    ["Печенье овсяное домашнее", "Йогурт натуральный", "Банан спелый", "Чай травяной"],
    ["Сырники творожные", "Сметана домашняя", "Чай с мятой", "Мед цветочный"],
    ["Кекс домашний с изюмом", "Какао на молоке", "Яблоко запеченное", "Корица молотая"],
    ["Запеканка творожная", "Молоко пастеризованное", "Груша свежая", "Варенье домашнее"],
];

fn plain(names: &[&str]) -> Vec<Dish> {
    names.iter().map(|name| Dish::new(*name)).collect()
}

fn with_calories(items: &[(&str, f64)]) -> Vec<Dish> {
    items
        .iter()
        .map(|(name, calories)| Dish::with_calories(*name, *calories))
        .collect()
}

fn day(index: usize, meals: Meals) -> DayEntry {
    let (day, date) = DATES[index];
    DayEntry {
        day: day.to_string(),
        date: date.to_string(),
        meals,
    }
}

fn first_shift() -> ShiftMenu {
    let mut days = vec![day(
        0,
        Meals::from_iter([
            ("завтрак", with_calories(&FIRST_MONDAY_BREAKFAST)),
            ("обед", with_calories(&FIRST_MONDAY_LUNCH)),
        ]),
    )];
    for (i, (breakfast, lunch)) in FIRST_BREAKFAST.iter().zip(FIRST_LUNCH.iter()).enumerate() {
        days.push(day(
            i + 1,
            Meals::from_iter([("завтрак", plain(breakfast)), ("обед", plain(lunch))]),
        ));
    }
    ShiftMenu::from_days(ShiftKind::First, days)
}

fn second_shift() -> ShiftMenu {
    let days = SECOND_LUNCH
        .iter()
        .zip(SECOND_SNACK.iter())
        .enumerate()
        .map(|(i, (lunch, snack))| {
            day(i, Meals::from_iter([("обед", plain(lunch)), ("полдник", plain(snack))]))
        })
        .collect();
    ShiftMenu::from_days(ShiftKind::Second, days)
}

/// Примерное меню на неделю для обеих смен
pub fn sample_menu() -> MenuModel {
    MenuModel::from_iter([first_shift(), second_shift()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_both_shifts_and_five_days() {
        let model = sample_menu();
        assert!(model.has_data());
        for shift in ShiftKind::ALL {
            let menu = model.get(shift).unwrap();
            assert_eq!(menu.days().len(), 5);
            assert!(menu.days().iter().all(|d| d.meals.has_dishes()));
        }
    }

    #[test]
    fn test_sample_monday_has_calories() {
        let model = sample_menu();
        let monday = model.get(ShiftKind::First).unwrap().days()[0];
        let breakfast = monday.meals.get("завтрак").unwrap();
        assert_eq!(breakfast[0].calories, Some(180.0));

        let tuesday = model.get(ShiftKind::First).unwrap().days()[1];
        assert!(tuesday.meals.get("обед").unwrap().iter().all(|d| d.calories.is_none()));
    }

    #[test]
    fn test_second_shift_serves_lunch_and_snack() {
        let model = sample_menu();
        let day = model.get(ShiftKind::Second).unwrap().days()[2];
        let labels: Vec<&str> = day.meals.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["обед", "полдник"]);
    }
}
