//! Excel-шаблон меню
//!
//! Записывает меню смены на один лист в той же разметке, которую читает
//! extractor: строка дня («Понедельник 2.09»), строка приёма пищи
//! («Завтрак»), затем пронумерованные блюда. Калорийность в колонке B.

use crate::types::{capitalize, ShiftMenu};
use rust_xlsxwriter::*;

const SHEET_NAME: &str = "Меню";
const DISH_COL_WIDTH: f64 = 60.0;
const CALORIES_COL_WIDTH: f64 = 12.0;

/// Excel-файл смены в буфер
pub fn generate_menu_buffer(menu: &ShiftMenu) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let title_format = Format::new().set_bold().set_font_size(14.0);
    let day_format = Format::new()
        .set_bold()
        .set_font_size(12.0)
        .set_background_color(Color::RGB(0xFFE0CC));
    let meal_format = Format::new().set_bold().set_italic();
    let calories_format = Format::new()
        .set_font_color(Color::RGB(0x777777))
        .set_align(FormatAlign::Right);

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| format!("Ошибка имени листа: {}", e))?;
    worksheet
        .set_column_width(0, DISH_COL_WIDTH)
        .map_err(|e| format!("Ошибка ширины колонки: {}", e))?;
    worksheet
        .set_column_width(1, CALORIES_COL_WIDTH)
        .map_err(|e| format!("Ошибка ширины колонки: {}", e))?;

    let title = format!("Меню: {}", menu.shift_name);
    worksheet
        .write_string_with_format(0, 0, &title, &title_format)
        .map_err(|e| format!("Ошибка записи заголовка: {}", e))?;

    let mut row: u32 = 2;
    for day in menu.days() {
        let header = if day.date.is_empty() {
            day.day.clone()
        } else {
            format!("{} {}", day.day, day.date)
        };
        worksheet
            .write_string_with_format(row, 0, &header, &day_format)
            .map_err(|e| format!("Ошибка записи дня: {}", e))?;
        row += 1;

        for (label, dishes) in day.meals.iter() {
            worksheet
                .write_string_with_format(row, 0, capitalize(label), &meal_format)
                .map_err(|e| format!("Ошибка записи приёма пищи: {}", e))?;
            row += 1;

            for (i, dish) in dishes.iter().enumerate() {
                worksheet
                    .write_string(row, 0, format!("{}. {}", i + 1, dish.name))
                    .map_err(|e| format!("Ошибка записи блюда: {}", e))?;
                if let Some(calories) = dish.shown_calories() {
                    worksheet
                        .write_number_with_format(row, 1, calories, &calories_format)
                        .map_err(|e| format!("Ошибка записи калорийности: {}", e))?;
                }
                row += 1;
            }
        }
        row += 1;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Ошибка сохранения Excel: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_menu;
    use crate::types::ShiftKind;

    #[test]
    fn test_generate_menu_buffer_is_zip() {
        let model = sample_menu();
        let buffer = generate_menu_buffer(model.get(ShiftKind::First).unwrap()).unwrap();
        // xlsx это zip-архив
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn test_generate_empty_menu() {
        let menu = ShiftMenu::from_days(ShiftKind::Second, vec![]);
        assert!(generate_menu_buffer(&menu).is_ok());
    }
}
