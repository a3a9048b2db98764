//! Меню смены для терминала

use colored::Colorize;
use school_menu_common::types::capitalize;
use school_menu_common::{DayEntry, SearchFilter, ShiftMenu, Visibility};
use std::fmt::Write;

/// Строки одного дня; `None`, если при активном поиске ничего не видно
fn render_day(day: &DayEntry, filter: &SearchFilter) -> Option<String> {
    let mut out = String::new();
    let mut any_visible = false;

    for (label, dishes) in day.meals.iter() {
        let mut items = String::new();
        for dish in dishes {
            match filter.apply(&dish.display_text()) {
                Visibility::Hidden => {}
                Visibility::Shown { highlighted } => {
                    let text = dish.display_text();
                    let text = if highlighted {
                        text.bold().yellow().to_string()
                    } else {
                        text
                    };
                    let _ = writeln!(items, "    • {}", text);
                }
            }
        }

        if items.is_empty() && filter.is_active() {
            continue;
        }
        any_visible |= !items.is_empty();
        let _ = writeln!(out, "  {}", capitalize(label).italic());
        out.push_str(&items);
    }

    if filter.is_active() && !any_visible {
        return None;
    }

    let header = if day.date.is_empty() {
        day.day.bold().to_string()
    } else {
        format!("{}  {}", day.day.bold(), day.date.dimmed())
    };
    Some(format!("{}\n{}", header, out))
}

/// Меню смены: заголовок, недели, карточки дней
pub fn render_shift_text(menu: &ShiftMenu, filter: &SearchFilter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🍽  {}", menu.shift_name.bold());
    if filter.is_active() {
        let _ = writeln!(out, "🔍 Поиск: «{}»", filter.query());
    }
    out.push('\n');

    let mut shown_days = 0;
    for section in menu.sections() {
        let mut block = String::new();
        for day in section.days {
            if let Some(text) = render_day(day, filter) {
                block.push_str(&text);
                block.push('\n');
                shown_days += 1;
            }
        }
        if block.is_empty() {
            continue;
        }
        if let Some(week_number) = section.week_number {
            let _ = writeln!(out, "── Неделя {} ──\n", week_number);
        }
        out.push_str(&block);
    }

    if shown_days == 0 {
        if filter.is_active() {
            out.push_str("Ничего не найдено\n");
        } else {
            out.push_str("Меню пока пустое\n");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use school_menu_common::{sample_menu, Dish, Meals, ShiftKind, WeekEntry};

    #[test]
    fn test_full_shift_listing() {
        colored::control::set_override(false);
        let model = sample_menu();
        let text = render_shift_text(model.get(ShiftKind::Second).unwrap(), &SearchFilter::default());
        assert!(text.contains("Вторая смена"));
        assert!(text.contains("Пятница  6 сентября"));
        assert!(text.contains("  Полдник"));
        assert!(text.contains("    • Груша свежая"));
    }

    #[test]
    fn test_search_omits_empty_days_and_meals() {
        colored::control::set_override(false);
        let model = sample_menu();
        let text = render_shift_text(model.get(ShiftKind::First).unwrap(), &SearchFilter::new("омлет"));
        assert!(text.contains("Четверг"));
        assert!(text.contains("Омлет натуральный"));
        assert!(!text.contains("Понедельник"));
        assert!(!text.contains("Обед"));
        assert!(!text.contains("Молоко пастеризованное"));
    }

    #[test]
    fn test_nothing_found() {
        colored::control::set_override(false);
        let model = sample_menu();
        let text = render_shift_text(model.get(ShiftKind::First).unwrap(), &SearchFilter::new("пицца"));
        assert!(text.contains("Ничего не найдено"));
    }

    #[test]
    fn test_week_headers() {
        colored::control::set_override(false);
        let day = DayEntry {
            day: "Понедельник".into(),
            date: "2.09".into(),
            meals: Meals::from_iter([("завтрак", vec![Dish::new("Каша")])]),
        };
        let menu = ShiftMenu::from_weeks(
            ShiftKind::First,
            vec![WeekEntry { week_number: 3, days: vec![day] }],
        );
        let text = render_shift_text(&menu, &SearchFilter::default());
        assert!(text.contains("── Неделя 3 ──"));
        assert!(text.contains("    • Каша"));
    }
}
