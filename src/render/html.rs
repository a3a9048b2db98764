//! HTML-страница меню
//!
//! Кнопки смен, по контейнеру `#<смена>-shift` на каждую смену, внутри
//! `.week-grid` с карточками дней. Результат поиска отражается в разметке:
//! несовпавшие пункты скрыты, совпавшие подсвечены.

use school_menu_common::types::capitalize;
use school_menu_common::{DayEntry, MenuModel, SearchFilter, ShiftKind, ShiftMenu, Visibility};

const STYLE: &str = r#"
body { font-family: sans-serif; background: #FFF8F3; color: #5D3A1A; margin: 0; padding: 20px; }
.shift-selector { display: flex; gap: 10px; margin-bottom: 20px; }
.shift-btn { padding: 10px 20px; border: 2px solid #FF8C42; border-radius: 20px; background: white; }
.shift-btn.active { background: #FF8C42; color: white; }
.hidden { display: none; }
.week-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 20px; }
.week-header { grid-column: 1 / -1; }
.day-card { background: white; border-radius: 15px; padding: 20px; box-shadow: 0 4px 15px rgba(0, 0, 0, 0.08); }
.day-header { display: flex; justify-content: space-between; align-items: baseline; }
.meal-items li.highlighted { background: #FFE0CC; font-weight: 600; }
.calories { color: #999; font-size: 0.85em; }
.error-message { grid-column: 1 / -1; text-align: center; }
"#;

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Карточка дня
pub fn render_day_card(day: &DayEntry, filter: &SearchFilter) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"day-card\">\n");
    html.push_str("  <div class=\"day-header\">\n");
    html.push_str(&format!("    <h3>{}</h3>\n", escape_html(&day.day)));
    if !day.date.is_empty() {
        html.push_str(&format!("    <span class=\"date\">{}</span>\n", escape_html(&day.date)));
    }
    html.push_str("  </div>\n");
    html.push_str("  <div class=\"meals\">\n");

    for (label, dishes) in day.meals.iter() {
        html.push_str("    <div class=\"meal\">\n");
        html.push_str(&format!(
            "      <h4 class=\"meal-type\">{}</h4>\n",
            escape_html(&capitalize(label))
        ));
        html.push_str("      <ul class=\"meal-items\">\n");
        for dish in dishes {
            let attrs = match filter.apply(&dish.display_text()) {
                Visibility::Hidden => " hidden",
                Visibility::Shown { highlighted: true } => " class=\"highlighted\"",
                Visibility::Shown { highlighted: false } => "",
            };
            let calories = dish
                .shown_calories()
                .map(|c| format!(" <span class=\"calories\">({} ккал)</span>", c))
                .unwrap_or_default();
            html.push_str(&format!(
                "        <li{}>{}{}</li>\n",
                attrs,
                escape_html(&dish.name),
                calories
            ));
        }
        html.push_str("      </ul>\n");
        html.push_str("    </div>\n");
    }

    html.push_str("  </div>\n");
    html.push_str("</div>\n");
    html
}

/// Содержимое `.week-grid` смены
pub fn render_week_grid(menu: &ShiftMenu, filter: &SearchFilter) -> String {
    let mut html = String::new();
    for section in menu.sections() {
        if let Some(week_number) = section.week_number {
            html.push_str(&format!(
                "<div class=\"week-header\"><h2>Неделя {}</h2></div>\n",
                week_number
            ));
        }
        for day in section.days {
            html.push_str(&render_day_card(day, filter));
        }
    }
    html
}

/// Панель ошибки вместо карточек
pub fn render_error(message: &str) -> String {
    format!(
        "<div class=\"error-message\">\n  <h3>⚠️ Ошибка загрузки данных</h3>\n  <p>{}</p>\n</div>\n",
        escape_html(message)
    )
}

fn page(selected: ShiftKind, search: &str, grid_for: impl Fn(ShiftKind) -> String) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<title>Школьное меню</title>\n");
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n");

    html.push_str("<div class=\"shift-selector\">\n");
    for shift in ShiftKind::ALL {
        let class = if shift == selected { "shift-btn active" } else { "shift-btn" };
        html.push_str(&format!(
            "  <button class=\"{}\" data-shift=\"{}\">{}</button>\n",
            class,
            shift.key(),
            shift.display_name()
        ));
    }
    html.push_str("</div>\n");

    html.push_str(&format!(
        "<div class=\"search-container\"><input type=\"text\" id=\"menu-search\" placeholder=\"Поиск по меню...\" class=\"search-input\" value=\"{}\"></div>\n",
        escape_html(search)
    ));

    for shift in ShiftKind::ALL {
        let class = if shift == selected { "menu-container" } else { "menu-container hidden" };
        html.push_str(&format!("<div class=\"{}\" id=\"{}-shift\">\n", class, shift.key()));
        html.push_str("<div class=\"week-grid\">\n");
        html.push_str(&grid_for(shift));
        html.push_str("</div>\n</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Полная страница меню
pub fn render_page(model: &MenuModel, selected: ShiftKind, filter: &SearchFilter) -> String {
    page(selected, filter.query(), |shift| {
        model
            .get(shift)
            .map(|menu| render_week_grid(menu, filter))
            .unwrap_or_default()
    })
}

/// Страница с ошибкой загрузки во всех контейнерах
pub fn render_error_page(message: &str, selected: ShiftKind) -> String {
    page(selected, "", |_| render_error(message))
}
