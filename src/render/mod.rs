//! Отображение меню: HTML-страница и текст для терминала

pub mod html;
pub mod text;

pub use html::{render_error, render_error_page, render_page};
pub use text::render_shift_text;
