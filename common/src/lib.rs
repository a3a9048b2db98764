//! School Menu Common Library
//!
//! Общие типы и логика для CLI и рендереров: модель меню, разбор листа
//! Excel, поиск и примерные данные.

pub mod cell;
pub mod error;
pub mod export;
pub mod extractor;
pub mod sample;
pub mod search;
pub mod types;

pub use cell::Cell;
pub use error::{Error, Result};
pub use extractor::{clean_dish, extract, extract_date};
pub use sample::sample_menu;
pub use search::{SearchFilter, Visibility};
pub use types::{
    DayEntry, Dish, MealType, Meals, MenuModel, Schedule, Section, ShiftKind, ShiftMenu, WeekEntry,
    Weekday,
};
