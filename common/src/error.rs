//! Типы ошибок

use thiserror::Error;

/// Общая ошибка библиотеки
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Псевдоним Result
pub type Result<T> = std::result::Result<T, Error>;
