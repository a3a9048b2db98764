use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Ошибка настроек: {0}")]
    Config(String),

    #[error("Файл не найден: {0}")]
    FileNotFound(String),

    #[error("Пожалуйста, загрузите Excel файлы (.xls или .xlsx): {0}")]
    UnsupportedFile(String),

    #[error("Ошибка чтения Excel: {0}")]
    WorkbookRead(String),

    #[error("В книге нет листов: {0}")]
    EmptyWorkbook(String),

    #[error("Ошибка загрузки: {0}")]
    Fetch(String),

    #[error("HTTP error! status: {status} ({location})")]
    HttpStatus { location: String, status: u16 },

    #[error("Данные из Excel файлов не найдены")]
    NoData,

    #[error("Ошибка ввода: {0}")]
    Prompt(String),

    #[error("Ошибка генерации Excel: {0}")]
    ExcelGeneration(String),

    #[error("Ошибка разбора JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка HTTP-клиента: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Common(#[from] school_menu_common::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
