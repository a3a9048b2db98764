use clap::{Parser, Subcommand};
use school_menu_common::ShiftKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "school-menu")]
#[command(about = "Школьное меню: Excel и JSON, просмотр по сменам", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Подробный лог
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Разобрать Excel-файлы смен (по умолчанию из настроек)
    Parse {
        /// Файлы или каталоги с .xls/.xlsx
        inputs: Vec<PathBuf>,

        /// Файл или каталог для результата
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Формат (json/excel/both)
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,
    },

    /// Загрузить свои Excel-файлы; смена определяется по имени файла
    Import {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Формат (json/excel/both)
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,
    },

    /// Показать меню смены
    Show {
        /// JSON-файл меню (иначе документы из настроек)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Смена (first/second); по умолчанию сохранённая
        #[arg(short, long)]
        shift: Option<ShiftKind>,

        /// Поиск по блюдам
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Показать примерные данные
        #[arg(long)]
        sample: bool,
    },

    /// Сохранить меню как HTML-страницу
    Render {
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long, default_value = "menu.html")]
        output: PathBuf,

        #[arg(short, long)]
        shift: Option<ShiftKind>,

        #[arg(short = 'q', long)]
        search: Option<String>,

        #[arg(long)]
        sample: bool,
    },

    /// Сохранить примерные данные
    Sample {
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Формат (json/excel/both)
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,
    },

    /// Выбрать смену (без аргумента интерактивно)
    Shift {
        shift: Option<ShiftKind>,
    },

    /// Показать/изменить настройки
    Config {
        /// Основной JSON-документ (путь или URL)
        #[arg(long)]
        primary: Option<String>,

        /// Резервный JSON-документ
        #[arg(long)]
        fallback: Option<String>,

        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}
