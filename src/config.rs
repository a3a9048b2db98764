use crate::error::{MenuError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "school-menu";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Основной JSON-документ (путь или URL)
    pub primary_document: String,
    /// Резервный JSON-документ
    pub fallback_document: String,
    /// Excel-файлы смен для загрузки по умолчанию
    pub workbooks: Vec<PathBuf>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Каталог настроек: ~/.config/school-menu
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MenuError::Config("Домашний каталог не найден".into()))?;
        Ok(home.join(".config").join(APP_DIR))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    fn default_config() -> Self {
        let menu_dir = PathBuf::from("School Menu");
        Self {
            primary_document: "menu_data_accurate.json".into(),
            fallback_document: "menu_data.json".into(),
            workbooks: vec![
                menu_dir.join("Меню_на_1_4_классы_Каспийск_ноябрь_первая_смена_1,2,3,4,6,7,8.xls"),
                menu_dir.join("Меню_на_1_4_классы_Каспийск_ноябрь_вторая_смена.xls"),
            ],
            timeout_seconds: 30,
        }
    }
}
