//! Загрузка меню из JSON
//!
//! Источник: встроенный объект, один файл или пара «основной / резервный»
//! документ.
//! Документ: URL (`http://`, `https://`) или локальный путь. Документ
//! без единого дня считается отсутствием данных.

use crate::config::Config;
use crate::error::{MenuError, Result};
use school_menu_common::MenuModel;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum MenuSource {
    /// Данные уже есть у вызывающей стороны
    Embedded(serde_json::Value),
    /// Один локальный документ, без резервного
    File(PathBuf),
    Locations { primary: String, fallback: String },
}

impl MenuSource {
    pub fn from_config(config: &Config) -> Self {
        MenuSource::Locations {
            primary: config.primary_document.clone(),
            fallback: config.fallback_document.clone(),
        }
    }
}

/// Состояние для отображения: меню или текст ошибки
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Ready(MenuModel),
    Failed(String),
}

pub struct JsonLoader {
    client: reqwest::Client,
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

impl JsonLoader {
    pub fn new(timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self { client })
    }

    async fn fetch(&self, location: &str) -> Result<String> {
        if is_url(location) {
            let response = self.client.get(location).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(MenuError::HttpStatus {
                    location: location.to_string(),
                    status: status.as_u16(),
                });
            }
            Ok(response.text().await?)
        } else {
            match tokio::fs::read_to_string(location).await {
                Ok(text) => Ok(text),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    Err(MenuError::FileNotFound(location.to_string()))
                }
                Err(e) => Err(e.into()),
            }
        }
    }

    /// Основной документ, при любой ошибке резервный
    async fn fetch_with_fallback(&self, primary: &str, fallback: &str) -> Result<String> {
        match self.fetch(primary).await {
            Ok(text) => Ok(text),
            Err(primary_err) => {
                log::warn!("{} недоступен ({}), пробуем {}", primary, primary_err, fallback);
                self.fetch(fallback).await.map_err(|fallback_err| {
                    MenuError::Fetch(format!(
                        "{}: {}; {}: {}",
                        primary, primary_err, fallback, fallback_err
                    ))
                })
            }
        }
    }

    /// Одна попытка, без повторов
    pub async fn load(&self, source: &MenuSource) -> Result<MenuModel> {
        let model = match source {
            MenuSource::Embedded(value) => {
                log::info!("Используем встроенные данные");
                MenuModel::from_value(value.clone())?
            }
            MenuSource::File(path) => {
                log::info!("Загружаем данные из {}", path.display());
                let text = self.fetch(&path.display().to_string()).await?;
                MenuModel::from_json_str(&text)?
            }
            MenuSource::Locations { primary, fallback } => {
                log::info!("Загружаем данные из JSON файла...");
                let text = self.fetch_with_fallback(primary, fallback).await?;
                MenuModel::from_json_str(&text)?
            }
        };

        if !model.has_data() {
            log::warn!("Данные пусты");
            return Err(MenuError::NoData);
        }

        log::info!("Данные успешно загружены");
        Ok(model)
    }

    /// Как `load`, но любая ошибка превращается в сообщение для пользователя
    pub async fn load_state(&self, source: &MenuSource) -> LoadState {
        match self.load(source).await {
            Ok(model) => LoadState::Ready(model),
            Err(MenuError::NoData) => LoadState::Failed(MenuError::NoData.to_string()),
            Err(e) => {
                log::error!("Ошибка загрузки: {}", e);
                LoadState::Failed(format!("Ошибка загрузки данных: {}", e))
            }
        }
    }
}
