//! Сохранённое состояние пользователя
//!
//! Ключи `selectedShift` и `visited`, без срока действия; последняя запись
//! побеждает.

use crate::config::Config;
use crate::error::Result;
use school_menu_common::ShiftKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub selected_shift: Option<ShiftKind>,
    pub visited: bool,
}

impl Preferences {
    pub fn state_path() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("state.json"))
    }

    /// Повреждённый файл состояния не мешает работе: берутся значения по умолчанию
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Не удалось прочитать {}: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Выбранная смена или первая
    pub fn shift(&self) -> ShiftKind {
        self.selected_shift.unwrap_or(ShiftKind::First)
    }

    /// Отметить первое посещение; true, если оно было первым
    pub fn mark_visited(&mut self) -> bool {
        let first_visit = !self.visited;
        self.visited = true;
        first_visit
    }
}
