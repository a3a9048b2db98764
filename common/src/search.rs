//! Поиск по блюдам
//!
//! Фильтр без учёта регистра по вхождению подстроки. Пустой запрос
//! показывает всё без подсветки.

/// Состояние пункта меню после применения фильтра
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown { highlighted: bool },
    Hidden,
}

impl Visibility {
    pub fn is_shown(&self) -> bool {
        matches!(self, Visibility::Shown { .. })
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, Visibility::Shown { highlighted: true })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.needle
    }

    pub fn apply(&self, text: &str) -> Visibility {
        if !self.is_active() {
            return Visibility::Shown { highlighted: false };
        }
        if text.to_lowercase().contains(&self.needle) {
            Visibility::Shown { highlighted: true }
        } else {
            Visibility::Hidden
        }
    }
}
