//! Контекст приложения
//!
//! Текущее меню и флаг «идёт загрузка». Меню всегда заменяется целиком;
//! одновременно выполняется не больше одной загрузки, повторный запрос
//! во время загрузки просто игнорируется.

use school_menu_common::MenuModel;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct AppContext {
    model: RwLock<MenuModel>,
    busy: AtomicBool,
}

/// Пока жив, флаг загрузки поднят; снимается при drop
pub struct LoadGuard<'a> {
    busy: &'a AtomicBool,
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(model: MenuModel) -> Self {
        Self {
            model: RwLock::new(model),
            busy: AtomicBool::new(false),
        }
    }

    /// Начать загрузку; `None`, если другая уже идёт
    pub fn try_begin_load(&self) -> Option<LoadGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LoadGuard { busy: &self.busy })
    }

    pub fn is_loading(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Снимок текущего меню
    pub fn model(&self) -> MenuModel {
        self.model
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn replace_model(&self, model: MenuModel) {
        *self
            .model
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = model;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use school_menu_common::{sample_menu, ShiftKind};

    #[test]
    fn test_second_load_is_rejected_while_busy() {
        let ctx = AppContext::new();
        let guard = ctx.try_begin_load();
        assert!(guard.is_some());
        assert!(ctx.is_loading());
        assert!(ctx.try_begin_load().is_none());

        drop(guard);
        assert!(!ctx.is_loading());
        assert!(ctx.try_begin_load().is_some());
    }

    #[test]
    fn test_replace_model_is_whole() {
        let ctx = AppContext::with_model(sample_menu());
        assert_eq!(ctx.model().len(), 2);

        let mut only_first = MenuModel::new();
        only_first.insert(school_menu_common::ShiftMenu::from_days(ShiftKind::First, vec![]));
        ctx.replace_model(only_first);

        let model = ctx.model();
        assert_eq!(model.len(), 1);
        assert!(model.get(ShiftKind::Second).is_none());
    }
}
