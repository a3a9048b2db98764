//! Индикатор загрузки и уведомления

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// Уведомление для пользователя
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn print(&self) {
        match self.kind {
            NoticeKind::Success => println!("✅ {}", self.message),
            NoticeKind::Error => eprintln!("❌ {}", self.message),
            NoticeKind::Info => println!("ℹ {}", self.message),
        }
    }
}

/// Спиннер «идёт загрузка»; убирается при drop
pub struct LoadingIndicator {
    bar: ProgressBar,
}

impl LoadingIndicator {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
