//! Загрузка меню из Excel-файлов
//!
//! Два сценария:
//! - `load_workbooks`: файлы по умолчанию; ошибка одного файла не мешает
//!   остальным, если не загрузилось ничего, берутся примерные данные
//! - `ingest_uploads`: файлы пользователя; неподдерживаемые отбрасываются,
//!   любая ошибка разбора отменяет всю пачку
//!
//! Оба сценария держат флаг загрузки контекста и полностью заменяют меню.

use crate::context::AppContext;
use crate::error::{MenuError, Result};
use crate::workbook;
use school_menu_common::{extract, sample_menu, MenuModel, ShiftKind, ShiftMenu};
use std::path::{Path, PathBuf};

/// Итог загрузки файлов по умолчанию
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<(ShiftKind, PathBuf)>,
    pub failed: Vec<(PathBuf, String)>,
    pub used_sample: bool,
}

#[derive(Debug)]
pub enum UploadOutcome {
    /// Уже идёт другая загрузка
    Ignored,
    Loaded(Vec<(ShiftKind, PathBuf)>),
}

/// Смена по имени файла
pub fn shift_for_path(path: &Path) -> ShiftKind {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    ShiftKind::from_file_name(&name)
}

/// Прочитать первый лист и разобрать меню смены
pub fn parse_workbook(path: &Path) -> Result<ShiftMenu> {
    let shift = shift_for_path(path);
    let grid = workbook::read_first_sheet(path)?;
    let menu = extract(&grid, shift);
    log::debug!(
        "{}: {} строк, {} дней ({})",
        path.display(),
        grid.len(),
        menu.days().len(),
        shift
    );
    Ok(menu)
}

async fn parse_in_background(path: PathBuf) -> Result<ShiftMenu> {
    tokio::task::spawn_blocking(move || parse_workbook(&path))
        .await
        .map_err(|e| MenuError::WorkbookRead(format!("задача чтения прервана: {}", e)))?
}

/// Загрузить файлы смен; `None`, если загрузка уже идёт
pub async fn load_workbooks(ctx: &AppContext, paths: &[PathBuf]) -> Option<LoadReport> {
    let Some(_guard) = ctx.try_begin_load() else {
        log::debug!("Загрузка уже идёт, запрос пропущен");
        return None;
    };

    let mut model = MenuModel::new();
    let mut report = LoadReport::default();

    for path in paths {
        match parse_in_background(path.clone()).await {
            Ok(menu) => {
                log::info!("Загружен файл: {}", path.display());
                report.loaded.push((menu.shift_type, path.clone()));
                model.insert(menu);
            }
            Err(e) => {
                log::warn!("Не удалось загрузить {}: {}", path.display(), e);
                report.failed.push((path.clone(), e.to_string()));
            }
        }
    }

    if model.is_empty() {
        log::info!("Используем примерные данные");
        model = sample_menu();
        report.used_sample = true;
    }

    ctx.replace_model(model);
    Some(report)
}

/// Разобрать загруженные пользователем файлы
pub async fn ingest_uploads(ctx: &AppContext, files: &[PathBuf]) -> Result<UploadOutcome> {
    let (accepted, rejected): (Vec<&PathBuf>, Vec<&PathBuf>) =
        files.iter().partition(|path| workbook::is_workbook(path));

    for path in &rejected {
        log::warn!("Пропущен файл неподдерживаемого типа: {}", path.display());
    }
    if accepted.is_empty() {
        let names = rejected
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(MenuError::UnsupportedFile(names));
    }

    let Some(_guard) = ctx.try_begin_load() else {
        log::debug!("Загрузка уже идёт, файлы пропущены");
        return Ok(UploadOutcome::Ignored);
    };

    let mut model = MenuModel::new();
    let mut loaded = Vec::new();
    for path in accepted {
        let menu = parse_in_background(path.clone()).await.map_err(|e| {
            log::error!("Ошибка обработки файлов: {}", e);
            e
        })?;
        log::info!("Обработан файл: {}", path.display());
        loaded.push((menu.shift_type, path.clone()));
        model.insert(menu);
    }

    ctx.replace_model(model);
    Ok(UploadOutcome::Loaded(loaded))
}
