//! Сохранение меню: JSON-документ и Excel-шаблоны по сменам

use crate::cli::ExportFormat;
use crate::error::{MenuError, Result};
use school_menu_common::export::excel_core;
use school_menu_common::{MenuModel, ShiftKind};
use std::path::{Path, PathBuf};

const JSON_FILE_NAME: &str = "menu_data.json";

fn json_output_path(output: &Path) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(JSON_FILE_NAME)
    } else {
        output.to_path_buf()
    }
}

fn excel_output_dir(output: &Path) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.to_path_buf()
    } else {
        output
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Имя файла смены; по нему смена снова определяется при загрузке
pub fn workbook_file_name(shift: ShiftKind) -> &'static str {
    match shift {
        ShiftKind::First => "Меню_первая_смена.xlsx",
        ShiftKind::Second => "Меню_вторая_смена.xlsx",
    }
}

/// JSON с отступами
pub fn write_json(model: &MenuModel, output: &Path) -> Result<PathBuf> {
    let path = json_output_path(output);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, model.to_pretty_json()?)?;
    Ok(path)
}

/// По одному Excel-файлу на смену
pub fn write_workbooks(model: &MenuModel, output: &Path) -> Result<Vec<PathBuf>> {
    let dir = excel_output_dir(output);
    std::fs::create_dir_all(&dir)?;

    let mut paths = Vec::new();
    for menu in model.shifts() {
        let buffer = excel_core::generate_menu_buffer(menu).map_err(MenuError::ExcelGeneration)?;
        let path = dir.join(workbook_file_name(menu.shift_type));
        std::fs::write(&path, buffer)?;
        paths.push(path);
    }
    Ok(paths)
}

pub fn export_menu(model: &MenuModel, format: &ExportFormat, output: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if matches!(format, ExportFormat::Json | ExportFormat::Both) {
        println!("- Сохраняем JSON...");
        let path = write_json(model, output)?;
        println!("✔ JSON: {}", path.display());
        written.push(path);
    }

    if matches!(format, ExportFormat::Excel | ExportFormat::Both) {
        println!("- Создаём Excel-файлы...");
        for path in write_workbooks(model, output)? {
            println!("✔ Excel: {}", path.display());
            written.push(path);
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::shift_for_path;
    use school_menu_common::sample_menu;
    use tempfile::tempdir;

    #[test]
    fn test_json_output_path() {
        let dir = tempdir().unwrap();
        assert_eq!(json_output_path(dir.path()), dir.path().join("menu_data.json"));
        assert_eq!(
            json_output_path(Path::new("out/custom.json")),
            PathBuf::from("out/custom.json")
        );
    }

    #[test]
    fn test_workbook_names_round_trip_shift() {
        for shift in ShiftKind::ALL {
            assert_eq!(shift_for_path(Path::new(workbook_file_name(shift))), shift);
        }
    }

    #[test]
    fn test_export_both() {
        let dir = tempdir().unwrap();
        let written = export_menu(&sample_menu(), &ExportFormat::Both, dir.path()).unwrap();
        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|p| p.exists()));

        let json = std::fs::read_to_string(dir.path().join("menu_data.json")).unwrap();
        assert!(json.contains("\n  \"first\": {"));
        assert_eq!(MenuModel::from_json_str(&json).unwrap(), sample_menu());
    }
}
