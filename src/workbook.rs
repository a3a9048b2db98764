//! Чтение Excel-файлов (xls / xlsx)
//!
//! Берётся только первый лист. Колонка A всегда имеет индекс 0, даже если
//! используемый диапазон начинается правее.

use crate::error::{MenuError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use school_menu_common::Cell;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const WORKBOOK_EXTENSIONS: &[&str] = &["xls", "xlsx"];

/// Поддерживается ли расширение файла
pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| WORKBOOK_EXTENSIONS.contains(&ext.as_str()))
}

/// Excel-файлы в каталоге (без рекурсии), по имени файла
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.exists() {
        return Err(MenuError::FileNotFound(folder.display().to_string()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.is_file() && is_workbook(path))
        .collect();

    files.sort_by_key(|path| path.file_name().map(|n| n.to_os_string()));
    Ok(files)
}

/// Раскрыть входные пути: каталоги сканируются, файлы остаются как есть
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(scan_folder(input)?);
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

/// Первый лист книги как сетка ячеек
pub fn read_first_sheet(path: &Path) -> Result<Vec<Vec<Cell>>> {
    if !path.exists() {
        return Err(MenuError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| MenuError::WorkbookRead(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| MenuError::EmptyWorkbook(path.display().to_string()))?
        .map_err(|e| MenuError::WorkbookRead(format!("{}: {}", path.display(), e)))?;

    Ok(range_to_grid(&range))
}

fn range_to_grid(range: &Range<Data>) -> Vec<Vec<Cell>> {
    let start_col = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    range
        .rows()
        .map(|row| {
            let mut cells = vec![Cell::Empty; start_col];
            cells.extend(row.iter().map(to_cell));
            cells
        })
        .collect()
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) => Cell::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_is_workbook() {
        assert!(is_workbook(Path::new("menu.xls")));
        assert!(is_workbook(Path::new("menu.XLSX")));
        assert!(!is_workbook(Path::new("menu.csv")));
        assert!(!is_workbook(Path::new("menu")));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(MenuError::FileNotFound(_))));
    }

    #[test]
    fn test_scan_folder_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("b_вторая.xlsx")).unwrap();
        File::create(dir.path().join("a_первая.xls")).unwrap();
        File::create(dir.path().join("readme.txt")).unwrap();
        std::fs::create_dir(dir.path().join("nested.xlsx")).unwrap();

        let files = scan_folder(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a_первая.xls", "b_вторая.xlsx"]);
    }

    #[test]
    fn test_expand_inputs_keeps_plain_files() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("menu.xlsx")).unwrap();
        let direct = PathBuf::from("missing.xls");

        let files = expand_inputs(&[dir.path().to_path_buf(), direct.clone()]).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[1], direct);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_first_sheet(Path::new("/nonexistent/menu.xlsx"));
        assert!(matches!(result, Err(MenuError::FileNotFound(_))));
    }

    #[test]
    fn test_read_garbage_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"not a workbook").unwrap();
        assert!(matches!(read_first_sheet(&path), Err(MenuError::WorkbookRead(_))));
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(to_cell(&Data::Int(3)), Cell::Number(3.0));
        assert_eq!(to_cell(&Data::String("Каша".into())), Cell::Text("Каша".into()));
        assert_eq!(to_cell(&Data::Empty), Cell::Empty);
    }
}
