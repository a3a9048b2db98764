//! Загрузка меню: Excel-файлы пользователя и JSON-документы

use school_menu::cli::ExportFormat;
use school_menu::context::AppContext;
use school_menu::export;
use school_menu::ingest::{self, UploadOutcome};
use school_menu::loader::{JsonLoader, LoadState, MenuSource};
use school_menu::render;
use school_menu_common::{sample_menu, ShiftKind};
use std::path::PathBuf;
use tempfile::tempdir;

/// Загрузка заменяет меню целиком, лишние файлы отбрасываются
#[tokio::test]
async fn test_upload_replaces_whole_model() {
    let dir = tempdir().unwrap();
    let written = export::write_workbooks(&sample_menu(), dir.path()).unwrap();
    let first: Vec<PathBuf> = written
        .into_iter()
        .filter(|p| p.to_string_lossy().contains("первая"))
        .collect();
    assert_eq!(first.len(), 1);

    let ctx = AppContext::with_model(sample_menu());
    let mut files = first.clone();
    files.push(dir.path().join("readme.txt"));

    match ingest::ingest_uploads(&ctx, &files).await.unwrap() {
        UploadOutcome::Loaded(loaded) => {
            assert_eq!(loaded, vec![(ShiftKind::First, first[0].clone())]);
        }
        UploadOutcome::Ignored => panic!("context was idle"),
    }

    let model = ctx.model();
    assert_eq!(model.len(), 1);
    assert!(model.get(ShiftKind::Second).is_none());
    assert!(!ctx.is_loading());
}

/// Ошибка одного файла не мешает остальным
#[tokio::test]
async fn test_default_load_isolates_failures() {
    let dir = tempdir().unwrap();
    let written = export::write_workbooks(&sample_menu(), dir.path()).unwrap();
    let second = written
        .into_iter()
        .find(|p| p.to_string_lossy().contains("вторая"))
        .unwrap();

    let ctx = AppContext::new();
    let paths = vec![dir.path().join("Меню_первая_смена.xls"), second.clone()];
    let report = ingest::load_workbooks(&ctx, &paths).await.unwrap();

    assert!(!report.used_sample);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.loaded, vec![(ShiftKind::Second, second)]);
    assert!(ctx.model().get(ShiftKind::First).is_none());
}

/// Сохранённый JSON читается как резервный документ
#[tokio::test]
async fn test_exported_json_loads_back() {
    let dir = tempdir().unwrap();
    let written = export::export_menu(&sample_menu(), &ExportFormat::Json, dir.path()).unwrap();
    assert_eq!(written, vec![dir.path().join("menu_data.json")]);

    let source = MenuSource::Locations {
        primary: dir.path().join("menu_data_accurate.json").display().to_string(),
        fallback: written[0].display().to_string(),
    };
    let loader = JsonLoader::new(5).unwrap();
    assert_eq!(loader.load_state(&source).await, LoadState::Ready(sample_menu()));
}

/// Документ с неделями
#[tokio::test]
async fn test_weeks_document_loads() {
    let value = serde_json::json!({
        "first": {
            "shift_type": "first",
            "shift_name": "Первая смена",
            "weeks": [
                {"week_number": 1, "days": [
                    {"day": "Понедельник", "date": "2.09", "meals": {"завтрак": ["Каша"]}}
                ]}
            ]
        }
    });
    let loader = JsonLoader::new(5).unwrap();
    let model = loader.load(&MenuSource::Embedded(value)).await.unwrap();
    let menu = model.get(ShiftKind::First).unwrap();
    assert_eq!(menu.sections()[0].week_number, Some(1));
    assert_eq!(menu.days()[0].meals.get("завтрак").unwrap()[0].name, "Каша");
}

/// Испорченный документ даёт страницу с ошибкой, а не падение
#[tokio::test]
async fn test_broken_input_renders_error_page() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"first\": ").unwrap();

    let loader = JsonLoader::new(5).unwrap();
    let message = match loader.load_state(&MenuSource::File(path)).await {
        LoadState::Failed(message) => message,
        LoadState::Ready(_) => panic!("broken document must not load"),
    };

    let html = render::render_error_page(&message, ShiftKind::First);
    assert!(html.contains("⚠️ Ошибка загрузки данных"));
    assert!(html.contains("Ошибка загрузки данных: "));
}
