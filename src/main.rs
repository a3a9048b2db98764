use clap::Parser;
use env_logger::Env;
use school_menu::{cli, config, context, error, export, ingest, loader, prefs, render, ui, workbook};
use cli::{Cli, Commands};
use config::Config;
use context::AppContext;
use error::{MenuError, Result};
use loader::{JsonLoader, LoadState, MenuSource};
use prefs::Preferences;
use school_menu_common::{sample_menu, SearchFilter, ShiftKind};
use std::path::{Path, PathBuf};
use ui::{LoadingIndicator, Notice};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Источник для show/render
fn read_source(input: Option<&Path>, sample: bool, config: &Config) -> Result<MenuSource> {
    if sample {
        return Ok(MenuSource::Embedded(serde_json::to_value(sample_menu())?));
    }
    Ok(match input {
        Some(path) => MenuSource::File(path.to_path_buf()),
        None => MenuSource::from_config(config),
    })
}

async fn load_state(source: &MenuSource, config: &Config) -> Result<LoadState> {
    let loader = JsonLoader::new(config.timeout_seconds)?;
    let _spinner = LoadingIndicator::start("Загружаем меню...");
    Ok(loader.load_state(source).await)
}

fn welcome_once(prefs: &mut Preferences, state_path: &Path) -> Result<()> {
    if prefs.mark_visited() {
        println!("👋 Добро пожаловать! Здесь меню школьной столовой на неделю.");
        println!("   Смена выбирается командой `school-menu shift`.\n");
        prefs.save_to(state_path)?;
    }
    Ok(())
}

fn choose_shift() -> Result<ShiftKind> {
    let names: Vec<&str> = ShiftKind::ALL.iter().map(|s| s.display_name()).collect();
    let index = dialoguer::Select::new()
        .with_prompt("Смена")
        .items(&names)
        .default(0)
        .interact()
        .map_err(|e| MenuError::Prompt(e.to_string()))?;
    Ok(ShiftKind::ALL[index])
}

fn print_report(report: &ingest::LoadReport) {
    for (shift, path) in &report.loaded {
        println!("✔ {}: {}", shift.display_name(), path.display());
    }
    for (path, reason) in &report.failed {
        println!("⚠ {}: {}", path.display(), reason);
    }
    if report.used_sample {
        Notice::info("Файлы не загружены, используются примерные данные").print();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Parse { inputs, output, format } => {
            println!("📊 school-menu - разбор Excel\n");

            let paths = if inputs.is_empty() {
                config.workbooks.clone()
            } else {
                workbook::expand_inputs(&inputs)?
            };
            println!("[1/2] Читаем файлы ({})...", paths.len());

            let ctx = AppContext::new();
            if let Some(report) = ingest::load_workbooks(&ctx, &paths).await {
                print_report(&report);
            }

            println!("\n[2/2] Сохраняем...");
            let output = output.unwrap_or_else(|| PathBuf::from("."));
            export::export_menu(&ctx.model(), &format, &output)?;

            println!("\n✅ Готово");
        }

        Commands::Import { files, output, format } => {
            println!("📥 school-menu - загрузка файлов\n");

            let ctx = AppContext::new();
            let loaded = {
                let _spinner = LoadingIndicator::start("Обрабатываем файлы...");
                ingest::ingest_uploads(&ctx, &files).await
            };

            match loaded {
                Ok(ingest::UploadOutcome::Loaded(loaded)) => {
                    for (shift, path) in &loaded {
                        println!("✔ {}: {}", shift.display_name(), path.display());
                    }
                    let output = output.unwrap_or_else(|| PathBuf::from("."));
                    export::export_menu(&ctx.model(), &format, &output)?;
                    Notice::success("Меню успешно загружено!").print();
                }
                Ok(ingest::UploadOutcome::Ignored) => {
                    Notice::info("Загрузка уже выполняется").print();
                }
                Err(MenuError::UnsupportedFile(_)) => {
                    Notice::error("Пожалуйста, выберите Excel файлы (.xls или .xlsx)").print();
                    std::process::exit(1);
                }
                Err(e) => {
                    Notice::error(format!("Ошибка при обработке файлов: {}", e)).print();
                    std::process::exit(1);
                }
            }
        }

        Commands::Show { input, shift, search, sample } => {
            let state_path = Preferences::state_path()?;
            let mut prefs = Preferences::load_from(&state_path);
            welcome_once(&mut prefs, &state_path)?;

            let selected = shift.unwrap_or_else(|| prefs.shift());
            let filter = SearchFilter::new(search.as_deref().unwrap_or(""));
            let source = read_source(input.as_deref(), sample, &config)?;

            match load_state(&source, &config).await? {
                LoadState::Ready(model) => match model.get(selected) {
                    Some(menu) => print!("{}", render::render_shift_text(menu, &filter)),
                    None => Notice::info(format!("{}: меню нет", selected.display_name())).print(),
                },
                LoadState::Failed(message) => {
                    Notice::error(message).print();
                    std::process::exit(1);
                }
            }
        }

        Commands::Render { input, output, shift, search, sample } => {
            println!("🌐 school-menu - HTML\n");

            let prefs = Preferences::load_from(&Preferences::state_path()?);
            let selected = shift.unwrap_or_else(|| prefs.shift());
            let filter = SearchFilter::new(search.as_deref().unwrap_or(""));
            let source = read_source(input.as_deref(), sample, &config)?;

            let html = match load_state(&source, &config).await? {
                LoadState::Ready(model) => render::render_page(&model, selected, &filter),
                LoadState::Failed(message) => {
                    Notice::error(&message).print();
                    render::render_error_page(&message, selected)
                }
            };
            std::fs::write(&output, html)?;
            println!("✔ Страница: {}", output.display());
        }

        Commands::Sample { output, format } => {
            let output = output.unwrap_or_else(|| PathBuf::from("."));
            export::export_menu(&sample_menu(), &format, &output)?;
            println!("\n✅ Примерные данные сохранены");
        }

        Commands::Shift { shift } => {
            let state_path = Preferences::state_path()?;
            let mut prefs = Preferences::load_from(&state_path);
            let shift = match shift {
                Some(shift) => shift,
                None => choose_shift()?,
            };
            prefs.selected_shift = Some(shift);
            prefs.save_to(&state_path)?;
            println!("✔ Выбрана смена: {}", shift.display_name());
        }

        Commands::Config { primary, fallback, show } => {
            let mut config = config;
            let changed = primary.is_some() || fallback.is_some();

            if let Some(primary) = primary {
                config.primary_document = primary;
            }
            if let Some(fallback) = fallback {
                config.fallback_document = fallback;
            }
            if changed {
                config.save()?;
                println!("✔ Настройки сохранены");
            }

            if show || !changed {
                println!("Настройки ({}):", Config::config_path()?.display());
                println!("  Основной документ: {}", config.primary_document);
                println!("  Резервный документ: {}", config.fallback_document);
                println!("  Таймаут: {} c", config.timeout_seconds);
                println!("  Excel-файлы:");
                for path in &config.workbooks {
                    println!("    {}", path.display());
                }
            }
        }
    }

    Ok(())
}
