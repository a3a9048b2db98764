pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod export;
pub mod ingest;
pub mod loader;
pub mod prefs;
pub mod render;
pub mod ui;
pub mod workbook;
