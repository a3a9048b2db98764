//! Значение ячейки листа

/// Нетипизированное значение одной ячейки
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Текст ячейки; «ложные» значения (пусто, 0, false, "") дают пустую строку
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if *n == 0.0 || n.is_nan() => String::new(),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(true) => "true".to_string(),
            Cell::Bool(false) => String::new(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// Строки из одной колонки (удобно для тестов и шаблонов)
pub fn column_rows<S: AsRef<str>>(lines: &[S]) -> Vec<Vec<Cell>> {
    lines
        .iter()
        .map(|line| vec![Cell::from(line.as_ref())])
        .collect()
}
