/// One physical source row, immutable once read.
///
/// `page` is the source location label ("sheet Hoja1", "page 3", a file name)
/// and `index` the zero-based row position within it, both kept for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub page: String,
    pub index: usize,
    pub cells: Vec<String>,
}

impl RawRow {
    pub fn new(page: impl Into<String>, index: usize, cells: Vec<String>) -> Self {
        Self {
            page: page.into(),
            index,
            cells,
        }
    }

    /// True when every cell is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.trim().is_empty())
    }

    /// The first non-empty cell, used as the row's primary text for
    /// header classification.
    pub fn primary_text(&self) -> Option<&str> {
        self.cells
            .iter()
            .map(|cell| cell.trim())
            .find(|cell| !cell.is_empty())
    }

    /// Location string for log lines, e.g. `"page 2, row 14"`.
    pub fn location(&self) -> String {
        format!("{}, row {}", self.page, self.index)
    }
}
