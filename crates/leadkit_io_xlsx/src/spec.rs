//! Shared XLSX specification models.

use crate::conf::C_SHEET_NAME_DEFAULT;

////////////////////////////////////////////////////////////////////////////////
// #region CellSpecification

/// Normalized cell value crossing the read/write boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Missing/blank value.
    None,
    /// Text value.
    String(String),
    /// Numeric value (ints, floats and date serials).
    Number(f64),
    /// Boolean value.
    Boolean(bool),
    /// Error-valued cell, kept as its display text (e.g. `#DIV/0!`).
    Error(String),
}

impl EnumCellValue {
    /// Shorthand for a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// True for `None` and for empty text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::None => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }
}

/// Rectangular-by-convention grid of one worksheet.
///
/// Row and column indices are physical (absolute) sheet positions: `rows[0]`
/// is sheet row 1 even when the used range starts further down.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecSheetGrid {
    /// Worksheet name as stored in the workbook.
    pub sheet_name: String,
    /// Cell rows; trailing cells of a row may be omitted.
    pub rows: Vec<Vec<EnumCellValue>>,
}

impl SpecSheetGrid {
    /// Number of physical rows covered.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row length.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Row at physical index, if present.
    pub fn row(&self, idx_row: usize) -> Option<&[EnumCellValue]> {
        self.rows.get(idx_row).map(Vec::as_slice)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReadWriteOptions

/// Reader options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReadOptions {
    /// Zero-based worksheet index to load.
    pub idx_sheet: usize,
}

/// Autofit policy for one sheet write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecAutofitCellsPolicy {
    /// Disable width inference entirely.
    pub if_disabled: bool,
    /// Physical row index holding the header; rows above it are ignored.
    pub idx_row_header: usize,
    /// Max body rows inspected below the header.
    pub height_body_inferred_max: Option<usize>,
    /// Minimum final width.
    pub width_cell_min: usize,
    /// Maximum final width.
    pub width_cell_max: usize,
    /// Width padding added after inference.
    pub width_cell_padding: usize,
}

impl Default for SpecAutofitCellsPolicy {
    fn default() -> Self {
        Self {
            if_disabled: false,
            idx_row_header: 0,
            height_body_inferred_max: Some(20_000),
            width_cell_min: 8,
            width_cell_max: 60,
            width_cell_padding: 2,
        }
    }
}

/// Writer options for one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecXlsxWriteOptions {
    /// Requested sheet name; sanitized before use.
    pub sheet_name: String,
    /// Column autofit policy.
    pub policy_autofit: SpecAutofitCellsPolicy,
}

impl Default for SpecXlsxWriteOptions {
    fn default() -> Self {
        Self {
            sheet_name: C_SHEET_NAME_DEFAULT.to_string(),
            policy_autofit: SpecAutofitCellsPolicy::default(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportAndErrors

/// Extent of the sheet emitted to the workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSheetExtent {
    /// Sanitized sheet name in the workbook.
    pub sheet_name: String,
    /// Physical rows written (including leading blank rows).
    pub n_rows: usize,
    /// Widest row written.
    pub n_cols: usize,
}

/// Per-writer report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReport {
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

/// Workbook IO failures.
#[derive(Debug, thiserror::Error)]
pub enum XlsxIoError {
    /// Buffer is not a readable `.xlsx`/`.xls` workbook.
    #[error("Failed to open workbook: {0}")]
    OpenWorkbook(String),
    /// Requested worksheet does not exist.
    #[error("No worksheet at index {0}")]
    WorksheetMissing(usize),
    /// Worksheet exists but its cells could not be decoded.
    #[error("Failed to read worksheet {sheet_name:?}: {message}")]
    ReadRange {
        /// Worksheet being read.
        sheet_name: String,
        /// Underlying reader error text.
        message: String,
    },
    /// Grid exceeds an Excel worksheet limit.
    #[error("Grid exceeds Excel limits: {0}")]
    LimitExceeded(String),
    /// Writer refused a call or `rust_xlsxwriter` failed.
    #[error("xlsx write error: {0}")]
    Write(String),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
