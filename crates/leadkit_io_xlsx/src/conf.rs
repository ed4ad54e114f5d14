//! XLSX constants and default option factories.

use crate::spec::{SpecXlsxReadOptions, SpecXlsxWriteOptions};

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];
/// Workbook file extensions accepted by the reader.
pub const TUP_EXCEL_EXTENSIONS: [&str; 2] = [".xlsx", ".xls"];
/// Extension of every workbook produced by the writer.
pub const C_EXCEL_EXTENSION_OUT: &str = ".xlsx";
/// Sheet name used when a caller does not provide one.
pub const C_SHEET_NAME_DEFAULT: &str = "Sheet1";

/// Integral floats beyond this magnitude keep their float text.
pub const N_FLOAT_INTEGRAL_TEXT_MAX: f64 = 1e15;

/// Build default read options.
pub fn derive_default_xlsx_read_options() -> SpecXlsxReadOptions {
    SpecXlsxReadOptions::default()
}

/// Build default write options.
pub fn derive_default_xlsx_write_options() -> SpecXlsxWriteOptions {
    SpecXlsxWriteOptions::default()
}
