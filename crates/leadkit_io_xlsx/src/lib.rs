//! `leadkit_io_xlsx` v1:
//! Workbook IO kernel for the contact pipeline.
//!
//! - `conf`   : constants and default presets
//! - `spec`   : cell/grid models, options, errors
//! - `util`   : pure helper functions
//! - `reader` : `calamine`-backed sheet reader
//! - `writer` : `rust_xlsxwriter`-backed in-memory writer
pub mod conf;
pub mod reader;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_EXCEL_EXTENSION_OUT, C_SHEET_NAME_DEFAULT, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX,
    N_NROWS_EXCEL_MAX, TUP_EXCEL_EXTENSIONS, TUP_EXCEL_ILLEGAL,
};
pub use reader::{read_first_sheet_grid_from_bytes, read_sheet_grid_from_bytes};
pub use spec::{
    EnumCellValue, SpecAutofitCellsPolicy, SpecSheetExtent,
    SpecSheetGrid, SpecXlsxReadOptions, SpecXlsxReport, SpecXlsxWriteOptions, XlsxIoError,
};
pub use util::{
    convert_cell_value_to_text, convert_number_to_text, derive_output_workbook_name,
    is_supported_workbook_name, sanitize_sheet_name, strip_workbook_extension,
};
pub use writer::XlsxWriter;
