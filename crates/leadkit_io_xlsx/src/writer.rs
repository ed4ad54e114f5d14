//! XLSX writer kernel that renders cell grids into an in-memory workbook.

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::spec::{
    EnumCellValue, SpecAutofitCellsPolicy, SpecSheetExtent, SpecXlsxReport,
    SpecXlsxWriteOptions, XlsxIoError,
};
use crate::util::{
    cast_col_num, cast_row_num, convert_number_to_text, estimate_unicode_string_width,
    sanitize_sheet_name, validate_grid_limits,
};

/// Single-sheet workbook writer.
///
/// The workbook is buffered in memory until [`Self::save_to_buffer`] is called.
pub struct XlsxWriter {
    workbook: Workbook,
    extent: Option<SpecSheetExtent>,
    report: SpecXlsxReport,
    if_closed: bool,
}

impl Default for XlsxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XlsxWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self {
            workbook: Workbook::new(),
            extent: None,
            report: SpecXlsxReport::default(),
            if_closed: false,
        }
    }

    /// Extent of the written sheet, if any.
    pub fn extent(&self) -> Option<&SpecSheetExtent> {
        self.extent.as_ref()
    }

    /// Return immutable snapshot of the write report.
    pub fn report(&self) -> SpecXlsxReport {
        self.report.clone()
    }

    /// Serialize the workbook. The writer cannot be used afterwards.
    pub fn save_to_buffer(&mut self) -> Result<Vec<u8>, XlsxIoError> {
        if self.if_closed {
            return Err(XlsxIoError::Write("Workbook already saved.".to_string()));
        }
        let v_bytes = self
            .workbook
            .save_to_buffer()
            .map_err(derive_xlsx_error)?;
        self.if_closed = true;
        Ok(v_bytes)
    }

    /// Write the sheet from a grid of physical rows.
    ///
    /// `grid[0]` lands on sheet row 1. Blank cells (`None` or `""`) are not
    /// written at all. A second call fails.
    pub fn write_sheet_from_grid(
        &mut self,
        grid: &[Vec<EnumCellValue>],
        options: &SpecXlsxWriteOptions,
    ) -> Result<SpecSheetExtent, XlsxIoError> {
        if self.if_closed {
            return Err(XlsxIoError::Write("Cannot write after save.".to_string()));
        }
        if self.extent.is_some() {
            return Err(XlsxIoError::Write("Sheet already written.".to_string()));
        }
        validate_policy_autofit(&options.policy_autofit)?;

        let n_height = grid.len();
        let n_width = grid.iter().map(Vec::len).max().unwrap_or(0);
        validate_grid_limits(n_height, n_width)?;

        let sheet_name = sanitize_sheet_name(&options.sheet_name, "_");
        if sheet_name != options.sheet_name {
            self.report.warn(format!(
                "Sheet name {:?} written as {sheet_name:?}.",
                options.sheet_name
            ));
        }

        let worksheet = self.workbook.add_worksheet();
        worksheet
            .set_name(&sheet_name)
            .map_err(derive_xlsx_error)?;

        for (n_idx_row, l_row) in grid.iter().enumerate() {
            for (n_idx_col, value) in l_row.iter().enumerate() {
                write_cell(worksheet, n_idx_row, n_idx_col, value)?;
            }
        }

        apply_autofit_columns(worksheet, grid, n_width, &options.policy_autofit)?;

        let extent = SpecSheetExtent {
            sheet_name,
            n_rows: n_height,
            n_cols: n_width,
        };
        tracing::debug!(
            sheet_name = %extent.sheet_name,
            n_rows = extent.n_rows,
            n_cols = extent.n_cols,
            "worksheet written"
        );
        self.extent = Some(extent.clone());
        Ok(extent)
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
) -> Result<(), XlsxIoError> {
    if value.is_blank() {
        return Ok(());
    }
    let n_row = cast_row_num(row_idx)?;
    let n_col = cast_col_num(col_idx)?;
    match value {
        EnumCellValue::None => {}
        EnumCellValue::String(val) | EnumCellValue::Error(val) => {
            worksheet
                .write_string(n_row, n_col, val)
                .map_err(derive_xlsx_error)?;
        }
        EnumCellValue::Number(val) => {
            worksheet
                .write_number(n_row, n_col, *val)
                .map_err(derive_xlsx_error)?;
        }
        EnumCellValue::Boolean(val) => {
            worksheet
                .write_boolean(n_row, n_col, *val)
                .map_err(derive_xlsx_error)?;
        }
    }
    Ok(())
}

fn apply_autofit_columns(
    worksheet: &mut Worksheet,
    grid: &[Vec<EnumCellValue>],
    n_width: usize,
    policy_autofit: &SpecAutofitCellsPolicy,
) -> Result<(), XlsxIoError> {
    if policy_autofit.if_disabled || n_width == 0 {
        return Ok(());
    }

    let n_idx_header = policy_autofit.idx_row_header;
    let mut l_width_by_col_header = vec![0usize; n_width];
    let mut l_width_by_col_body = vec![0usize; n_width];

    if let Some(l_row_header) = grid.get(n_idx_header) {
        for (n_idx_col, value) in l_row_header.iter().enumerate() {
            l_width_by_col_header[n_idx_col] = estimate_width_len(value);
        }
    }

    let n_rows_body_max = policy_autofit.height_body_inferred_max.unwrap_or(usize::MAX);
    for l_row in grid.iter().skip(n_idx_header + 1).take(n_rows_body_max) {
        for (n_idx_col, value) in l_row.iter().enumerate() {
            l_width_by_col_body[n_idx_col] =
                usize::max(l_width_by_col_body[n_idx_col], estimate_width_len(value));
        }
    }

    let n_min = usize::max(1, policy_autofit.width_cell_min);
    let n_max = usize::min(255, usize::max(n_min, policy_autofit.width_cell_max));
    let n_pad = policy_autofit.width_cell_padding;

    for n_idx_col in 0..n_width {
        let n_width_recorded =
            usize::max(l_width_by_col_header[n_idx_col], l_width_by_col_body[n_idx_col]);
        let n_width_final = usize::min(n_max, usize::max(n_min, n_width_recorded + n_pad));
        worksheet
            .set_column_width(cast_col_num(n_idx_col)?, n_width_final as f64)
            .map_err(derive_xlsx_error)?;
    }
    Ok(())
}

/// Estimate displayed width units for one cell value.
pub fn estimate_width_len(value: &EnumCellValue) -> usize {
    match value {
        EnumCellValue::None => 0,
        EnumCellValue::String(s) | EnumCellValue::Error(s) => estimate_unicode_string_width(s),
        EnumCellValue::Number(n) => convert_number_to_text(*n).len(),
        EnumCellValue::Boolean(_) => 5,
    }
}

fn validate_policy_autofit(policy_autofit: &SpecAutofitCellsPolicy) -> Result<(), XlsxIoError> {
    if policy_autofit.width_cell_min == 0 {
        return Err(XlsxIoError::Write(
            "policy_autofit.width_cell_min must be >= 1.".to_string(),
        ));
    }
    if policy_autofit.width_cell_max < policy_autofit.width_cell_min {
        return Err(XlsxIoError::Write(
            "policy_autofit.width_cell_max must be >= policy_autofit.width_cell_min.".to_string(),
        ));
    }
    Ok(())
}

fn derive_xlsx_error(err: XlsxError) -> XlsxIoError {
    XlsxIoError::Write(err.to_string())
}
