//! XLSX/XLS reader kernel that loads one worksheet into a physical cell grid.

use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};

use crate::spec::{EnumCellValue, SpecSheetGrid, SpecXlsxReadOptions, XlsxIoError};
use crate::util::validate_grid_limits;

/// Read one worksheet of an in-memory workbook.
///
/// The format (`.xlsx`, `.xls`, `.xlsb`, `.ods`) is detected from content, not
/// from a file name. The returned grid is anchored at sheet cell `A1`, so
/// `grid.rows[1]` is always the second physical row.
pub fn read_sheet_grid_from_bytes(
    v_bytes: &[u8],
    options: &SpecXlsxReadOptions,
) -> Result<SpecSheetGrid, XlsxIoError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(v_bytes))
        .map_err(|err| XlsxIoError::OpenWorkbook(err.to_string()))?;

    let l_sheet_names = workbook.sheet_names().to_vec();
    let sheet_name = l_sheet_names
        .get(options.idx_sheet)
        .cloned()
        .ok_or(XlsxIoError::WorksheetMissing(options.idx_sheet))?;

    let range = workbook
        .worksheet_range_at(options.idx_sheet)
        .ok_or(XlsxIoError::WorksheetMissing(options.idx_sheet))?
        .map_err(|err| XlsxIoError::ReadRange {
            sheet_name: sheet_name.clone(),
            message: err.to_string(),
        })?;

    let rows = derive_physical_rows(&range)?;
    tracing::debug!(
        sheet_name = %sheet_name,
        n_rows = rows.len(),
        "worksheet loaded"
    );

    Ok(SpecSheetGrid { sheet_name, rows })
}

/// Read the first worksheet with default options.
pub fn read_first_sheet_grid_from_bytes(v_bytes: &[u8]) -> Result<SpecSheetGrid, XlsxIoError> {
    read_sheet_grid_from_bytes(v_bytes, &SpecXlsxReadOptions::default())
}

fn derive_physical_rows(range: &Range<Data>) -> Result<Vec<Vec<EnumCellValue>>, XlsxIoError> {
    let Some((n_row_end, n_col_end)) = range.end() else {
        return Ok(vec![]);
    };
    let n_height = n_row_end as usize + 1;
    let n_width = n_col_end as usize + 1;
    validate_grid_limits(n_height, n_width)?;

    let mut l_rows = Vec::with_capacity(n_height);
    for n_idx_row in 0..=n_row_end {
        // Rows stop at their last non-empty cell.
        let n_len_row = (0..=n_col_end)
            .rev()
            .find(|n_idx_col| {
                range
                    .get_value((n_idx_row, *n_idx_col))
                    .is_some_and(|value| !matches!(value, Data::Empty))
            })
            .map_or(0, |n_idx_col| n_idx_col + 1);
        let l_row: Vec<EnumCellValue> = (0..n_len_row)
            .map(|n_idx_col| {
                range
                    .get_value((n_idx_row, n_idx_col))
                    .map_or(EnumCellValue::None, derive_cell_value_from_data)
            })
            .collect();
        l_rows.push(l_row);
    }

    Ok(l_rows)
}

fn derive_cell_value_from_data(value: &Data) -> EnumCellValue {
    match value {
        Data::Empty => EnumCellValue::None,
        Data::String(val) => EnumCellValue::String(val.clone()),
        Data::Float(val) => EnumCellValue::Number(*val),
        Data::Int(val) => EnumCellValue::Number(*val as f64),
        Data::Bool(val) => EnumCellValue::Boolean(*val),
        Data::DateTime(val) => EnumCellValue::Number(val.as_f64()),
        Data::DateTimeIso(val) => EnumCellValue::String(val.clone()),
        Data::DurationIso(val) => EnumCellValue::String(val.clone()),
        Data::Error(err) => EnumCellValue::Error(err.to_string()),
    }
}
