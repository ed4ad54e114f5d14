//! End-to-end contact processing: workbook bytes in, export workbook bytes out.

use leadkit_io_xlsx::conf::derive_default_xlsx_read_options;
use leadkit_io_xlsx::{XlsxWriter, is_supported_workbook_name, read_sheet_grid_from_bytes};

use crate::conf::C_MSG_SUCCESS_PREFIX;
use crate::header::{collect_unknown_headers, map_header_row};
use crate::layout::{build_export_grid, derive_export_file_name};
use crate::merge::fold_records;
use crate::normalize::{build_raw_row, normalize_rows};
use crate::sort::{RegionCollator, sort_records_by_region};
use crate::spec::{ContactError, SpecContactExport, SpecContactProcessOptions, SpecContactReport};

/// True iff the name ends with `.xlsx` or `.xls` (case-sensitive).
pub fn validate_file_extension(file_name: &str) -> bool {
    is_supported_workbook_name(file_name)
}

/// [`validate_file_extension`] as a `Result`.
pub fn check_file_extension(file_name: &str) -> Result<(), ContactError> {
    if validate_file_extension(file_name) {
        Ok(())
    } else {
        Err(ContactError::InvalidFileType {
            file_name: file_name.to_string(),
        })
    }
}

/// Confirmation text shown after a successful export.
pub fn format_success_message(file_name: &str) -> String {
    format!("{C_MSG_SUCCESS_PREFIX}{file_name}")
}

/// Process one uploaded workbook with default options.
///
/// Returns the export bytes and the export file name.
pub fn process(buffer: &[u8], original_file_name: &str) -> Result<(Vec<u8>, String), ContactError> {
    let export = process_with_options(
        buffer,
        original_file_name,
        &SpecContactProcessOptions::default(),
    )?;
    Ok((export.v_bytes, export.file_name))
}

/// Process one uploaded workbook.
///
/// The extension is checked before any parsing. Every failure is terminal and
/// no partial output is produced.
pub fn process_with_options(
    buffer: &[u8],
    original_file_name: &str,
    options: &SpecContactProcessOptions,
) -> Result<SpecContactExport, ContactError> {
    check_file_extension(original_file_name)?;
    tracing::info!(
        file_name = original_file_name,
        n_bytes = buffer.len(),
        "contact processing started"
    );

    let mut report = SpecContactReport::default();
    let grid = read_sheet_grid_from_bytes(buffer, &derive_default_xlsx_read_options())?;

    let l_headers = map_header_row(grid.row(options.idx_row_header))?;
    let l_unknown = collect_unknown_headers(&l_headers);
    if !l_unknown.is_empty() {
        tracing::warn!(headers = ?l_unknown, "unknown header columns ignored");
        report.warn(format!("Unknown header columns ignored: {}", l_unknown.join(", ")));
    }

    let l_raw_rows: Vec<_> = grid
        .rows
        .iter()
        .skip(options.idx_row_data_start)
        .map(|l_cells| build_raw_row(&l_headers, l_cells))
        .collect();
    report.cnt_rows_read = l_raw_rows.len() as u64;
    if l_raw_rows.is_empty() {
        tracing::warn!(sheet_name = %grid.sheet_name, "no data rows below the header");
        report.warn("No data rows below the header.");
    }

    let (l_records, n_dropped) = normalize_rows(&l_raw_rows);
    report.cnt_rows_dropped_no_phone = n_dropped;
    tracing::debug!(
        n_rows = l_raw_rows.len(),
        n_kept = l_records.len(),
        n_dropped,
        "rows normalized"
    );

    let state = fold_records(l_records);
    report.cnt_rows_merged = state.cnt_merged();
    let mut l_merged = state.into_records();
    tracing::debug!(n_records = l_merged.len(), "records merged");

    let collator = RegionCollator::try_new(&options.c_collation_locale)?;
    tracing::debug!(locale = collator.locale(), "sorting by region");
    sort_records_by_region(&mut l_merged, &collator);

    let grid_export = build_export_grid(&l_merged);
    let mut writer = XlsxWriter::new();
    writer.write_sheet_from_grid(&grid_export, &options.write_options)?;
    let v_bytes = writer.save_to_buffer()?;
    for c_warning in writer.report().warnings {
        report.warn(c_warning);
    }
    report.cnt_records_exported = l_merged.len() as u64;

    let file_name = derive_export_file_name(original_file_name);
    tracing::info!(
        file_name = %file_name,
        cnt_rows_read = report.cnt_rows_read,
        cnt_rows_dropped_no_phone = report.cnt_rows_dropped_no_phone,
        cnt_rows_merged = report.cnt_rows_merged,
        cnt_records_exported = report.cnt_records_exported,
        "contact processing finished"
    );

    Ok(SpecContactExport {
        v_bytes,
        file_name,
        report,
    })
}
