//! Stateless helper utilities shared by the reader and writer kernels.

use crate::conf::{
    C_EXCEL_EXTENSION_OUT, N_FLOAT_INTEGRAL_TEXT_MAX, N_LEN_EXCEL_SHEET_NAME_MAX,
    N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_EXTENSIONS, TUP_EXCEL_ILLEGAL,
};
use crate::spec::{EnumCellValue, XlsxIoError};

////////////////////////////////////////////////////////////////////////////////
// #region CellValueConversion

/// Render a float the way a spreadsheet shows it: integral values lose `.0`.
pub fn convert_number_to_text(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < N_FLOAT_INTEGRAL_TEXT_MAX {
        format!("{}", x as i64)
    } else {
        x.to_string()
    }
}

/// Convert any cell into its text representation; blanks become `""`.
pub fn convert_cell_value_to_text(value: &EnumCellValue) -> String {
    match value {
        EnumCellValue::None => String::new(),
        EnumCellValue::String(s) => s.clone(),
        EnumCellValue::Number(n) => convert_number_to_text(*n),
        EnumCellValue::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        EnumCellValue::Error(e) => e.clone(),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FileNames

/// True when `file_name` ends with a supported workbook extension.
///
/// Matching is case-sensitive.
pub fn is_supported_workbook_name(file_name: &str) -> bool {
    TUP_EXCEL_EXTENSIONS
        .iter()
        .any(|c_ext| file_name.ends_with(c_ext))
}

/// Strip one trailing workbook extension when present.
pub fn strip_workbook_extension(file_name: &str) -> &str {
    for c_ext in TUP_EXCEL_EXTENSIONS {
        if let Some(c_stem) = file_name.strip_suffix(c_ext) {
            return c_stem;
        }
    }
    file_name
}

/// `<stem><suffix>.xlsx`, where `<stem>` is `file_name` minus its workbook extension.
pub fn derive_output_workbook_name(file_name: &str, suffix: &str) -> String {
    format!(
        "{}{suffix}{C_EXCEL_EXTENSION_OUT}",
        strip_workbook_extension(file_name)
    )
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// Reject grids that cannot fit into one worksheet.
pub fn validate_grid_limits(height_grid: usize, width_grid: usize) -> Result<(), XlsxIoError> {
    if height_grid > N_NROWS_EXCEL_MAX {
        return Err(XlsxIoError::LimitExceeded(format!(
            "{height_grid} rows > {N_NROWS_EXCEL_MAX}"
        )));
    }
    if width_grid > N_NCOLS_EXCEL_MAX {
        return Err(XlsxIoError::LimitExceeded(format!(
            "{width_grid} columns > {N_NCOLS_EXCEL_MAX}"
        )));
    }
    Ok(())
}

/// Estimate displayed width units of text; CJK glyphs count wider.
pub fn estimate_unicode_string_width(s: &str) -> usize {
    let n_ascii = s.chars().filter(|chr| chr.is_ascii()).count();
    let n_non_ascii = s.chars().count().saturating_sub(n_ascii);
    n_ascii + (n_non_ascii as f64 * 1.6).round() as usize
}

pub(crate) fn cast_row_num(value: usize) -> Result<u32, XlsxIoError> {
    u32::try_from(value)
        .map_err(|_| XlsxIoError::LimitExceeded(format!("row index overflow: {value}")))
}

pub(crate) fn cast_col_num(value: usize) -> Result<u16, XlsxIoError> {
    u16::try_from(value)
        .map_err(|_| XlsxIoError::LimitExceeded(format!("column index overflow: {value}")))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_number_to_text_drops_integral_fraction() {
        assert_eq!(convert_number_to_text(13812345678.0), "13812345678");
        assert_eq!(convert_number_to_text(-3.0), "-3");
        assert_eq!(convert_number_to_text(1.5), "1.5");
        assert_eq!(convert_number_to_text(1e16), "10000000000000000");
        assert_eq!(convert_number_to_text(f64::NAN), "NaN");
    }

    #[test]
    fn test_convert_cell_value_to_text_covers_all_variants() {
        assert_eq!(convert_cell_value_to_text(&EnumCellValue::None), "");
        assert_eq!(convert_cell_value_to_text(&EnumCellValue::text("a")), "a");
        assert_eq!(convert_cell_value_to_text(&EnumCellValue::Boolean(true)), "TRUE");
        assert_eq!(
            convert_cell_value_to_text(&EnumCellValue::Error("#N/A".to_string())),
            "#N/A"
        );
    }

    #[test]
    fn test_workbook_names() {
        assert!(is_supported_workbook_name("a.xlsx"));
        assert!(is_supported_workbook_name("a.xls"));
        assert!(!is_supported_workbook_name("a.csv"));
        assert!(!is_supported_workbook_name("a.XLSX"));
        assert!(!is_supported_workbook_name("a.xlsx.bak"));

        assert_eq!(derive_output_workbook_name("名单.xlsx", "_processed"), "名单_processed.xlsx");
        assert_eq!(derive_output_workbook_name("a.b.xls", "_processed"), "a.b_processed.xlsx");
        assert_eq!(derive_output_workbook_name("noext", "_p"), "noext_p.xlsx");
    }

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(sanitize_sheet_name("a/b:c", "_"), "a_b_c");
        assert_eq!(sanitize_sheet_name("   ", "_"), "Sheet");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40), "_").len(), 31);
    }

    #[test]
    fn test_validate_grid_limits() {
        assert!(validate_grid_limits(10, 6).is_ok());
        assert!(validate_grid_limits(N_NROWS_EXCEL_MAX + 1, 1).is_err());
        assert!(validate_grid_limits(1, N_NCOLS_EXCEL_MAX + 1).is_err());
    }

    #[test]
    fn test_estimate_unicode_string_width() {
        assert_eq!(estimate_unicode_string_width("abc"), 3);
        assert_eq!(estimate_unicode_string_width("客户名"), 5);
    }
}
