//! Source header translation.

use leadkit_io_xlsx::{EnumCellValue, convert_cell_value_to_text};

use crate::conf::TUP_HEADER_MAPPING;
use crate::spec::{ContactError, EnumContactField};

/// Canonical field of a known source header (exact, case-sensitive match).
pub fn lookup_header_field(header: &str) -> Option<EnumContactField> {
    TUP_HEADER_MAPPING
        .iter()
        .find(|(c_header, _)| *c_header == header)
        .map(|(_, field)| *field)
}

/// Translate one header; unknown headers pass through unchanged.
pub fn map_header_name(header: &str) -> String {
    lookup_header_field(header)
        .map_or_else(|| header.to_string(), |field| field.as_str().to_string())
}

/// Translate a whole header row into raw-row keys, one per column.
///
/// Fails when the row is missing or holds an error cell. A blank row maps to
/// empty keys, so every data column is skipped.
pub fn map_header_row(cells: Option<&[EnumCellValue]>) -> Result<Vec<String>, ContactError> {
    let Some(cells) = cells else {
        return Err(ContactError::HeaderRead(
            "header row is missing".to_string(),
        ));
    };

    let mut l_headers = Vec::with_capacity(cells.len());
    for (n_idx_col, value) in cells.iter().enumerate() {
        if let EnumCellValue::Error(c_err) = value {
            return Err(ContactError::HeaderRead(format!(
                "header cell at column {} is an error value {c_err}",
                n_idx_col + 1
            )));
        }
        l_headers.push(map_header_name(&convert_cell_value_to_text(value)));
    }

    tracing::debug!(headers = ?l_headers, "header row mapped");
    Ok(l_headers)
}

/// Non-empty headers that did not match the known table.
pub fn collect_unknown_headers(headers: &[String]) -> Vec<&str> {
    headers
        .iter()
        .map(String::as_str)
        .filter(|c_header| {
            !c_header.is_empty()
                && !TUP_HEADER_MAPPING
                    .iter()
                    .any(|(_, field)| field.as_str() == *c_header)
        })
        .collect()
}
