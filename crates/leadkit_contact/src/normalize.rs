//! Raw row construction and per-row normalization.

use leadkit_io_xlsx::{EnumCellValue, convert_cell_value_to_text};

use crate::conf::{C_PHONE_SEPARATOR, C_REGION_SEPARATOR};
use crate::phone::select_phone;
use crate::spec::{EnumContactField, SpecNormalizedRecord, SpecRawRow};

/// Key one data row by the mapped headers.
///
/// Cells past the header width are ignored and missing cells become `""`.
/// Columns with an empty header are skipped; on duplicate headers the
/// right-most column wins.
pub fn build_raw_row(headers: &[String], cells: &[EnumCellValue]) -> SpecRawRow {
    let mut row = SpecRawRow::default();
    for (n_idx_col, c_header) in headers.iter().enumerate() {
        if c_header.is_empty() {
            continue;
        }
        let c_value = cells
            .get(n_idx_col)
            .map(convert_cell_value_to_text)
            .unwrap_or_default();
        row.cells.insert(c_header.clone(), c_value);
    }
    row
}

/// Join province and city with `-`, leaving out empty parts.
pub fn join_region(province: &str, city: &str) -> String {
    [province, city]
        .into_iter()
        .filter(|c_part| !c_part.is_empty())
        .collect::<Vec<_>>()
        .join(C_REGION_SEPARATOR)
}

/// Ordered phone candidates: valid phone first, then each "more phones" entry.
///
/// The valid phone is taken as-is; only "more phones" entries are trimmed.
pub fn derive_phone_candidates(valid_phone: &str, more_phones: &str) -> Vec<String> {
    std::iter::once(valid_phone)
        .chain(more_phones.split(C_PHONE_SEPARATOR).map(str::trim))
        .filter(|c_phone| !c_phone.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize one raw row into a trimmed candidate contact.
pub fn normalize_row(row: &SpecRawRow) -> SpecNormalizedRecord {
    let take = |field: EnumContactField| row.get(field).trim().to_string();

    let province = take(EnumContactField::Province);
    let city = take(EnumContactField::City);
    let valid_phone = take(EnumContactField::ValidPhone);
    let more_phones = take(EnumContactField::MorePhones);
    let phone = select_phone(&derive_phone_candidates(
        row.get(EnumContactField::ValidPhone),
        row.get(EnumContactField::MorePhones),
    ));
    let region = join_region(&province, &city);

    SpecNormalizedRecord {
        customer_name: take(EnumContactField::LegalRepresentative),
        company_name: take(EnumContactField::CompanyName),
        registration_status: take(EnumContactField::RegistrationStatus),
        province,
        city,
        registered_address: take(EnumContactField::RegisteredAddress),
        valid_phone,
        more_phones,
        phone,
        region,
    }
}

/// Normalize every row, dropping rows without a usable phone.
///
/// Returns the kept records and the number of dropped rows.
pub fn normalize_rows<'a, I>(rows: I) -> (Vec<SpecNormalizedRecord>, u64)
where
    I: IntoIterator<Item = &'a SpecRawRow>,
{
    let mut l_records = Vec::new();
    let mut n_dropped = 0u64;
    for row in rows {
        let record = normalize_row(row);
        if record.phone.is_empty() {
            n_dropped += 1;
            continue;
        }
        l_records.push(record);
    }
    (l_records, n_dropped)
}
