//! Export sheet layout for the CRM import template.

use leadkit_io_xlsx::{EnumCellValue, derive_output_workbook_name};

use crate::conf::{C_EXPORT_FILE_SUFFIX, C_REGION_SEPARATOR, N_NROWS_EXPORT_RESERVED, TUP_EXPORT_HEADER};
use crate::spec::SpecMergedRecord;

fn cell(value: &str) -> EnumCellValue {
    if value.is_empty() {
        EnumCellValue::None
    } else {
        EnumCellValue::text(value)
    }
}

/// Export-time region: `province-city`, hyphen kept even when a side is empty.
pub fn derive_export_region(province: &str, city: &str) -> String {
    format!("{province}{C_REGION_SEPARATOR}{city}")
}

/// Customer-name column: legal representative, falling back to customer name.
pub fn derive_export_customer_name(record: &SpecMergedRecord) -> &str {
    if record.legal_representative.is_empty() {
        &record.customer_name
    } else {
        &record.legal_representative
    }
}

/// One export data row.
pub fn build_export_row(record: &SpecMergedRecord) -> Vec<EnumCellValue> {
    vec![
        cell(derive_export_customer_name(record)),
        cell(&record.phone),
        EnumCellValue::None,
        cell(&record.company_name),
        cell(&derive_export_region(&record.province, &record.city)),
        EnumCellValue::None,
    ]
}

/// Full export grid: reserved blank rows, header row, then one row per record.
pub fn build_export_grid(records: &[SpecMergedRecord]) -> Vec<Vec<EnumCellValue>> {
    let mut grid = Vec::with_capacity(N_NROWS_EXPORT_RESERVED + 1 + records.len());
    grid.resize(N_NROWS_EXPORT_RESERVED, Vec::new());
    grid.push(TUP_EXPORT_HEADER.iter().map(|c| cell(c)).collect());
    grid.extend(records.iter().map(build_export_row));
    grid
}

/// `<stem>_processed.xlsx`.
pub fn derive_export_file_name(original_file_name: &str) -> String {
    derive_output_workbook_name(original_file_name, C_EXPORT_FILE_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_export_region_keeps_hyphen() {
        assert_eq!(derive_export_region("浙江", "杭州"), "浙江-杭州");
        assert_eq!(derive_export_region("", "杭州"), "-杭州");
        assert_eq!(derive_export_region("浙江", ""), "浙江-");
        assert_eq!(derive_export_region("", ""), "-");
    }

    #[test]
    fn test_build_export_grid_layout() {
        let record = SpecMergedRecord {
            legal_representative: "张三".to_string(),
            customer_name: "张三".to_string(),
            phone: "13812345678".to_string(),
            company_name: "甲公司".to_string(),
            city: "杭州".to_string(),
            region: "杭州".to_string(),
            ..SpecMergedRecord::default()
        };
        let grid = build_export_grid(&[record]);

        assert_eq!(grid.len(), 14);
        assert!(grid[..12].iter().all(Vec::is_empty));
        assert_eq!(
            grid[12],
            TUP_EXPORT_HEADER
                .iter()
                .map(|c| EnumCellValue::text(*c))
                .collect::<Vec<_>>()
        );
        assert_eq!(
            grid[13],
            vec![
                EnumCellValue::text("张三"),
                EnumCellValue::text("13812345678"),
                EnumCellValue::None,
                EnumCellValue::text("甲公司"),
                EnumCellValue::text("-杭州"),
                EnumCellValue::None,
            ]
        );
    }

    #[test]
    fn test_customer_name_falls_back_when_legal_representative_empty() {
        let record = SpecMergedRecord {
            customer_name: "李四".to_string(),
            ..SpecMergedRecord::default()
        };
        assert_eq!(derive_export_customer_name(&record), "李四");
        assert_eq!(build_export_row(&SpecMergedRecord::default())[0], EnumCellValue::None);
    }

    #[test]
    fn test_derive_export_file_name() {
        assert_eq!(derive_export_file_name("客户.xlsx"), "客户_processed.xlsx");
        assert_eq!(derive_export_file_name("a.b.xls"), "a.b_processed.xlsx");
    }

    #[test]
    fn test_build_export_grid_without_records() {
        let grid = build_export_grid(&[]);
        assert_eq!(grid.len(), 13);
    }
}
