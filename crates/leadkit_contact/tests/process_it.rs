use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use leadkit_contact::{ContactError, SpecContactProcessOptions, process, process_with_options};
use rust_xlsxwriter::Workbook;

const TUP_SOURCE_HEADER: [&str; 9] = [
    "公司名称",
    "登记状态",
    "法定代表人",
    "所属省份",
    "所属城市",
    "有效手机号",
    "更多电话",
    "注册地址",
    "邮箱",
];

fn build_source_workbook(rows: &[Vec<&str>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "企业查询导出").unwrap();
    for (n_idx_col, c_header) in TUP_SOURCE_HEADER.iter().enumerate() {
        worksheet.write_string(1, n_idx_col as u16, *c_header).unwrap();
    }
    for (n_idx_row, l_row) in rows.iter().enumerate() {
        for (n_idx_col, c_value) in l_row.iter().enumerate() {
            if c_value.is_empty() {
                continue;
            }
            worksheet
                .write_string(n_idx_row as u32 + 2, n_idx_col as u16, *c_value)
                .unwrap();
        }
    }
    workbook.save_to_buffer().unwrap()
}

fn read_output_range(v_bytes: &[u8]) -> Range<Data> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(v_bytes)).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Sheet1".to_string()]);
    workbook.worksheet_range_at(0).unwrap().unwrap()
}

fn read_row(range: &Range<Data>, n_idx_row: u32) -> Vec<String> {
    (0..6u32)
        .map(|n_idx_col| match range.get_value((n_idx_row, n_idx_col)) {
            Some(Data::String(s)) => s.clone(),
            Some(Data::Empty) | None => String::new(),
            Some(other) => panic!("unexpected cell {other:?}"),
        })
        .collect()
}

#[test]
fn process_dedups_sorts_and_lays_out_export() {
    let v_input = build_source_workbook(&[
        vec!["甲公司", "存续", "张三", "浙江", "杭州", "13812345678", "0571-88888888", "某路1号"],
        vec!["乙公司", "", "李四", "", "北京", "", "010-12345678, 13900000000", ""],
        vec!["", "", "", "", "", "13812345678", "", "新地址"],
        vec!["丙公司", "存续", "赵六", "浙江", "宁波", "", "", ""],
        vec!["丁公司", "", "王五", "", "杭州", "0571-87654321", "", ""],
    ]);

    let (v_output, file_name) = process(&v_input, "客户名单.xlsx").unwrap();
    assert_eq!(file_name, "客户名单_processed.xlsx");

    let range = read_output_range(&v_output);
    assert_eq!(range.start(), Some((12, 0)));
    assert_eq!(range.end().map(|(n_row, _)| n_row), Some(15));

    assert_eq!(
        read_row(&range, 12),
        vec!["客户名", "手机(必填)", "微信", "来源", "地区（市级）", "备注"]
    );
    assert_eq!(
        read_row(&range, 13),
        vec!["李四", "13900000000", "", "乙公司", "-北京", ""]
    );
    assert_eq!(
        read_row(&range, 14),
        vec!["王五", "0571-87654321", "", "丁公司", "-杭州", ""]
    );
    assert_eq!(
        read_row(&range, 15),
        vec!["张三", "13812345678", "", "甲公司", "浙江-杭州", ""]
    );
}

#[test]
fn process_with_options_reports_counters() {
    let v_input = build_source_workbook(&[
        vec!["甲公司", "", "张三", "", "", "13812345678", "", ""],
        vec!["甲公司", "", "", "", "", "13812345678", "", ""],
        vec!["乙公司", "", "", "", "", "", "", ""],
    ]);

    let export =
        process_with_options(&v_input, "a.xlsx", &SpecContactProcessOptions::default()).unwrap();
    let report = &export.report;
    assert_eq!(report.cnt_rows_read, 3);
    assert_eq!(report.cnt_rows_dropped_no_phone, 1);
    assert_eq!(report.cnt_rows_merged, 1);
    assert_eq!(report.cnt_records_exported, 1);
    assert!(report.warnings.iter().any(|c| c.contains("邮箱")));

    let range = read_output_range(&export.v_bytes);
    assert_eq!(
        read_row(&range, 13),
        vec!["张三", "13812345678", "", "甲公司", "-", ""]
    );
}

#[test]
fn process_reads_numeric_phone_cells_and_xls_names() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (n_idx_col, c_header) in TUP_SOURCE_HEADER.iter().enumerate() {
        worksheet.write_string(1, n_idx_col as u16, *c_header).unwrap();
    }
    worksheet.write_string(2, 0, "甲公司").unwrap();
    worksheet.write_number(2, 5, 13812345678.0).unwrap();
    let v_input = workbook.save_to_buffer().unwrap();

    let (v_output, file_name) = process(&v_input, "legacy.xls").unwrap();
    assert_eq!(file_name, "legacy_processed.xlsx");
    let range = read_output_range(&v_output);
    assert_eq!(read_row(&range, 13)[1], "13812345678");
}

#[test]
fn process_without_data_rows_exports_header_only() {
    let v_input = build_source_workbook(&[]);
    let export =
        process_with_options(&v_input, "empty.xlsx", &SpecContactProcessOptions::default())
            .unwrap();
    assert_eq!(export.report.cnt_rows_read, 0);
    assert_eq!(export.report.cnt_records_exported, 0);

    let range = read_output_range(&export.v_bytes);
    assert_eq!(range.end().map(|(n_row, _)| n_row), Some(12));
}

#[test]
fn process_blank_header_row_exports_header_only() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "title").unwrap();
    worksheet.write_string(2, 0, "甲公司").unwrap();
    worksheet.write_string(2, 5, "13812345678").unwrap();
    let v_input = workbook.save_to_buffer().unwrap();

    let export =
        process_with_options(&v_input, "a.xlsx", &SpecContactProcessOptions::default()).unwrap();
    assert_eq!(export.report.cnt_rows_read, 1);
    assert_eq!(export.report.cnt_rows_dropped_no_phone, 1);
    assert_eq!(export.report.cnt_records_exported, 0);

    let range = read_output_range(&export.v_bytes);
    assert_eq!(range.end().map(|(n_row, _)| n_row), Some(12));
}

#[test]
fn process_fails_when_header_row_missing() {
    let mut workbook = Workbook::new();
    workbook
        .add_worksheet()
        .write_string(0, 0, "公司名称")
        .unwrap();
    let v_input = workbook.save_to_buffer().unwrap();

    let err = process(&v_input, "a.xlsx").unwrap_err();
    assert!(matches!(err, ContactError::HeaderRead(_)));
    assert_eq!(err.to_user_message(), "Excel文件处理失败，请检查文件格式");
}

#[test]
fn process_rejects_unsupported_extension() {
    let v_input = build_source_workbook(&[]);
    let err = process(&v_input, "a.csv").unwrap_err();
    assert!(matches!(err, ContactError::InvalidFileType { .. }));
    assert_eq!(err.to_user_message(), "请上传Excel文件(.xlsx或.xls格式)");
}
