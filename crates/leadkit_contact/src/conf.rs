//! Contact pipeline constants and default option factories.

use crate::spec::{EnumContactField, SpecContactProcessOptions};

/// Physical row holding the source headers.
pub const N_IDX_ROW_HEADER: usize = 1;
/// Physical row of the first data record.
pub const N_IDX_ROW_DATA_START: usize = 2;

/// Known source headers and their canonical fields.
pub const TUP_HEADER_MAPPING: [(&str, EnumContactField); 8] = [
    ("公司名称", EnumContactField::CompanyName),
    ("登记状态", EnumContactField::RegistrationStatus),
    ("法定代表人", EnumContactField::LegalRepresentative),
    ("所属省份", EnumContactField::Province),
    ("所属城市", EnumContactField::City),
    ("有效手机号", EnumContactField::ValidPhone),
    ("更多电话", EnumContactField::MorePhones),
    ("注册地址", EnumContactField::RegisteredAddress),
];

/// Separator between numbers in the "more phones" column.
pub const C_PHONE_SEPARATOR: char = ',';
/// Joiner between province and city.
pub const C_REGION_SEPARATOR: &str = "-";

/// Blank rows reserved above the export header.
pub const N_NROWS_EXPORT_RESERVED: usize = 12;
/// Export header labels (row 13).
pub const TUP_EXPORT_HEADER: [&str; 6] = [
    "客户名",
    "手机(必填)",
    "微信",
    "来源",
    "地区（市级）",
    "备注",
];
/// Suffix appended to the input file stem.
pub const C_EXPORT_FILE_SUFFIX: &str = "_processed";

/// Collation locale for region ordering.
pub const C_COLLATION_LOCALE_DEFAULT: &str = "zh";

/// Alert text for a rejected file extension.
pub const C_MSG_INVALID_FILE_TYPE: &str = "请上传Excel文件(.xlsx或.xls格式)";
/// Alert text for any other failed run.
pub const C_MSG_PROCESSING_FAILED: &str = "Excel文件处理失败，请检查文件格式";
/// Prefix of the success message; followed by the exported file name.
pub const C_MSG_SUCCESS_PREFIX: &str = "文件已成功处理并导出为 ";

/// Build default process options.
pub fn derive_default_contact_process_options() -> SpecContactProcessOptions {
    SpecContactProcessOptions::default()
}
