//! `leadkit_contact` v1:
//! Registry export -> CRM import converter.
//!
//! Pipeline: header mapping, row normalization, phone selection, phone-keyed
//! merge, region sort, export layout.
//! - `conf`      : constants, user messages and default presets
//! - `spec`      : records, options, run report, errors
//! - `header`    : source header translation
//! - `normalize` : raw rows and normalized records
//! - `phone`     : mobile/landline classification
//! - `merge`     : deduplication by phone
//! - `sort`      : collation-based region ordering
//! - `layout`    : export grid and file name
//! - `process`   : end-to-end entry points
pub mod conf;
pub mod header;
pub mod layout;
pub mod merge;
pub mod normalize;
pub mod phone;
pub mod process;
pub mod sort;
pub mod spec;

pub use conf::{
    C_MSG_INVALID_FILE_TYPE, C_MSG_PROCESSING_FAILED, C_MSG_SUCCESS_PREFIX,
    derive_default_contact_process_options,
};
pub use header::{map_header_name, map_header_row};
pub use layout::{build_export_grid, derive_export_file_name};
pub use merge::{SpecMergeState, merge_record, merge_records};
pub use normalize::{build_raw_row, join_region, normalize_row};
pub use phone::{classify_phone, is_landline_phone, is_mobile_phone, select_phone};
pub use process::{
    check_file_extension, format_success_message, process, process_with_options,
    validate_file_extension,
};
pub use sort::{RegionCollator, sort_records_by_region};
pub use spec::{
    ContactError, EnumContactField, EnumPhoneKind, SpecContactExport, SpecContactProcessOptions,
    SpecContactReport, SpecMergedRecord, SpecNormalizedRecord, SpecRawRow,
};
