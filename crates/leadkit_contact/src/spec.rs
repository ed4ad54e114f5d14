//! Contact record models, options, report and errors.

use std::collections::BTreeMap;
use std::fmt;

use leadkit_io_xlsx::XlsxIoError;
use leadkit_io_xlsx::conf::derive_default_xlsx_write_options;
use leadkit_io_xlsx::spec::SpecXlsxWriteOptions;

use crate::conf::{
    C_COLLATION_LOCALE_DEFAULT, C_MSG_INVALID_FILE_TYPE, C_MSG_PROCESSING_FAILED,
    N_IDX_ROW_DATA_START, N_IDX_ROW_HEADER, N_NROWS_EXPORT_RESERVED,
};

////////////////////////////////////////////////////////////////////////////////
// #region Fields

/// Canonical field identifiers of a registry row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnumContactField {
    CompanyName,
    RegistrationStatus,
    LegalRepresentative,
    Province,
    City,
    ValidPhone,
    MorePhones,
    RegisteredAddress,
}

impl EnumContactField {
    /// Canonical identifier used as raw-row key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CompanyName => "companyName",
            Self::RegistrationStatus => "registrationStatus",
            Self::LegalRepresentative => "legalRepresentative",
            Self::Province => "province",
            Self::City => "city",
            Self::ValidPhone => "validPhone",
            Self::MorePhones => "morePhones",
            Self::RegisteredAddress => "registeredAddress",
        }
    }
}

impl fmt::Display for EnumContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phone number class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumPhoneKind {
    /// 11 digits, `1` then `3`..`9`.
    Mobile,
    /// Area code, optional hyphen, local number.
    Landline,
    /// Neither pattern.
    Unknown,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Records

/// One data row keyed by canonical field identifier.
///
/// Unrecognized columns are kept under their original header text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecRawRow {
    pub cells: BTreeMap<String, String>,
}

impl SpecRawRow {
    /// Cell text of a canonical field; absent is `""`.
    pub fn get(&self, field: EnumContactField) -> &str {
        self.get_by_key(field.as_str())
    }

    /// Cell text by raw key; absent is `""`.
    pub fn get_by_key(&self, key: &str) -> &str {
        self.cells.get(key).map_or("", String::as_str)
    }
}

/// One candidate contact derived from a raw row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecNormalizedRecord {
    /// Trimmed legal representative.
    pub customer_name: String,
    pub company_name: String,
    pub registration_status: String,
    pub province: String,
    pub city: String,
    pub registered_address: String,
    pub valid_phone: String,
    pub more_phones: String,
    /// Selected contact number; empty means the row is dropped.
    pub phone: String,
    /// Province and city joined, empty parts omitted.
    pub region: String,
}

/// Deduplicated contact, one per distinct phone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecMergedRecord {
    pub company_name: String,
    pub registration_status: String,
    pub legal_representative: String,
    pub province: String,
    pub city: String,
    pub valid_phone: String,
    pub more_phones: String,
    pub registered_address: String,
    pub phone: String,
    pub customer_name: String,
    pub region: String,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Options

/// Options for one `process` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecContactProcessOptions {
    /// Physical row holding the source headers.
    pub idx_row_header: usize,
    /// Physical row of the first data record.
    pub idx_row_data_start: usize,
    /// BCP-47 locale for region collation.
    pub c_collation_locale: String,
    /// Export sheet options.
    pub write_options: SpecXlsxWriteOptions,
}

impl Default for SpecContactProcessOptions {
    fn default() -> Self {
        let mut write_options = derive_default_xlsx_write_options();
        write_options.policy_autofit.idx_row_header = N_NROWS_EXPORT_RESERVED;
        Self {
            idx_row_header: N_IDX_ROW_HEADER,
            idx_row_data_start: N_IDX_ROW_DATA_START,
            c_collation_locale: C_COLLATION_LOCALE_DEFAULT.to_string(),
            write_options,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportAndOutput

/// Counters and diagnostics for one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecContactReport {
    /// Data rows read below the header.
    pub cnt_rows_read: u64,
    /// Rows without a usable phone.
    pub cnt_rows_dropped_no_phone: u64,
    /// Rows folded into an already-present phone.
    pub cnt_rows_merged: u64,
    /// Records written to the export sheet.
    pub cnt_records_exported: u64,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecContactReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_rows_read".to_string(), self.cnt_rows_read);
        dict_counts.insert(
            "cnt_rows_dropped_no_phone".to_string(),
            self.cnt_rows_dropped_no_phone,
        );
        dict_counts.insert("cnt_rows_merged".to_string(), self.cnt_rows_merged);
        dict_counts.insert("cnt_records_exported".to_string(), self.cnt_records_exported);
        dict_counts.insert("cnt_warnings".to_string(), self.warnings.len() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} read={} dropped={} merged={} exported={} warnings={}",
            self.cnt_rows_read,
            self.cnt_rows_dropped_no_phone,
            self.cnt_rows_merged,
            self.cnt_records_exported,
            self.warnings.len()
        )
    }
}

impl fmt::Display for SpecContactReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[CONTACT]"))
    }
}

/// Finished export of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecContactExport {
    /// Generated `.xlsx` bytes.
    pub v_bytes: Vec<u8>,
    /// `<input-stem>_processed.xlsx`.
    pub file_name: String,
    pub report: SpecContactReport,
}

/// Terminal failures of a run.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// File name is neither `.xlsx` nor `.xls`.
    #[error("Unsupported file type: {file_name:?} (expected .xlsx or .xls)")]
    InvalidFileType {
        /// Rejected file name.
        file_name: String,
    },
    /// Header row absent or malformed.
    #[error("Failed to read header row: {0}")]
    HeaderRead(String),
    /// Any failure after the header was read.
    #[error("Processing failed: {0}")]
    Processing(String),
}

impl ContactError {
    /// Alert text shown by the UI for this error kind.
    pub fn to_user_message(&self) -> &'static str {
        match self {
            Self::InvalidFileType { .. } => C_MSG_INVALID_FILE_TYPE,
            Self::HeaderRead(_) | Self::Processing(_) => C_MSG_PROCESSING_FAILED,
        }
    }
}

impl From<XlsxIoError> for ContactError {
    fn from(err: XlsxIoError) -> Self {
        Self::Processing(err.to_string())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
