//! Phone-keyed deduplication expressed as a fold.

use std::collections::HashMap;

use crate::normalize::join_region;
use crate::spec::{SpecMergedRecord, SpecNormalizedRecord};

/// Insertion-ordered phone -> record state threaded through the fold.
#[derive(Debug, Clone, Default)]
pub struct SpecMergeState {
    dict_idx_by_phone: HashMap<String, usize>,
    l_records: Vec<SpecMergedRecord>,
    cnt_merged: u64,
}

impl SpecMergeState {
    /// Number of distinct phones seen.
    pub fn len(&self) -> usize {
        self.l_records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.l_records.is_empty()
    }

    /// Records folded into an already-present phone.
    pub fn cnt_merged(&self) -> u64 {
        self.cnt_merged
    }

    /// Record for `phone`, if any.
    pub fn get(&self, phone: &str) -> Option<&SpecMergedRecord> {
        self.dict_idx_by_phone
            .get(phone)
            .map(|n_idx| &self.l_records[*n_idx])
    }

    /// One record per distinct phone, in first-seen order.
    pub fn into_records(self) -> Vec<SpecMergedRecord> {
        self.l_records
    }
}

fn pick(new: &str, existing: &str) -> String {
    if new.is_empty() { existing } else { new }.to_string()
}

/// Seed a merged record from the first row carrying its phone.
pub fn create_merged_record(record: SpecNormalizedRecord) -> SpecMergedRecord {
    let region = join_region(&record.province, &record.city);
    SpecMergedRecord {
        company_name: record.company_name,
        registration_status: record.registration_status,
        legal_representative: record.customer_name.clone(),
        province: record.province,
        city: record.city,
        valid_phone: record.valid_phone,
        more_phones: record.more_phones,
        registered_address: record.registered_address,
        phone: record.phone,
        customer_name: record.customer_name,
        region,
    }
}

/// Combine a later row into an existing record; non-empty new values win.
///
/// `customer_name` falls back to the existing legal representative, not to the
/// existing customer name, and `region` is recomputed from the resolved parts.
pub fn combine_merged_record(
    existing: &SpecMergedRecord,
    record: &SpecNormalizedRecord,
) -> SpecMergedRecord {
    let province = pick(&record.province, &existing.province);
    let city = pick(&record.city, &existing.city);
    let region = join_region(&province, &city);
    SpecMergedRecord {
        company_name: pick(&record.company_name, &existing.company_name),
        registration_status: pick(&record.registration_status, &existing.registration_status),
        legal_representative: pick(&record.customer_name, &existing.legal_representative),
        valid_phone: pick(&record.valid_phone, &existing.valid_phone),
        more_phones: pick(&record.more_phones, &existing.more_phones),
        registered_address: pick(&record.registered_address, &existing.registered_address),
        phone: pick(&record.phone, &existing.phone),
        customer_name: pick(&record.customer_name, &existing.legal_representative),
        province,
        city,
        region,
    }
}

/// Fold one normalized record into the state.
///
/// Records with an empty phone leave the state untouched.
pub fn merge_record(mut state: SpecMergeState, record: SpecNormalizedRecord) -> SpecMergeState {
    if record.phone.is_empty() {
        return state;
    }
    match state.dict_idx_by_phone.get(&record.phone).copied() {
        Some(n_idx) => {
            state.l_records[n_idx] = combine_merged_record(&state.l_records[n_idx], &record);
            state.cnt_merged += 1;
        }
        None => {
            state
                .dict_idx_by_phone
                .insert(record.phone.clone(), state.l_records.len());
            state.l_records.push(create_merged_record(record));
        }
    }
    state
}

/// Fold all records in order.
pub fn fold_records<I>(records: I) -> SpecMergeState
where
    I: IntoIterator<Item = SpecNormalizedRecord>,
{
    records
        .into_iter()
        .fold(SpecMergeState::default(), merge_record)
}

/// Deduplicate by phone: exactly one record per distinct phone.
pub fn merge_records<I>(records: I) -> Vec<SpecMergedRecord>
where
    I: IntoIterator<Item = SpecNormalizedRecord>,
{
    fold_records(records).into_records()
}
