//! Locale-aware ordering of merged records by region.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;

use crate::spec::{ContactError, SpecMergedRecord};

/// Collator for region strings.
pub struct RegionCollator {
    c_locale: String,
    collator: Collator,
}

impl RegionCollator {
    /// Build a collator for a BCP-47 locale such as `zh`.
    pub fn try_new(c_locale: &str) -> Result<Self, ContactError> {
        let locale: Locale = c_locale.parse().map_err(|err| {
            ContactError::Processing(format!("Invalid collation locale {c_locale:?}: {err}"))
        })?;
        let collator = Collator::try_new(&(&locale).into(), CollatorOptions::new()).map_err(
            |err| ContactError::Processing(format!("Collator for {c_locale:?} unavailable: {err}")),
        )?;
        Ok(Self {
            c_locale: c_locale.to_string(),
            collator,
        })
    }

    /// Locale the collator was built for.
    pub fn locale(&self) -> &str {
        &self.c_locale
    }

    /// Collation order of two region strings.
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }
}

impl fmt::Debug for RegionCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionCollator")
            .field("c_locale", &self.c_locale)
            .finish_non_exhaustive()
    }
}

/// Stable sort by region; equal regions keep merge order.
pub fn sort_records_by_region(records: &mut [SpecMergedRecord], collator: &RegionCollator) {
    records.sort_by(|left, right| collator.compare(&left.region, &right.region));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, phone: &str) -> SpecMergedRecord {
        SpecMergedRecord {
            region: region.to_string(),
            phone: phone.to_string(),
            ..SpecMergedRecord::default()
        }
    }

    fn regions(records: &[SpecMergedRecord]) -> Vec<&str> {
        records.iter().map(|r| r.region.as_str()).collect()
    }

    #[test]
    fn test_sort_by_region_uses_pinyin_order() {
        let collator = RegionCollator::try_new("zh").expect("zh collator");
        let mut l_records = vec![
            record("杭州-西湖", "1"),
            record("北京-朝阳", "2"),
            record("杭州-余杭", "3"),
        ];
        sort_records_by_region(&mut l_records, &collator);
        assert_eq!(regions(&l_records), vec!["北京-朝阳", "杭州-西湖", "杭州-余杭"]);
    }

    #[test]
    fn test_sort_by_region_is_stable() {
        let collator = RegionCollator::try_new("zh").expect("zh collator");
        let mut l_records = vec![
            record("杭州", "a"),
            record("北京", "b"),
            record("杭州", "c"),
            record("北京", "d"),
        ];
        sort_records_by_region(&mut l_records, &collator);
        let l_phones: Vec<&str> = l_records.iter().map(|r| r.phone.as_str()).collect();
        assert_eq!(l_phones, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sort_puts_empty_region_first() {
        let collator = RegionCollator::try_new("zh").expect("zh collator");
        let mut l_records = vec![record("北京", "a"), record("", "b")];
        sort_records_by_region(&mut l_records, &collator);
        assert_eq!(regions(&l_records), vec!["", "北京"]);
    }

    #[test]
    fn test_invalid_locale_is_processing_error() {
        let err = RegionCollator::try_new("not a locale!").expect_err("invalid locale");
        assert!(matches!(err, ContactError::Processing(_)));
    }
}
