//! Period arithmetic and parsing.

use proptest::prelude::*;
use pulse_core::{Period, PeriodError, PulseErrorCode};

#[test]
fn test_window_crossing_december() {
    let end = Period::new(2026, 1).unwrap();
    let keys: Vec<String> = Period::last_n_ending(end, 3).iter().map(Period::key).collect();
    assert_eq!(keys, vec!["2025-11", "2025-12", "2026-01"]);
}

#[test]
fn test_serde_uses_period_key() {
    let period = Period::new(2025, 9).unwrap();
    let json = serde_json::to_string(&period).unwrap();
    assert_eq!(json, "\"2025-09\"");
    let back: Period = serde_json::from_str(&json).unwrap();
    assert_eq!(back, period);
    assert!(serde_json::from_str::<Period>("\"2025-00\"").is_err());
}

#[test]
fn test_new_rejects_month_zero() {
    let err = Period::new(2025, 0).unwrap_err();
    assert_eq!(err, PeriodError::MonthOutOfRange { year: 2025, month: 0 });
    assert!(err.coded_string().starts_with("[PERIOD_ERROR]"));
}

proptest! {
    #[test]
    fn prop_pred_inverts_succ(year in 1900i32..2200, month in 1u32..=12) {
        let period = Period::new(year, month).unwrap();
        prop_assert_eq!(period.succ().pred(), period);
        prop_assert!(period.pred() < period);
    }

    #[test]
    fn prop_last_n_is_contiguous_and_ends_at_end(
        year in 1990i32..2100,
        month in 1u32..=12,
        count in 1usize..40,
    ) {
        let end = Period::new(year, month).unwrap();
        let window = Period::last_n_ending(end, count);
        prop_assert_eq!(window.len(), count);
        prop_assert_eq!(*window.last().unwrap(), end);
        for pair in window.windows(2) {
            prop_assert_eq!(pair[0].succ(), pair[1]);
        }
    }

    #[test]
    fn prop_key_parses_back(year in 1000i32..9999, month in 1u32..=12) {
        let period = Period::new(year, month).unwrap();
        prop_assert_eq!(period.key().parse::<Period>().unwrap(), period);
    }
}
