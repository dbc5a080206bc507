//! Period window construction.

use pulse_core::constants::MAX_TREND_MONTHS;
use pulse_core::Period;

use super::types::PeriodSelection;

/// Build the chronological period list for `selection`.
///
/// `latest` is the most recent period observed across the sources; it
/// anchors `LastMonths`. Misuse (reversed range, zero months, a window
/// longer than `MAX_TREND_MONTHS`, nothing dated) yields an empty list and a
/// warning.
pub fn build_period_list(
    selection: &PeriodSelection,
    latest: Option<Period>,
) -> (Vec<Period>, Option<String>) {
    match *selection {
        PeriodSelection::Range { from, to } if from > to => (
            Vec::new(),
            Some(format!("period range is reversed ({from} after {to})")),
        ),
        PeriodSelection::Range { from, to }
            if from.months_until(to) >= i64::from(MAX_TREND_MONTHS) =>
        {
            (
                Vec::new(),
                Some(format!(
                    "period range {from}..{to} spans more than {MAX_TREND_MONTHS} months"
                )),
            )
        }
        PeriodSelection::Range { from, to } => (Period::range_inclusive(from, to), None),
        PeriodSelection::LastMonths { months: 0 } => (
            Vec::new(),
            Some("requested a window of zero months".to_string()),
        ),
        PeriodSelection::LastMonths { months } if months > MAX_TREND_MONTHS => (
            Vec::new(),
            Some(format!(
                "requested a window of {months} months; the maximum is {MAX_TREND_MONTHS}"
            )),
        ),
        PeriodSelection::LastMonths { months } => match latest {
            Some(end) => (Period::last_n_ending(end, months as usize), None),
            None => (
                Vec::new(),
                Some("no dated records in any source; cannot anchor the window".to_string()),
            ),
        },
    }
}
