use serde::{Deserialize, Serialize};

use crate::models::CheckIn;

/// Whole-history averages shown above the detected patterns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub avg_focus: f64,
    pub avg_stress: f64,
    pub avg_energy: f64,
    pub most_common_activity: String,
    pub total_check_ins: usize,
}

/// `None` for an empty history.
pub fn summarize(history: &[CheckIn]) -> Option<Summary> {
    if history.is_empty() {
        return None;
    }

    let most_common_activity = activity_ranking(history)
        .into_iter()
        .next()
        .map(|(activity, _)| activity)
        .unwrap_or_default();

    Some(Summary {
        avg_focus: round_one_decimal(mean_of(history, |c| c.focus_level)),
        avg_stress: round_one_decimal(mean_of(history, |c| c.stress_level)),
        avg_energy: round_one_decimal(mean_of(history, |c| c.energy)),
        most_common_activity,
        total_check_ins: history.len(),
    })
}

/// Mean of one level across entries. Callers guarantee a non-empty slice.
pub(crate) fn mean_of(entries: &[CheckIn], level: impl Fn(&CheckIn) -> u8) -> f64 {
    let total: u32 = entries.iter().map(|c| u32::from(level(c))).sum();
    f64::from(total) / entries.len() as f64
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Activities by descending count; ties keep first-encountered order.
pub(crate) fn activity_ranking(entries: &[CheckIn]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in entries {
        let label = entry.activity.as_str();
        match counts.iter_mut().find(|(activity, _)| activity == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label.to_string(), 1)),
        }
    }

    // sort_by is stable, so equal counts stay in encounter order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
