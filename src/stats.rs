//! # Central Tendency
//!
//! Mean, median, and mode over non-negative count sequences. Mode is
//! multi-valued by contract: it carries every value tied for the highest
//! frequency, so the result type is a variant rather than a single number.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Central-tendency statistic selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Mean,
    Median,
    Mode,
}

impl Stat {
    /// Short label used when building table headers.
    pub fn label(self) -> &'static str {
        match self {
            Stat::Mean => "Mean",
            Stat::Median => "Median",
            Stat::Mode => "Mode",
        }
    }
}

/// Result of applying a [`Stat`] to a count sequence.
///
/// Mean and median are scalar; mode carries the ascending list of every
/// value achieving the maximum frequency, even when that list has one
/// element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Scalar(f64),
    Values(Vec<u64>),
}

impl StatValue {
    /// Scalar view rounded to `places` decimal places.
    ///
    /// Returns `None` for multi-valued mode results.
    pub fn rounded(&self, places: u32) -> Option<f64> {
        match self {
            StatValue::Scalar(value) => {
                let factor = 10f64.powi(places as i32);
                Some((value * factor).round() / factor)
            }
            StatValue::Values(_) => None,
        }
    }

    /// Multi-valued view, if this is a mode result.
    pub fn values(&self) -> Option<&[u64]> {
        match self {
            StatValue::Scalar(_) => None,
            StatValue::Values(values) => Some(values),
        }
    }
}

/// Apply `stat` to `counts`.
///
/// Empty input degrades to a zero scalar or an empty value list rather than
/// failing.
pub fn summarize(stat: Stat, counts: &[u64]) -> StatValue {
    match stat {
        Stat::Mean => StatValue::Scalar(mean(counts)),
        Stat::Median => StatValue::Scalar(median(counts)),
        Stat::Mode => StatValue::Values(mode(counts)),
    }
}

/// Arithmetic mean; `0.0` for an empty sequence.
pub fn mean(counts: &[u64]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    counts.iter().sum::<u64>() as f64 / counts.len() as f64
}

/// Standard median; the average of the two middle elements for even-length
/// sequences, `0.0` for an empty sequence.
pub fn median(counts: &[u64]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let mut sorted = counts.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    }
}

/// Every value achieving the maximum frequency, ascending.
pub fn mode(counts: &[u64]) -> Vec<u64> {
    let mut frequencies: FxHashMap<u64, usize> = FxHashMap::default();
    for &count in counts {
        *frequencies.entry(count).or_insert(0) += 1;
    }

    let Some(&highest) = frequencies.values().max() else {
        return Vec::new();
    };

    let mut tied: Vec<u64> = frequencies
        .into_iter()
        .filter(|&(_, frequency)| frequency == highest)
        .map(|(value, _)| value)
        .collect();
    tied.sort_unstable();
    tied
}
