//! Missing-volume analysis for an owned series.
//!
//! Two independent checks per series:
//!
//! 1. **Internal gaps** -- volume numbers absent from the owned range
//!    `[min, max]`, run-length-encoded into contiguous ranges.
//! 2. **Trailing gaps** -- volumes beyond `max` when the series' total volume
//!    count is known, only reported when volumes 1..=max are all owned.
//!
//! A series with neither finding produces no report at all.

use std::collections::BTreeSet;

/// Result of analyzing one series' owned volumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingVolumes {
    /// Number of distinct volumes owned.
    pub owned_count: usize,
    /// Lowest owned volume number.
    pub min_owned: i32,
    /// Highest owned volume number.
    pub max_owned: i32,
    /// Rendered finding strings, e.g. `"Gaps in owned range: Vol. 3, Vol. 6"`.
    pub parts: Vec<String>,
}

impl MissingVolumes {
    /// Ownership summary string, e.g. `"Owned 5 volumes (Min: 1, Max: 7)"`.
    pub fn owned_summary(&self) -> String {
        format!(
            "Owned {} volumes (Min: {}, Max: {})",
            self.owned_count, self.min_owned, self.max_owned
        )
    }

    /// All findings joined into a single description, e.g.
    /// `"Gaps in owned range: Vol. 3; Missing later volumes: Vol. 8-10"`.
    pub fn missing_info(&self) -> String {
        self.parts.join("; ")
    }
}

/// Analyze one series' owned volume numbers.
///
/// Returns `None` when the user owns no volumes or no gap of either kind was
/// detected -- callers omit such series from the report entirely. Duplicate
/// volume numbers in `owned` are tolerated (the set is deduplicated first),
/// although the store's unique constraint should prevent them.
///
/// The trailing-gap check assumes volume numbering starts at 1: it is
/// suppressed unless every volume from 1 through `max_owned` is present, so a
/// collection with internal gaps is never told to buy later volumes first.
pub fn missing_volumes(owned: &[i32], total_volumes: Option<i32>) -> Option<MissingVolumes> {
    let owned_set: BTreeSet<i32> = owned.iter().copied().collect();
    let (&min_owned, &max_owned) = (owned_set.first()?, owned_set.last()?);

    let mut parts = Vec::new();

    // Internal gaps only exist when the owned volumes span a range. Gaps are
    // read off consecutive owned numbers directly, so the cost is bounded by
    // the number of owned volumes, not the span between them.
    let gap_ranges = encode_gap_ranges(&owned_set);
    if !gap_ranges.is_empty() {
        parts.push(format!("Gaps in owned range: {}", gap_ranges.join(", ")));
    }

    if let Some(total) = total_volumes {
        if total > max_owned {
            let all_up_to_max_present = (1..=max_owned).all(|v| owned_set.contains(&v));
            if all_up_to_max_present {
                let first_missing = max_owned + 1;
                if first_missing == total {
                    parts.push(format!("Missing later volumes: Vol. {first_missing}"));
                } else {
                    parts.push(format!("Missing later volumes: Vol. {first_missing}-{total}"));
                }
            }
        }
    }

    if parts.is_empty() {
        return None;
    }

    Some(MissingVolumes {
        owned_count: owned_set.len(),
        min_owned,
        max_owned,
        parts,
    })
}

/// Render the gaps between consecutive owned volume numbers as range strings.
///
/// Each pair of owned neighbors more than one apart yields one range:
/// `"Vol. a-b"` for a multi-volume gap, `"Vol. a"` for a single one.
fn encode_gap_ranges(owned_set: &BTreeSet<i32>) -> Vec<String> {
    let mut out = Vec::new();
    let mut iter = owned_set.iter().copied();
    let Some(mut prev) = iter.next() else {
        return out;
    };
    for v in iter {
        let (start, end) = (prev + 1, v - 1);
        if start == end {
            out.push(format!("Vol. {start}"));
        } else if start < end {
            out.push(format!("Vol. {start}-{end}"));
        }
        prev = v;
    }
    out
}
