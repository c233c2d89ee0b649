//! Frequency window over the trailing `d` expenditures and its median query.
//! Fixed 201-slot histogram, no allocation and no sorting.

use crate::models::BUCKETS;

/// Histogram of the last `size` expenditures, one bucket per value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyWindow {
    counts: [u32; BUCKETS],
    size: usize,
}

impl FrequencyWindow {
    /// Build the window from the first `size` values of `expenditures`.
    ///
    /// Values must already be validated to lie in `0..=200` and
    /// `size <= expenditures.len()`.
    pub fn initialize(expenditures: &[u32], size: usize) -> Self {
        let mut counts = [0u32; BUCKETS];
        for &value in &expenditures[..size] {
            counts[value as usize] += 1;
        }
        Self { counts, size }
    }

    /// Drop `outgoing` from the window and admit `incoming`.
    ///
    /// Panics if `outgoing` has no occurrence in the window.
    pub fn slide(&mut self, outgoing: u32, incoming: u32) {
        let slot = &mut self.counts[outgoing as usize];
        assert!(
            *slot > 0,
            "slide removed expenditure {outgoing} which is not in the window"
        );
        *slot -= 1;
        self.counts[incoming as usize] += 1;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Sum of all bucket counts. Equals `size()` while the window is consistent.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Median of the values in the window, walking buckets in ascending order.
    ///
    /// For an even window this is the mean of the two central values, so the
    /// result is always an integer or a half-integer. Returns `None` when the
    /// buckets run out before the middle rank is reached, which only happens if
    /// the histogram holds fewer than `size` values.
    pub fn median(&self) -> Option<f64> {
        let median_index = (self.size / 2) as u32;
        let even = self.size % 2 == 0;
        let mut count_left = 0u32;
        let mut left = None;

        for (value, &count) in self.counts.iter().enumerate() {
            count_left += count;
            if even && left.is_none() && count_left >= median_index {
                left = Some(value);
            }
            if count_left > median_index {
                let right = value;
                let left = if even { left.unwrap_or(right) } else { right };
                return Some((left + right) as f64 / 2.0);
            }
        }
        None
    }
}
