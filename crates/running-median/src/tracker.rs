use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::config::TrackerConfig;
use crate::error::MedianError;
use crate::heap::{MaxHeap, MinHeap};

/**
Tracks the median of every value inserted so far.

`lower` holds the smaller half and `upper` the larger half. Their sizes never
differ by more than one and every value in `lower` is at most every value in
`upper`, so the median is always read off the two roots.
*/
#[derive(Debug, Default, Clone)]
pub struct MedianTracker {
    lower: MaxHeap<i64>, // Max-heap for the lower half
    upper: MinHeap<i64>, // Min-heap for the upper half
}

impl MedianTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lower: MaxHeap::with_capacity(capacity - capacity / 2),
            upper: MinHeap::with_capacity(capacity / 2),
        }
    }

    /**
    Builds a tracker with the configured capacity reserved up front. A capacity
    the allocator cannot satisfy is reported rather than aborting.
    */
    pub fn from_config(config: &TrackerConfig) -> Result<Self, MedianError> {
        let capacity = config.initial_capacity;
        tracing::debug!(initial_capacity = capacity, "Creating median tracker");
        Ok(Self {
            lower: MaxHeap::try_with_capacity(capacity - capacity / 2)?,
            upper: MinHeap::try_with_capacity(capacity / 2)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }

    /// Number of values inserted so far.
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /**
    Adds `value` to the half it belongs to, then moves at most one root across
    to keep the halves within one element of each other. A value equal to the
    current lower maximum goes to the upper half.
    */
    pub fn insert(&mut self, value: i64) {
        if self.is_empty() {
            self.lower.push(value);
            return;
        }
        match self.lower.peek() {
            Some(&lower_max) if value < lower_max => self.lower.push(value),
            _ => self.upper.push(value),
        }
        self.rebalance();
    }

    fn rebalance(&mut self) {
        if self.lower.len() > self.upper.len() + 1 {
            if let Some(lower_max) = self.lower.pop() {
                tracing::debug!(value = lower_max, "Moving the lower maximum to the upper half");
                self.upper.push(lower_max);
            }
        } else if self.upper.len() > self.lower.len() + 1 {
            if let Some(upper_min) = self.upper.pop() {
                tracing::debug!(value = upper_min, "Moving the upper minimum to the lower half");
                self.lower.push(upper_min);
            }
        }
    }

    /**
    Median of the values seen so far. With an even count it is the mean of the
    two middle values, so it may end in `.5`.
    */
    pub fn median(&self) -> Result<f64, MedianError> {
        if self.is_empty() {
            return Err(MedianError::EmptyTracker);
        }
        let root = match self.lower.len().cmp(&self.upper.len()) {
            Ordering::Equal => {
                return match (self.lower.peek(), self.upper.peek()) {
                    (Some(&lower_max), Some(&upper_min)) => {
                        Ok((lower_max as f64 + upper_min as f64) / 2.0)
                    }
                    // Both halves are non-empty past the emptiness check.
                    _ => Err(MedianError::EmptyTracker),
                };
            }
            Ordering::Greater => self.lower.peek(),
            Ordering::Less => self.upper.peek(),
        };
        // The larger half always has a root here.
        root.map(|&value| value as f64)
            .ok_or(MedianError::EmptyTracker)
    }
}

impl Extend<i64> for MedianTracker {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<i64> for MedianTracker {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tracker = Self::new();
        tracker.extend(iter);
        tracker
    }
}

impl Display for MedianTracker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "lower: {} | upper: {}", self.lower, self.upper)
    }
}
