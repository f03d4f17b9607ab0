//! Accumulate histogram samples for one block and turn them into a table.
//!
//! Labels become columns (sorted), buckets become rows (sorted), and any
//! label that never reported a bucket contributes `0` to that row.

use log::debug;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Samples gathered since the last flush
///
/// **Public** - owned by the histogram tabulator
#[derive(Debug, Clone, Default)]
pub struct BlockState {
    /// label -> (bucket -> most recent value)
    series: BTreeMap<String, HashMap<u128, u128>>,

    /// Every bucket seen under any label in this block
    buckets: BTreeSet<u128>,
}

impl BlockState {
    /// Create an empty block
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the series for `label`
    ///
    /// A label seen twice in one block loses the samples recorded under its
    /// first occurrence. Buckets already observed stay in the block.
    pub fn start_series(&mut self, label: &str) {
        if self.series.insert(label.to_string(), HashMap::new()).is_some() {
            debug!("Label '{}' repeated within block, series reset", label);
        }
    }

    /// Record `value` for `bucket` under `label`, replacing any earlier value
    ///
    /// Creates the series if `label` has not been started in this block.
    pub fn record(&mut self, label: &str, bucket: u128, value: u128) {
        self.buckets.insert(bucket);

        match self.series.get_mut(label) {
            Some(samples) => {
                samples.insert(bucket, value);
            }
            None => {
                self.series
                    .insert(label.to_string(), HashMap::from([(bucket, value)]));
            }
        }
    }

    /// True when no label has been recorded since the last flush
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Number of distinct labels in this block
    pub fn label_count(&self) -> usize {
        self.series.len()
    }

    /// Number of distinct buckets in this block
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Value recorded for `label` at `bucket`, if any
    pub fn value(&self, label: &str, bucket: u128) -> Option<u128> {
        self.series.get(label)?.get(&bucket).copied()
    }

    /// Consume the block and lay it out as a table stamped with `timestamp`
    ///
    /// **Public** - called once per flush
    ///
    /// # Returns
    /// A table whose columns are the labels in ascending order and whose
    /// rows are the buckets in ascending order, one row per bucket.
    pub fn into_table(self, timestamp: String) -> BlockTable {
        let labels: Vec<String> = self.series.keys().cloned().collect();

        let rows = self
            .buckets
            .iter()
            .map(|&bucket| BucketRow {
                bucket,
                values: self
                    .series
                    .values()
                    .map(|samples| samples.get(&bucket).copied().unwrap_or(0))
                    .collect(),
            })
            .collect();

        BlockTable {
            timestamp,
            labels,
            rows,
        }
    }
}

/// A flushed block, ready for CSV rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTable {
    /// Shared by every row of the block
    pub timestamp: String,

    /// Column headers after `time,bucket`, ascending
    pub labels: Vec<String>,

    /// One row per bucket, ascending by bucket
    pub rows: Vec<BucketRow>,
}

/// One bucket's values across every label of the block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketRow {
    pub bucket: u128,

    /// Same order as [`BlockTable::labels`]
    pub values: Vec<u128>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_start_creates_series() {
        let mut block = BlockState::new();
        block.record("", 3, 7);

        assert!(!block.is_empty());
        assert_eq!(block.value("", 3), Some(7));
    }

    #[test]
    fn test_restart_keeps_buckets() {
        let mut block = BlockState::new();
        block.start_series("cpu");
        block.record("cpu", 8, 1);
        block.start_series("cpu");

        let table = block.into_table("t".to_string());
        assert_eq!(table.labels, vec!["cpu".to_string()]);
        assert_eq!(
            table.rows,
            vec![BucketRow {
                bucket: 8,
                values: vec![0]
            }]
        );
    }
}
