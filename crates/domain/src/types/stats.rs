//! Statistics types for classification runs
//!
//! This module centralizes the aggregate views produced by the workspace:
//! - Operational summary of the metrics collector
//! - Batch statistics over a list of packages

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::package::Package;

/* -------------------------------------------------------------------------- */
/* Operational Summary */
/* -------------------------------------------------------------------------- */

/// Point-in-time snapshot of the metrics collector
///
/// A copy, never a live view. Serializes with the same keys the telemetry
/// sink expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalSummary {
    /// Count per category label, ordered by label
    pub category_counts: BTreeMap<String, u64>,

    /// Sum of all category counts
    pub total_processed: u64,

    /// Mean processing time in seconds, `None` when no samples exist
    pub avg_processing_time: Option<f64>,

    /// Number of recorded timing samples
    pub processing_samples: usize,

    /// Number of failed classifications
    pub error_count: u64,

    /// Seconds since the collector was created
    pub uptime_seconds: f64,
}

impl OperationalSummary {
    /// Count for one category, 0 when unseen
    pub fn count_for(&self, category: &str) -> u64 {
        self.category_counts.get(category).copied().unwrap_or(0)
    }
}

/* -------------------------------------------------------------------------- */
/* Batch Statistics */
/* -------------------------------------------------------------------------- */

/// Aggregates over a batch of packages (default thresholds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchStatistics {
    /// Number of packages in the batch
    pub total_packages: usize,
    /// Sum of volumes (cm³)
    pub total_volume: f64,
    /// Sum of masses (kg)
    pub total_mass: f64,
    /// Mean volume (cm³)
    pub average_volume: f64,
    /// Mean mass (kg)
    pub average_mass: f64,
    /// Packages at or above the default heavy threshold
    pub heavy_packages: usize,
    /// Packages at or above a default bulky threshold
    pub bulky_packages: usize,
    /// Share of heavy packages (0.0 - 100.0)
    pub heavy_percentage: f64,
    /// Share of bulky packages (0.0 - 100.0)
    pub bulky_percentage: f64,
}

impl BatchStatistics {
    /// Compute statistics, `None` for an empty batch
    pub fn from_packages(packages: &[Package]) -> Option<Self> {
        if packages.is_empty() {
            return None;
        }

        let total_packages = packages.len();
        let count = total_packages as f64;
        let total_volume: f64 = packages.iter().map(Package::volume).sum();
        let total_mass: f64 = packages.iter().map(Package::mass).sum();
        let heavy_packages = packages.iter().filter(|p| p.is_heavy()).count();
        let bulky_packages = packages.iter().filter(|p| p.is_bulky()).count();

        Some(Self {
            total_packages,
            total_volume,
            total_mass,
            average_volume: total_volume / count,
            average_mass: total_mass / count,
            heavy_packages,
            bulky_packages,
            heavy_percentage: heavy_packages as f64 / count * 100.0,
            bulky_percentage: bulky_packages as f64 / count * 100.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch() {
        assert!(BatchStatistics::from_packages(&[]).is_none());
    }

    #[test]
    fn test_batch_statistics() {
        let packages = vec![
            Package::new(10.0, 10.0, 10.0, 5.0).unwrap(),
            Package::new(150.0, 10.0, 10.0, 10.0).unwrap(),
            Package::new(10.0, 10.0, 10.0, 25.0).unwrap(),
            Package::new(150.0, 100.0, 100.0, 30.0).unwrap(),
        ];

        let stats = BatchStatistics::from_packages(&packages).unwrap();
        assert_eq!(stats.total_packages, 4);
        assert_eq!(stats.total_volume, 1000.0 + 15_000.0 + 1000.0 + 1_500_000.0);
        assert_eq!(stats.total_mass, 70.0);
        assert_eq!(stats.average_mass, 17.5);
        assert_eq!(stats.heavy_packages, 2);
        assert_eq!(stats.bulky_packages, 2);
        assert_eq!(stats.heavy_percentage, 50.0);
        assert_eq!(stats.bulky_percentage, 50.0);
    }

    #[test]
    fn test_summary_count_for() {
        let summary = OperationalSummary {
            category_counts: BTreeMap::from([("STANDARD".to_string(), 3)]),
            total_processed: 3,
            avg_processing_time: Some(0.001),
            processing_samples: 3,
            error_count: 0,
            uptime_seconds: 1.0,
        };
        assert_eq!(summary.count_for("STANDARD"), 3);
        assert_eq!(summary.count_for("REJECTED"), 0);

        let json = serde_json::to_value(&summary).unwrap();
        for key in [
            "category_counts",
            "total_processed",
            "avg_processing_time",
            "processing_samples",
            "error_count",
            "uptime_seconds",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}
