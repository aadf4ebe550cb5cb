//! JSON batch classification

use std::io::Write;
use std::path::Path;

use parcelsort_domain::{BatchStatistics, Package, Result};
use parcelsort_infra::io::{self, SortOutcome};

use crate::context::AppContext;

/// Result of a batch run
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// One entry per input record, in input order
    pub outcomes: Vec<SortOutcome>,
    /// Statistics over the records that passed validation
    pub statistics: Option<BatchStatistics>,
}

impl BatchReport {
    /// Number of records that failed validation
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_ok()).count()
    }
}

/// Classify every record in `input` and write the outcomes to `output`
///
/// Invalid records are reported in the output and counted as errors; they
/// never abort the batch.
///
/// # Errors
/// `Io` or `Serialization` if the input cannot be read as a JSON array or
/// the output cannot be written.
pub fn run_batch<W: Write>(ctx: &AppContext, input: &Path, output: W) -> Result<BatchReport> {
    let records = io::read_records_from_path(input)?;
    let outcomes = io::classify_batch(&ctx.service, &records);
    io::write_results(output, &outcomes)?;

    let packages: Vec<Package> = outcomes
        .iter()
        .filter(|o| o.is_ok())
        .filter_map(|o| serde_json::from_value(o.input.clone()).ok())
        .collect();
    let statistics = BatchStatistics::from_packages(&packages);

    if let Some(stats) = &statistics {
        tracing::info!(
            packages = stats.total_packages,
            heavy = stats.heavy_packages,
            bulky = stats.bulky_packages,
            average_mass = stats.average_mass,
            "Batch statistics"
        );
    }

    Ok(BatchReport { outcomes, statistics })
}
