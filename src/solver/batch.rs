use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, span, Level};

use crate::config::Settings;
use crate::error::RouteResult;
use crate::fixtures::data_generator::generate_seeded;
use crate::solver::ConstructionStrategy;

/// Outcome of one independent generate-and-build cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrialSummary {
    pub seed: u64,
    pub total_distance: u64,
    pub complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchStats {
    pub trials: usize,
    pub min_distance: u64,
    pub max_distance: u64,
    pub mean_distance: f64,
    pub incomplete: usize,
}

/// Runs `trials` generate-and-build cycles in parallel, seeds `base_seed..base_seed + trials`.
///
/// Every trial owns its collection, so no state is shared between threads.
pub fn run_trials(
    settings: &Settings,
    strategy: ConstructionStrategy,
    base_seed: u64,
    trials: usize,
) -> RouteResult<Vec<TrialSummary>> {
    let span = span!(Level::INFO, "batch", trials, strategy = strategy.label());
    let _guard = span.enter();

    let mut summaries = (0..trials as u64)
        .into_par_iter()
        .map(|offset| -> RouteResult<TrialSummary> {
            let seed = base_seed.wrapping_add(offset);
            let locations = generate_seeded(
                settings.location_count,
                &settings.bounds,
                settings.min_separation,
                seed,
            )?;
            let tour = strategy.build(&locations)?;

            Ok(TrialSummary {
                seed,
                total_distance: tour.total_distance(),
                complete: tour.is_complete(),
            })
        })
        .collect::<RouteResult<Vec<_>>>()?;

    summaries.par_sort_by_key(|summary| summary.seed);
    info!("Finished {} trials", summaries.len());

    Ok(summaries)
}

/// Aggregates trial distances; `None` for an empty batch.
pub fn summarize(summaries: &[TrialSummary]) -> Option<BatchStats> {
    let min_distance = summaries.iter().map(|s| s.total_distance).min()?;
    let max_distance = summaries.iter().map(|s| s.total_distance).max()?;
    let total: f64 = summaries.iter().map(|s| s.total_distance as f64).sum();

    Some(BatchStats {
        trials: summaries.len(),
        min_distance,
        max_distance,
        mean_distance: total / summaries.len() as f64,
        incomplete: summaries.iter().filter(|s| !s.complete).count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(location_count: usize) -> Settings {
        Settings {
            location_count,
            ..Settings::default()
        }
    }

    #[test]
    fn trials_are_reproducible_and_ordered_by_seed() {
        let first = run_trials(&settings(12), ConstructionStrategy::NearestNeighbor, 100, 8).unwrap();
        let second = run_trials(&settings(12), ConstructionStrategy::NearestNeighbor, 100, 8).unwrap();

        assert_eq!(first, second);
        let seeds: Vec<u64> = first.iter().map(|s| s.seed).collect();
        assert_eq!(seeds, (100..108).collect::<Vec<_>>());
    }

    #[test]
    fn trial_matches_a_sequential_run() {
        let settings = settings(9);
        let trials = run_trials(&settings, ConstructionStrategy::NearestNeighbor, 7, 1).unwrap();

        let locations = generate_seeded(9, &settings.bounds, settings.min_separation, 7).unwrap();
        let tour = ConstructionStrategy::NearestNeighbor.build(&locations).unwrap();

        assert_eq!(trials[0].total_distance, tour.total_distance());
    }

    #[test]
    fn invalid_settings_fail_the_batch() {
        let result = run_trials(&settings(0), ConstructionStrategy::NearestNeighbor, 1, 3);

        assert!(result.is_err());
    }

    #[test]
    fn summary_reports_extremes_and_mean() {
        let summaries = [
            TrialSummary { seed: 1, total_distance: 10, complete: true },
            TrialSummary { seed: 2, total_distance: 30, complete: false },
            TrialSummary { seed: 3, total_distance: 20, complete: true },
        ];
        let stats = summarize(&summaries).unwrap();

        assert_eq!(stats.min_distance, 10);
        assert_eq!(stats.max_distance, 30);
        assert_eq!(stats.mean_distance, 20.0);
        assert_eq!(stats.incomplete, 1);
        assert!(summarize(&[]).is_none());
    }
}
