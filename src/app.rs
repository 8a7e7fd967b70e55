use std::error::Error;

use rand::RngCore;
use tracing::{info, span, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Settings;
use crate::export::{save_tour_csv, save_tour_json};
use crate::session::RouteSession;
use crate::solver::batch::{run_trials, summarize};
use crate::visualization::{plot, print_batch_stats, print_canvas, print_summary};

/// Initialize tracing
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            fmt::layer()
                .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE)
                .pretty(),
        )
        .init();
}

/// Generate a layout, draw its tour, print it and run the optional exports and trials.
pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let settings = Settings::from_env()?;

    info!(
        "Starting route visualizer with {} locations using {}",
        settings.location_count, settings.strategy
    );

    let mut session = {
        let span = span!(Level::INFO, "setup");
        let _guard = span.enter();
        RouteSession::new(&settings)?
    };

    session.select_strategy(settings.strategy);
    session.draw()?;

    print_summary(&session);
    let canvas = plot(
        session.locations(),
        session.tour(),
        settings.canvas_columns,
        settings.canvas_rows,
        *session.bounds(),
    )?;
    print_canvas(&canvas);

    if let Some(tour) = session.tour() {
        if let Some(path) = &settings.csv_path {
            save_tour_csv(path, session.locations(), tour)?;
        }
        if let Some(path) = &settings.json_path {
            save_tour_json(path, settings.strategy, session.locations(), tour)?;
        }
    } else if settings.csv_path.is_some() || settings.json_path.is_some() {
        warn!("No tour was drawn, skipping export");
    }

    if settings.trials > 0 {
        let base_seed = settings
            .seed
            .unwrap_or_else(|| rand::thread_rng().next_u64());
        let summaries = run_trials(&settings, settings.strategy, base_seed, settings.trials)?;
        if let Some(stats) = summarize(&summaries) {
            print_batch_stats(&stats);
        }
    }

    Ok(())
}
