use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use dotenv::dotenv;
use tracing::{debug, info};

use crate::domain::types::Bounds;
use crate::error::{RouteError, RouteResult};
use crate::solver::ConstructionStrategy;

pub mod constant {
    pub(crate) const LOCATION_COUNT: usize = 10;
    pub(crate) const WINDOW_WIDTH: i64 = 1500;
    pub(crate) const WINDOW_HEIGHT: i64 = 1050;
    pub(crate) const MAP_MIN_X: i64 = WINDOW_WIDTH / 8;
    pub(crate) const MAP_MIN_Y: i64 = WINDOW_HEIGHT / 10;
    pub(crate) const MAP_MAX_X: i64 = MAP_MIN_X + 3 * WINDOW_WIDTH / 4;
    pub(crate) const MAP_MAX_Y: i64 = MAP_MIN_Y + 4 * WINDOW_HEIGHT / 5;
    /// Marker diameter; also the inset keeping markers inside the map.
    pub(crate) const LOCATION_SIZE: i64 = 25;
    pub(crate) const CANVAS_COLUMNS: usize = 96;
    pub(crate) const CANVAS_ROWS: usize = 36;
}

/// Runtime settings, defaults from [`constant`] overridden by `ROUTE_*` variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub location_count: usize,
    /// `None` draws every layout from OS entropy.
    pub seed: Option<u64>,
    pub bounds: Bounds,
    pub min_separation: i64,
    pub strategy: ConstructionStrategy,
    /// Number of independent batch trials to run after the main tour; 0 skips them.
    pub trials: usize,
    pub csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
    pub canvas_columns: usize,
    pub canvas_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            location_count: constant::LOCATION_COUNT,
            seed: None,
            bounds: Bounds::new(
                constant::MAP_MIN_X,
                constant::MAP_MIN_Y,
                constant::MAP_MAX_X,
                constant::MAP_MAX_Y,
            ),
            min_separation: constant::LOCATION_SIZE,
            strategy: ConstructionStrategy::default(),
            trials: 0,
            csv_path: None,
            json_path: None,
            canvas_columns: constant::CANVAS_COLUMNS,
            canvas_rows: constant::CANVAS_ROWS,
        }
    }
}

impl Settings {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> RouteResult<Self> {
        if dotenv().is_ok() {
            info!("Loaded settings overrides from .env");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads overrides through `lookup`, keeping defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> RouteResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let settings = Settings {
            location_count: parse_or(&lookup, "ROUTE_LOCATION_COUNT", defaults.location_count)?,
            seed: parse_optional(&lookup, "ROUTE_SEED")?,
            bounds: Bounds::new(
                parse_or(&lookup, "ROUTE_MIN_X", defaults.bounds.min_x)?,
                parse_or(&lookup, "ROUTE_MIN_Y", defaults.bounds.min_y)?,
                parse_or(&lookup, "ROUTE_MAX_X", defaults.bounds.max_x)?,
                parse_or(&lookup, "ROUTE_MAX_Y", defaults.bounds.max_y)?,
            ),
            min_separation: parse_or(&lookup, "ROUTE_MIN_SEPARATION", defaults.min_separation)?,
            strategy: parse_or(&lookup, "ROUTE_STRATEGY", defaults.strategy)?,
            trials: parse_or(&lookup, "ROUTE_TRIALS", defaults.trials)?,
            csv_path: lookup("ROUTE_CSV_PATH").map(PathBuf::from),
            json_path: lookup("ROUTE_JSON_PATH").map(PathBuf::from),
            canvas_columns: parse_or(&lookup, "ROUTE_CANVAS_WIDTH", defaults.canvas_columns)?,
            canvas_rows: parse_or(&lookup, "ROUTE_CANVAS_HEIGHT", defaults.canvas_rows)?,
        };

        debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}

fn parse_optional<T, F>(lookup: &F, key: &str) -> RouteResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| RouteError::Config {
                key: key.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> RouteResult<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_optional(lookup, key)?.unwrap_or(default))
}
