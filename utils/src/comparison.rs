//! Synthetic "batched vs individual RPC calls" timing comparison.
//!
//! Two strategies are available behind [`ComparisonProvider`]:
//! - [`RangeRandom`] draws both timings from fixed ranges without waiting.
//! - [`SimulatedDelay`] sleeps for randomized durations and measures the
//!   elapsed time of each path.

use std::{
    fmt::{Display, Formatter},
    ops::Range,
    str::FromStr,
    sync::Mutex,
    time::Duration,
};

use async_trait::async_trait;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::tokens::TOKEN_CATALOG;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Milliseconds
    pub batched_time: f64,
    /// Milliseconds
    pub individual_time: f64,
    pub batched_calls: u32,
    pub individual_calls: u32,
    pub time_saved: f64,
    pub percent_improvement: f64,
}

impl ComparisonResult {
    pub fn from_timings(
        batched_time: f64,
        individual_time: f64,
        batched_calls: u32,
        individual_calls: u32,
    ) -> Self {
        let time_saved = individual_time - batched_time;
        let percent_improvement = if individual_time > 0.0 {
            time_saved / individual_time * 100.0
        } else {
            0.0
        };

        Self {
            batched_time,
            individual_time,
            batched_calls,
            individual_calls,
            time_saved,
            percent_improvement,
        }
    }
}

#[async_trait]
pub trait ComparisonProvider: Send + Sync {
    fn strategy(&self) -> ComparisonStrategy;

    async fn run_comparison(&self) -> crate::Result<ComparisonResult>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComparisonStrategy {
    RangeRandom,
    SimulatedDelay,
}

impl ComparisonStrategy {
    pub fn provider(self) -> Box<dyn ComparisonProvider> {
        match self {
            Self::RangeRandom => Box::new(RangeRandom::new()),
            Self::SimulatedDelay => Box::new(SimulatedDelay::new()),
        }
    }
}

impl Display for ComparisonStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RangeRandom => write!(f, "range"),
            Self::SimulatedDelay => write!(f, "delay"),
        }
    }
}

impl FromStr for ComparisonStrategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "range" => Ok(Self::RangeRandom),
            "delay" => Ok(Self::SimulatedDelay),
            _ => Err(crate::Error::UnknownComparisonStrategy(s.to_string())),
        }
    }
}

pub const RANGE_BATCHED_MS: Range<f64> = 50.0..250.0;
pub const RANGE_INDIVIDUAL_MS: Range<f64> = 400.0..1200.0;

/// Draws the batched timing from [50, 250) ms and the individual timing from
/// [400, 1200) ms, independently.
pub struct RangeRandom {
    rng: Mutex<StdRng>,
}

impl Default for RangeRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeRandom {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn draw(&self) -> (f64, f64) {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let batched = rng.gen_range(RANGE_BATCHED_MS);
        let individual = rng.gen_range(RANGE_INDIVIDUAL_MS);
        (batched, individual)
    }
}

#[async_trait]
impl ComparisonProvider for RangeRandom {
    fn strategy(&self) -> ComparisonStrategy {
        ComparisonStrategy::RangeRandom
    }

    async fn run_comparison(&self) -> crate::Result<ComparisonResult> {
        let (batched_time, individual_time) = self.draw();

        Ok(ComparisonResult::from_timings(
            batched_time,
            individual_time,
            1,
            TOKEN_CATALOG.len() as u32,
        ))
    }
}

pub const DELAY_BATCHED_MS: Range<u64> = 300..500;
pub const DELAY_INDIVIDUAL_MS: Range<u64> = 150..250;
pub const DELAY_INDIVIDUAL_CALLS: u32 = 4;

/// Sleeps once for the batched path and once per call for the individual
/// path, reporting the measured elapsed time of each.
pub struct SimulatedDelay {
    rng: Mutex<StdRng>,
}

impl Default for SimulatedDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedDelay {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn random_delay(&self, range: Range<u64>) -> Duration {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Duration::from_millis(rng.gen_range(range))
    }
}

#[async_trait]
impl ComparisonProvider for SimulatedDelay {
    fn strategy(&self) -> ComparisonStrategy {
        ComparisonStrategy::SimulatedDelay
    }

    async fn run_comparison(&self) -> crate::Result<ComparisonResult> {
        let batched_start = Instant::now();
        tokio::time::sleep(self.random_delay(DELAY_BATCHED_MS)).await;
        let batched_time = elapsed_ms(batched_start);

        let individual_start = Instant::now();
        for _ in 0..DELAY_INDIVIDUAL_CALLS {
            tokio::time::sleep(self.random_delay(DELAY_INDIVIDUAL_MS)).await;
        }
        let individual_time = elapsed_ms(individual_start);

        Ok(ComparisonResult::from_timings(
            batched_time,
            individual_time,
            1,
            DELAY_INDIVIDUAL_CALLS,
        ))
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
