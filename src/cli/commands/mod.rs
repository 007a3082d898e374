//! Command implementations for the legalner binaries
//!
//! Each command has its own module/file.

pub mod cast;
pub mod config;
pub mod map;
pub mod merge;
pub mod reduce;
pub mod run;
pub mod stats;

pub use cast::CastArgs;
pub use map::MapArgs;
pub use merge::MergeArgs;
pub use reduce::ReduceArgs;
pub use run::RunArgs;
pub use stats::StatsArgs;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded RNG for the reducer.
///
/// Without a seed one is drawn and logged so the run can be repeated.
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(rand::random);
    log::info!("reducer seed: {}", seed);
    StdRng::seed_from_u64(seed)
}
