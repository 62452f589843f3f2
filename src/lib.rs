//! # Coordle Engine
//!
//! Daily city guessing puzzle core:
//! - Deterministic daily secret (HMAC-SHA256 over the date)
//! - Guess resolution cascade (name, slug, substring, fuzzy)
//! - Five-dimension proximity feedback (hemisphere, latitude, longitude, population, country)
//! - Autocomplete ranking
//! - Lazily loaded, single-flight city catalog
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use coordle_engine::{EngineConfig, GuessOutcome, PuzzleEngine};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = PuzzleEngine::new(EngineConfig::from_env());
//!     let today = chrono::Utc::now().date_naive();
//!
//!     if let GuessOutcome::Scored(result) = engine.guess("Lonodn", 1, today).await? {
//!         println!("{} → {:?}", result.guess.name, result.feedback.latitude);
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod catalog;
pub mod ranking;
pub mod resolver;
pub mod feedback;
pub mod puzzle;
pub mod config;
pub mod engine;
pub mod error;

// Re-export primary types
pub use crate::core::{City, CityRecord, Color, FeedbackResult};
pub use crate::catalog::{AdjacencySet, CatalogProvider, CityCatalog, SharedCatalog};
pub use config::EngineConfig;
pub use engine::{GameStatus, GuessOutcome, GuessResult, PuzzleEngine, Suggestion};
pub use error::{CoordleError, Result};
pub use feedback::compute_feedback;
pub use puzzle::{select_secret, DailyPuzzleSelector};
pub use ranking::rank;
pub use resolver::{resolve, Resolution};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
