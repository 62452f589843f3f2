use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::catalog::{CatalogProvider, CityCatalog, JsonCatalogProvider, SharedCatalog};
use crate::config::{EngineConfig, MAX_SUGGESTION_LIMIT};
use crate::core::{City, FeedbackResult};
use crate::error::Result;
use crate::feedback::compute_feedback;
use crate::puzzle::DailyPuzzleSelector;
use crate::ranking::{Ranker, SuggestionRanker};
use crate::resolver::{resolve, Resolution};

/// Main puzzle orchestrator
pub struct PuzzleEngine {
    config: EngineConfig,
    catalog: SharedCatalog,
    selector: DailyPuzzleSelector,
    ranker: Arc<dyn Ranker>,
}

/// Public view of a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySummary {
    pub name: String,
    pub country_code: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
}

impl From<&City> for CitySummary {
    fn from(city: &City) -> Self {
        Self {
            name: city.name.clone(),
            country_code: city.country_code.clone(),
            lat: city.lat,
            lon: city.lon,
            population: city.population,
        }
    }
}

/// Day metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    pub date: NaiveDate,
    pub max_guesses: u32,
    pub share_tag: i64,
    pub tz: String,
}

/// A scored guess
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResult {
    pub guess: CitySummary,
    pub feedback: FeedbackResult,
    pub solved: bool,
    pub remaining: u32,
    pub game_ended: bool,
    /// Revealed only when the game ended without a solve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<CitySummary>,
}

/// Outcome of submitting a guess
#[derive(Debug, Clone, PartialEq)]
pub enum GuessOutcome {
    Scored(GuessResult),
    NotFound { query: String },
}

/// Autocomplete entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub country_code: String,
    pub slug: String,
}

/// Secret for a given day (debug only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretReveal {
    pub date: NaiveDate,
    pub secret: CitySummary,
}

impl PuzzleEngine {
    /// Create engine backed by the JSON seed files named in `config`
    pub fn new(config: EngineConfig) -> Self {
        let provider = Arc::new(JsonCatalogProvider::new(
            config.cities_path.clone(),
            config.neighbors_path.clone(),
        ));
        Self::with_provider(config, provider)
    }

    /// Create engine with a custom catalog source
    pub fn with_provider(config: EngineConfig, provider: Arc<dyn CatalogProvider>) -> Self {
        let selector = DailyPuzzleSelector::new(config.daily_salt.clone(), config.launch_date);
        Self {
            catalog: SharedCatalog::new(provider),
            selector,
            ranker: Arc::new(SuggestionRanker::new()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Loaded catalog (loads on first call)
    pub async fn catalog(&self) -> Result<Arc<CityCatalog>> {
        self.catalog.get().await
    }

    /// Day metadata; never touches the catalog
    pub fn status(&self, date: NaiveDate) -> GameStatus {
        GameStatus {
            date,
            max_guesses: self.config.max_guesses,
            share_tag: self.selector.share_tag(date),
            tz: "UTC".to_string(),
        }
    }

    /// Resolve and score a guess. `guess_count` is 1 for the first guess.
    pub async fn guess(&self, query: &str, guess_count: u32, date: NaiveDate) -> Result<GuessOutcome> {
        let catalog = self.catalog.get().await?;
        let secret = self.selector.select(date, catalog.cities())?;

        let guess = match resolve(query, catalog.cities()) {
            Resolution::Found { city, .. } => city,
            Resolution::NotFound => {
                tracing::debug!("Guess '{}' did not resolve", query);
                return Ok(GuessOutcome::NotFound {
                    query: query.to_string(),
                });
            }
        };

        let feedback = compute_feedback(guess, secret, catalog.adjacency());

        let max_guesses = self.config.max_guesses;
        let solved = guess.id == secret.id;
        let game_ended = solved || guess_count >= max_guesses;

        tracing::info!(
            "🎯 Guess #{} '{}' → {} (solved: {})",
            guess_count,
            query,
            guess.display_name(),
            solved
        );

        Ok(GuessOutcome::Scored(GuessResult {
            guess: CitySummary::from(guess),
            feedback,
            solved,
            remaining: max_guesses.saturating_sub(guess_count),
            game_ended,
            answer: (game_ended && !solved).then(|| CitySummary::from(secret)),
        }))
    }

    /// Autocomplete; `None` uses the configured limit, explicit limits are capped
    pub async fn suggestions(&self, query: &str, limit: Option<usize>) -> Result<Vec<Suggestion>> {
        let limit = limit
            .unwrap_or(self.config.suggestion_limit)
            .min(MAX_SUGGESTION_LIMIT);
        let catalog = self.catalog.get().await?;

        Ok(self
            .ranker
            .rank(query, catalog.cities(), limit)
            .into_iter()
            .map(|r| Suggestion {
                name: r.city.name.clone(),
                country_code: r.city.country_code.clone(),
                slug: r.city.slug.clone(),
            })
            .collect())
    }

    /// The day's secret, for operators
    pub async fn reveal(&self, date: NaiveDate) -> Result<SecretReveal> {
        let catalog = self.catalog.get().await?;
        let secret = self.selector.select(date, catalog.cities())?;

        Ok(SecretReveal {
            date,
            secret: CitySummary::from(secret),
        })
    }
}
