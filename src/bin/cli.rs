use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use coordle_engine::{EngineConfig, GuessOutcome, PuzzleEngine};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coordle-cli")]
#[command(about = "Coordle puzzle CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Cities seed file (overrides CITIES_PATH)
    #[arg(short, long)]
    cities: Option<PathBuf>,

    /// Neighbors file (overrides NEIGHBORS_PATH)
    #[arg(short, long)]
    neighbors: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's puzzle metadata
    Today {
        /// Date (YYYY-MM-DD), defaults to today in UTC
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Submit a guess
    Guess {
        /// City name or slug
        query: String,

        /// Guess number (1-based)
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// Date (YYYY-MM-DD), defaults to today in UTC
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Autocomplete a partial city name
    Suggest {
        /// Partial name
        query: String,

        /// Maximum results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the secret city
    Reveal {
        /// Date (YYYY-MM-DD), defaults to today in UTC
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = EngineConfig::from_env();
    if let Some(cities) = cli.cities {
        config.cities_path = cities;
    }
    if cli.neighbors.is_some() {
        config.neighbors_path = cli.neighbors;
    }

    let engine = PuzzleEngine::new(config);
    let today = || chrono::Utc::now().date_naive();

    match cli.command {
        Commands::Today { date } => {
            let status = engine.status(date.unwrap_or_else(today));

            println!("📅 Puzzle #{} ({})", status.share_tag, status.date);
            println!("   Max guesses: {}", status.max_guesses);
        }

        Commands::Guess { query, count, date } => {
            println!("🔍 Guessing: {}", query);

            match engine.guess(&query, count, date.unwrap_or_else(today)).await? {
                GuessOutcome::NotFound { query } => {
                    println!("\n❌ No city matches '{}'", query);
                }
                GuessOutcome::Scored(result) => {
                    let f = &result.feedback;
                    println!("\n📍 {} ({})", result.guess.name, result.guess.country_code);
                    println!("   Hemisphere: {:?}{:?} {:?}", f.hemisphere.ns, f.hemisphere.ew, f.hemisphere.color);
                    println!("   Latitude:   {:.2}° {:?} {}", f.latitude.delta, f.latitude.color, f.latitude.arrow.as_deref().unwrap_or(""));
                    println!("   Longitude:  {:.2}° {:?} {}", f.longitude.delta, f.longitude.color, f.longitude.arrow.as_deref().unwrap_or(""));
                    println!("   Population: {:?} {:?}", f.population.hint, f.population.color);
                    println!("   Country:    {:?} {:?}", f.country.match_kind, f.country.color);

                    if result.solved {
                        println!("\n✅ Solved!");
                    } else if let Some(answer) = result.answer {
                        println!("\n💀 Out of guesses. The city was {} ({})", answer.name, answer.country_code);
                    } else {
                        println!("\n   {} guesses left", result.remaining);
                    }
                }
            }
        }

        Commands::Suggest { query, limit } => {
            let suggestions = engine.suggestions(&query, limit).await?;

            if suggestions.is_empty() {
                println!("No suggestions for '{}'", query);
            }
            for (i, s) in suggestions.iter().enumerate() {
                println!("   {}. {} ({}) [{}]", i + 1, s.name, s.country_code, s.slug);
            }
        }

        Commands::Reveal { date } => {
            let reveal = engine.reveal(date.unwrap_or_else(today)).await?;

            println!("🤫 {}: {} ({})", reveal.date, reveal.secret.name, reveal.secret.country_code);
            println!("   Lat/Lon: {}, {}", reveal.secret.lat, reveal.secret.lon);
        }
    }

    Ok(())
}
