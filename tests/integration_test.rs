use chrono::NaiveDate;
use coordle_engine::catalog::{InMemoryCatalogProvider, JsonCatalogProvider};
use coordle_engine::core::{CountryMatch, NorthSouth, PopulationHint};
use coordle_engine::{
    compute_feedback, rank, resolve, select_secret, Color, EngineConfig, GuessOutcome,
    PuzzleEngine,
};
use std::sync::Arc;

const CITIES: &str = r#"[
    {"name": "London", "country_code": "GB", "lat": 51.5, "lon": -0.13, "population": 8982000},
    {"name": "Paris", "country_code": "FR", "lat": 48.85, "lon": 2.35, "population": 2148000},
    {"name": "Berlin", "country_code": "DE", "lat": 52.52, "lon": 13.40, "population": 3645000},
    {"name": "Brussels", "country_code": "BE", "lat": 50.85, "lon": 4.35, "population": 1209000},
    {"name": "Buenos Aires", "slug": "baires", "country_code": "AR", "lat": -34.60, "lon": -58.38},
    {"name": "Sydney", "country_code": "AU", "lat": -33.87, "lon": 151.21, "population": 5312000},
    {"name": "Tokyo", "country_code": "JP", "lat": 35.68, "lon": 139.69, "population": 13960000}
]"#;

const NEIGHBORS: &str = r#"[["FR", "BE"], ["FR", "DE"], ["BE", "DE"]]"#;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn write_seed(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("coordle-it-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn test_json_engine_end_to_end() {
    let cities = write_seed("cities.json", CITIES);
    let neighbors = write_seed("neighbors.json", NEIGHBORS);

    let config = EngineConfig {
        cities_path: cities.clone(),
        neighbors_path: Some(neighbors.clone()),
        ..EngineConfig::default()
    };
    let engine = PuzzleEngine::new(config);

    let day = date("2024-06-15");
    let secret = engine.reveal(day).await.unwrap().secret;

    // Guessing the secret by slug always solves
    let catalog = engine.catalog().await.unwrap();
    let slug = catalog
        .cities()
        .iter()
        .find(|c| c.name == secret.name)
        .map(|c| c.slug.clone())
        .unwrap();

    let GuessOutcome::Scored(result) = engine.guess(&slug, 1, day).await.unwrap() else {
        panic!("secret slug did not resolve");
    };
    assert!(result.solved);
    assert!(result.feedback.is_perfect());

    std::fs::remove_file(cities).ok();
    std::fs::remove_file(neighbors).ok();
}

#[tokio::test]
async fn test_guess_wire_format() {
    let records = JsonCatalogProvider::parse_cities(CITIES).unwrap();
    let provider = InMemoryCatalogProvider::new(records)
        .with_neighbors(&[("FR", "BE"), ("FR", "DE"), ("BE", "DE")]);
    let engine = PuzzleEngine::with_provider(EngineConfig::default(), Arc::new(provider));

    let GuessOutcome::Scored(result) = engine.guess("tokio", 6, date("2024-01-01")).await.unwrap() else {
        panic!("typo did not resolve");
    };

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["guess"]["name"], "Tokyo");
    assert!(value["feedback"]["hemisphere"]["color"].is_string());
    assert!(value["feedback"]["country"]["match"].is_string());
    assert!(value["feedback"]["population"]["value"].is_u64());
    assert_eq!(value["remaining"], 0);
    assert_eq!(value["gameEnded"], true);
}

#[test]
fn test_free_functions_compose() {
    let records = JsonCatalogProvider::parse_cities(CITIES).unwrap();
    let neighbors = JsonCatalogProvider::parse_neighbors(NEIGHBORS).unwrap();
    let catalog = coordle_engine::CityCatalog::from_records(records, neighbors).unwrap();

    let guess = resolve("brusels", catalog.cities()).city().unwrap();
    let secret = resolve("paris", catalog.cities()).city().unwrap();
    assert_eq!(guess.name, "Brussels");

    let feedback = compute_feedback(guess, secret, catalog.adjacency());
    assert_eq!(feedback.country.match_kind, CountryMatch::Neighbor);
    assert_eq!(feedback.country.color, Color::Yellow);
    assert_eq!(feedback.latitude.hint, Some(NorthSouth::S));
    assert_eq!(feedback.population.hint, PopulationHint::Higher);

    let suggestions = rank("b", catalog.cities(), 3);
    let names: Vec<&str> = suggestions.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Berlin", "Brussels", "Buenos Aires"]);

    let secret = select_secret(date("2024-01-01"), catalog.cities(), "coordle-default-salt").unwrap();
    assert!(catalog.cities().iter().any(|c| c.id == secret.id));
}

#[test]
fn test_explicit_slug_resolves() {
    let records = JsonCatalogProvider::parse_cities(CITIES).unwrap();
    let catalog =
        coordle_engine::CityCatalog::from_records(records, Default::default()).unwrap();

    assert_eq!(resolve("BAIRES", catalog.cities()).city().unwrap().name, "Buenos Aires");
    for city in catalog.cities() {
        assert_eq!(resolve(&city.name, catalog.cities()).city(), Some(city));
        assert_eq!(resolve(&city.slug, catalog.cities()).city(), Some(city));
    }
}

#[test]
fn test_catalog_loads_once_under_blocking_runtime() {
    let records = JsonCatalogProvider::parse_cities(CITIES).unwrap();
    let provider = Arc::new(InMemoryCatalogProvider::new(records));
    let engine = PuzzleEngine::with_provider(EngineConfig::default(), provider.clone());

    tokio_test::block_on(async {
        for _ in 0..3 {
            engine.suggestions("par", None).await.unwrap();
        }
    });

    assert_eq!(provider.load_count(), 1);
}
