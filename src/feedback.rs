//! Proximity feedback between a guessed city and the secret city.

use crate::catalog::AdjacencySet;
use crate::core::{
    City, Color, CountryFeedback, CountryMatch, EastWest, FeedbackResult, HemisphereFeedback,
    LatitudeFeedback, LongitudeFeedback, NorthSouth, PopulationFeedback, PopulationHint,
};

/// Degrees within which a coordinate is green
pub const GREEN_DELTA: f64 = 1.0;
/// Degrees within which a coordinate is yellow
pub const YELLOW_DELTA: f64 = 5.0;
/// Relative population difference still reported as similar
pub const SIMILAR_POPULATION_RATIO: f64 = 0.20;
/// Relative population difference still colored yellow
pub const CLOSE_POPULATION_RATIO: f64 = 0.50;

/// Compare a guess to the secret. Pure and deterministic.
pub fn compute_feedback(guess: &City, secret: &City, neighbors: &AdjacencySet) -> FeedbackResult {
    let (guess_ns, guess_ew) = hemisphere(guess);
    let (secret_ns, secret_ew) = hemisphere(secret);

    let hemisphere_color = match (guess_ns == secret_ns, guess_ew == secret_ew) {
        (true, true) => Color::Green,
        (true, false) | (false, true) => Color::Yellow,
        (false, false) => Color::Red,
    };

    let lat_delta = (guess.lat - secret.lat).abs();
    let lon_delta = (guess.lon - secret.lon).abs();

    // Hints point from the guess towards the secret
    let lat_hint = if guess.lat < secret.lat {
        Some(NorthSouth::N)
    } else if guess.lat > secret.lat {
        Some(NorthSouth::S)
    } else {
        None
    };
    let lon_hint = if guess.lon < secret.lon {
        Some(EastWest::E)
    } else if guess.lon > secret.lon {
        Some(EastWest::W)
    } else {
        None
    };

    let arrow = direction_arrow(lat_hint, lon_hint).map(str::to_string);

    FeedbackResult {
        hemisphere: HemisphereFeedback {
            ns: guess_ns,
            ew: guess_ew,
            color: hemisphere_color,
        },
        latitude: LatitudeFeedback {
            delta: round2(lat_delta),
            color: distance_color(lat_delta),
            hint: lat_hint,
            arrow: arrow.clone(),
        },
        longitude: LongitudeFeedback {
            delta: round2(lon_delta),
            color: distance_color(lon_delta),
            hint: lon_hint,
            arrow,
        },
        population: population_feedback(guess, secret),
        country: country_feedback(guess, secret, neighbors),
    }
}

fn hemisphere(city: &City) -> (NorthSouth, EastWest) {
    let ns = if city.lat >= 0.0 { NorthSouth::N } else { NorthSouth::S };
    let ew = if city.lon >= 0.0 { EastWest::E } else { EastWest::W };
    (ns, ew)
}

/// Color for an absolute coordinate difference in degrees
pub fn distance_color(delta: f64) -> Color {
    if delta <= GREEN_DELTA {
        Color::Green
    } else if delta <= YELLOW_DELTA {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// One of eight compass glyphs, or none when the guess sits on the secret
pub fn direction_arrow(lat: Option<NorthSouth>, lon: Option<EastWest>) -> Option<&'static str> {
    match (lat, lon) {
        (Some(NorthSouth::N), Some(EastWest::E)) => Some("↗️"),
        (Some(NorthSouth::N), Some(EastWest::W)) => Some("↖️"),
        (Some(NorthSouth::S), Some(EastWest::E)) => Some("↘️"),
        (Some(NorthSouth::S), Some(EastWest::W)) => Some("↙️"),
        (Some(NorthSouth::N), None) => Some("⬆️"),
        (Some(NorthSouth::S), None) => Some("⬇️"),
        (None, Some(EastWest::E)) => Some("➡️"),
        (None, Some(EastWest::W)) => Some("⬅️"),
        (None, None) => None,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Unknown (missing or zero) population on either side reads as similar/green.
fn population_feedback(guess: &City, secret: &City) -> PopulationFeedback {
    let value = guess.population.unwrap_or(0);

    let (guess_pop, secret_pop) = match (guess.known_population(), secret.known_population()) {
        (Some(g), Some(s)) => (g as f64, s as f64),
        _ => {
            return PopulationFeedback {
                value,
                hint: PopulationHint::Similar,
                color: Color::Green,
            }
        }
    };

    let ratio = (guess_pop - secret_pop).abs() / guess_pop.max(secret_pop);

    let (hint, color) = if ratio <= SIMILAR_POPULATION_RATIO {
        (PopulationHint::Similar, Color::Green)
    } else {
        // Direction of the secret relative to the guess
        let hint = if guess_pop < secret_pop {
            PopulationHint::Higher
        } else {
            PopulationHint::Lower
        };
        let color = if ratio <= CLOSE_POPULATION_RATIO { Color::Yellow } else { Color::Red };
        (hint, color)
    };

    PopulationFeedback { value, hint, color }
}

fn country_feedback(guess: &City, secret: &City, neighbors: &AdjacencySet) -> CountryFeedback {
    let (match_kind, color) = if guess.country_code.eq_ignore_ascii_case(&secret.country_code) {
        (CountryMatch::Exact, Color::Green)
    } else if neighbors.are_neighbors(&guess.country_code, &secret.country_code) {
        (CountryMatch::Neighbor, Color::Yellow)
    } else {
        (CountryMatch::Other, Color::Red)
    };

    CountryFeedback { match_kind, color }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CityRecord;

    fn city(name: &str, country: &str, lat: f64, lon: f64, population: Option<u64>) -> City {
        let mut record = CityRecord::new(name, country, lat, lon);
        record.population = population;
        City::from_record(record, 0)
    }

    fn london() -> City {
        city("London", "GB", 51.5, -0.13, Some(8_982_000))
    }

    fn paris() -> City {
        city("Paris", "FR", 48.85, 2.35, Some(2_148_000))
    }

    #[test]
    fn test_london_vs_paris() {
        let feedback = compute_feedback(&london(), &paris(), &AdjacencySet::new());

        assert_eq!(feedback.latitude.delta, 2.65);
        assert_eq!(feedback.latitude.color, Color::Yellow);
        assert_eq!(feedback.latitude.hint, Some(NorthSouth::S));

        assert_eq!(feedback.longitude.delta, 2.48);
        assert_eq!(feedback.longitude.color, Color::Yellow);
        assert_eq!(feedback.longitude.hint, Some(EastWest::E));

        assert_eq!(feedback.latitude.arrow.as_deref(), Some("↘️"));
        assert_eq!(feedback.longitude.arrow.as_deref(), Some("↘️"));

        // N/W against N/E
        assert_eq!(feedback.hemisphere.ns, NorthSouth::N);
        assert_eq!(feedback.hemisphere.ew, EastWest::W);
        assert_eq!(feedback.hemisphere.color, Color::Yellow);

        assert_eq!(feedback.country.match_kind, CountryMatch::Other);
        assert_eq!(feedback.country.color, Color::Red);
    }

    #[test]
    fn test_same_city_is_exact() {
        let paris = paris();
        let feedback = compute_feedback(&paris, &paris, &AdjacencySet::new());

        assert_eq!(feedback.hemisphere.color, Color::Green);
        assert_eq!(feedback.latitude.delta, 0.0);
        assert_eq!(feedback.latitude.hint, None);
        assert_eq!(feedback.longitude.delta, 0.0);
        assert_eq!(feedback.longitude.hint, None);
        assert_eq!(feedback.latitude.arrow, None);
        assert_eq!(feedback.population.hint, PopulationHint::Similar);
        assert_eq!(feedback.population.color, Color::Green);
        assert_eq!(feedback.country.match_kind, CountryMatch::Exact);
        assert!(feedback.is_perfect());
    }

    #[test]
    fn test_same_country_regardless_of_coordinates() {
        let guess = city("Anchorage", "US", 61.2, -149.9, None);
        let secret = city("Honolulu", "US", 21.3, -157.86, None);
        let feedback = compute_feedback(&guess, &secret, &AdjacencySet::new());

        assert_eq!(feedback.country.match_kind, CountryMatch::Exact);
        assert_eq!(feedback.country.color, Color::Green);
        assert_eq!(feedback.latitude.color, Color::Red);
    }

    #[test]
    fn test_neighbor_country() {
        let neighbors: AdjacencySet = [("DE", "FR")].into_iter().collect();
        let guess = city("Berlin", "DE", 52.52, 13.40, None);
        let feedback = compute_feedback(&guess, &paris(), &neighbors);

        assert_eq!(feedback.country.match_kind, CountryMatch::Neighbor);
        assert_eq!(feedback.country.color, Color::Yellow);
    }

    #[test]
    fn test_population_similar() {
        let guess = city("A", "XX", 0.0, 0.0, Some(1_000_000));
        let secret = city("B", "XX", 0.0, 0.0, Some(1_100_000));
        let feedback = compute_feedback(&guess, &secret, &AdjacencySet::new());

        assert_eq!(feedback.population.hint, PopulationHint::Similar);
        assert_eq!(feedback.population.color, Color::Green);
        assert_eq!(feedback.population.value, 1_000_000);
    }

    #[test]
    fn test_population_boundary_is_yellow() {
        let guess = city("A", "XX", 0.0, 0.0, Some(1_000_000));
        let secret = city("B", "XX", 0.0, 0.0, Some(2_000_000));
        let feedback = compute_feedback(&guess, &secret, &AdjacencySet::new());

        assert_eq!(feedback.population.hint, PopulationHint::Higher);
        assert_eq!(feedback.population.color, Color::Yellow);

        let feedback = compute_feedback(&secret, &guess, &AdjacencySet::new());
        assert_eq!(feedback.population.hint, PopulationHint::Lower);
        assert_eq!(feedback.population.color, Color::Yellow);
    }

    #[test]
    fn test_population_far_is_red() {
        let guess = city("A", "XX", 0.0, 0.0, Some(100_000));
        let secret = city("B", "XX", 0.0, 0.0, Some(5_000_000));
        let feedback = compute_feedback(&guess, &secret, &AdjacencySet::new());

        assert_eq!(feedback.population.hint, PopulationHint::Higher);
        assert_eq!(feedback.population.color, Color::Red);
    }

    #[test]
    fn test_population_unknown_defaults_to_similar() {
        let guess = city("A", "XX", 0.0, 0.0, None);
        let secret = city("B", "XX", 0.0, 0.0, Some(5_000_000));
        let feedback = compute_feedback(&guess, &secret, &AdjacencySet::new());
        assert_eq!(feedback.population.hint, PopulationHint::Similar);
        assert_eq!(feedback.population.color, Color::Green);
        assert_eq!(feedback.population.value, 0);

        let guess = city("A", "XX", 0.0, 0.0, Some(0));
        let feedback = compute_feedback(&guess, &secret, &AdjacencySet::new());
        assert_eq!(feedback.population.color, Color::Green);
    }

    #[test]
    fn test_hemisphere_opposite() {
        let guess = city("Sydney", "AU", -33.87, 151.21, None);
        let secret = city("Seattle", "US", 47.61, -122.33, None);
        let feedback = compute_feedback(&guess, &secret, &AdjacencySet::new());

        assert_eq!(feedback.hemisphere.ns, NorthSouth::S);
        assert_eq!(feedback.hemisphere.ew, EastWest::E);
        assert_eq!(feedback.hemisphere.color, Color::Red);
    }

    #[test]
    fn test_equator_and_meridian_count_as_north_east() {
        let guess = city("Null Island", "XX", 0.0, 0.0, None);
        let secret = city("Somewhere", "XX", 10.0, 10.0, None);
        let feedback = compute_feedback(&guess, &secret, &AdjacencySet::new());
        assert_eq!(feedback.hemisphere.color, Color::Green);
    }

    #[test]
    fn test_cardinal_arrows() {
        assert_eq!(direction_arrow(Some(NorthSouth::N), None), Some("⬆️"));
        assert_eq!(direction_arrow(Some(NorthSouth::S), None), Some("⬇️"));
        assert_eq!(direction_arrow(None, Some(EastWest::E)), Some("➡️"));
        assert_eq!(direction_arrow(None, Some(EastWest::W)), Some("⬅️"));
        assert_eq!(direction_arrow(Some(NorthSouth::N), Some(EastWest::W)), Some("↖️"));
        assert_eq!(direction_arrow(None, None), None);
    }

    #[test]
    fn test_distance_color_thresholds_inclusive() {
        assert_eq!(distance_color(0.0), Color::Green);
        assert_eq!(distance_color(1.0), Color::Green);
        assert_eq!(distance_color(1.01), Color::Yellow);
        assert_eq!(distance_color(5.0), Color::Yellow);
        assert_eq!(distance_color(5.01), Color::Red);
    }

    #[test]
    fn test_latitude_color_never_improves_with_distance() {
        let secret = city("Secret", "XX", 10.0, 0.0, None);
        let mut previous = Color::Green;

        for step in 0..400 {
            let guess = city("Guess", "XX", 10.0 + step as f64 * 0.05, 0.0, None);
            let color = compute_feedback(&guess, &secret, &AdjacencySet::new()).latitude.color;
            // Color orders green < yellow < red
            assert!(color >= previous, "color improved at step {}", step);
            previous = color;
        }
        assert_eq!(previous, Color::Red);
    }
}
