//! Search phrase heuristic for weather-matched music.
//!
//! Two independent classifications are combined into
//! `"{condition_phrase} {temperature_phrase} music playlist"`.
//!
//! Temperature bands (°C, upper bound exclusive):
//!
//! | Range | Phrase |
//! |-------|--------|
//! | `< 0` | freezing cold winter |
//! | `< 10` | cold winter |
//! | `< 15` | cool spring |
//! | `< 22` | mild pleasant |
//! | `< 28` | warm summer |
//! | otherwise | hot summer |
//!
//! Conditions are matched case-insensitively by substring; the first rule
//! that matches wins, in the order of [`CONDITION_RULES`].

use std::borrow::Cow;

const BASE_QUERY: &str = "music playlist";

/// Upper-exclusive temperature bands, checked in order
const TEMPERATURE_BANDS: [(f64, &str); 5] = [
    (0.0, "freezing cold winter"),
    (10.0, "cold winter"),
    (15.0, "cool spring"),
    (22.0, "mild pleasant"),
    (28.0, "warm summer"),
];

const HOT: &str = "hot summer";

/// Keyword rules, checked in order
pub const CONDITION_RULES: [(&[&str], &str); 7] = [
    (&["rain", "shower", "drizzle"], "rainy day relaxing"),
    (&["snow"], "snowy day cozy"),
    (&["cloud", "overcast"], "cloudy day chill"),
    (&["sun", "clear"], "sunny day upbeat"),
    (&["fog", "mist"], "foggy atmospheric"),
    (&["thunder", "storm"], "thunderstorm dramatic"),
    (&["wind"], "windy day ambient"),
];

pub fn temperature_phrase(temperature: f64) -> &'static str {
    TEMPERATURE_BANDS
        .iter()
        .find(|(upper, _)| temperature < *upper)
        .map(|(_, phrase)| *phrase)
        .unwrap_or(HOT)
}

/// Phrase for a condition; unmatched conditions become `"{condition} vibes"`.
pub fn condition_phrase(condition: &str) -> Cow<'static, str> {
    let lower = condition.to_lowercase();
    CONDITION_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, phrase)| Cow::Borrowed(*phrase))
        .unwrap_or_else(|| Cow::Owned(format!("{} vibes", condition)))
}

/// Full search query for a condition/temperature pair
pub fn search_query(condition: &str, temperature: f64) -> String {
    format!(
        "{} {} {}",
        condition_phrase(condition),
        temperature_phrase(temperature),
        BASE_QUERY
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freezing_regardless_of_condition() {
        for condition in ["Sunny", "Heavy snow", "Fog", "Something odd"] {
            assert!(search_query(condition, -5.0).contains("freezing cold winter"));
        }
    }

    #[test]
    fn test_rain_regardless_of_temperature() {
        for temp in [-20.0, 0.0, 12.0, 35.0] {
            assert!(search_query("Light rain showers", temp).starts_with("rainy day relaxing "));
        }
    }

    #[test]
    fn test_exact_composition() {
        assert_eq!(
            search_query("Light rain showers", -5.0),
            "rainy day relaxing freezing cold winter music playlist"
        );
        assert_eq!(
            search_query("Clear", 25.0),
            "sunny day upbeat warm summer music playlist"
        );
    }

    #[test]
    fn test_band_edges_are_upper_exclusive() {
        assert_eq!(temperature_phrase(-0.1), "freezing cold winter");
        assert_eq!(temperature_phrase(0.0), "cold winter");
        assert_eq!(temperature_phrase(9.99), "cold winter");
        assert_eq!(temperature_phrase(10.0), "cool spring");
        assert_eq!(temperature_phrase(15.0), "mild pleasant");
        assert_eq!(temperature_phrase(21.9), "mild pleasant");
        assert_eq!(temperature_phrase(22.0), "warm summer");
        assert_eq!(temperature_phrase(28.0), "hot summer");
        assert_eq!(temperature_phrase(41.0), "hot summer");
    }

    #[test]
    fn test_keyword_priority_order() {
        // rain is checked before snow, cloud before sun, fog before storm
        assert_eq!(condition_phrase("Rain and snow"), "rainy day relaxing");
        assert_eq!(condition_phrase("Patchy sun, cloudy"), "cloudy day chill");
        assert_eq!(condition_phrase("Mist before storm"), "foggy atmospheric");
        // "Thunderstorm" has no earlier keyword
        assert_eq!(condition_phrase("Thunderstorm"), "thunderstorm dramatic");
        assert_eq!(condition_phrase("WINDY"), "windy day ambient");
        assert_eq!(condition_phrase("Overcast"), "cloudy day chill");
        assert_eq!(condition_phrase("Freezing drizzle"), "rainy day relaxing");
    }

    #[test]
    fn test_unmatched_condition_keeps_original_text() {
        assert_eq!(condition_phrase("Hazy"), "Hazy vibes");
        assert_eq!(
            search_query("Hazy", 16.0),
            "Hazy vibes mild pleasant music playlist"
        );
    }
}
