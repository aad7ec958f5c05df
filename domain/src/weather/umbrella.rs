//! Umbrella decision rule

/// Chance of precipitation (percent) at or above which an umbrella is needed
pub const PRECIPITATION_THRESHOLD: f64 = 30.0;

const RAIN_KEYWORDS: [&str; 4] = ["rain", "shower", "drizzle", "thunderstorm"];

/// An umbrella is needed when rain is likely or the condition mentions it.
pub fn needs_umbrella(precipitation_chance: f64, condition: &str) -> bool {
    let condition = condition.to_lowercase();
    precipitation_chance >= PRECIPITATION_THRESHOLD
        || RAIN_KEYWORDS.iter().any(|k| condition.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(!needs_umbrella(29.9, "Sunny"));
        assert!(needs_umbrella(30.0, "Sunny"));
    }

    #[test]
    fn test_condition_keywords() {
        assert!(needs_umbrella(0.0, "Light Drizzle"));
        assert!(needs_umbrella(0.0, "Thunderstorm nearby"));
        assert!(needs_umbrella(5.0, "Patchy rain possible"));
        assert!(!needs_umbrella(20.0, "Partly cloudy"));
    }
}
