//! API credentials for the external services
//!
//! Keys are read once, when the agent factory is built, and handed to the
//! tools explicitly. Tools never read the process environment themselves.

use std::fmt;

pub const WEATHER_API_KEY: &str = "WEATHER_API_KEY";
pub const WEATHERAPI_KEY: &str = "WEATHERAPI_KEY";
pub const YOUTUBE_API_KEY: &str = "YOUTUBE_API_KEY";

/// Optional API keys, trimmed. An empty value counts as absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub weather_api_key: Option<String>,
    /// Alternative name accepted for the weather key
    pub weatherapi_key: Option<String>,
    pub youtube_api_key: Option<String>,
}

impl Credentials {
    /// Read keys from the process environment.
    ///
    /// Call [`load_dotenv`] first if `.env` files should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read keys through an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            weather_api_key: read(WEATHER_API_KEY),
            weatherapi_key: read(WEATHERAPI_KEY),
            youtube_api_key: read(YOUTUBE_API_KEY),
        }
    }

    /// Weather key, preferring `WEATHER_API_KEY`
    pub fn weather_key(&self) -> Option<&str> {
        self.weather_api_key
            .as_deref()
            .or(self.weatherapi_key.as_deref())
    }

    pub fn youtube_key(&self) -> Option<&str> {
        self.youtube_api_key.as_deref()
    }

    /// Unset weather key names joined with " and "
    pub fn missing_weather_keys(&self) -> String {
        let mut missing = Vec::new();
        if self.weather_api_key.is_none() {
            missing.push(WEATHER_API_KEY);
        }
        if self.weatherapi_key.is_none() {
            missing.push(WEATHERAPI_KEY);
        }
        missing.join(" and ")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |v: &Option<String>| if v.is_some() { "<set>" } else { "<unset>" };
        f.debug_struct("Credentials")
            .field("weather_api_key", &mask(&self.weather_api_key))
            .field("weatherapi_key", &mask(&self.weatherapi_key))
            .field("youtube_api_key", &mask(&self.youtube_api_key))
            .finish()
    }
}

/// Load `.env` from the current directory or its parents, if present.
///
/// Returns the path that was loaded. A missing file is not an error.
pub fn load_dotenv() -> Option<std::path::PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            tracing::warn!("Failed to load .env: {}", e);
            None
        }
    }
}
