use serde::Deserialize;

/// Environment variable that overrides the configured API token.
pub const TOKEN_ENV_VAR: &str = "CINESCOPE_API_TOKEN";

/// Catalog configuration.
///
/// Every request the catalog client builds derives from this object; there
/// are no compiled-in endpoints or credentials. The bearer token is the only
/// required field and is usually supplied via `CINESCOPE_API_TOKEN` rather
/// than stored in the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the catalog API, with trailing slash.
    pub base_url: String,
    /// Base URL for poster images.
    pub image_base_url: String,
    /// BCP 47 language tag sent with every request.
    pub language: String,
    /// Bearer token for the catalog API.
    pub api_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3/".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/w200".to_string(),
            language: "en-US".to_string(),
            api_token: None,
        }
    }
}

impl Config {
    /// The resolved bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.api_token.as_deref().filter(|t| !t.is_empty())
    }
}
