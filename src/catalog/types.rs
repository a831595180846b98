use serde::Deserialize;

/// One page of catalog results.
///
/// Only `results` and `total_pages` are consumed; every other field in the
/// response body is ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
}

/// A movie record passed through verbatim from the catalog API.
///
/// Display fields are optional; presence is only checked at render time to
/// pick a fallback, never validated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl MovieSummary {
    pub fn title_label(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }

    /// Release date for display; empty dates count as absent.
    pub fn release_date_label(&self) -> &str {
        match self.release_date.as_deref() {
            Some(date) if !date.is_empty() => date,
            _ => "N/A",
        }
    }

    /// Rating to one decimal place; zero counts as unrated.
    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(vote) if vote > 0.0 => format!("{:.1}", vote),
            _ => "N/A".to_string(),
        }
    }

    /// Full poster URL, or a placeholder when the record carries none.
    pub fn poster_url(&self, image_base_url: &str) -> String {
        match self.poster_path.as_deref() {
            Some(path) if !path.is_empty() => format!("{}{}", image_base_url, path),
            _ => "https://placehold.co/200x300?text=Placeholder+Image".to_string(),
        }
    }
}
