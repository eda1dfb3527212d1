use serde::{Deserialize, Serialize};

/// Number of cast members shown on the detail view
pub const CAST_DISPLAY_LIMIT: usize = 8;

/// Label used when a rating or year is unavailable
pub const UNAVAILABLE: &str = "N/A";

/// A movie as it appears in a search or discover result page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Catalog ID, unique within a result page
    pub id: i64,
    /// Display title
    pub title: String,
    /// Poster path relative to the image base (e.g. "/abc.jpg")
    pub poster_path: Option<String>,
    /// Average vote (0-10 scale)
    pub vote_average: Option<f64>,
    /// Release date (YYYY-MM-DD), may be empty
    pub release_date: Option<String>,
    /// Original language code (e.g. "en")
    pub original_language: String,
}

impl MovieSummary {
    /// Create a summary with required fields
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            vote_average: None,
            release_date: None,
            original_language: String::new(),
        }
    }

    pub fn with_poster(mut self, poster_path: Option<String>) -> Self {
        self.poster_path = poster_path;
        self
    }

    pub fn with_rating(mut self, vote_average: Option<f64>) -> Self {
        self.vote_average = vote_average;
        self
    }

    pub fn with_release_date(mut self, release_date: Option<String>) -> Self {
        self.release_date = release_date;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.original_language = language.into();
        self
    }

    #[must_use]
    pub fn rating_label(&self) -> String {
        rating_label(self.vote_average)
    }

    #[must_use]
    pub fn year_label(&self) -> String {
        year_label(self.release_date.as_deref())
    }

    #[must_use]
    pub fn language_label(&self) -> String {
        self.original_language.to_uppercase()
    }
}

/// Genre tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Cast credit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: i64,
    pub name: String,
    pub character: Option<String>,
}

/// Production company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

/// Full record for a single movie, including credits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
    /// Full release date (YYYY-MM-DD)
    pub release_date: Option<String>,
    pub original_language: String,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    /// Runtime in minutes
    pub runtime: Option<u32>,
    pub genres: Vec<Genre>,
    /// Cast in billing order
    pub cast: Vec<CastMember>,
    pub production_companies: Vec<Company>,
    pub budget: Option<u64>,
    pub homepage: Option<String>,
    /// Release status (e.g. "Released", "Post Production")
    pub status: Option<String>,
}

impl MovieDetail {
    /// Create a detail record with required fields
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            vote_average: None,
            release_date: None,
            original_language: String::new(),
            tagline: None,
            overview: None,
            runtime: None,
            genres: Vec::new(),
            cast: Vec::new(),
            production_companies: Vec::new(),
            budget: None,
            homepage: None,
            status: None,
        }
    }

    /// The summary fields of this record
    #[must_use]
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            poster_path: self.poster_path.clone(),
            vote_average: self.vote_average,
            release_date: self.release_date.clone(),
            original_language: self.original_language.clone(),
        }
    }

    /// Cast truncated for display
    #[must_use]
    pub fn top_cast(&self) -> &[CastMember] {
        &self.cast[..self.cast.len().min(CAST_DISPLAY_LIMIT)]
    }

    /// Runtime label, absent when runtime is unknown or zero
    #[must_use]
    pub fn runtime_label(&self) -> Option<String> {
        self.runtime
            .filter(|minutes| *minutes > 0)
            .map(|minutes| format!("{minutes} minutes"))
    }

    #[must_use]
    pub fn overview_text(&self) -> &str {
        self.overview
            .as_deref()
            .filter(|o| !o.is_empty())
            .unwrap_or("No overview available.")
    }
}

/// Format a vote average with one decimal, or "N/A" when absent or zero
#[must_use]
pub fn rating_label(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(v) if v > 0.0 => format!("{v:.1}"),
        _ => UNAVAILABLE.to_string(),
    }
}

/// Year portion of a release date, or "N/A" when absent or empty
#[must_use]
pub fn year_label(release_date: Option<&str>) -> String {
    release_date
        .and_then(|d| d.split('-').next())
        .filter(|y| !y.is_empty())
        .map_or_else(|| UNAVAILABLE.to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_label() {
        assert_eq!(rating_label(Some(7.456)), "7.5");
        assert_eq!(rating_label(Some(0.0)), "N/A");
        assert_eq!(rating_label(None), "N/A");
    }

    #[test]
    fn test_year_label() {
        assert_eq!(year_label(Some("2008-07-16")), "2008");
        assert_eq!(year_label(Some("")), "N/A");
        assert_eq!(year_label(None), "N/A");
    }

    #[test]
    fn test_language_label_uppercases() {
        let movie = MovieSummary::new(1, "Amélie").with_language("fr");
        assert_eq!(movie.language_label(), "FR");
    }

    #[test]
    fn test_top_cast_truncates() {
        let mut detail = MovieDetail::new(1, "Ensemble");
        detail.cast = (0..12)
            .map(|i| CastMember {
                id: i,
                name: format!("Actor {i}"),
                character: None,
            })
            .collect();

        assert_eq!(detail.top_cast().len(), CAST_DISPLAY_LIMIT);
        assert_eq!(detail.top_cast()[0].name, "Actor 0");

        detail.cast.truncate(3);
        assert_eq!(detail.top_cast().len(), 3);
    }

    #[test]
    fn test_runtime_and_overview_fallbacks() {
        let mut detail = MovieDetail::new(1, "Short");
        assert!(detail.runtime_label().is_none());
        assert_eq!(detail.overview_text(), "No overview available.");

        detail.runtime = Some(152);
        detail.overview = Some("A caped crusader.".to_string());
        assert_eq!(detail.runtime_label().as_deref(), Some("152 minutes"));
        assert_eq!(detail.overview_text(), "A caped crusader.");
    }
}
