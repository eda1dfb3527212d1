use crate::catalog::ImageUrls;
use crate::model::{MovieDetail, MovieSummary, TrendRecord, year_label};
use serde::Serialize;

/// Route of the detail view for a movie
#[must_use]
pub fn detail_route(id: i64) -> String {
    format!("/movie/{id}")
}

/// One card in the result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieCard {
    pub id: i64,
    pub title: String,
    pub poster_url: String,
    pub rating: String,
    pub language: String,
    pub year: String,
    /// Where selecting the card navigates
    pub route: String,
}

impl MovieCard {
    pub fn from_summary(movie: &MovieSummary, images: &ImageUrls) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_url: images.poster(movie.poster_path.as_deref()),
            rating: movie.rating_label(),
            language: movie.language_label(),
            year: movie.year_label(),
            route: detail_route(movie.id),
        }
    }
}

/// One entry of the trending section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendingCard {
    /// 1-based position
    pub rank: usize,
    pub term: String,
    pub count: i64,
    pub movie_id: i64,
    pub title: String,
    pub poster_url: String,
}

impl TrendingCard {
    /// Rank records in the order given
    pub fn ranked(records: &[TrendRecord]) -> Vec<Self> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| Self {
                rank: i + 1,
                term: record.term.clone(),
                count: record.count,
                movie_id: record.movie_id,
                title: record.title.clone(),
                poster_url: record.poster_url.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastCard {
    pub id: i64,
    pub name: String,
    pub character: Option<String>,
}

/// Display-ready movie detail
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub id: i64,
    pub title: String,
    pub poster_url: String,
    pub tagline: Option<String>,
    pub rating: String,
    pub language: String,
    pub year: String,
    pub release_date: Option<String>,
    pub runtime: Option<String>,
    pub overview: String,
    pub genres: Vec<String>,
    /// First few billed cast members
    pub cast: Vec<CastCard>,
    pub production_companies: Vec<String>,
    pub budget: Option<u64>,
    pub homepage: Option<String>,
    pub status: Option<String>,
}

impl DetailView {
    pub fn from_detail(movie: &MovieDetail, images: &ImageUrls) -> Self {
        let summary = movie.summary();

        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_url: images.poster(movie.poster_path.as_deref()),
            tagline: movie.tagline.clone(),
            rating: summary.rating_label(),
            language: summary.language_label(),
            year: year_label(movie.release_date.as_deref()),
            release_date: movie.release_date.clone(),
            runtime: movie.runtime_label(),
            overview: movie.overview_text().to_string(),
            genres: movie.genres.iter().map(|g| g.name.clone()).collect(),
            cast: movie
                .top_cast()
                .iter()
                .map(|c| CastCard {
                    id: c.id,
                    name: c.name.clone(),
                    character: c.character.clone(),
                })
                .collect(),
            production_companies: movie
                .production_companies
                .iter()
                .map(|c| c.name.clone())
                .collect(),
            budget: movie.budget,
            homepage: movie.homepage.clone(),
            status: movie.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CastMember, Genre};

    #[test]
    fn test_movie_card_formats_fields() {
        let movie = MovieSummary::new(155, "The Dark Knight")
            .with_poster(Some("/qJ2tW6WMUDux911r6m7haRef0WH.jpg".to_string()))
            .with_rating(Some(8.516))
            .with_release_date(Some("2008-07-16".to_string()))
            .with_language("en");

        let card = MovieCard::from_summary(&movie, &ImageUrls::default());

        assert_eq!(
            card.poster_url,
            "https://image.tmdb.org/t/p/w500/qJ2tW6WMUDux911r6m7haRef0WH.jpg"
        );
        assert_eq!(card.rating, "8.5");
        assert_eq!(card.language, "EN");
        assert_eq!(card.year, "2008");
        assert_eq!(card.route, "/movie/155");
    }

    #[test]
    fn test_movie_card_placeholders() {
        let movie = MovieSummary::new(1, "Untitled").with_release_date(Some(String::new()));

        let card = MovieCard::from_summary(&movie, &ImageUrls::default());

        assert_eq!(card.poster_url, "/No-Movie-Poster.png");
        assert_eq!(card.rating, "N/A");
        assert_eq!(card.year, "N/A");
    }

    #[test]
    fn test_detail_view_truncates_cast() {
        let mut movie = MovieDetail::new(155, "The Dark Knight");
        movie.genres = vec![Genre {
            id: 28,
            name: "Action".to_string(),
        }];
        movie.cast = (0..10)
            .map(|i| CastMember {
                id: i,
                name: format!("Actor {i}"),
                character: Some(format!("Role {i}")),
            })
            .collect();
        movie.runtime = Some(152);

        let view = DetailView::from_detail(&movie, &ImageUrls::default());

        assert_eq!(view.cast.len(), 8);
        assert_eq!(view.genres, vec!["Action"]);
        assert_eq!(view.runtime.as_deref(), Some("152 minutes"));
        assert_eq!(view.overview, "No overview available.");
    }
}
