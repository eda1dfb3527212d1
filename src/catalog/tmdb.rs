use super::api_types::{ListResponse, MovieDetails, MovieResult};
use crate::catalog::{CatalogClient, CatalogError, HttpClient, Page, Result};
use crate::config::CatalogConfig;
use crate::model::{CastMember, Company, Genre, MovieDetail, MovieSummary};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Catalog client for The Movie Database (TMDB) v3 API
pub struct TmdbCatalog {
    client: HttpClient,
}

impl TmdbCatalog {
    /// Create a client from catalog configuration
    ///
    /// Fails when no API token is configured.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        if config.api_token.trim().is_empty() {
            return Err(CatalogError::Config(
                "catalog API token cannot be empty".to_string(),
            ));
        }

        let client = HttpClient::new(
            &config.base_url,
            config.api_token.trim(),
            Duration::from_secs(config.timeout_secs),
        )?;

        Ok(Self { client })
    }

    async fn list(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Page<MovieSummary>> {
        let response: ListResponse = self.client.get_with_params(endpoint, params).await?;

        let page = Page {
            page: response.page.unwrap_or(1),
            total_pages: response.total_pages.unwrap_or(0),
            total_results: response.total_results.unwrap_or(0),
            results: response
                .results
                .into_iter()
                .map(Self::movie_result_to_summary)
                .collect(),
        };

        debug!(
            endpoint,
            page = page.page,
            total_pages = page.total_pages,
            total_results = page.total_results,
            "Catalog returned {} results",
            page.results.len()
        );

        Ok(page)
    }

    fn movie_result_to_summary(movie: MovieResult) -> MovieSummary {
        MovieSummary::new(movie.id, movie.title)
            .with_poster(movie.poster_path)
            .with_rating(movie.vote_average)
            .with_release_date(movie.release_date)
            .with_language(movie.original_language.unwrap_or_default())
    }

    fn details_to_detail(id: i64, movie: MovieDetails) -> Result<MovieDetail> {
        // A success body without an id carries no usable record
        let Some(found_id) = movie.id else {
            return Err(CatalogError::NotFound(format!("movie {id}")));
        };

        let cast = movie
            .credits
            .map(|credits| {
                credits
                    .cast
                    .into_iter()
                    .map(|c| CastMember {
                        id: c.id,
                        name: c.name,
                        character: c.character,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(MovieDetail {
            id: found_id,
            title: movie.title.unwrap_or_default(),
            poster_path: movie.poster_path,
            vote_average: movie.vote_average,
            release_date: movie.release_date,
            original_language: movie.original_language.unwrap_or_default(),
            tagline: movie.tagline.filter(|t| !t.is_empty()),
            overview: movie.overview,
            runtime: movie.runtime,
            genres: movie
                .genres
                .into_iter()
                .map(|g| Genre {
                    id: g.id,
                    name: g.name,
                })
                .collect(),
            cast,
            production_companies: movie
                .production_companies
                .into_iter()
                .map(|c| Company { name: c.name })
                .collect(),
            budget: movie.budget.filter(|b| *b > 0),
            homepage: movie.homepage.filter(|h| !h.is_empty()),
            status: movie.status,
        })
    }
}

#[async_trait]
impl CatalogClient for TmdbCatalog {
    async fn search(&self, query: &str, page: u32) -> Result<Page<MovieSummary>> {
        let page = page.to_string();
        self.list("/search/movie", &[("query", query), ("page", &page)])
            .await
    }

    async fn discover(&self, page: u32) -> Result<Page<MovieSummary>> {
        let page = page.to_string();
        self.list(
            "/discover/movie",
            &[("sort_by", "popularity.desc"), ("page", &page)],
        )
        .await
    }

    async fn fetch_detail(&self, id: i64) -> Result<MovieDetail> {
        let endpoint = format!("/movie/{id}");
        let movie: MovieDetails = self
            .client
            .get_with_params(&endpoint, &[("append_to_response", "credits")])
            .await?;

        Self::details_to_detail(id, movie)
    }
}
