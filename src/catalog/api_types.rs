use serde::Deserialize;

// List responses (search and discover)
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    pub results: Vec<MovieResult>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct MovieResult {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
}

// Detail response
#[derive(Debug, Deserialize)]
pub struct MovieDetails {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
    pub status: Option<String>,
    pub original_language: Option<String>,
    pub budget: Option<u64>,
    pub homepage: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub production_companies: Vec<Company>,
    pub credits: Option<Credits>,
}

// Common types
#[derive(Debug, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Company {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Deserialize)]
pub struct CastMember {
    pub id: i64,
    pub name: String,
    pub character: Option<String>,
}
