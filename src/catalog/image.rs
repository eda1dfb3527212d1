use crate::config::CatalogConfig;

/// Builds poster URLs from catalog poster paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrls {
    base: String,
    size: String,
    placeholder: String,
}

impl ImageUrls {
    pub fn new(
        base: impl Into<String>,
        size: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            size: size.into(),
            placeholder: placeholder.into(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(
            &config.image_base,
            &config.poster_size,
            &config.placeholder_poster,
        )
    }

    /// Poster URL, or the placeholder asset when the path is absent or empty
    #[must_use]
    pub fn poster(&self, path: Option<&str>) -> String {
        match path.filter(|p| !p.is_empty()) {
            Some(p) if p.starts_with('/') => format!("{}/{}{p}", self.base, self.size),
            Some(p) => format!("{}/{}/{p}", self.base, self.size),
            None => self.placeholder.clone(),
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

impl Default for ImageUrls {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}
