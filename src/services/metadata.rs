use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::error::{AppError, AppResult};
use crate::models::{MovieDetails, TmdbMovie};

/// Movie metadata source abstraction
///
/// Lets tests substitute canned or failing responses for the real TMDB
/// client without network access. Enrichment is best-effort by contract:
/// implementations return the degraded default instead of erroring.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetch display metadata for a movie, degrading to empty fields on failure
    async fn fetch_details(&self, movie_id: u32) -> MovieDetails;
}

/// TMDB-backed metadata fetcher
#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_url: String,
    api_key: String,
    image_base_url: String,
}

impl TmdbClient {
    pub fn new(api_url: String, api_key: String, image_base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            api_key,
            image_base_url,
        }
    }

    /// Builds the full poster URL from a TMDB poster path
    fn poster_url(&self, poster_path: &str) -> String {
        format!("{}{}", self.image_base_url, poster_path)
    }

    async fn try_fetch(&self, movie_id: u32) -> AppResult<MovieDetails> {
        let url = format!("{}/movie/{}", self.api_url, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {} for movie {}",
                response.status(),
                movie_id
            )));
        }

        let movie: TmdbMovie = response.json().await?;

        let genres = movie
            .genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(MovieDetails {
            poster_url: movie.poster_path.as_deref().map(|p| self.poster_url(p)),
            genres,
        })
    }
}

#[async_trait]
impl MetadataFetcher for TmdbClient {
    async fn fetch_details(&self, movie_id: u32) -> MovieDetails {
        match self.try_fetch(movie_id).await {
            Ok(details) => details,
            Err(error) => {
                tracing::warn!(
                    movie_id,
                    error = %error,
                    "Metadata fetch failed, returning degraded details"
                );
                MovieDetails::default()
            }
        }
    }
}
