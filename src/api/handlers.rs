use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::models::Recommendation;
use crate::services::recommend;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// Absent or unknown titles both resolve to zero recommendations,
    /// never to a request-validation error.
    #[serde(default)]
    pub movie: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
pub struct TitlesResponse {
    pub titles: Vec<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the full ordered title list
pub async fn get_titles(State(state): State<AppState>) -> Json<TitlesResponse> {
    Json(TitlesResponse {
        titles: state.catalog.titles(),
    })
}

/// Recommend similar movies for a title
///
/// Always responds 200: an unknown or missing title yields an empty
/// recommendations array. Each candidate is enriched with poster and genre
/// metadata; enrichment failures degrade the entry rather than failing the
/// request.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Json<RecommendResponse> {
    let candidates = match request.movie.as_deref() {
        Some(title) => recommend::recommend(&state.catalog, title, recommend::DEFAULT_COUNT),
        None => Vec::new(),
    };

    let mut recommendations = Vec::with_capacity(candidates.len());
    for movie in candidates {
        let details = state.metadata.fetch_details(movie.movie_id).await;
        recommendations.push(Recommendation {
            title: movie.title.clone(),
            poster_url: details.poster_url,
            genres: details.genres,
        });
    }

    tracing::debug!(
        movie = request.movie.as_deref().unwrap_or(""),
        results = recommendations.len(),
        "Recommendation request completed"
    );

    Json(RecommendResponse { recommendations })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{MovieDetails, MovieRecord};
    use crate::services::metadata::MockMetadataFetcher;
    use std::sync::Arc;

    fn fixture_state(fetcher: MockMetadataFetcher) -> AppState {
        let movies = vec![
            MovieRecord {
                movie_id: 10,
                title: "Avatar".to_string(),
            },
            MovieRecord {
                movie_id: 20,
                title: "Titanic".to_string(),
            },
            MovieRecord {
                movie_id: 30,
                title: "Alien".to_string(),
            },
        ];
        let similarity = vec![
            vec![1.0, 0.8, 0.3],
            vec![0.8, 1.0, 0.2],
            vec![0.3, 0.2, 1.0],
        ];
        let catalog = Arc::new(Catalog::new(movies, similarity).unwrap());
        AppState::new(catalog, Arc::new(fetcher))
    }

    #[tokio::test]
    async fn test_recommend_enriches_candidates_in_rank_order() {
        let mut fetcher = MockMetadataFetcher::new();
        fetcher
            .expect_fetch_details()
            .times(2)
            .returning(|id| MovieDetails {
                poster_url: Some(format!("https://image.tmdb.org/t/p/w500/{}.jpg", id)),
                genres: "Drama".to_string(),
            });

        let response = recommend(
            State(fixture_state(fetcher)),
            Json(RecommendRequest {
                movie: Some("Avatar".to_string()),
            }),
        )
        .await;

        let recommendations = &response.0.recommendations;
        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].title, "Titanic");
        assert_eq!(recommendations[1].title, "Alien");
        assert_eq!(
            recommendations[0].poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/20.jpg")
        );
        assert_eq!(recommendations[0].genres, "Drama");
    }

    #[tokio::test]
    async fn test_recommend_missing_movie_field() {
        let mut fetcher = MockMetadataFetcher::new();
        fetcher.expect_fetch_details().never();

        let response = recommend(
            State(fixture_state(fetcher)),
            Json(RecommendRequest { movie: None }),
        )
        .await;

        assert!(response.0.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_recommend_degraded_enrichment_still_succeeds() {
        let mut fetcher = MockMetadataFetcher::new();
        fetcher
            .expect_fetch_details()
            .returning(|_| MovieDetails::default());

        let response = recommend(
            State(fixture_state(fetcher)),
            Json(RecommendRequest {
                movie: Some("Alien".to_string()),
            }),
        )
        .await;

        let recommendations = &response.0.recommendations;
        assert_eq!(recommendations.len(), 2);
        assert!(recommendations.iter().all(|r| r.poster_url.is_none()));
        assert!(recommendations.iter().all(|r| r.genres.is_empty()));
    }
}
