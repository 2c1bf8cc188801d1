use serde::{Deserialize, Serialize};

/// A movie known to the catalog
///
/// `movie_id` is the TMDB identifier used for metadata enrichment.
/// Row order in the catalog artifact defines similarity-matrix indexing,
/// and `title` is the lookup key for recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub movie_id: u32,
    pub title: String,
}

/// A single enriched recommendation returned to the client
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub poster_url: Option<String>,
    pub genres: String,
}

/// Display metadata for a movie, fetched from TMDB
///
/// The default value is the degraded form used when enrichment fails:
/// no poster, empty genre string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDetails {
    pub poster_url: Option<String>,
    pub genres: String,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Raw movie details response from the TMDB API
///
/// Only the fields used for enrichment are deserialized; the rest of the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

/// A named genre object in the TMDB response
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmdb_movie_deserialization() {
        let json = r#"{
            "id": 19995,
            "title": "Avatar",
            "poster_path": "/abc.jpg",
            "genres": [
                { "id": 28, "name": "Action" },
                { "id": 878, "name": "Science Fiction" }
            ]
        }"#;

        let movie: TmdbMovie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.poster_path, Some("/abc.jpg".to_string()));
        assert_eq!(movie.genres.len(), 2);
        assert_eq!(movie.genres[0].name, "Action");
    }

    #[test]
    fn test_tmdb_movie_missing_fields() {
        // poster_path and genres are both optional in practice
        let movie: TmdbMovie = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(movie.poster_path, None);
        assert!(movie.genres.is_empty());
    }

    #[test]
    fn test_recommendation_serialization() {
        let rec = Recommendation {
            title: "Avatar".to_string(),
            poster_url: None,
            genres: String::new(),
        };

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["title"], "Avatar");
        assert!(json["poster_url"].is_null());
        assert_eq!(json["genres"], "");
    }
}
