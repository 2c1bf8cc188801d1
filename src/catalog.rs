use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::MovieRecord;

/// In-memory movie catalog with its precomputed similarity matrix
///
/// Loaded once at startup and treated as read-only for the process lifetime.
/// Handlers receive it through shared state rather than module-level globals
/// so tests can construct fixture catalogs directly.
pub struct Catalog {
    movies: Vec<MovieRecord>,
    similarity: Vec<Vec<f32>>,
}

impl Catalog {
    /// Builds a catalog from in-memory records and a similarity matrix
    ///
    /// Fails if the matrix is not square or its dimension does not match the
    /// number of records.
    pub fn new(movies: Vec<MovieRecord>, similarity: Vec<Vec<f32>>) -> AppResult<Self> {
        if similarity.len() != movies.len() {
            return Err(AppError::DataLoad(format!(
                "Similarity matrix has {} rows but catalog has {} movies",
                similarity.len(),
                movies.len()
            )));
        }

        if let Some((row_index, row)) = similarity
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != movies.len())
        {
            return Err(AppError::DataLoad(format!(
                "Similarity matrix row {} has {} columns, expected {}",
                row_index,
                row.len(),
                movies.len()
            )));
        }

        Ok(Self { movies, similarity })
    }

    /// Loads the catalog from its persisted JSON artifacts
    ///
    /// `movies_path` holds an ordered array of movie records; `similarity_path`
    /// holds a square numeric matrix indexed in the same order. Any missing,
    /// malformed, or dimensionally inconsistent artifact is fatal.
    pub fn load(
        movies_path: impl AsRef<Path>,
        similarity_path: impl AsRef<Path>,
    ) -> AppResult<Self> {
        let movies: Vec<MovieRecord> =
            serde_json::from_reader(BufReader::new(File::open(movies_path)?))?;
        let similarity: Vec<Vec<f32>> =
            serde_json::from_reader(BufReader::new(File::open(similarity_path)?))?;

        Self::new(movies, similarity)
    }

    /// Ordered list of all known titles
    pub fn titles(&self) -> Vec<String> {
        self.movies.iter().map(|m| m.title.clone()).collect()
    }

    /// Index of the first record with an exactly matching title
    pub fn index_of_title(&self, title: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.title == title)
    }

    pub fn movie(&self, index: usize) -> &MovieRecord {
        &self.movies[index]
    }

    pub fn similarity_row(&self, index: usize) -> &[f32] {
        &self.similarity[index]
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
