use crate::catalog::Catalog;
use crate::models::MovieRecord;

/// Number of recommendations returned per request
pub const DEFAULT_COUNT: usize = 5;

/// Finds the movies most similar to `title`
///
/// Unknown titles yield an empty list rather than an error. Candidates are
/// ranked by descending similarity score with a stable sort, so tied scores
/// keep their original catalog order. The queried movie is dropped
/// positionally as the top-ranked entry rather than filtered by identity,
/// matching the observed ranking behavior: if another movie ties the
/// self-similarity score ahead of the queried one, it is the one skipped.
pub fn recommend<'a>(catalog: &'a Catalog, title: &str, k: usize) -> Vec<&'a MovieRecord> {
    let Some(index) = catalog.index_of_title(title) else {
        return Vec::new();
    };

    let mut ranked: Vec<(usize, f32)> = catalog
        .similarity_row(index)
        .iter()
        .copied()
        .enumerate()
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .iter()
        .skip(1)
        .take(k)
        .map(|&(candidate, _)| catalog.movie(candidate))
        .collect()
}
