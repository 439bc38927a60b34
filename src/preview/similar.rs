//! Related-titles strip for the detail modal

use crate::models::MovieSummary;

/// Maximum number of titles shown in the related strip
pub const SIMILAR_LIMIT: usize = 6;

/// Pick up to [`SIMILAR_LIMIT`] titles related to `movie` from `pool`
///
/// Titles sharing at least one genre come first, in pool order; if fewer
/// than the limit share a genre, the strip is backfilled with the remaining
/// titles. The movie itself is never included. An empty pool yields an
/// empty strip.
pub fn similar_titles<'a>(movie: &MovieSummary, pool: &'a [MovieSummary]) -> Vec<&'a MovieSummary> {
    let mut picks: Vec<&MovieSummary> = Vec::with_capacity(SIMILAR_LIMIT);

    for candidate in pool {
        if picks.len() == SIMILAR_LIMIT {
            return picks;
        }
        if candidate.id != movie.id && shares_genre(movie, candidate) {
            picks.push(candidate);
        }
    }

    for candidate in pool {
        if picks.len() == SIMILAR_LIMIT {
            break;
        }
        if candidate.id != movie.id && !picks.iter().any(|p| p.id == candidate.id) {
            picks.push(candidate);
        }
    }

    picks
}

fn shares_genre(a: &MovieSummary, b: &MovieSummary) -> bool {
    a.genres.iter().any(|g| b.genres.contains(g))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, genres: &[&str]) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: format!("Title {}", id),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_genre_matches_come_first() {
        let target = movie("t", &["Action"]);
        let pool = vec![
            movie("1", &["Drama"]),
            movie("2", &["Action", "Thriller"]),
            movie("3", &["Action"]),
        ];
        let picks = similar_titles(&target, &pool);
        let ids: Vec<&str> = picks.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_excludes_self() {
        let target = movie("t", &["Action"]);
        let pool = vec![movie("t", &["Action"]), movie("2", &["Action"])];
        let picks = similar_titles(&target, &pool);
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].id, "2");
    }

    #[test]
    fn test_caps_at_limit() {
        let target = movie("t", &["Action"]);
        let pool: Vec<MovieSummary> = (0..10)
            .map(|i| movie(&i.to_string(), &["Action"]))
            .collect();
        assert_eq!(similar_titles(&target, &pool).len(), SIMILAR_LIMIT);
    }

    #[test]
    fn test_backfill_stops_at_limit() {
        let target = movie("t", &["Action"]);
        let mut pool = vec![movie("a", &["Action"]), movie("b", &["Action"])];
        pool.extend((0..10).map(|i| movie(&i.to_string(), &["Drama"])));
        let picks = similar_titles(&target, &pool);
        assert_eq!(picks.len(), SIMILAR_LIMIT);
        assert_eq!(picks[0].id, "a");
        assert_eq!(picks[1].id, "b");
    }

    #[test]
    fn test_empty_pool() {
        let target = movie("t", &["Action"]);
        assert!(similar_titles(&target, &[]).is_empty());
    }

    #[test]
    fn test_no_genres_backfills_only() {
        let target = movie("t", &[]);
        let pool = vec![movie("1", &["Drama"]), movie("2", &[])];
        let picks = similar_titles(&target, &pool);
        assert_eq!(picks.len(), 2);
    }
}
