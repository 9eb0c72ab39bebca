use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The narrow projection of a movie the ranking batch needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub movie_id: Uuid,
    pub review_count: i32,
    pub average_rating: f32,
    pub created_at: DateTime<Utc>,
}

impl RankEntry {
    /// Ordering used for rank assignment: most-reviewed first, then
    /// best-rated, then newest. The id comparison at the end makes the
    /// order total, so two movies never tie.
    fn ranking_cmp(&self, other: &Self) -> Ordering {
        other
            .review_count
            .cmp(&self.review_count)
            .then_with(|| {
                other
                    .average_rating
                    .partial_cmp(&self.average_rating)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| other.created_at.cmp(&self.created_at))
            .then_with(|| self.movie_id.cmp(&other.movie_id))
    }
}

/// Sort the entries into ranking order and pair each movie with its 1-based
/// position. The result is a permutation of 1..=N with no gaps.
pub fn rank_assignments(mut entries: Vec<RankEntry>) -> Vec<(Uuid, i32)> {
    entries.sort_by(RankEntry::ranking_cmp);
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| (entry.movie_id, index as i32 + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(review_count: i32, average_rating: f32, day: u32) -> RankEntry {
        RankEntry {
            movie_id: Uuid::new_v4(),
            review_count,
            average_rating,
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn review_count_dominates_then_rating() {
        let heavy_high = entry(5, 5.0, 1);
        let heavy_low = entry(5, 4.0, 1);
        let light = entry(2, 3.0, 1);

        let assignments = rank_assignments(vec![
            light.clone(),
            heavy_low.clone(),
            heavy_high.clone(),
        ]);

        assert_eq!(assignments[0], (heavy_high.movie_id, 1));
        assert_eq!(assignments[1], (heavy_low.movie_id, 2));
        assert_eq!(assignments[2], (light.movie_id, 3));
    }

    #[test]
    fn newer_movie_wins_a_full_tie_on_counts() {
        let older = entry(3, 4.0, 1);
        let newer = entry(3, 4.0, 20);

        let assignments = rank_assignments(vec![older.clone(), newer.clone()]);
        assert_eq!(assignments[0], (newer.movie_id, 1));
        assert_eq!(assignments[1], (older.movie_id, 2));
    }

    #[test]
    fn identical_tuples_break_by_id_for_determinism() {
        let mut a = entry(1, 2.0, 1);
        let mut b = entry(1, 2.0, 1);
        // Force a known id order.
        a.movie_id = Uuid::from_u128(1);
        b.movie_id = Uuid::from_u128(2);

        let forward = rank_assignments(vec![a.clone(), b.clone()]);
        let backward = rank_assignments(vec![b.clone(), a.clone()]);

        assert_eq!(forward, backward);
        assert_eq!(forward[0].0, a.movie_id);
    }

    #[test]
    fn ranks_are_a_gapless_permutation() {
        let entries: Vec<RankEntry> = (0..10).map(|i| entry(i % 4, (i % 3) as f32, 1)).collect();
        let mut ranks: Vec<i32> = rank_assignments(entries).into_iter().map(|(_, r)| r).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=10).collect::<Vec<i32>>());
    }

    #[test]
    fn empty_input_yields_no_assignments() {
        assert!(rank_assignments(Vec::new()).is_empty());
    }
}
