use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's star rating for a movie, keyed by (movie_id, user_id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub movie_id: Uuid,
    pub user_id: Uuid,
    /// Whole stars, 1 to 5.
    pub value: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Arithmetic mean of rating values; 0 when there are none.
pub fn average_value(values: &[i32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: i64 = values.iter().map(|v| *v as i64).sum();
    sum as f32 / values.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_no_ratings_is_zero() {
        assert_eq!(average_value(&[]), 0.0);
    }

    #[test]
    fn average_is_the_arithmetic_mean() {
        assert_eq!(average_value(&[4, 2]), 3.0);
        assert_eq!(average_value(&[5, 2]), 3.5);
        assert_eq!(average_value(&[5, 5, 5]), 5.0);
    }

    #[test]
    fn average_of_single_rating_is_that_rating() {
        assert_eq!(average_value(&[3]), 3.0);
    }
}
