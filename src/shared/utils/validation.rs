use regex::Regex;

use crate::shared::errors::AppError;

const MAX_MEDIA_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_MEDIA_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp", "image/gif"];

pub struct Validator;

impl Validator {
    pub fn validate_movie_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        if title.len() > 255 {
            return Err(AppError::ValidationError(
                "Title too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_rating_value(value: i32) -> Result<(), AppError> {
        if !(1..=5).contains(&value) {
            return Err(AppError::ValidationError(
                "Rating value must be between 1 and 5".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_review_content(content: &str) -> Result<(), AppError> {
        if content.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Review content cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_email(email: &str) -> Result<(), AppError> {
        if email.len() > 255 {
            return Err(AppError::ValidationError(
                "Email too long (max 255 characters)".to_string(),
            ));
        }
        let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
        if !re.is_match(email) {
            return Err(AppError::ValidationError(
                "Email address is malformed".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_user_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Name cannot be empty".to_string(),
            ));
        }
        if name.len() > 100 {
            return Err(AppError::ValidationError(
                "Name too long (max 100 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_trailer_url(url: &str) -> Result<(), AppError> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::ValidationError(
                "Trailer URL must use http or https".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_page_size(page: u32, page_size: u32) -> Result<(), AppError> {
        if page < 1 {
            return Err(AppError::ValidationError(
                "Page must be at least 1".to_string(),
            ));
        }
        if page_size < 1 {
            return Err(AppError::ValidationError(
                "Page size must be positive".to_string(),
            ));
        }
        if page_size > 100 {
            return Err(AppError::ValidationError(
                "Page size cannot exceed 100".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_min_stars(min_stars: i32) -> Result<(), AppError> {
        if !(0..=5).contains(&min_stars) {
            return Err(AppError::ValidationError(
                "Minimum stars must be between 0 and 5".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_media(content_type: &str, size_bytes: usize) -> Result<(), AppError> {
        if !ALLOWED_MEDIA_TYPES.contains(&content_type) {
            return Err(AppError::ValidationError(format!(
                "Unsupported media type '{}'",
                content_type
            )));
        }
        if size_bytes == 0 {
            return Err(AppError::ValidationError(
                "Media payload cannot be empty".to_string(),
            ));
        }
        if size_bytes > MAX_MEDIA_BYTES {
            return Err(AppError::ValidationError(
                "Media payload too large (max 5 MiB)".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_value_bounds() {
        assert!(Validator::validate_rating_value(1).is_ok());
        assert!(Validator::validate_rating_value(5).is_ok());
        assert!(Validator::validate_rating_value(0).is_err());
        assert!(Validator::validate_rating_value(6).is_err());
    }

    #[test]
    fn movie_title_rejects_blank_and_oversized() {
        assert!(Validator::validate_movie_title("Heat").is_ok());
        assert!(Validator::validate_movie_title("   ").is_err());
        assert!(Validator::validate_movie_title(&"x".repeat(256)).is_err());
    }

    #[test]
    fn email_shape() {
        assert!(Validator::validate_email("ana@example.com").is_ok());
        assert!(Validator::validate_email("not-an-email").is_err());
        assert!(Validator::validate_email("two@@example.com").is_err());
    }

    #[test]
    fn media_type_and_size() {
        assert!(Validator::validate_media("image/png", 1024).is_ok());
        assert!(Validator::validate_media("application/pdf", 1024).is_err());
        assert!(Validator::validate_media("image/png", 0).is_err());
        assert!(Validator::validate_media("image/png", 6 * 1024 * 1024).is_err());
    }

    #[test]
    fn page_size_window() {
        assert!(Validator::validate_page_size(1, 1).is_ok());
        assert!(Validator::validate_page_size(1, 100).is_ok());
        assert!(Validator::validate_page_size(1, 0).is_err());
        assert!(Validator::validate_page_size(1, 101).is_err());
    }
}
