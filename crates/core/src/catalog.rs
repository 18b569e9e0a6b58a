//! Validation rules for the series catalog and volume ownership records.

use crate::error::CoreError;

/// Maximum length for a series title in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum length for an author name in characters.
pub const MAX_AUTHOR_LENGTH: usize = 140;

/// Validate a series title: non-empty after trimming, within length limit.
pub fn validate_series_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Series title must not be empty".to_string()));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Series title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an optional author name.
pub fn validate_author(author: Option<&str>) -> Result<(), CoreError> {
    if let Some(author) = author {
        if author.len() > MAX_AUTHOR_LENGTH {
            return Err(CoreError::Validation(format!(
                "Author exceeds maximum length of {MAX_AUTHOR_LENGTH} characters"
            )));
        }
    }
    Ok(())
}

/// Validate an optional total-volume count: must be positive when present.
pub fn validate_total_volumes(total_volumes: Option<i32>) -> Result<(), CoreError> {
    if let Some(total) = total_volumes {
        if total < 1 {
            return Err(CoreError::Validation(
                "Total volumes must be at least 1".to_string(),
            ));
        }
    }
    Ok(())
}

/// Validate a volume number: numbering starts at 1.
pub fn validate_volume_number(volume_number: i32) -> Result<(), CoreError> {
    if volume_number < 1 {
        return Err(CoreError::Validation(
            "Volume number must be at least 1".to_string(),
        ));
    }
    Ok(())
}
