//! Input validation helpers
//!
//! Centralized limits and validation functions for CRUD handlers.
//! SQLite TEXT has no built-in length enforcement.

use crate::utils::AppError;

// ── Limits ──────────────────────────────────────────────────────────

/// Entity names: zone, table
pub const MAX_NAME_LEN: usize = 200;

/// Largest party size a single table can be booked for
pub const MAX_GUEST_COUNT: i32 = 100;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate a guest count (positive, bounded).
pub fn validate_guest_count(guest_count: i32) -> Result<(), AppError> {
    if guest_count <= 0 {
        return Err(AppError::validation("guestCount must be positive"));
    }
    if guest_count > MAX_GUEST_COUNT {
        return Err(AppError::validation(format!(
            "guestCount is too large (max {MAX_GUEST_COUNT})"
        )));
    }
    Ok(())
}

/// Validate a table capacity (positive, bounded).
pub fn validate_capacity(capacity: i32) -> Result<(), AppError> {
    if capacity <= 0 {
        return Err(AppError::validation("capacity must be positive"));
    }
    if capacity > MAX_GUEST_COUNT {
        return Err(AppError::validation(format!(
            "capacity is too large (max {MAX_GUEST_COUNT})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_count_bounds() {
        assert!(validate_guest_count(1).is_ok());
        assert!(validate_guest_count(0).is_err());
        assert!(validate_guest_count(-3).is_err());
        assert!(validate_guest_count(MAX_GUEST_COUNT + 1).is_err());
    }

    #[test]
    fn required_text() {
        assert!(validate_required_text("patio", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
    }
}
