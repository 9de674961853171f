//! Booking domain logic
//!
//! The availability / search / recommendation pipeline and the
//! reservation lifecycle, layered over the repositories:
//!
//! - [`availability`] - half-open overlap checks per table
//! - [`search`] - candidate filtering for a window
//! - [`recommend`] - fitness scoring and best-match selection
//! - [`occupancy`] - busy-table resolution (with optional demo mode)
//! - [`reservation`] - fixed-duration creation and cancellation

pub mod availability;
pub mod occupancy;
pub mod recommend;
pub mod reservation;
pub mod search;

pub use occupancy::DemoOccupancy;
pub use search::{SearchCriteria, SearchOutcome};
