//! Hospital tracking on top of `hosptrack-api`.
//!
//! - **[`HospitalView`]**: hospitalized faction members ordered by soonest
//!   release, with remaining time relative to a supplied "now".
//! - **[`Tracker`]**: the sequential workflow (key check, optional
//!   user-to-faction lookup, hospital lookup) ending in a [`TrackOutcome`].
//! - **[`format_remaining`]**: `H:MM:SS` / `MM:SS` duration display.

pub mod duration;
pub mod hospital;
pub mod tracker;

pub use duration::{format_remaining, format_remaining_secs};
pub use hospital::{HospitalView, HospitalizedMember};
pub use tracker::{Target, TrackOutcome, Tracker};

pub use hosptrack_api as api;
