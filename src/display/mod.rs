//! Human-readable and serializable views of a solve result.
pub mod report;
pub mod trace;
