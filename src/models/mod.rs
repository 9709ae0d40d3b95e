//! Data models.
//!
//! This module contains the structures passed along the extraction pipeline:
//! raw features as read from a chart, and the finished records written to CSV.
pub mod record;
