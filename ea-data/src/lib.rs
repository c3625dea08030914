//! Sample data and CSV cleanup for the analytics dashboards.
//!
//! This crate provides:
//! - `generator`: seeded product catalog and a year of daily sales
//! - `cleaner`: Indian-grouped price normalization for listing CSVs
//! - `combine`: merging partial checkpoint CSVs with URL deduplication
//!
//! The generated CSVs are the data source published to the hosted dashboards
//! the page embeds.

pub mod cleaner;
pub mod combine;
pub mod generator;
