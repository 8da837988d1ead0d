//! Core components shared by both aggregators.
//!
//! - The main [`FeedClient`] and its builder.
//! - The primary [`FeedError`] type.
//! - The [`FeedSource`] response tag.
//! - The injected [`clock::Clock`] used for cache freshness.

/// The main client (`FeedClient`), builder, and configuration.
pub mod client;
/// Injected time source for the quote cache.
pub mod clock;
/// The primary error type (`FeedError`) for the crate.
pub mod error;
/// Shared response models.
pub mod models;

pub use client::{FeedClient, FeedClientBuilder};
pub use clock::{Clock, SystemClock};
pub use error::FeedError;
pub use models::FeedSource;
