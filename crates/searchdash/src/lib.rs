#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/searchdash/searchdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Search-performance dashboard state over pluggable analytics providers.
//!
//! This crate re-exports the core types and transforms, the cache and
//! provider implementations, and provides the [`Dashboard`] that owns the
//! selection state a renderer works from.
//!
//! # Features
//!
//! - `mock` - Demo provider with generated data (default)

// Core types and traits
pub use searchdash_core::*;

// Cache implementations
pub use searchdash_cache::{InMemoryCache, NoopCache};

// Providers
#[cfg(feature = "mock")]
pub use searchdash_mock::MockProvider;

mod dashboard;
mod snapshot;
pub use dashboard::Dashboard;
pub use snapshot::DashboardSnapshot;
