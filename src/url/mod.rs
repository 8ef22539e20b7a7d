//! URL utilities
//!
//! This module handles URL normalization for revisit detection. The crawler
//! always fetches the resolved URL exactly as discovered; the normalized form
//! is only the identity used by the visited set.

mod normalize;

pub use normalize::{normalize_url, parse_seed_url};
