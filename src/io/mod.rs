//! IO module for format-specific dataset loading.
//!
//! Boundary data reaches the core as parsed [`Country`](crate::Country)
//! values; this module holds the loaders that produce them. Only GeoJSON is
//! supported today.

pub mod geojson;
