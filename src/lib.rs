//! Core logic for a meme template service: catalog selection, rendering
//! variant resolution and example-URL synthesis. The embedding API layer
//! wires these pure functions to routes and owns all I/O.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod matcher;
pub mod select;
pub mod text;
pub mod urls;
pub mod variant;

/// Style tag marking a template with an animated rendering available.
pub const ANIMATED_STYLE: &str = "animated";
/// Style tag every template carries as its static baseline.
pub const DEFAULT_STYLE: &str = "default";

pub use catalog::{Catalog, CatalogHandle, Template};
pub use config::{Settings, TestFixture};
pub use matcher::{SkimTemplateMatcher, SubstringMatcher, TemplateMatcher};
pub use select::select;
pub use text::{DecodeError, EncodeError, decode, encode};
pub use urls::{
    ExamplePair, build_example_pair, build_example_url, build_self_url, build_test_urls,
};
pub use variant::{AnimationIntent, resolve_extension};
