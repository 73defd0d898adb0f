//! Bundle catalog and the weighted matching engine that ranks it.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod import;

pub use catalog::{standard_bundles, CatalogError, CatalogProvider, StaticCatalog};
pub use domain::{
    Bundle, BundleComponent, BundleId, FactorKind, FactorScore, MatchResult, ShaftFlex,
};
pub use engine::{MatchingConfig, MatchingEngine, Weights, DEFAULT_WEIGHTS};
pub use import::{CatalogImportError, CatalogImporter};
