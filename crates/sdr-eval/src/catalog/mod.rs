//! Test-case catalog
//!
//! Fixed corpus of lead fixtures per evaluation category. The built-in
//! corpus lives in [`TestCatalog::builtin`]; custom corpora load from YAML
//! or JSON files with the same shape.

mod builtin;
mod case;
mod loader;

pub use case::{
    ConsistencyCase, EdgeCase, EdgeCaseKind, InjectionCase, LatencyCases, PersonalizationCase,
    PersonalizationElement, ScoreRange, TestCatalog,
};
pub use loader::{load_catalog, load_catalog_from_yaml};
