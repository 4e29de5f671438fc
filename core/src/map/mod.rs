//! Import map data model, composition and lookup.

pub mod compose;
mod import_map;
pub mod matching;
pub mod resolve;
mod target;

pub use compose::{Composed, compose};
pub use import_map::{ImportMap, PackageMap};
pub use resolve::{Resolution, resolve};
pub use target::MappingTarget;
