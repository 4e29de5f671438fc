pub mod source_map;
mod unresolvable;

pub use unresolvable::UnresolvableTarget;
