// src/extractors/mod.rs
pub mod assembler;
pub mod cell;
pub mod classify;
pub mod label;
pub mod model;
pub mod resources;
pub mod runs;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export key extraction types for convenience
pub use model::Category;
pub use resources::ResourceExtractor;
