// src/docx/mod.rs
pub mod models;
pub mod package;

pub use models::Relationships;
pub use package::Package;
