// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum PackageError {
    #[error("Unable to locate {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("Could not read DOCX container: {0}")]
    Archive(#[from] zip::result::ZipError), // Automatically convert zip errors

    #[error("Document part missing from package: {0}")]
    MissingPart(String),

    #[error("Malformed XML in {part}: {message}")]
    Xml { part: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Document structure error: {0}")]
    Structure(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Package reading failed: {0}")]
    Package(#[from] PackageError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
