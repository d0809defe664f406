//! Subreel Error Definitions
//!
//! Defines error types used throughout the engine.
//!
//! The caption core (segmentation, SRT/VTT format and parse) is total and
//! never returns these errors; they exist for the collaborator seams
//! (transcription, media transformation) and the persistence layer.

use thiserror::Error;

use crate::RecordId;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    // =========================================================================
    // Transcription Errors
    // =========================================================================
    #[error("Transcription request failed: {0}")]
    TranscriptionFailed(String),

    #[error("Transcript not ready: {0}")]
    TranscriptNotReady(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    // =========================================================================
    // Media Transformation Errors
    // =========================================================================
    #[error("Media transformation failed: {0}")]
    TransformFailed(String),

    #[error("Empty video reference")]
    EmptyVideoRef,

    // =========================================================================
    // Store Errors
    // =========================================================================
    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("Store corrupted: {0}")]
    StoreCorrupted(String),

    // =========================================================================
    // General Errors
    // =========================================================================
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Engine result type
pub type EngineResult<T> = Result<T, EngineError>;
