//! Transcription Collaborator Contract
//!
//! Defines the trait seam and data contracts for the external
//! speech-to-text service. The service is a black box: it accepts a
//! media reference and eventually returns word-level timestamps. The
//! caption core consumes the word list only once the job status reports
//! completion; polling cadence and timeouts are the caller's policy.
//!
//! Provider configuration is explicit and passed in at construction;
//! no module-level client state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::captions::Word;
use crate::{EngineError, EngineResult, VideoRef};

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for a transcription provider
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionConfig {
    /// Provider API key
    pub api_key: String,
    /// Provider endpoint base URL
    pub endpoint: String,
    /// Language code hint (e.g. "en", "ar"), or None for auto-detect
    pub language: Option<String>,
}

impl TranscriptionConfig {
    /// Creates a config for the given credentials
    pub fn new(api_key: &str, endpoint: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            endpoint: endpoint.to_string(),
            language: None,
        }
    }

    /// Sets the language hint
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> EngineResult<()> {
        if self.api_key.is_empty() {
            return Err(EngineError::ConfigError(
                "Transcription API key is empty".to_string(),
            ));
        }
        if self.endpoint.is_empty() {
            return Err(EngineError::ConfigError(
                "Transcription endpoint is empty".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Job Status
// =============================================================================

/// Status of a transcription job
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptStatus {
    /// Accepted, not yet started
    Queued,
    /// Transcription in progress
    Processing,
    /// Word list available
    Completed,
    /// Provider-side failure
    Failed,
}

/// A transcription job tracked at the provider
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptJob {
    /// Provider-assigned job id
    pub job_id: String,
    /// Media this job transcribes
    pub video_ref: VideoRef,
    /// Current status
    pub status: TranscriptStatus,
}

/// A completed transcript: time-ordered word-level timestamps
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    /// Detected or requested language
    pub language: String,
    /// Ordered word list
    pub words: Vec<Word>,
}

impl Transcript {
    /// Returns the plain transcript text
    pub fn full_text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// =============================================================================
// Provider Trait
// =============================================================================

/// Trait for speech-to-text providers
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    /// Returns the provider name
    fn name(&self) -> &str;

    /// Submits a media reference for transcription
    async fn submit(&self, video_ref: &str) -> EngineResult<TranscriptJob>;

    /// Fetches the current status of a job
    async fn status(&self, job_id: &str) -> EngineResult<TranscriptStatus>;

    /// Fetches the word list of a completed job
    ///
    /// Implementations must return [`EngineError::TranscriptNotReady`]
    /// while the job is still queued or processing.
    async fn transcript(&self, job_id: &str) -> EngineResult<Transcript>;
}

// =============================================================================
// Tests
// =============================================================================
