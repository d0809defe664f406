//! Subreel Core Library
//!
//! Core engine for a video-subtitling application: an external
//! speech-to-text service produces word-level timestamps, the segmenter
//! turns them into readable caption blocks, and the codec serializes
//! blocks to SRT or WebVTT for export, storage, or subtitle burn-in.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         Subreel Core                             │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  captions/       - Caption data models, segmenter, SRT/VTT codec │
//! │  transcription   - Speech-to-text collaborator contract          │
//! │  transform       - Media-transformation collaborator contract    │
//! │  store           - Document-store persistence for video records  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The captions module is pure computation: no I/O, no shared state, no
//! failure modes beyond skipping malformed subtitle blocks on parse.
//! The collaborator modules define trait seams and data contracts for
//! the external services; they never host global client state.
//!
//! # Example
//!
//! ```rust,ignore
//! use subreel::captions::{segment_words, format_srt, SegmentPolicy, Word};
//!
//! let words = vec![
//!     Word::new("Hello", 0, 400),
//!     Word::new("world", 420, 900),
//! ];
//! let blocks = segment_words(&words, &SegmentPolicy::display());
//! let srt = format_srt(&blocks);
//! ```

pub mod captions;
pub mod store;
pub mod transcription;
pub mod transform;

mod types;
pub use types::*;

mod error;
pub use error::*;

#[cfg(test)]
mod tests_pipeline;
