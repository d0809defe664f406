//! Caption System Module
//!
//! Provides the subtitle core for Subreel:
//! - Caption data models (Word, CaptionBlock, CaptionTrack, CaptionStyle)
//! - Word-to-caption segmentation with configurable break policies
//! - SRT and WebVTT parsing and export
//! - Timestamp conversion between millisecond offsets and both text formats
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Caption System                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  models.rs     - Data structures (Word, Block, Track, Style)    │
//! │  timecode.rs   - HH:MM:SS,mmm / HH:MM:SS.mmm conversion         │
//! │  segmenter.rs  - Word stream -> caption blocks                  │
//! │  formats.rs    - SRT/VTT parsing and export                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything in this module is pure, synchronous computation. Parsers
//! skip malformed blocks instead of failing; formatters are total.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use subreel::captions::{segment_words, format_vtt, SegmentPolicy, Word};
//!
//! let words = vec![
//!     Word::new("Hello", 0, 400),
//!     Word::new("world", 420, 900),
//! ];
//!
//! let blocks = segment_words(&words, &SegmentPolicy::display());
//! let vtt = format_vtt(&blocks);
//! ```

mod formats;
mod models;
mod segmenter;
mod timecode;

// Re-export models
pub use models::{CaptionBlock, CaptionPosition, CaptionStyle, CaptionTrack, Word};

// Re-export segmentation
pub use segmenter::{
    build_segment_lines, segment_words, SegmentPolicy, MAX_CHARS_PER_LINE, MAX_SEGMENT_CHARS,
    MAX_SEGMENT_DURATION_MS, PAUSE_THRESHOLD_MS,
};

// Re-export format functions
pub use formats::{
    format_srt, format_vtt, format_vtt_styled, parse_srt, parse_srt_lenient, parse_vtt, VttStyle,
};

// Re-export timecode utilities
pub use timecode::{
    format_srt_timestamp, format_vtt_timestamp, parse_timestamp, srt_to_vtt_timestamp,
    vtt_to_srt_timestamp,
};
