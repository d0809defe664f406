//! Caption Data Models
//!
//! Defines the data structures for transcribed words and caption blocks.
//!
//! # Overview
//!
//! A transcription collaborator delivers [`Word`]s with millisecond
//! offsets; the segmenter groups them into [`CaptionBlock`]s; blocks are
//! collected into a [`CaptionTrack`] for editing, storage, and export.
//! All timing is integer milliseconds, with no floating point and no calendar
//! types.

use serde::{Deserialize, Serialize};

use crate::TimeMs;

// =============================================================================
// Word
// =============================================================================

/// A single transcribed token with millisecond timing
///
/// Produced by the transcription collaborator. The word sequence is
/// expected to be ordered by `start_ms` non-decreasing; the segmenter
/// tolerates near-monotonic input and performs no validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// Literal token text
    pub text: String,
    /// Start offset in milliseconds
    pub start_ms: TimeMs,
    /// End offset in milliseconds (>= start_ms)
    pub end_ms: TimeMs,
}

impl Word {
    /// Creates a new word
    pub fn new(text: &str, start_ms: TimeMs, end_ms: TimeMs) -> Self {
        Self {
            text: text.to_string(),
            start_ms,
            end_ms,
        }
    }

    /// Returns the duration of this word in milliseconds
    pub fn duration_ms(&self) -> TimeMs {
        self.end_ms.saturating_sub(self.start_ms)
    }

    /// Returns the character length of the token text
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

// =============================================================================
// Caption Block
// =============================================================================

/// A single displayed subtitle unit spanning a time range
///
/// Ids are 1-based. Sequences produced by the segmenter always carry
/// contiguous ids matching array position (`id == position + 1`); parsed
/// sequences may carry arbitrary ids when the id-preserving parse mode
/// is used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionBlock {
    /// 1-based sequence number
    pub id: u32,
    /// Start offset in milliseconds
    pub start_ms: TimeMs,
    /// End offset in milliseconds (>= start_ms)
    pub end_ms: TimeMs,
    /// Caption text (may contain embedded line breaks)
    pub text: String,
}

impl CaptionBlock {
    /// Creates a new caption block
    pub fn new(id: u32, start_ms: TimeMs, end_ms: TimeMs, text: &str) -> Self {
        Self {
            id,
            start_ms,
            end_ms,
            text: text.to_string(),
        }
    }

    /// Returns the duration of this block in milliseconds
    pub fn duration_ms(&self) -> TimeMs {
        self.end_ms.saturating_sub(self.start_ms)
    }

    /// Returns true if the block is visible at the given offset
    pub fn is_visible_at(&self, time_ms: TimeMs) -> bool {
        time_ms >= self.start_ms && time_ms < self.end_ms
    }

    /// Returns true if this block overlaps another in time
    pub fn overlaps(&self, other: &CaptionBlock) -> bool {
        self.start_ms < other.end_ms && self.end_ms > other.start_ms
    }
}

/// Renumbers a block sequence with contiguous 1-based ids in place
pub(crate) fn renumber_blocks(blocks: &mut [CaptionBlock]) {
    for (index, block) in blocks.iter_mut().enumerate() {
        block.id = index as u32 + 1;
    }
}

// =============================================================================
// Caption Styling
// =============================================================================

/// Vertical position of captions on screen
///
/// Pass-through value for the media-transformation collaborator; the
/// core never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CaptionPosition {
    /// Bottom of screen (default for subtitles)
    #[default]
    Bottom,
    /// Top of screen
    Top,
    /// Center of screen
    Center,
}

/// Caption styling parameters
///
/// Opaque pass-through for subtitle burn-in. Only `font_family` is read
/// by the core, to emit the WebVTT `STYLE` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionStyle {
    /// Font family name
    pub font_family: String,
    /// Text color as a hex string (e.g. "FFFFFF")
    pub color: String,
    /// Vertical position on screen
    pub position: CaptionPosition,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            color: "FFFFFF".to_string(),
            position: CaptionPosition::Bottom,
        }
    }
}

impl CaptionStyle {
    /// Creates a style with the given font family
    pub fn with_font_family(font_family: &str) -> Self {
        Self {
            font_family: font_family.to_string(),
            ..Default::default()
        }
    }
}

// =============================================================================
// Caption Track
// =============================================================================

/// A named, language-tagged collection of caption blocks
///
/// Ownership is exclusive to the holder (editor state, export request);
/// the core keeps no shared caption list. Blocks are kept ordered by
/// start time with contiguous 1-based ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    /// Unique identifier
    pub id: crate::TrackId,
    /// Display name
    pub name: String,
    /// Language code (e.g. "en", "ar", "ko")
    pub language: String,
    /// Default style for burn-in export
    pub style: CaptionStyle,
    /// Ordered caption blocks
    pub blocks: Vec<CaptionBlock>,
}

impl CaptionTrack {
    /// Creates a new caption track
    pub fn new(id: &str, name: &str, language: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            language: language.to_string(),
            style: CaptionStyle::default(),
            blocks: vec![],
        }
    }

    /// Creates a track with an auto-generated ID
    pub fn create(name: &str, language: &str) -> Self {
        Self::new(&ulid::Ulid::new().to_string(), name, language)
    }

    /// Creates a track by segmenting a word stream
    pub fn from_words(
        words: &[Word],
        policy: &super::SegmentPolicy,
        name: &str,
        language: &str,
    ) -> Self {
        let mut track = Self::create(name, language);
        track.blocks = super::segment_words(words, policy);
        track
    }

    /// Adds a block, keeping time order and contiguous ids
    pub fn add_block(&mut self, block: CaptionBlock) {
        self.blocks.push(block);
        self.blocks.sort_by_key(|b| b.start_ms);
        renumber_blocks(&mut self.blocks);
    }

    /// Removes a block by id, renumbering the remainder
    pub fn remove_block(&mut self, id: u32) -> Option<CaptionBlock> {
        let pos = self.blocks.iter().position(|b| b.id == id)?;
        let removed = self.blocks.remove(pos);
        renumber_blocks(&mut self.blocks);
        Some(removed)
    }

    /// Returns the block with the given id
    pub fn get_block(&self, id: u32) -> Option<&CaptionBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Returns blocks visible at the given offset
    pub fn blocks_at(&self, time_ms: TimeMs) -> Vec<&CaptionBlock> {
        self.blocks
            .iter()
            .filter(|b| b.is_visible_at(time_ms))
            .collect()
    }

    /// Returns the end offset of the last block, in milliseconds
    pub fn duration_ms(&self) -> TimeMs {
        self.blocks.last().map(|b| b.end_ms).unwrap_or(0)
    }

    /// Returns the full text of all blocks
    pub fn full_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns the number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the track has no blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Default for CaptionTrack {
    fn default() -> Self {
        Self::create("Subtitles", "en")
    }
}

// =============================================================================
// Tests
// =============================================================================
