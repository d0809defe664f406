//! Word-to-Caption Segmentation
//!
//! Converts a chronological word stream into caption blocks by applying
//! independent break conditions, any one of which closes the current
//! block:
//!
//! - **Pause break**: the gap before the next word exceeds
//!   [`PAUSE_THRESHOLD_MS`].
//! - **Duration break**: accepting the next word would stretch the block
//!   past [`MAX_SEGMENT_DURATION_MS`].
//! - **Length break**: accepting the next word would push the joined
//!   text past [`MAX_SEGMENT_CHARS`] (storage policy only).
//!
//! The pass is a single forward scan, O(n) in word count, deterministic,
//! and never fails. Block text is line-wrapped greedily at
//! [`MAX_CHARS_PER_LINE`] characters.

use tracing::debug;

use super::models::{renumber_blocks, CaptionBlock, Word};
use crate::TimeMs;

// =============================================================================
// Thresholds
// =============================================================================

/// Silence gap that forces a new caption block, in milliseconds
pub const PAUSE_THRESHOLD_MS: TimeMs = 700;

/// Maximum time span of a single caption block, in milliseconds
pub const MAX_SEGMENT_DURATION_MS: TimeMs = 7000;

/// Maximum joined character length of a block (storage policy)
pub const MAX_SEGMENT_CHARS: usize = 90;

/// Maximum characters per display line
pub const MAX_CHARS_PER_LINE: usize = 42;

// =============================================================================
// Segmentation Policy
// =============================================================================

/// Break-rule configuration for the segmenter
///
/// Two call sites in the application need different rule subsets, so the
/// active rules are policy data rather than two parallel algorithms:
/// [`SegmentPolicy::display`] applies pause and duration breaks only;
/// [`SegmentPolicy::storage`] additionally caps the joined character
/// length of each block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentPolicy {
    /// Gap above which a new block starts
    pub pause_threshold_ms: TimeMs,
    /// Maximum span of one block
    pub max_duration_ms: TimeMs,
    /// Maximum joined character length of one block, if capped
    pub max_chars: Option<usize>,
    /// Line-wrap width for block text
    pub max_line_chars: usize,
}

impl SegmentPolicy {
    /// Policy for display-oriented segmentation: pause + duration breaks
    pub fn display() -> Self {
        Self {
            pause_threshold_ms: PAUSE_THRESHOLD_MS,
            max_duration_ms: MAX_SEGMENT_DURATION_MS,
            max_chars: None,
            max_line_chars: MAX_CHARS_PER_LINE,
        }
    }

    /// Policy for storage-oriented segmentation: adds the length break
    pub fn storage() -> Self {
        Self {
            max_chars: Some(MAX_SEGMENT_CHARS),
            ..Self::display()
        }
    }

    /// Overrides the pause threshold
    pub fn with_pause_threshold(mut self, ms: TimeMs) -> Self {
        self.pause_threshold_ms = ms;
        self
    }

    /// Overrides the maximum block duration
    pub fn with_max_duration(mut self, ms: TimeMs) -> Self {
        self.max_duration_ms = ms;
        self
    }
}

impl Default for SegmentPolicy {
    fn default() -> Self {
        Self::display()
    }
}

// =============================================================================
// Segmentation
// =============================================================================

/// Segments a chronological word stream into caption blocks
///
/// Pure function: identical input always yields identical blocks. Empty
/// input yields an empty vector. Output ids are contiguous and 1-based.
/// Word timing is taken as-is; validating malformed words is the
/// caller's concern.
pub fn segment_words(words: &[Word], policy: &SegmentPolicy) -> Vec<CaptionBlock> {
    let mut blocks = Vec::new();
    let mut run: Vec<&Word> = Vec::new();
    // Joined char length of the run (words + separating spaces)
    let mut run_chars = 0usize;

    for word in words {
        if run.is_empty() {
            run_chars = word.char_len();
            run.push(word);
            continue;
        }

        let last = run[run.len() - 1];
        let first = run[0];

        let pause_break = word.start_ms.saturating_sub(last.end_ms) > policy.pause_threshold_ms;
        let duration_break =
            word.end_ms.saturating_sub(first.start_ms) > policy.max_duration_ms;
        let length_break = policy
            .max_chars
            .is_some_and(|max| run_chars + 1 + word.char_len() > max);

        if pause_break || duration_break || length_break {
            blocks.push(close_run(&run, policy.max_line_chars));
            run.clear();
            run_chars = word.char_len();
        } else {
            run_chars += 1 + word.char_len();
        }
        run.push(word);
    }

    if !run.is_empty() {
        blocks.push(close_run(&run, policy.max_line_chars));
    }

    renumber_blocks(&mut blocks);
    debug!("Segmented {} words into {} blocks", words.len(), blocks.len());
    blocks
}

/// Closes a word run into a caption block (id assigned afterwards)
fn close_run(run: &[&Word], max_line_chars: usize) -> CaptionBlock {
    let start_ms = run[0].start_ms;
    let end_ms = run[run.len() - 1].end_ms;
    let text = wrap_words(run, max_line_chars);
    CaptionBlock::new(0, start_ms, end_ms, &text)
}

/// Greedily wraps words into display lines
///
/// Words are joined with single spaces; a new line starts when appending
/// the next word (plus its separating space) would exceed `max_line_chars`.
/// A single word longer than the limit occupies its own line unshortened.
pub fn build_segment_lines(words: &[Word], max_line_chars: usize) -> String {
    let refs: Vec<&Word> = words.iter().collect();
    wrap_words(&refs, max_line_chars)
}

fn wrap_words(run: &[&Word], max_line_chars: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_chars = 0usize;

    for word in run {
        let wlen = word.char_len();
        if line_chars == 0 {
            line.push_str(&word.text);
            line_chars = wlen;
        } else if line_chars + 1 + wlen > max_line_chars {
            lines.push(std::mem::take(&mut line));
            line.push_str(&word.text);
            line_chars = wlen;
        } else {
            line.push(' ');
            line.push_str(&word.text);
            line_chars += 1 + wlen;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}

// =============================================================================
// Tests
// =============================================================================
