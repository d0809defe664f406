//! Caption Format Parsers and Exporters
//!
//! Serializes caption blocks to SRT (SubRip) and WebVTT text and parses
//! both formats back, including the WebVTT `STYLE` block for font and
//! right-to-left rendering.
//!
//! Parsing is resilient by design: a malformed subtitle block is skipped
//! with a warning and scanning continues; parse functions never fail.
//! Two SRT parse entry points exist because both behaviors are in use:
//! [`parse_srt`] preserves the ids found in the source, while
//! [`parse_srt_lenient`] tolerates either millisecond separator and
//! renumbers the result from 1.
//!
//! # Example
//!
//! ```rust,ignore
//! use subreel::captions::{format_srt, parse_srt, CaptionBlock};
//!
//! let blocks = vec![CaptionBlock::new(1, 0, 2000, "Hello World")];
//! let srt = format_srt(&blocks);
//! assert_eq!(parse_srt(&srt), blocks);
//! ```

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use super::models::{renumber_blocks, CaptionBlock};
use super::timecode::{format_srt_timestamp, format_vtt_timestamp, parse_timestamp};

// =============================================================================
// Timestamp Line Recognition
// =============================================================================

/// Strict SRT timestamp line: comma millisecond separator only
fn srt_timestamp_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(\d+:\d{2}:\d{2},\d{3})\s*-->\s*(\d+:\d{2}:\d{2},\d{3})\s*$")
            .expect("valid SRT timestamp regex")
    })
}

/// Lenient timestamp line: comma or period millisecond separator
fn lenient_timestamp_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(\d+:\d{2}:\d{2}[,.]\d{3})\s*-->\s*(\d+:\d{2}:\d{2}[,.]\d{3})")
            .expect("valid lenient timestamp regex")
    })
}

/// Parses a `start --> end` line into millisecond offsets
fn parse_timestamp_line(line: &str, re: &Regex) -> Option<(u64, u64)> {
    let caps = re.captures(line)?;
    let start = parse_timestamp(caps.get(1)?.as_str())?;
    let end = parse_timestamp(caps.get(2)?.as_str())?;
    Some((start, end))
}

// =============================================================================
// SRT Format
// =============================================================================

/// Formats caption blocks as SRT text
///
/// Each block is rendered as `"{id}\n{start} --> {end}\n{text}"`; blocks
/// are separated by one blank line. Empty input yields an empty string.
pub fn format_srt(blocks: &[CaptionBlock]) -> String {
    blocks
        .iter()
        .map(|block| {
            format!(
                "{}\n{} --> {}\n{}",
                block.id,
                format_srt_timestamp(block.start_ms),
                format_srt_timestamp(block.end_ms),
                block.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Parses SRT text, preserving the ids found in the source
///
/// Line endings are normalized first, so both `\n` and `\r\n` input is
/// accepted. A block needs a numeric id line, a comma-separated
/// timestamp line, and at least one text line; anything else is skipped,
/// never fatal.
///
/// # SRT Format
///
/// ```text
/// 1
/// 00:00:01,000 --> 00:00:04,000
/// First caption text
///
/// 2
/// 00:00:05,500 --> 00:00:08,000
/// Second caption text
/// with multiple lines
/// ```
pub fn parse_srt(content: &str) -> Vec<CaptionBlock> {
    parse_srt_with(content, srt_timestamp_re(), true)
}

/// Parses SRT text leniently, renumbering ids sequentially from 1
///
/// Accepts either `,` or `.` as the millisecond separator and ignores
/// the id values found in the source.
pub fn parse_srt_lenient(content: &str) -> Vec<CaptionBlock> {
    parse_srt_with(content, lenient_timestamp_re(), false)
}

fn parse_srt_with(content: &str, re: &Regex, preserve_ids: bool) -> Vec<CaptionBlock> {
    let normalized = content.replace("\r\n", "\n");
    let mut blocks = Vec::new();

    for group in cue_groups(&normalized) {
        if group.len() < 3 {
            warn!("Skipping malformed SRT block: {:?}", group.first());
            continue;
        }

        let Ok(id) = group[0].trim().parse::<u32>() else {
            warn!("Skipping SRT block with non-numeric id: {:?}", group[0]);
            continue;
        };

        let Some((start_ms, end_ms)) = parse_timestamp_line(group[1], re) else {
            warn!("Skipping SRT block with bad timestamp line: {:?}", group[1]);
            continue;
        };

        let text = group[2..].join("\n");
        blocks.push(CaptionBlock::new(id, start_ms, end_ms, &text));
    }

    if !preserve_ids {
        renumber_blocks(&mut blocks);
    }

    debug!("Parsed {} SRT blocks", blocks.len());
    blocks
}

// =============================================================================
// VTT Format
// =============================================================================

/// Styling options for WebVTT export
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VttStyle {
    /// Font family for the `::cue` rule, if requested
    pub font_family: Option<String>,
}

impl VttStyle {
    /// Requests a font family in the exported `STYLE` block
    pub fn with_font_family(font_family: &str) -> Self {
        Self {
            font_family: Some(font_family.to_string()),
        }
    }
}

/// Formats caption blocks as WebVTT text
///
/// Emits the `WEBVTT` header, a `STYLE` block when any block text is in
/// an Arabic-range script (right-to-left rendering), then the cues with
/// period-separated timestamps. Empty input yields header-only output.
pub fn format_vtt(blocks: &[CaptionBlock]) -> String {
    format_vtt_styled(blocks, &VttStyle::default())
}

/// Formats caption blocks as WebVTT text with styling
///
/// When a font family is requested the `STYLE` block carries a
/// `::cue { font-family: "<family>", sans-serif; }` rule. When any block
/// text contains a character in U+0600–U+06FF the same cue rule
/// additionally carries `direction: rtl; unicode-bidi: embed;`.
pub fn format_vtt_styled(blocks: &[CaptionBlock], style: &VttStyle) -> String {
    let rtl = blocks.iter().any(|b| has_arabic(&b.text));

    let mut output = String::from("WEBVTT\n");

    if style.font_family.is_some() || rtl {
        output.push_str("\nSTYLE\n::cue {\n");
        if let Some(family) = &style.font_family {
            output.push_str(&format!("  font-family: \"{}\", sans-serif;\n", family));
        }
        if rtl {
            output.push_str("  direction: rtl;\n  unicode-bidi: embed;\n");
        }
        output.push_str("}\n");
    }

    for block in blocks {
        output.push_str(&format!(
            "\n{}\n{} --> {}\n{}\n",
            block.id,
            format_vtt_timestamp(block.start_ms),
            format_vtt_timestamp(block.end_ms),
            block.text
        ));
    }

    output
}

/// Parses WebVTT text into caption blocks
///
/// Tolerates header metadata, `STYLE`/`NOTE`/`REGION` blocks, optional
/// cue identifiers, cue settings after the end timestamp, and either
/// millisecond separator. Numeric cue identifiers are preserved as ids;
/// unnumbered cues get their 1-based position. Malformed cues are
/// skipped, never fatal.
pub fn parse_vtt(content: &str) -> Vec<CaptionBlock> {
    let normalized = content.replace("\r\n", "\n");
    let mut blocks = Vec::new();

    for group in cue_groups(&normalized) {
        let first = group[0].trim();

        // Header and non-cue blocks
        if first.starts_with("WEBVTT")
            || first.starts_with("STYLE")
            || first.starts_with("NOTE")
            || first.starts_with("REGION")
        {
            continue;
        }

        // Optional cue identifier before the timestamp line
        let (id_line, timestamp_idx) = if first.contains("-->") {
            (None, 0)
        } else {
            (Some(first), 1)
        };

        let Some(timestamp_line) = group.get(timestamp_idx) else {
            warn!("Skipping malformed VTT cue: {:?}", group.first());
            continue;
        };

        // Cue settings after the end timestamp are tolerated; the lenient
        // pattern anchors only at the line start.
        let Some((start_ms, end_ms)) = parse_timestamp_line(timestamp_line, lenient_timestamp_re())
        else {
            warn!("Skipping VTT cue with bad timestamp line: {:?}", timestamp_line);
            continue;
        };

        let text_lines = &group[timestamp_idx + 1..];
        if text_lines.is_empty() {
            warn!("Skipping VTT cue without text at {}ms", start_ms);
            continue;
        }

        let id = id_line
            .and_then(|l| l.trim().parse::<u32>().ok())
            .unwrap_or(blocks.len() as u32 + 1);
        blocks.push(CaptionBlock::new(id, start_ms, end_ms, &text_lines.join("\n")));
    }

    debug!("Parsed {} VTT cues", blocks.len());
    blocks
}

// =============================================================================
// Helpers
// =============================================================================

/// Splits normalized text into blank-line-separated line groups
fn cue_groups(normalized: &str) -> impl Iterator<Item = Vec<&str>> {
    normalized
        .split("\n\n")
        .map(|chunk| {
            chunk
                .lines()
                .filter(|l| !l.trim().is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|group| !group.is_empty())
}

/// Returns true if the text contains a character in the Arabic block
/// (U+0600–U+06FF)
fn has_arabic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

// =============================================================================
// Tests
// =============================================================================
