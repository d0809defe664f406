//! Media Transformation Collaborator Contract
//!
//! Trait seam for the external media CDN/transformation service used for
//! subtitle burn-in. The service accepts a video reference plus
//! transformation parameters and returns a URL; the caption core only
//! prepares the styled WebVTT payload. Style values are opaque
//! pass-through.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::captions::{format_vtt_styled, CaptionStyle, CaptionTrack, VttStyle};
use crate::{EngineError, EngineResult, VideoRef};

// =============================================================================
// Request / Response
// =============================================================================

/// A subtitle burn-in request for the transformation collaborator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnRequest {
    /// Video to transform
    pub video_ref: VideoRef,
    /// Subtitles as WebVTT text
    pub vtt: String,
    /// Styling parameters, passed through uninterpreted
    pub style: CaptionStyle,
}

impl BurnRequest {
    /// Builds a burn request from a caption track
    ///
    /// Serializes the track to WebVTT using the track's font family;
    /// right-to-left scripts are detected from the block text.
    pub fn for_track(video_ref: &str, track: &CaptionTrack) -> EngineResult<Self> {
        if video_ref.is_empty() {
            return Err(EngineError::EmptyVideoRef);
        }

        let vtt_style = VttStyle::with_font_family(&track.style.font_family);
        Ok(Self {
            video_ref: video_ref.to_string(),
            vtt: format_vtt_styled(&track.blocks, &vtt_style),
            style: track.style.clone(),
        })
    }
}

/// Result of a completed transformation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformedMedia {
    /// URL of the transformed (subtitle-burned) video
    pub url: String,
}

// =============================================================================
// Transformer Trait
// =============================================================================

/// Trait for media transformation providers
#[async_trait]
pub trait MediaTransformer: Send + Sync {
    /// Returns the provider name
    fn name(&self) -> &str;

    /// Burns subtitles into a video and returns the result URL
    async fn burn_subtitles(&self, request: BurnRequest) -> EngineResult<TransformedMedia>;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::captions::CaptionBlock;

    struct EchoTransformer;

    #[async_trait]
    impl MediaTransformer for EchoTransformer {
        fn name(&self) -> &str {
            "echo"
        }

        async fn burn_subtitles(&self, request: BurnRequest) -> EngineResult<TransformedMedia> {
            Ok(TransformedMedia {
                url: format!("https://cdn.example.com/{}.mp4", request.video_ref),
            })
        }
    }

    fn track_with_block(text: &str) -> CaptionTrack {
        let mut track = CaptionTrack::create("Subtitles", "en");
        track.add_block(CaptionBlock::new(1, 0, 2000, text));
        track
    }

    #[test]
    fn test_burn_request_carries_styled_vtt() {
        let mut track = track_with_block("Hello World");
        track.style = CaptionStyle::with_font_family("Roboto");

        let request = BurnRequest::for_track("abc123", &track).unwrap();
        assert!(request.vtt.starts_with("WEBVTT"));
        assert!(request.vtt.contains("font-family: \"Roboto\", sans-serif;"));
        assert_eq!(request.style.font_family, "Roboto");
    }

    #[test]
    fn test_burn_request_rejects_empty_video_ref() {
        let track = track_with_block("Hello");
        assert!(matches!(
            BurnRequest::for_track("", &track),
            Err(EngineError::EmptyVideoRef)
        ));
    }

    #[tokio::test]
    async fn test_transformer_returns_url() {
        let track = track_with_block("Hello");
        let request = BurnRequest::for_track("abc123", &track).unwrap();

        let media = EchoTransformer.burn_subtitles(request).await.unwrap();
        assert_eq!(media.url, "https://cdn.example.com/abc123.mp4");
    }
}
