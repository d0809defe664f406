//! Common Type Aliases
//!
//! Shared primitive aliases used across the engine.

/// Time offset in milliseconds from the start of the media
pub type TimeMs = u64;

/// Unique identifier for a caption track
pub type TrackId = String;

/// Unique identifier for a stored video record
pub type RecordId = String;

/// Opaque reference to a video held by the media/storage collaborator
/// (public id, URL, or provider-specific handle; never interpreted here)
pub type VideoRef = String;
