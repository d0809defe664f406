//! Cross-Module Pipeline Tests
//!
//! Exercises the full data flow: transcribed words -> segmenter ->
//! caption track -> codec -> burn request / document store.

use crate::captions::{
    format_srt, parse_srt, CaptionStyle, CaptionTrack, SegmentPolicy, Word,
};
use crate::store::{DocumentStore, MemoryStore, VideoRecord};
use crate::transform::BurnRequest;

fn sample_words() -> Vec<Word> {
    vec![
        Word::new("Hello", 0, 400),
        Word::new("world", 420, 900),
        Word::new("this", 2000, 2300),
        Word::new("is", 2320, 2500),
        Word::new("fine", 2520, 3000),
    ]
}

#[test]
fn test_words_to_track_to_srt() {
    let track = CaptionTrack::from_words(&sample_words(), &SegmentPolicy::display(), "Main", "en");

    assert_eq!(track.len(), 2);
    assert_eq!(track.blocks[0].text, "Hello world");
    assert_eq!(track.blocks[1].text, "this is fine");

    let srt = format_srt(&track.blocks);
    assert_eq!(
        srt,
        "1\n00:00:00,000 --> 00:00:00,900\nHello world\n\n\
         2\n00:00:02,000 --> 00:00:03,000\nthis is fine"
    );
}

#[test]
fn test_track_survives_store_round_trip() {
    let track = CaptionTrack::from_words(&sample_words(), &SegmentPolicy::storage(), "Main", "en");

    let mut record = VideoRecord::new("video-abc", "en");
    record.set_subtitles(&track.blocks);

    let store = MemoryStore::new();
    store.put(&record).unwrap();

    let loaded = store.get(&record.id).unwrap();
    assert_eq!(loaded.subtitles(), track.blocks);
}

#[test]
fn test_arabic_words_produce_rtl_burn_request() {
    let words = vec![
        Word::new("مرحبا", 0, 400),
        Word::new("بالعالم", 420, 900),
    ];
    let mut track = CaptionTrack::from_words(&words, &SegmentPolicy::display(), "Arabic", "ar");
    track.style = CaptionStyle::with_font_family("Tajawal");

    let request = BurnRequest::for_track("video-abc", &track).unwrap();
    assert!(request.vtt.contains("direction: rtl;"));
    assert!(request.vtt.contains("font-family: \"Tajawal\", sans-serif;"));
}

#[test]
fn test_edited_blocks_round_trip_for_export() {
    // Segment, edit a block like the UI would, re-export and re-parse
    let mut track =
        CaptionTrack::from_words(&sample_words(), &SegmentPolicy::display(), "Main", "en");
    track.blocks[0].text = "Hello there".to_string();
    track.blocks[0].end_ms = 1000;

    let reparsed = parse_srt(&format_srt(&track.blocks));
    assert_eq!(reparsed, track.blocks);
}
