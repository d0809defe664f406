//! Video Record Persistence
//!
//! Document-store contract for video/subtitle records. The production
//! collaborator is an external document database; the core only needs a
//! key-value document seam, so the trait is small: get/put/delete/list
//! over [`VideoRecord`]s.
//!
//! Subtitles persist as SRT text through the codec. The strict SRT round
//! trip (`parse_srt(format_srt(blocks)) == blocks`) is what makes this a
//! faithful storage encoding.
//!
//! Two implementations ship here: [`MemoryStore`] for tests and editor
//! state, and [`JsonFileStore`], which writes one pretty-printed JSON
//! document per record under a root directory.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::captions::{format_srt, parse_srt, CaptionBlock};
use crate::{EngineError, EngineResult, RecordId, VideoRef};

// =============================================================================
// Video Record
// =============================================================================

/// A stored video/subtitle document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// Unique record id
    pub id: RecordId,
    /// Reference to the video at the media collaborator
    pub video_ref: VideoRef,
    /// Subtitle language code
    pub language: String,
    /// Subtitles as SRT text, once generated
    pub srt: Option<String>,
    /// Creation timestamp (RFC 3339)
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl VideoRecord {
    /// Creates a new record with an auto-generated id
    pub fn new(video_ref: &str, language: &str) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            video_ref: video_ref.to_string(),
            language: language.to_string(),
            srt: None,
            created_at: chrono::Utc::now(),
        }
    }

    /// Stores a caption-block sequence as SRT text
    pub fn set_subtitles(&mut self, blocks: &[CaptionBlock]) {
        self.srt = Some(format_srt(blocks));
    }

    /// Returns the stored caption blocks, empty when none are stored
    pub fn subtitles(&self) -> Vec<CaptionBlock> {
        self.srt.as_deref().map(parse_srt).unwrap_or_default()
    }
}

// =============================================================================
// Document Store Trait
// =============================================================================

/// Key-value document store for video records
pub trait DocumentStore: Send + Sync {
    /// Fetches a record by id
    fn get(&self, id: &str) -> EngineResult<VideoRecord>;

    /// Inserts or replaces a record
    fn put(&self, record: &VideoRecord) -> EngineResult<()>;

    /// Deletes a record by id
    fn delete(&self, id: &str) -> EngineResult<()>;

    /// Lists all record ids
    fn list(&self) -> EngineResult<Vec<RecordId>>;
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory document store
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<RecordId, VideoRecord>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn get(&self, id: &str) -> EngineResult<VideoRecord> {
        self.records
            .lock()
            .map_err(|_| EngineError::Internal("Store lock poisoned".to_string()))?
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::RecordNotFound(id.to_string()))
    }

    fn put(&self, record: &VideoRecord) -> EngineResult<()> {
        self.records
            .lock()
            .map_err(|_| EngineError::Internal("Store lock poisoned".to_string()))?
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn delete(&self, id: &str) -> EngineResult<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| EngineError::Internal("Store lock poisoned".to_string()))?;
        records
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| EngineError::RecordNotFound(id.to_string()))
    }

    fn list(&self) -> EngineResult<Vec<RecordId>> {
        let records = self
            .records
            .lock()
            .map_err(|_| EngineError::Internal("Store lock poisoned".to_string()))?;
        Ok(records.keys().cloned().collect())
    }
}

// =============================================================================
// JSON File Store
// =============================================================================

/// Document store writing one JSON file per record
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at the given directory, creating it if needed
    pub fn open(root: impl Into<PathBuf>) -> EngineResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }
}

impl DocumentStore for JsonFileStore {
    fn get(&self, id: &str) -> EngineResult<VideoRecord> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(EngineError::RecordNotFound(id.to_string()));
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let record = serde_json::from_reader(reader)
            .map_err(|e| EngineError::StoreCorrupted(e.to_string()))?;
        Ok(record)
    }

    fn put(&self, record: &VideoRecord) -> EngineResult<()> {
        let file = File::create(self.record_path(&record.id))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, record)?;
        writer.flush()?;

        info!("Stored video record {}", record.id);
        Ok(())
    }

    fn delete(&self, id: &str) -> EngineResult<()> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(EngineError::RecordNotFound(id.to_string()));
        }
        std::fs::remove_file(path)?;
        info!("Deleted video record {}", id);
        Ok(())
    }

    fn list(&self) -> EngineResult<Vec<RecordId>> {
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        Ok(ids)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_subtitles() -> VideoRecord {
        let mut record = VideoRecord::new("video-abc", "en");
        record.set_subtitles(&[
            CaptionBlock::new(1, 0, 2000, "Hello World"),
            CaptionBlock::new(2, 2500, 5000, "Second\nline"),
        ]);
        record
    }

    // -------------------------------------------------------------------------
    // Record Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_record_subtitle_round_trip() {
        let record = record_with_subtitles();
        let blocks = record.subtitles();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "Hello World");
        assert_eq!(blocks[1].text, "Second\nline");
        assert_eq!(blocks[1].start_ms, 2500);
    }

    #[test]
    fn test_record_without_subtitles() {
        let record = VideoRecord::new("video-abc", "en");
        assert!(record.srt.is_none());
        assert!(record.subtitles().is_empty());
    }

    // -------------------------------------------------------------------------
    // Memory Store Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_memory_store_put_get_delete() {
        let store = MemoryStore::new();
        let record = record_with_subtitles();

        store.put(&record).unwrap();
        let loaded = store.get(&record.id).unwrap();
        assert_eq!(loaded, record);

        store.delete(&record.id).unwrap();
        assert!(matches!(
            store.get(&record.id),
            Err(EngineError::RecordNotFound(_))
        ));
    }

    #[test]
    fn test_memory_store_list() {
        let store = MemoryStore::new();
        let a = VideoRecord::new("a", "en");
        let b = VideoRecord::new("b", "en");
        store.put(&a).unwrap();
        store.put(&b).unwrap();

        let mut ids = store.list().unwrap();
        ids.sort();
        let mut expected = vec![a.id, b.id];
        expected.sort();
        assert_eq!(ids, expected);
    }

    // -------------------------------------------------------------------------
    // JSON File Store Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        let record = record_with_subtitles();

        store.put(&record).unwrap();
        let loaded = store.get(&record.id).unwrap();
        assert_eq!(loaded, record);
        assert_eq!(loaded.subtitles(), record.subtitles());
    }

    #[test]
    fn test_file_store_missing_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.get("nope"),
            Err(EngineError::RecordNotFound(_))
        ));
    }

    #[test]
    fn test_file_store_corrupted_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("bad.json"), "{not json").unwrap();

        assert!(matches!(
            store.get("bad"),
            Err(EngineError::StoreCorrupted(_))
        ));
    }

    #[test]
    fn test_file_store_list_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        let record = VideoRecord::new("video-abc", "en");

        store.put(&record).unwrap();
        assert_eq!(store.list().unwrap(), vec![record.id.clone()]);

        store.delete(&record.id).unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
