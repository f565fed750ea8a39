//! Recording stub for the hosted media service.

use async_trait::async_trait;
use medley_cloud::{CloudResult, CloudUpload, MediaCloud, UploadReceipt};
use medley_core::models::{MediaType, TranscodeDirective};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub kind: MediaType,
    pub size_bytes: usize,
    pub directive: Option<TranscodeDirective>,
    pub content_id: String,
}

/// In-memory media service: records every call, assigns sequential content
/// ids, and reports a transcoded size of half the input.
pub struct RecordingCloud {
    uploads: Mutex<Vec<RecordedUpload>>,
    destroys: Mutex<Vec<(MediaType, String)>>,
    next_id: AtomicUsize,
}

impl RecordingCloud {
    pub fn new() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            destroys: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn last_directive(&self) -> Option<TranscodeDirective> {
        self.uploads
            .lock()
            .unwrap()
            .last()
            .and_then(|u| u.directive.clone())
    }

    pub fn destroy_count(&self) -> usize {
        self.destroys.lock().unwrap().len()
    }

    pub fn destroyed_ids(&self) -> Vec<String> {
        self.destroys
            .lock()
            .unwrap()
            .iter()
            .map(|(_, id)| id.clone())
            .collect()
    }
}

impl Default for RecordingCloud {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaCloud for RecordingCloud {
    async fn upload(&self, upload: CloudUpload) -> CloudResult<UploadReceipt> {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let content_id = format!("gallery/test-{}", n);
        let bytes = (upload.data.len() / 2).max(1) as i64;
        let duration = match upload.kind {
            MediaType::Video => Some(12.5),
            MediaType::Image => None,
        };

        self.uploads.lock().unwrap().push(RecordedUpload {
            kind: upload.kind,
            size_bytes: upload.data.len(),
            directive: upload.directive.clone(),
            content_id: content_id.clone(),
        });

        Ok(UploadReceipt {
            content_id,
            bytes,
            duration,
        })
    }

    async fn destroy(&self, kind: MediaType, content_id: &str) -> CloudResult<()> {
        self.destroys
            .lock()
            .unwrap()
            .push((kind, content_id.to_string()));
        Ok(())
    }
}
