#![allow(dead_code)]

use folio::{DocViewer, DrawCall, RecordingBackend};
use lopdf::Document as LopdfDocument;
use std::io::Cursor;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around an exported PDF with helper methods
pub struct ExportedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl ExportedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Decoded content stream operators of a 1-based page.
    pub fn operators(&self, page: u32) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let page_id = *self
            .doc
            .get_pages()
            .get(&page)
            .ok_or_else(|| format!("no page {}", page))?;
        let content = self.doc.get_and_decode_page_content(page_id)?;
        Ok(content.operations.into_iter().map(|op| op.operator).collect())
    }
}

pub fn export_pdf(viewer: &DocViewer) -> Result<ExportedPdf, Box<dyn std::error::Error>> {
    let writer = viewer.export_to_writer(Cursor::new(Vec::new()))?;
    ExportedPdf::from_bytes(writer.into_inner())
}

pub fn record(viewer: &DocViewer) -> Result<RecordingBackend, folio::RenderError> {
    let mut backend = RecordingBackend::new();
    viewer.export_with(&mut backend)?;
    Ok(backend)
}

/// Text of every text-producing call, in order.
pub fn drawn_texts(backend: &RecordingBackend) -> Vec<String> {
    backend
        .calls()
        .iter()
        .filter_map(|call| match call {
            DrawCall::Cell { text, .. } | DrawCall::MultiCell { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
