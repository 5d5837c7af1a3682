//! Compress operation: Flate-compress every page's content streams.

use std::path::Path;

use lopdf::{Document, Object};

use crate::error::TransformError;

/// Summary of a successful compress run.
#[derive(Debug, Clone, Copy)]
pub struct CompressSummary {
    pub total_pages: usize,
}

/// Pass every page's content streams through Flate compression and save the
/// document to `output`.
///
/// Streams that already carry a Filter are left untouched, so running the
/// operation on its own output never re-encodes. Page count and order are
/// unchanged.
pub fn compress_document(input: &Path, output: &Path) -> Result<CompressSummary, TransformError> {
    let mut doc = Document::load(input)?;

    let pages = doc.get_pages();
    let total_pages = pages.len();

    let mut content_ids = Vec::new();
    for &page_id in pages.values() {
        content_ids.extend(doc.get_page_contents(page_id));
    }

    let mut compressed = 0usize;
    for content_id in content_ids {
        if let Object::Stream(stream) = doc.get_object_mut(content_id)? {
            if stream.allows_compression {
                stream.compress()?;
                compressed += 1;
            }
        }
    }
    log::info!("compressed {compressed} content streams across {total_pages} pages");

    doc.save(output)?;

    Ok(CompressSummary { total_pages })
}
