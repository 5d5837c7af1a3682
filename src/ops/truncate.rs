//! Truncate operation: keep only the first N pages.

use std::path::Path;

use lopdf::Document;

use crate::error::TransformError;

/// Summary of a successful truncate run.
#[derive(Debug, Clone, Copy)]
pub struct TruncateSummary {
    pub total_pages: u32,
    pub kept_pages: u32,
}

/// Keep the first `max_pages` pages of the document and save it to `output`.
///
/// A request past the end of the document keeps everything; a non-positive
/// request keeps nothing and still writes a valid, empty document. Kept pages
/// stay in their original order.
pub fn truncate_document(
    input: &Path,
    output: &Path,
    max_pages: i64,
) -> Result<TruncateSummary, TransformError> {
    let mut doc = Document::load(input)?;

    let total_pages = doc.get_pages().len() as u32;
    let kept_pages = max_pages.clamp(0, i64::from(total_pages)) as u32;

    if kept_pages < total_pages {
        let trailing: Vec<u32> = (kept_pages + 1..=total_pages).collect();
        doc.delete_pages(&trailing);
        doc.prune_objects();
        log::info!("dropped {} trailing pages", trailing.len());
    }

    doc.save(output)?;

    Ok(TruncateSummary {
        total_pages,
        kept_pages,
    })
}
