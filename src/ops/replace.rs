//! Replace operation: swap a page range for blank pages.

use std::path::Path;

use lopdf::{Document, Object};

use crate::error::TransformError;
use crate::ops::blank::{page_dimensions, synthesize_blank_page};

/// Summary of a successful replace run.
#[derive(Debug, Clone)]
pub struct ReplaceSummary {
    pub total_pages: u32,
    /// 1-indexed numbers of the pages that were blanked, in order.
    pub replaced: Vec<u32>,
    pub page_width: f32,
    pub page_height: f32,
}

/// Replace every page in the 1-indexed inclusive range `[start_page,
/// end_page]` with a freshly synthesized blank page and save to `output`.
///
/// Blank dimensions always come from the first page's media box, never the
/// replaced page's own. Range bounds are not validated against the document:
/// positions outside it simply never match, so an out-of-range request is a
/// no-op rather than an error. Page count and order are unchanged.
pub fn replace_pages(
    input: &Path,
    output: &Path,
    start_page: u32,
    end_page: u32,
) -> Result<ReplaceSummary, TransformError> {
    let mut doc = Document::load(input)?;

    let pages = doc.get_pages();
    let total_pages = pages.len() as u32;

    let (&first_number, &first_id) = pages.iter().next().ok_or(TransformError::EmptyDocument)?;
    let (page_width, page_height) = page_dimensions(&doc, first_number, first_id)?;

    let mut replaced = Vec::new();
    for (&number, &page_id) in &pages {
        if number < start_page || number > end_page {
            continue;
        }

        // Install the blank at the same object id so the Kids arrays of the
        // page tree never need surgery.
        let parent = doc.get_dictionary(page_id)?.get(b"Parent")?.as_reference()?;
        let blank = synthesize_blank_page(&mut doc, parent, page_width, page_height);
        doc.objects.insert(page_id, Object::Dictionary(blank));
        replaced.push(number);
    }

    if !replaced.is_empty() {
        // Drop the content streams the blanks orphaned.
        doc.prune_objects();
    }
    log::info!("replaced {} of {total_pages} pages", replaced.len());

    doc.save(output)?;

    Ok(ReplaceSummary {
        total_pages,
        replaced,
        page_width,
        page_height,
    })
}
