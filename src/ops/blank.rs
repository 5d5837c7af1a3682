//! Blank-page synthesis and page geometry lookup.

use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

use crate::error::TransformError;

/// MediaBox lookups walk at most this far up the Pages tree.
const MAX_TREE_DEPTH: usize = 10;

/// Width and height of a page's media box, in PDF points.
///
/// The MediaBox entry may live on the page itself or be inherited from an
/// ancestor Pages node, and may be stored behind an indirect reference.
/// The walk is depth-limited so a malformed Parent cycle cannot loop forever.
pub fn page_dimensions(
    doc: &Document,
    page_number: u32,
    page_id: ObjectId,
) -> Result<(f32, f32), TransformError> {
    let mut dict = doc.get_dictionary(page_id)?;

    for _ in 0..MAX_TREE_DEPTH {
        if let Ok(entry) = dict.get(b"MediaBox") {
            if let Some(rect) = rectangle(doc, entry) {
                let width = (rect[2] - rect[0]).abs();
                let height = (rect[3] - rect[1]).abs();
                return Ok((width, height));
            }
        }

        match dict.get(b"Parent") {
            Ok(parent) => dict = doc.get_dictionary(parent.as_reference()?)?,
            Err(_) => break,
        }
    }

    Err(TransformError::MissingMediaBox(page_number))
}

/// Synthesize a blank page dictionary: empty content stream, no resources,
/// media box `[0 0 width height]`.
///
/// The empty content stream is added to `doc`; the returned dictionary is not
/// inserted, so the caller decides which object id it occupies.
pub fn synthesize_blank_page(
    doc: &mut Document,
    parent: ObjectId,
    width: f32,
    height: f32,
) -> Dictionary {
    let contents_id = doc.add_object(Stream::new(Dictionary::new(), Vec::new()));

    dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(parent),
        "Resources" => Object::Dictionary(Dictionary::new()),
        "MediaBox" => Object::Array(vec![
            Object::Real(0.0),
            Object::Real(0.0),
            Object::Real(width),
            Object::Real(height),
        ]),
        "Contents" => Object::Reference(contents_id),
    }
}

/// Resolve a MediaBox entry to four numbers, following one level of
/// indirection if the array is stored as a reference.
fn rectangle(doc: &Document, entry: &Object) -> Option<[f32; 4]> {
    let array = match entry {
        Object::Array(array) => array,
        Object::Reference(id) => match doc.get_object(*id) {
            Ok(Object::Array(array)) => array,
            _ => return None,
        },
        _ => return None,
    };

    if array.len() != 4 {
        return None;
    }

    let mut rect = [0.0f32; 4];
    for (slot, object) in rect.iter_mut().zip(array) {
        *slot = match object {
            Object::Integer(i) => *i as f32,
            Object::Real(r) => *r,
            _ => return None,
        };
    }
    Some(rect)
}
