//! Page-level PDF transforms: compress content streams, truncate to the
//! first N pages, or replace a page range with blank pages.
//!
//! Each operation is a single-shot pipeline: the whole document is read into
//! memory, the new page sequence is built, and the result is written in one
//! pass. Parsing and serialization are lopdf's job; this crate only ever
//! treats a document as an ordered page container.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use pdf_pagetool::ops::truncate_document;
//!
//! let summary = truncate_document(
//!     Path::new("input.pdf"),
//!     Path::new("output.pdf"),
//!     300,
//! ).unwrap();
//! assert!(summary.kept_pages <= summary.total_pages);
//! ```

pub mod cli;
pub mod error;
pub mod ops;
pub mod report;

pub use error::{ReportError, TransformError};
pub use ops::{compress_document, replace_pages, truncate_document};
pub use report::{size_reduction, SizeReport};
