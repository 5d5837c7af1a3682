pub mod blank;
pub mod compress;
pub mod replace;
pub mod truncate;

pub use compress::{compress_document, CompressSummary};
pub use replace::{replace_pages, ReplaceSummary};
pub use truncate::{truncate_document, TruncateSummary};
