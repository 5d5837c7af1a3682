use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("document has no pages")]
    EmptyDocument,

    #[error("page {0} has no MediaBox")]
    MissingMediaBox(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("cannot compute size reduction for zero-byte source file")]
    EmptySource,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
