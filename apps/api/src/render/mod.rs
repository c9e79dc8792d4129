// Read-only renderers over the resume document: form descriptors, HTML preview
// and PDF export. None of them mutate the store.

pub mod form;
pub mod pdf;
pub mod preview;

pub use pdf::{export, ExportError, EXPORT_FILE_NAME};
pub use preview::render_html;
