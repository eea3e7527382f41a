//! Resume upload → plain text.
//!
//! PDF content goes through `pdf-extract`; everything else, or a failed PDF
//! extraction, falls back to lossy UTF-8 decoding. The caller always gets a
//! string: unreadable content degrades to low-signal text or the empty
//! string, never an error.

use tracing::{info, warn};

/// Converts uploaded resume bytes into plain text.
pub fn extract_resume_text(filename: &str, data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }

    if looks_like_pdf(filename, data) {
        match pdf_extract::extract_text_from_mem(data) {
            Ok(text) => {
                info!("PDF extraction succeeded: {} characters", text.len());
                return text;
            }
            Err(e) => {
                warn!("PDF extraction failed, falling back to UTF-8 decode: {e}");
            }
        }
    }

    String::from_utf8_lossy(data).into_owned()
}

fn looks_like_pdf(filename: &str, data: &[u8]) -> bool {
    let by_extension = std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    by_extension || data.starts_with(b"%PDF")
}
