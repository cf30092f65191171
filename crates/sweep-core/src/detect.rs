// File: crates/sweep-core/src/detect.rs
// Summary: Text-file detection for the loader using magic numbers, extension lookup and a UTF-8 check.

use std::io::Read;
use std::path::Path;

use infer::{Infer, MatcherType};
use mime_guess::MimeGuess;

use crate::error::{SweepError, SweepResult};

/// Bytes inspected by the UTF-8 check.
const SNIFF_LEN: usize = 8 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileKind {
    /// Text-like; safe to hand to the CSV reader.
    Text { mime: String },
    Other { mime: String },
}

pub fn detect(path: &Path) -> SweepResult<FileKind> {
    // 1. Magic numbers: only the text matchers pass
    if let Some(kind) = Infer::new().get_from_path(path)? {
        let mime = kind.mime_type().to_string();
        return Ok(match kind.matcher_type() {
            MatcherType::Text => FileKind::Text { mime },
            _ => FileKind::Other { mime },
        });
    }

    // 2. Extension
    let guess = MimeGuess::from_path(path).first();
    if let Some(mime) = guess {
        let text_like = mime.type_() == mime_guess::mime::TEXT || mime.subtype() == "csv";
        let mime = mime.to_string();
        return Ok(if text_like { FileKind::Text { mime } } else { FileKind::Other { mime } });
    }

    // 3. Unknown extension (".cvs", none): accept valid UTF-8
    let mut buf = Vec::with_capacity(SNIFF_LEN);
    std::fs::File::open(path)?.take(SNIFF_LEN as u64).read_to_end(&mut buf)?;
    Ok(if looks_like_text(&buf) {
        FileKind::Text { mime: "text/plain".into() }
    } else {
        FileKind::Other { mime: "application/octet-stream".into() }
    })
}

pub fn ensure_text_file(path: &Path) -> SweepResult<()> {
    match detect(path)? {
        FileKind::Text { .. } => Ok(()),
        FileKind::Other { mime } => Err(SweepError::UnsupportedFile { path: path.to_path_buf(), mime }),
    }
}

fn looks_like_text(buf: &[u8]) -> bool {
    if buf.contains(&0) {
        return false;
    }
    match std::str::from_utf8(buf) {
        Ok(_) => true,
        // The sniffed prefix may cut a multi-byte character at the end
        Err(e) => e.error_len().is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniff_accepts_truncated_utf8() {
        let s = "Año,Mes".as_bytes();
        assert!(looks_like_text(s));
        assert!(looks_like_text(&s[..2]));
        assert!(!looks_like_text(&[0x41, 0x00, 0x42]));
        assert!(!looks_like_text(&[0xff, 0xfe, 0x41, 0x42]));
    }
}
