//! Photo acquisition for the CLI: read bytes from a file and keep them
//! only if they look like an image. Malformed or unreadable input is
//! silently treated as "no photo".

use std::fs;
use std::path::Path;

/// Magic-number sniff for the formats a photo blob may carry.
fn looks_like_image(bytes: &[u8]) -> bool {
    bytes.starts_with(b"\x89PNG\r\n\x1a\n")
        || bytes.starts_with(&[0xFF, 0xD8, 0xFF])
        || bytes.starts_with(b"GIF87a")
        || bytes.starts_with(b"GIF89a")
        || (bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP")
}

/// Load a photo from disk. Returns None for missing, unreadable or
/// non-image files — the record is simply saved without a photo.
pub fn load_photo(path: &str) -> Option<Vec<u8>> {
    let bytes = fs::read(Path::new(path)).ok()?;
    if looks_like_image(&bytes) {
        Some(bytes)
    } else {
        None
    }
}

/// Human-readable size for detail views ("12.4 KB").
pub fn describe_photo(photo: Option<&[u8]>) -> String {
    match photo {
        Some(bytes) => format!("{:.1} KB", bytes.len() as f64 / 1024.0),
        None => "—".to_string(),
    }
}
