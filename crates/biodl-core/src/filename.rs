//! Local filename derivation for ad-hoc URL downloads.
//!
//! Catalog entries carry their own destination filename; `biodl get` does
//! not, so the name comes from the URL's last path segment, sanitized for
//! Linux filesystems.

/// Fallback when the URL path yields nothing usable.
const DEFAULT_FILENAME: &str = "download.bin";

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Derives a safe filename for saving a download of `url`.
///
/// Takes the last non-empty path segment, replaces characters that are
/// unsafe in Linux filenames, and falls back to `"download.bin"` when the
/// URL has no usable path (e.g. `http://example.com/`).
pub fn derive_filename(url: &str) -> String {
    let candidate = match last_path_segment(url) {
        Some(segment) => segment,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize(&candidate);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}

/// Last non-empty path segment of `url`, or `None` for root/empty paths
/// and unparseable URLs.
fn last_path_segment(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Replaces NUL, path separators, control characters, and whitespace with
/// `_` (runs collapsed), trims leading/trailing dots and underscores, and
/// caps the result at NAME_MAX bytes on a char boundary.
fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let unsafe_char =
            c == '\0' || c == '/' || c == '\\' || c.is_control() || c == ' ' || c == '\t';
        if unsafe_char {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    if trimmed.len() <= NAME_MAX {
        return trimmed.to_string();
    }
    let mut take = NAME_MAX;
    while take > 0 && !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    trimmed[..take].to_string()
}
