use memchr::memmem;

/// Strip a `<scheme>://` prefix from a URL, returning the remainder.
/// The scheme token is discarded, not inspected: splitting is purely
/// positional and works the same for `http://` and `https://`.
/// Input without `://` is returned unchanged and handled as a bare
/// authority by the caller.
pub fn strip_scheme_prefix(url: &str) -> &str {
    match memmem::find(url.as_bytes(), b"://") {
        Some(pos) => &url[pos + 3..],
        None => url,
    }
}
