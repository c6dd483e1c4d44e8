/// Derives the cache key under which the collector stores a page's local metrics.
///
/// 32-bit rolling hash over UTF-16 code units (`hash * 31 + c`, wrapping), printed
/// as a signed decimal. Must stay bit-compatible with keys already in the store,
/// so distinct URLs may collide. The empty string maps to the empty key.
pub fn derive_key(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    url.encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .to_string()
}

/// Key of the "loaded in background" flag for a tab.
pub fn tab_flag_key(tab_id: u64) -> String {
    tab_id.to_string()
}
