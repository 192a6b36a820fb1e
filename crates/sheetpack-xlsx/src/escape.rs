//! XML text escaping

/// Escape `&`, `<`, `>` and `"` for XML text or double-quoted attributes.
///
/// Escaping is applied once: `escape_xml("&amp;")` yields `"&amp;amp;"`.
/// Raw values must pass through here exactly one time.
///
/// ```
/// use sheetpack_xlsx::escape_xml;
///
/// assert_eq!(escape_xml("a < b"), "a &lt; b");
/// ```
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
