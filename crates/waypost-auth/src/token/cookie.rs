//! Session token extraction from a Cookie request header.

/// Finds the named cookie in a `Cookie` header and returns its value.
///
/// Splits on semicolons and matches the cookie name case-sensitively.
/// Returns `None` if the header is absent, the cookie is not present,
/// or its value is empty. A cleared cookie (`session=`) counts as no
/// session, not as a malformed one.
pub fn token_from_cookie_header<'a>(header: Option<&'a str>, name: &str) -> Option<&'a str> {
    let header = header?;
    header.split(';').map(str::trim).find_map(|cookie| {
        let value = cookie.strip_prefix(name)?;
        value.strip_prefix('=').filter(|v| !v.is_empty())
    })
}
