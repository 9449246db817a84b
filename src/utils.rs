use once_cell::sync::Lazy;
use regex::Regex;

// scheme://host/key[.ext][?query], exactly one path segment
static HASTE_URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?://[^/]+)/([^/?]+)(?:\?.*)?$").unwrap());

/// Splits a full haste URL into its server and key parts.
///
/// Returns `None` when the input is not a haste URL - no http(s) scheme, no
/// path, or a path with more than one segment. The caller is expected to
/// treat the whole input as a key in that case.
pub fn parse_haste_url(input: &str) -> Option<(String, String)> {
    let captures = HASTE_URL_PATTERN.captures(input)?;

    Some((captures[1].to_string(), captures[2].to_string()))
}

pub trait OptionExt<T> {
    fn ok_or_try<F, E>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_try<F, E>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        match self {
            Some(v) => Ok(v),
            None => f(),
        }
    }
}
