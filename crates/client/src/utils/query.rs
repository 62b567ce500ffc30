//! Query string pieces in the exact shape the node expects.
//!
//! Only free text search queries are escaped; every other parameter is
//! inserted verbatim.

use url::form_urlencoded;

use crate::consts::RAW_TX_PREFIX;

/// Uppercase the first character and leave the rest untouched
pub fn uppercase_first_char(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Render addresses as `[a,b,c]`, without JSON quoting or escaping
pub fn address_list<S: AsRef<str>>(addresses: &[S]) -> String {
    let joined = addresses
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",");
    format!("[{joined}]")
}

/// Escape a value for use inside a query string (spaces become `+`)
pub fn query_escape(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// Prefix a raw transaction hex with the marker the node expects
pub fn raw_tx(tx: &str) -> String {
    format!("{RAW_TX_PREFIX}{tx}")
}
