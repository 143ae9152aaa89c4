use uuid::Uuid;

/// Nanosecond-scale instant produced by a `Clock`.
pub type Timestamp = u64;

const IDENTIFIER_LEN: usize = 36;

/// True when `value` is a hyphenated `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`
/// identifier of hexadecimal digits (any case).
///
/// The length check rules out the simple, braced and urn forms that
/// `Uuid::try_parse` would otherwise accept.
pub fn is_identifier(value: &str) -> bool {
    value.len() == IDENTIFIER_LEN && Uuid::try_parse(value).is_ok()
}
