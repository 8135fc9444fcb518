//! Attribute name ⇄ wire key conversion.
//!
//! Domain attributes are snake_case, GraphQL fields are lowerCamelCase.
//! For names made of ASCII letters, digits and single underscores, where no
//! underscore is followed by a digit, the two conversions are inverses of
//! each other.

/// Convert a snake_case attribute name to its lowerCamelCase wire key.
///
/// The first word is kept as is, every following word is title-cased.
///
/// ```
/// use iplm_client::case::snake_to_camel;
///
/// assert_eq!(snake_to_camel("org_types"), "orgTypes");
/// assert_eq!(snake_to_camel("street2"), "street2");
/// ```
pub fn snake_to_camel(name: &str) -> String {
    let mut words = name.split('_');
    let mut out = String::with_capacity(name.len());
    if let Some(first) = words.next() {
        out.push_str(first);
    }
    for word in words {
        let mut chars = word.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
        }
    }
    out
}

/// Convert a lowerCamelCase wire key back to its snake_case attribute name.
///
/// An underscore before a digit does not survive the round trip:
/// `line_2` encodes to `line2`, which decodes to `line2`.
pub fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
