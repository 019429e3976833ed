//! Centralized filename parsing for the number-prefix ordering convention.
//!
//! Docs and folders may carry a leading numeric token that orders them in the
//! sidebar without showing up in the rendered label or the doc id:
//!
//! - `02-tutorials/` → label "tutorials", position 2
//! - `10_setup.md` → id "setup", position 10
//! - `3. Advanced` → "Advanced", position 3
//!
//! ## Dates and Versions Are Not Prefixes
//!
//! Names that look like a date (`2021-01-05-release`) or a version
//! (`1.2.3`, `v1.0-beta`) are left untouched. Blog-style and changelog-style
//! folder names would otherwise lose their meaningful leading digits.

/// Result of splitting a number prefix off a file or folder name.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Name with the prefix (and its separator) removed. The full input when
    /// no prefix was recognized.
    pub filename: String,
    /// Number prefix if present (e.g., `2` from `02-tutorials`).
    pub number_prefix: Option<u32>,
}

impl ParsedName {
    fn unprefixed(name: &str) -> Self {
        Self {
            filename: name.to_string(),
            number_prefix: None,
        }
    }
}

/// Signature shared by every number-prefix parser.
pub type NumberPrefixParser = dyn Fn(&str) -> ParsedName;

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '.')
}

/// `v?<digits><sep><digit>` at the start of the name.
///
/// Covers versions (`1.0.0`, `v2-1`) and dates (`2021-01-05`, `12-31-2020`),
/// since every date-like prefix is also version-like.
fn looks_like_date_or_version(name: &str) -> bool {
    let rest = name.strip_prefix('v').unwrap_or(name);
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    let mut tail = rest[digits..].chars();
    matches!(
        (tail.next(), tail.next()),
        (Some(sep), Some(d)) if is_separator(sep) && d.is_ascii_digit()
    )
}

/// Parse a name following the `<number><separator><name>` convention.
///
/// Handles these patterns:
/// - `"02-tutorials"` → filename="tutorials", number_prefix=Some(2)
/// - `"10 - Getting Started"` → filename="Getting Started", number_prefix=Some(10)
/// - `"01_a.b"` → filename="a.b", number_prefix=Some(1)
/// - `"001"` → untouched (nothing left after the number)
/// - `"01-"` → untouched (no name after the separator)
/// - `"2021-01-05-post"` → untouched (date-like)
/// - `"1.2.3"` → untouched (version-like)
/// - `"intro"` → untouched
pub fn parse_number_prefix(name: &str) -> ParsedName {
    if looks_like_date_or_version(name) {
        return ParsedName::unprefixed(name);
    }

    let digits = name.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return ParsedName::unprefixed(name);
    }
    let Ok(number) = name[..digits].parse::<u32>() else {
        return ParsedName::unprefixed(name);
    };

    let after_digits = name[digits..].trim_start();
    let after_separators = after_digits.trim_start_matches(is_separator);
    if after_separators.len() == after_digits.len() {
        return ParsedName::unprefixed(name);
    }
    let suffix = after_separators.trim_start();
    match suffix.chars().next() {
        Some(c) if !is_separator(c) => ParsedName {
            filename: suffix.to_string(),
            number_prefix: Some(number),
        },
        _ => ParsedName::unprefixed(name),
    }
}

/// Parser used when number prefixes are turned off: names are never split.
pub fn disabled_number_prefix_parser(name: &str) -> ParsedName {
    ParsedName::unprefixed(name)
}

/// Strip the number prefix from every segment of a `/`-separated path.
///
/// `01-guides/02-advanced` → `guides/advanced`
pub fn strip_path_number_prefixes(path: &str, parser: &NumberPrefixParser) -> String {
    path.split('/')
        .map(|segment| parser(segment).filename)
        .collect::<Vec<_>>()
        .join("/")
}
