use crate::utils::error::{FinderError, Result};
use regex::Regex;
use std::sync::OnceLock;

const RANGE_SEPARATOR: &str = "...";

/// A range endpoint: an alphabetic series prefix followed by digits.
fn endpoint_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([a-zA-Z]+)(\d+)$").expect("valid regex"))
}

/// Expand a raw comma-separated ID list into concrete identifiers.
///
/// Tokens without `...` pass through verbatim after trimming, with no
/// structural validation. Range tokens expand to every id between the two
/// endpoints, numbers zero-padded to three digits under the left endpoint's
/// series.
pub fn expand(raw: &str) -> Result<Vec<String>> {
    let mut ids = Vec::new();

    for token in raw.split(',') {
        let token = token.trim();

        if !token.contains(RANGE_SEPARATOR) {
            ids.push(token.to_string());
            continue;
        }

        expand_range(token, &mut ids)?;
    }

    Ok(ids)
}

fn expand_range(token: &str, out: &mut Vec<String>) -> Result<()> {
    // Only the first two parts name the endpoints; anything after a second
    // separator is ignored.
    let mut parts = token.split(RANGE_SEPARATOR);
    let (Some(left), Some(right)) = (parts.next(), parts.next()) else {
        return Err(FinderError::malformed_range(token));
    };

    let (series, lower) =
        parse_endpoint(left).ok_or_else(|| FinderError::malformed_range(token))?;
    // The right-hand series is never compared against the left; a range like
    // "col001...elf003" expands under "col".
    let (_, upper) = parse_endpoint(right).ok_or_else(|| FinderError::malformed_range(token))?;

    if lower > upper {
        return Err(FinderError::range_order(token));
    }

    for number in lower..=upper {
        // Width-3 padding only; numbers of four or more digits print as-is.
        out.push(format!("{series}{number:03}"));
    }

    Ok(())
}

fn parse_endpoint(endpoint: &str) -> Option<(&str, u32)> {
    let captures = endpoint_pattern().captures(endpoint)?;
    let series = captures.get(1)?.as_str();
    let number = captures.get(2)?.as_str().parse().ok()?;
    Some((series, number))
}
