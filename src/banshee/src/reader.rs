//! Curated roll feed parsing
//!
//! The feed is newline-delimited text, one recommendation per line:
//!
//! ```text
//! https://banshee-44.com/?weapon=<hash>&socketEntries=<perk>(,<perk>)*
//! ```
//!
//! The grammar is matched explicitly (prefix literal, delimiter scan,
//! per-token integer parse) so every failure mode is a named
//! [`ReaderError`] variant. Numeric tokens must be pure base-10 digit
//! sequences; anything else fails the line rather than producing a
//! sentinel value.

use crate::roll::CuratedRoll;

/// Fixed vendor URL template every feed line must start with.
const ROLL_PREFIX: &str = "https://banshee-44.com/?weapon=";

/// Query key separating the weapon hash from the perk list.
const SOCKET_ENTRIES_KEY: &str = "&socketEntries=";

/// Reasons a feed line fails to parse
///
/// The feed contract treats every one of these as silent exclusion;
/// [`to_curated_rolls`] never surfaces them. They exist so diagnostic
/// callers can report why a line was dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReaderError {
    #[error("empty line")]
    EmptyLine,

    #[error("line does not start with the vendor URL template")]
    MissingPrefix,

    #[error("missing socketEntries query key")]
    MissingSocketEntries,

    #[error("invalid weapon hash: {0:?}")]
    InvalidItemHash(String),

    #[error("invalid perk id: {0:?}")]
    InvalidPerk(String),
}

/// Parse a single feed line into a [`CuratedRoll`].
///
/// A trailing carriage return and surrounding whitespace are trimmed
/// before matching, so feeds saved with CRLF line endings still parse.
/// Whitespace inside the numeric tokens is still a failure.
pub fn parse_roll_line(line: &str) -> Result<CuratedRoll, ReaderError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ReaderError::EmptyLine);
    }

    let rest = line
        .strip_prefix(ROLL_PREFIX)
        .ok_or(ReaderError::MissingPrefix)?;

    // The weapon hash binds greedily, so the perk list starts at the last
    // occurrence of the query key.
    let split_at = rest
        .rfind(SOCKET_ENTRIES_KEY)
        .ok_or(ReaderError::MissingSocketEntries)?;
    let weapon = &rest[..split_at];
    let perks = &rest[split_at + SOCKET_ENTRIES_KEY.len()..];

    let item_hash = parse_id(weapon).ok_or_else(|| ReaderError::InvalidItemHash(weapon.into()))?;

    let recommended_perks = perks
        .split(',')
        .map(|token| parse_id(token).ok_or_else(|| ReaderError::InvalidPerk(token.into())))
        .collect::<Result<Vec<u64>, ReaderError>>()?;

    Ok(CuratedRoll {
        item_hash,
        recommended_perks,
    })
}

/// Parse a blob of feed text into rolls, dropping non-conforming lines.
///
/// Lines are delimited by `\n`. Output order matches input line order for
/// every line that parsed; no reordering, no deduplication. An empty blob
/// or trailing newline contributes an empty line, which is dropped like
/// any other failure.
pub fn to_curated_rolls(text: &str) -> Vec<CuratedRoll> {
    text.split('\n')
        .filter_map(|line| parse_roll_line(line).ok())
        .collect()
}

/// Strict base-10 parse: digits only, no sign, no surrounding whitespace.
fn parse_id(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
