//! # banshee
//!
//! Curated roll feed parsing for game inventory tools.
//!
//! A community-maintained feed publishes vendor-recommended weapon rolls as
//! newline-delimited text, one recommendation per line:
//!
//! ```text
//! https://banshee-44.com/?weapon=1234&socketEntries=10,20,30
//! ```
//!
//! This library turns that text into structured [`CuratedRoll`] records.
//! Lines that do not conform are dropped, never surfaced as errors; the
//! feed is lossy by contract. Use [`parse_roll_line`] directly when you
//! want to know why a line was dropped.
//!
//! ## Example
//!
//! ```
//! let feed = "https://banshee-44.com/?weapon=1234&socketEntries=10,20,30\n\
//!             not a roll line";
//!
//! let rolls = banshee::to_curated_rolls(feed);
//! assert_eq!(rolls.len(), 1);
//! assert_eq!(rolls[0].item_hash, 1234);
//! assert_eq!(rolls[0].recommended_perks, vec![10, 20, 30]);
//! ```

pub mod reader;
pub mod roll;

// Re-export commonly used items
#[doc(inline)]
pub use reader::{parse_roll_line, to_curated_rolls, ReaderError};
#[doc(inline)]
pub use roll::CuratedRoll;
