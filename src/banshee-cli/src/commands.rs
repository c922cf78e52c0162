//! Feed command handlers

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use banshee::{parse_roll_line, to_curated_rolls, ReaderError};

/// Read the feed text from a file, or stdin for `-`/no path
fn read_feed(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read feed from stdin")?;
            Ok(text)
        }
    }
}

pub fn parse(input: Option<&Path>, output: Option<&Path>, pretty: bool) -> Result<()> {
    let text = read_feed(input)?;
    let rolls = to_curated_rolls(&text);

    let json = if pretty {
        serde_json::to_string_pretty(&rolls)
    } else {
        serde_json::to_string(&rolls)
    }
    .context("Failed to serialize rolls")?;

    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {} roll(s) to {}", rolls.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

pub fn check(input: Option<&Path>) -> Result<()> {
    let text = read_feed(input)?;

    let mut parsed = 0usize;
    let mut dropped = 0usize;

    for (index, line) in text.split('\n').enumerate() {
        match parse_roll_line(line) {
            Ok(roll) => {
                parsed += 1;
                println!(
                    "line {}: weapon {} with {} perk(s)",
                    index + 1,
                    roll.item_hash,
                    roll.recommended_perks.len()
                );
            }
            // Blank lines are expected separators, not worth reporting
            Err(ReaderError::EmptyLine) => {}
            Err(err) => {
                dropped += 1;
                println!("line {}: dropped ({})", index + 1, err);
            }
        }
    }

    println!("{} parsed, {} dropped", parsed, dropped);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_writes_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let feed = dir.path().join("feed.txt");
        let out = dir.path().join("rolls.json");
        fs::write(
            &feed,
            "https://banshee-44.com/?weapon=1234&socketEntries=10,20\nbad-line\n",
        )
        .unwrap();

        parse(Some(feed.as_path()), Some(out.as_path()), false).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let rolls = json.as_array().unwrap();
        assert_eq!(rolls.len(), 1);
        assert_eq!(rolls[0]["itemHash"], 1234);
        assert_eq!(rolls[0]["recommendedPerks"], serde_json::json!([10, 20]));
    }

    #[test]
    fn test_read_feed_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let feed = dir.path().join("feed.txt");
        fs::write(&feed, "some text").unwrap();

        assert_eq!(read_feed(Some(feed.as_path())).unwrap(), "some text");
    }

    #[test]
    fn test_read_feed_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        assert!(read_feed(Some(missing.as_path())).is_err());
    }
}
