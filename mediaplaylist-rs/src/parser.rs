use std::io::{self, BufRead};

use lazy_static::lazy_static;
use regex::Regex;
use smol_str::SmolStr;

use crate::format::{
    MediaEntry, ParsedEntry, SkipReason, SkippedLine, VALID_MEDIA_EXTENSIONS, directives,
};
use crate::rules::parse_name;

lazy_static! {
    static ref TVG_NAME_REGEX: Regex =
        Regex::new("tvg-name=\"([^\"]+)\"").expect("Regular expression error");
}

/// Scans a playlist for `#EXTINF` records, pairing each metadata line with
/// the line immediately after it as the stream locator.
///
/// Iteration yields accepted entries and loggable skips; records whose
/// locator line is missing or unusable are dropped without an item.
pub struct Parser {
    lines: Vec<String>,
    pos: usize,
}

impl Parser {
    pub fn new<T: BufRead>(reader: T) -> Result<Self, io::Error> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Ok(Self { lines, pos: 0 })
    }

    /// The locator is exactly the next line: it must carry a scheme
    /// separator and end in a recognized media extension.
    fn locator_for(&self, index: usize) -> Option<SmolStr> {
        let line = self.lines.get(index + 1)?.trim();
        if !line.contains("://") {
            return None;
        }
        if !VALID_MEDIA_EXTENSIONS.iter().any(|ext| line.ends_with(ext)) {
            return None;
        }
        Some(SmolStr::new(line))
    }

    fn skipped(&self, index: usize, reason: SkipReason) -> ParsedEntry {
        ParsedEntry::Skipped(SkippedLine {
            line: self.lines[index].trim().to_owned(),
            index,
            reason,
        })
    }
}

impl Iterator for Parser {
    type Item = ParsedEntry;

    fn next(&mut self) -> Option<ParsedEntry> {
        while self.pos < self.lines.len() {
            let index = self.pos;
            self.pos += 1;

            let line = self.lines[index].trim();
            if !line.starts_with(directives::EXTINF) {
                continue;
            }

            let raw_name = match TVG_NAME_REGEX.captures(line).and_then(|c| c.get(1)) {
                Some(raw_name) => raw_name.as_str().to_owned(),
                None => return Some(self.skipped(index, SkipReason::MissingTvgName)),
            };

            // unreachable in practice, the movie rule accepts almost anything
            let Some(name) = parse_name(&raw_name) else {
                return Some(self.skipped(index, SkipReason::UnsupportedNameFormat));
            };

            let Some(locator) = self.locator_for(index) else {
                continue;
            };

            return Some(ParsedEntry::Media(MediaEntry {
                name,
                locator,
                locator_index: index + 1,
            }));
        }

        None
    }
}
