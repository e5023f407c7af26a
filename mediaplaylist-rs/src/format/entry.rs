use smol_str::SmolStr;

/// Destination library of a parsed media name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryKind {
    Movie,
    Episode,
}

/// Season/episode numbers as captured from the display name.
///
/// The digit strings keep their original width: `S1E1` and `S01E01` stay
/// distinct names and produce distinct files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeNumber {
    pub season: SmolStr,
    pub episode: SmolStr,
}

/// A display name broken into its library-relevant parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaName {
    /// The `tvg-name` value as it appeared in the playlist
    pub raw: SmolStr,
    /// Title with surrounding whitespace trimmed
    pub title: SmolStr,
    /// Year or year-range from the display name, if any
    pub year: Option<SmolStr>,
    /// Present iff the name carried a season/episode marker
    pub episode: Option<EpisodeNumber>,
}

impl MediaName {
    pub fn kind(&self) -> LibraryKind {
        if self.episode.is_some() {
            LibraryKind::Episode
        } else {
            LibraryKind::Movie
        }
    }
}

/// An accepted record: a classified name paired with its stream locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    pub name: MediaName,
    pub locator: SmolStr,
    /// Playlist line index the locator was read from, kept for error context
    pub locator_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingTvgName,
    UnsupportedNameFormat,
}

/// A metadata line that produced no entry, with enough context to log it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: String,
    pub index: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedEntry {
    Media(MediaEntry),
    Skipped(SkippedLine),
}
