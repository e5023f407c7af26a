use lazy_static::lazy_static;
use regex::Regex;

use crate::format::{EpisodeNumber, MediaName};

lazy_static! {
    /// `<title>` + optional ` (YYYY)` or ` (YYYY-YYYY)` + ` S<digits>E<digits>`,
    /// with an optional space before the episode marker
    static ref EPISODE_REGEX: Regex =
        Regex::new(r"(.*?)(?: \((\d{4}(?:-\d{4})?)\))? S(\d+) ?E(\d+)")
            .expect("Regular expression error");
    /// `<title>` + optional ` (YYYY)`, anchored at the end of the name
    static ref MOVIE_REGEX: Regex =
        Regex::new(r"(.*?)(?: \((\d{4})\))?$").expect("Regular expression error");
}

/// A named extraction rule over a `tvg-name` value.
pub struct NameRule {
    pub name: &'static str,
    matcher: fn(&str) -> Option<MediaName>,
}

impl NameRule {
    pub fn apply(&self, raw: &str) -> Option<MediaName> {
        (self.matcher)(raw)
    }
}

/// Classification rules in precedence order. The movie pattern matches
/// almost any string, so the episode rule must run first; a name like
/// `"Show (2020) S1E1"` is an episode even though the movie pattern would
/// also accept it.
pub const NAME_RULES: &[NameRule] = &[
    NameRule {
        name: "episode",
        matcher: match_episode,
    },
    NameRule {
        name: "movie",
        matcher: match_movie,
    },
];

/// Runs the rules in order and returns the first match.
pub fn parse_name(raw: &str) -> Option<MediaName> {
    NAME_RULES.iter().find_map(|rule| rule.apply(raw))
}

fn match_episode(raw: &str) -> Option<MediaName> {
    let captures = EPISODE_REGEX.captures(raw)?;
    Some(MediaName {
        raw: raw.into(),
        title: captures.get(1)?.as_str().trim().into(),
        year: captures.get(2).map(|year| year.as_str().into()),
        episode: Some(EpisodeNumber {
            season: captures.get(3)?.as_str().into(),
            episode: captures.get(4)?.as_str().into(),
        }),
    })
}

fn match_movie(raw: &str) -> Option<MediaName> {
    let captures = MOVIE_REGEX.captures(raw)?;
    Some(MediaName {
        raw: raw.into(),
        title: captures.get(1)?.as_str().trim().into(),
        year: captures.get(2).map(|year| year.as_str().into()),
        episode: None,
    })
}

#[cfg(test)]
mod tests {
    use crate::format::LibraryKind;

    use super::{NAME_RULES, parse_name};

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = NAME_RULES.iter().map(|rule| rule.name).collect();
        assert_eq!(names, ["episode", "movie"]);
    }

    #[test]
    fn test_episode_precedes_movie() {
        let name = parse_name("Show (2020) S1E1").unwrap();
        assert_eq!(name.kind(), LibraryKind::Episode);
        assert_eq!(name.title, "Show");
        assert_eq!(name.year.as_deref(), Some("2020"));
    }

    #[test]
    fn test_episode_without_year() {
        let name = parse_name("Breaking Bad S01E01").unwrap();
        assert_eq!(name.kind(), LibraryKind::Episode);
        assert_eq!(name.title, "Breaking Bad");
        assert!(name.year.is_none());
        let numbers = name.episode.unwrap();
        assert_eq!(numbers.season, "01");
        assert_eq!(numbers.episode, "01");
    }

    #[test]
    fn test_episode_with_year_range() {
        let name = parse_name("Long Runner (2010-2015) S02 E07").unwrap();
        assert_eq!(name.kind(), LibraryKind::Episode);
        assert_eq!(name.year.as_deref(), Some("2010-2015"));
    }

    #[test]
    fn test_number_width_is_preserved() {
        let narrow = parse_name("Show S1E1").unwrap().episode.unwrap();
        let wide = parse_name("Show S01E01").unwrap().episode.unwrap();
        assert_eq!(narrow.season, "1");
        assert_eq!(wide.season, "01");
        assert_ne!(narrow, wide);
    }

    #[test]
    fn test_movie_with_year() {
        let name = parse_name("Inception (2010)").unwrap();
        assert_eq!(name.kind(), LibraryKind::Movie);
        assert_eq!(name.title, "Inception");
        assert_eq!(name.year.as_deref(), Some("2010"));
    }

    #[test]
    fn test_movie_fallback_accepts_almost_anything() {
        let name = parse_name("??? some: odd | name").unwrap();
        assert_eq!(name.kind(), LibraryKind::Movie);
        assert_eq!(name.title, "??? some: odd | name");
        assert!(name.year.is_none());
    }
}
