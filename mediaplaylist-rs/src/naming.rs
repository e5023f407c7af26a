use crate::format::MediaName;

/// Extension of the pointer files written into the library folders.
pub const STRM_EXTENSION: &str = "strm";

const UNKNOWN_YEAR: &str = "Unknown";

/// Strips filesystem-illegal characters (`\ / * ? : " < > |`) from a
/// composed filename. Nothing else is touched: whitespace is kept as-is
/// and titles differing only by stray punctuation stay distinct.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|'))
        .collect()
}

/// Derives the pointer filename for a parsed media name.
///
/// Episodes render as `{title} {year} S{season}E{episode}.strm` with the
/// literal `Unknown` standing in for a missing year. Movies keep the year
/// in its parenthesized form, `{title} ({year}).strm`, falling back to
/// `{title} Unknown.strm` when the display name carried none.
pub fn strm_file_name(name: &MediaName) -> String {
    let composed = match &name.episode {
        Some(numbers) => format!(
            "{} {} S{}E{}.{}",
            name.title,
            name.year.as_deref().unwrap_or(UNKNOWN_YEAR),
            numbers.season,
            numbers.episode,
            STRM_EXTENSION,
        ),
        None => match &name.year {
            Some(year) => format!("{} ({}).{}", name.title, year, STRM_EXTENSION),
            None => format!("{} {}.{}", name.title, UNKNOWN_YEAR, STRM_EXTENSION),
        },
    };

    sanitize_file_name(&composed)
}

#[cfg(test)]
mod tests {
    use super::{sanitize_file_name, strm_file_name};
    use crate::rules::parse_name;

    #[test]
    fn test_sanitize_strips_illegal_characters() {
        assert_eq!(
            sanitize_file_name(r#"Who: What? "Where"\|<>"#),
            "Who What Where"
        );
        // untouched characters stay in place and in order
        assert_eq!(sanitize_file_name("a  b (2010)"), "a  b (2010)");
    }

    #[test]
    fn test_episode_name_without_year() {
        let name = parse_name("Breaking Bad S01E01").unwrap();
        assert_eq!(strm_file_name(&name), "Breaking Bad Unknown S01E01.strm");
    }

    #[test]
    fn test_episode_name_with_year() {
        let name = parse_name("Show (2020) S1E1").unwrap();
        assert_eq!(strm_file_name(&name), "Show 2020 S1E1.strm");
    }

    #[test]
    fn test_movie_name_keeps_parenthesized_year() {
        let name = parse_name("Inception (2010)").unwrap();
        assert_eq!(strm_file_name(&name), "Inception (2010).strm");
    }

    #[test]
    fn test_movie_name_without_year() {
        let name = parse_name("Inception").unwrap();
        assert_eq!(strm_file_name(&name), "Inception Unknown.strm");
    }

    #[test]
    fn test_naming_is_deterministic() {
        let first = parse_name("Some Show (2001) S3E12").unwrap();
        let second = parse_name("Some Show (2001) S3E12").unwrap();
        assert_eq!(strm_file_name(&first), strm_file_name(&second));
    }
}
