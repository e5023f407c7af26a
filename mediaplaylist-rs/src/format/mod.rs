mod entry;
pub use entry::*;

pub mod directives {
    pub const EXTINF: &str = "#EXTINF";
}

/// File extensions a locator line must end with to be accepted.
pub const VALID_MEDIA_EXTENSIONS: [&str; 7] =
    [".mp4", ".mkv", ".avi", ".mov", ".wmv", ".flv", ".m4v"];
