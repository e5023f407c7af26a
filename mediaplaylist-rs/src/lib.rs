//! # mediaplaylist-rs
//! A library for parsing IPTV m3u playlists into movie and episode library entries
//!
//! # Example
//! ```rust
//! use mediaplaylist_rs::{Parser, strm_file_name};
//! use mediaplaylist_rs::format::ParsedEntry;
//! use std::io::Cursor;
//!
//! let parser = Parser::new(Cursor::new(r#"
//! #EXTINF:-1 tvg-name="Inception (2010)",Inception
//! http://example.com/movie.mp4"#)).unwrap();
//!
//! for entry in parser {
//!     if let ParsedEntry::Media(media) = entry {
//!         println!("{}", strm_file_name(&media.name));
//!     }
//! }
//! ```

pub mod format;
mod naming;
mod parser;
pub mod rules;
pub use naming::*;
pub use parser::*;
