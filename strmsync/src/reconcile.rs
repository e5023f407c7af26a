use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use mediaplaylist_rs::{
    STRM_EXTENSION,
    format::{LibraryKind, MediaEntry},
    strm_file_name,
};
use tracing::{error, info};
use walkdir::WalkDir;

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub movies: usize,
    pub episodes: usize,
    pub new_movies: usize,
    pub new_episodes: usize,
    pub deleted: usize,
}

/// Brings the on-disk pointer-file set in line with the current playlist.
///
/// The filesystem is the only store: the known-path set is rebuilt from
/// the playlist on every run and discarded afterwards. Two runs sharing
/// the same folders at the same time are unsupported, the sweep of one
/// can race the creation step of the other.
pub struct Reconciler {
    movies_dir: PathBuf,
    tv_shows_dir: PathBuf,
    known_paths: HashSet<PathBuf>,
    stats: RunStats,
}

impl Reconciler {
    /// Ensures both library folders exist.
    pub fn new(movies_dir: &Path, tv_shows_dir: &Path) -> Result<Self, io::Error> {
        fs::create_dir_all(movies_dir)?;
        fs::create_dir_all(tv_shows_dir)?;

        Ok(Self {
            movies_dir: movies_dir.to_path_buf(),
            tv_shows_dir: tv_shows_dir.to_path_buf(),
            known_paths: HashSet::new(),
            stats: RunStats::default(),
        })
    }

    /// The pointer-file path an entry maps to, derived only from its
    /// parsed name.
    pub fn target_path(&self, entry: &MediaEntry) -> PathBuf {
        let folder = match entry.name.kind() {
            LibraryKind::Movie => &self.movies_dir,
            LibraryKind::Episode => &self.tv_shows_dir,
        };

        folder.join(strm_file_name(&entry.name))
    }

    /// Registers an entry and writes its pointer file if absent.
    ///
    /// An existing file is never rewritten, even when the playlist now
    /// carries a different locator for the same name; its path still
    /// joins the known set so the sweep keeps it. A write failure is
    /// logged and the run continues.
    pub fn record(&mut self, entry: &MediaEntry) {
        let path = self.target_path(entry);

        match entry.name.kind() {
            LibraryKind::Movie => self.stats.movies += 1,
            LibraryKind::Episode => self.stats.episodes += 1,
        }

        let already_present = path.exists();
        self.known_paths.insert(path.clone());
        if already_present {
            return;
        }

        if let Err(e) = fs::write(&path, entry.locator.as_bytes()) {
            error!(
                "Error creating pointer file {} with URL {} at line {}: {}",
                path.display(),
                entry.locator,
                entry.locator_index,
                e
            );
            return;
        }

        match entry.name.kind() {
            LibraryKind::Movie => self.stats.new_movies += 1,
            LibraryKind::Episode => self.stats.new_episodes += 1,
        }
    }

    /// Deletes every pointer file the current playlist no longer implies.
    pub fn sweep(&mut self) -> Result<(), io::Error> {
        // suffix match, not `Path::extension`: a file named exactly `.strm`
        // counts as a pointer file too
        let pointer_suffix = format!(".{}", STRM_EXTENSION);

        for folder in [self.movies_dir.clone(), self.tv_shows_dir.clone()] {
            for dir_entry in WalkDir::new(&folder).into_iter().filter_map(|e| e.ok()) {
                if !dir_entry.file_type().is_file() {
                    continue;
                }

                let path = dir_entry.path();
                let is_pointer = dir_entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.ends_with(&pointer_suffix));
                if !is_pointer {
                    continue;
                }
                if self.known_paths.contains(path) {
                    continue;
                }

                fs::remove_file(path)?;
                info!("Deleted pointer file: {}", path.display());
                self.stats.deleted += 1;
            }
        }

        Ok(())
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }
}
