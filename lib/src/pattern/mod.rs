//! Named patterns used to seed the board.

use crate::{error::Error, geom::Size};
use log::{info, warn};
use std::{
    fs,
    ops::Index,
    path::{Path, PathBuf},
    slice,
};

mod plaintext;
mod rle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// File extensions recognized by [`PatternSet::load_dir`].
pub const PATTERN_EXTENSIONS: [&str; 3] = ["txt", "cells", "rle"];

/// A named rectangular stencil of dead and living cells.
///
/// Cells are stored row by row, `width` cells per row. A pattern of width 0
/// is what a malformed file turns into; it cannot be stamped meaningfully.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PatternDefinition {
    name: String,
    width: usize,
    cells: Vec<bool>,
}

impl PatternDefinition {
    /// Creates a pattern from its cells, row by row.
    ///
    /// A trailing partial row is padded with dead cells.
    pub fn new<S: Into<String>>(name: S, width: usize, mut cells: Vec<bool>) -> Self {
        if width == 0 {
            cells.clear();
        } else if cells.len() % width != 0 {
            cells.resize((cells.len() / width + 1) * width, false);
        }
        PatternDefinition {
            name: name.into(),
            width,
            cells,
        }
    }

    /// A pattern with no cells.
    pub fn empty<S: Into<String>>(name: S) -> Self {
        PatternDefinition::new(name, 0, Vec::new())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.cells.len() / self.width
        }
    }

    /// Width and height as a board size.
    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height() as i32)
    }

    /// Whether the pattern has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All the cells, row by row.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Whether the cell at column `x`, row `y` is alive.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && self.cells.get(y * self.width + x).copied().unwrap_or(false)
    }

    /// Reads a pattern from a file, choosing the format by its extension.
    ///
    /// `.rle` files are read as RLE, anything else as plaintext.
    /// The pattern is named after the file stem.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let text = fs::read_to_string(path)?;
        if extension_of(path).as_deref() == Some("rle") {
            Ok(PatternDefinition::from_rle(name, &text))
        } else {
            Ok(PatternDefinition::from_plaintext(name, &text))
        }
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}

/// An ordered collection of patterns, indexed by position.
///
/// Loaded once and never changed afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PatternSet {
    patterns: Vec<PatternDefinition>,
}

impl PatternSet {
    /// An empty set.
    pub fn new() -> Self {
        PatternSet::default()
    }

    /// Loads every pattern file in `dir` whose extension is in `extensions`.
    ///
    /// The extensions are compared case-insensitively, without the dot.
    /// Patterns are sorted by name so that their indices do not depend on
    /// the directory order. Empty patterns and unreadable files are skipped
    /// with a warning.
    pub fn load_dir<P: AsRef<Path>>(dir: P, extensions: &[&str]) -> Result<Self, Error> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::PatternDirError(dir.display().to_string()));
        }
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let recognized = extension_of(&path)
                .map_or(false, |ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)));
            if recognized && path.is_file() {
                paths.push(path);
            }
        }

        let mut patterns = Vec::with_capacity(paths.len());
        for path in paths {
            match PatternDefinition::read(&path) {
                Ok(pattern) if pattern.is_empty() => {
                    warn!("Skipping empty or malformed pattern {}", path.display());
                }
                Ok(pattern) => patterns.push(pattern),
                Err(e) => warn!("Unable to read pattern {}: {}", path.display(), e),
            }
        }
        patterns.sort_by(|a, b| a.name.cmp(&b.name));
        info!("Loaded {} pattern(s) from {}", patterns.len(), dir.display());
        Ok(PatternSet { patterns })
    }

    /// Same as [`load_dir`](Self::load_dir), with the default extensions.
    pub fn load_default<P: Into<PathBuf>>(dir: P) -> Result<Self, Error> {
        PatternSet::load_dir(dir.into(), &PATTERN_EXTENSIONS)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&PatternDefinition> {
        self.patterns.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, PatternDefinition> {
        self.patterns.iter()
    }

    /// Names of all patterns, in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(PatternDefinition::name)
    }
}

impl From<Vec<PatternDefinition>> for PatternSet {
    fn from(patterns: Vec<PatternDefinition>) -> Self {
        PatternSet { patterns }
    }
}

impl FromIterator<PatternDefinition> for PatternSet {
    fn from_iter<I: IntoIterator<Item = PatternDefinition>>(iter: I) -> Self {
        PatternSet {
            patterns: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for PatternSet {
    type Output = PatternDefinition;

    fn index(&self, index: usize) -> &Self::Output {
        &self.patterns[index]
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a PatternDefinition;
    type IntoIter = slice::Iter<'a, PatternDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}
