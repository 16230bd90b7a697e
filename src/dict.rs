//! The in-memory color dictionary.
//!
//! [`ColorDict`] owns an ordered sequence of [`ColorRecord`]s (insertion
//! order is file order) plus a reverse hash from each color to the index
//! of its first occurrence. Duplicate colors later in the file are
//! dropped so that the first name given for a color wins; duplicate names
//! for different colors are kept as-is.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use colordict::dict::ColorDict;
//! use colordict::dictfile::DictReader;
//!
//! let file = "65535 49344 52171 pink\n65535 49344 52171 lightpink\n";
//! let dict = ColorDict::from_reader(DictReader::new(Cursor::new(file))).unwrap();
//!
//! assert_eq!(dict.len(), 1);
//! assert_eq!(dict.lookup_name("Light Pink"), None); // first name won
//! assert_eq!(dict.lookup_name("PINK").unwrap().name, "pink");
//! ```

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use crate::color::{ColorRecord, DeviceColor, DICT_MAXVAL};
use crate::dictfile::{open_dictionary, DictReader};
use crate::error::ColorNameError;
use crate::resolve::canonicalize;

/// Minimum capacity the entry storage jumps to on its first growth.
const MIN_GROWTH: usize = 1024;

/// Result of a reverse (color to name) lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMatch<'a> {
    /// The dictionary contains this exact color.
    Exact(&'a ColorRecord),
    /// The closest entry by Manhattan distance on a 0-255 scale.
    Nearest {
        record: &'a ColorRecord,
        distance: u32,
    },
}

impl<'a> ColorMatch<'a> {
    /// The matched record, exact or nearest.
    #[must_use]
    pub const fn record(&self) -> &'a ColorRecord {
        match *self {
            Self::Exact(record) | Self::Nearest { record, .. } => record,
        }
    }

    /// Whether this is an exact match.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

/// Growable table of named colors with a reverse color index.
#[derive(Debug, Default)]
pub struct ColorDict {
    entries: Vec<ColorRecord>,
    index: HashMap<(u16, u16, u16), usize>,
}

impl ColorDict {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary by streaming every record out of `reader`.
    ///
    /// # Errors
    ///
    /// Returns `Read` if the underlying stream fails mid-scan.
    pub fn from_reader<R: BufRead>(mut reader: DictReader<R>) -> Result<Self, ColorNameError> {
        let mut dict = Self::new();
        while let Some(record) = reader.next_record()? {
            dict.insert(record);
        }
        Ok(dict)
    }

    /// Open a dictionary file (see [`open_dictionary`] for the path
    /// resolution order) and build the dictionary from it.
    ///
    /// An unopenable file with `must_open` unset yields an empty
    /// dictionary.
    ///
    /// # Errors
    ///
    /// Propagates open failures when `must_open` is set, and read errors.
    pub fn load(path: Option<&Path>, must_open: bool) -> Result<Self, ColorNameError> {
        match open_dictionary(path, must_open)? {
            Some(reader) => Self::from_reader(reader),
            None => Ok(Self::new()),
        }
    }

    /// Add one record, keeping the first name seen for each color.
    ///
    /// A record whose color is already present is discarded. Otherwise the
    /// record is appended and the reverse index points the color at its
    /// position.
    pub fn insert(&mut self, record: ColorRecord) {
        let key = record.color.samples();
        if self.index.contains_key(&key) {
            return;
        }
        if self.entries.len() == self.entries.capacity() {
            // Grow geometrically, never below the minimum block.
            let target = (self.entries.capacity() * 2).max(MIN_GROWTH);
            self.entries.reserve_exact(target - self.entries.len());
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(record);
    }

    /// Number of (unique-color) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The record at `index`, in insertion (file) order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ColorRecord> {
        self.entries.get(index)
    }

    /// Iterate over the records in insertion (file) order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColorRecord> {
        self.entries.iter()
    }

    /// Forward lookup: the first entry whose canonicalized name equals the
    /// canonicalized query.
    #[must_use]
    pub fn lookup_name(&self, name: &str) -> Option<&ColorRecord> {
        let canon = canonicalize(name);
        self.entries
            .iter()
            .find(|entry| canonicalize(&entry.name) == canon)
    }

    /// Reverse lookup: the name for `color`, whose samples are relative to
    /// `maxval`.
    ///
    /// Probes the reverse hash for an exact hit first (after rescaling to
    /// the dictionary scale); failing that, scans every entry computing
    /// Manhattan distance on a common 0-255 scale, keeping the earliest
    /// entry with the smallest distance. A zero-distance scan hit is
    /// reported as exact.
    ///
    /// Returns `None` only when the dictionary is empty.
    #[must_use]
    pub fn lookup_color(&self, color: DeviceColor, maxval: u16) -> Option<ColorMatch<'_>> {
        let scaled = color.rescale(maxval, DICT_MAXVAL);
        if let Some(&i) = self.index.get(&scaled.samples()) {
            return Some(ColorMatch::Exact(&self.entries[i]));
        }

        let query = color.rescale(maxval, 255);
        let mut best: Option<(usize, u32)> = None;
        for (i, entry) in self.entries.iter().enumerate() {
            let candidate = entry.color.rescale(DICT_MAXVAL, 255);
            let distance = manhattan(query, candidate);
            // Only a strictly smaller distance replaces the current best,
            // so ties keep the earliest entry in file order.
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((i, distance));
            }
            if distance == 0 {
                break;
            }
        }

        best.map(|(i, distance)| {
            if distance == 0 {
                ColorMatch::Exact(&self.entries[i])
            } else {
                ColorMatch::Nearest {
                    record: &self.entries[i],
                    distance,
                }
            }
        })
    }
}

impl<'a> IntoIterator for &'a ColorDict {
    type Item = &'a ColorRecord;
    type IntoIter = std::slice::Iter<'a, ColorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn manhattan(a: DeviceColor, b: DeviceColor) -> u32 {
    let diff = |x: u16, y: u16| u32::from(x.abs_diff(y));
    diff(a.red, b.red) + diff(a.green, b.green) + diff(a.blue, b.blue)
}
