//! Reading the color names dictionary file.
//!
//! The dictionary is a line-oriented text file. Comment lines start with
//! `#` or `!`, blank lines are ignored, and data lines look like:
//!
//! ```text
//! 65535 49344 52171 pink
//! ```
//!
//! with the three samples on the 0..=65535 dictionary scale and the rest
//! of the line (spaces allowed) as the color name. Malformed data lines
//! produce a [`log::warn!`] with the line number and content and are
//! skipped; they never abort the scan.
//!
//! [`open_dictionary`] locates the file: an explicit path wins, then the
//! [`DICT_PATH_ENV`] environment variable, then each entry of the built-in
//! [`DICT_SEARCH_PATH`] in order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::ColorRecord;
use crate::error::ColorNameError;

/// Environment variable naming the dictionary file when no explicit path
/// is given.
pub const DICT_PATH_ENV: &str = "RGBDEF";

/// Colon-separated list of dictionary file locations tried in order when
/// neither an explicit path nor [`DICT_PATH_ENV`] is available.
pub const DICT_SEARCH_PATH: &str = "/usr/share/X11/rgb.txt:/usr/lib/X11/rgb.txt:/usr/X11R6/lib/X11/rgb.txt:/etc/X11/rgb.txt";

static DATA_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s+(\d+)\s+(\d+)\s+(.*\S)\s*$").expect("valid regex"));

/// Open the color names dictionary file.
///
/// Resolution order: `path` if given; otherwise the file named by the
/// [`DICT_PATH_ENV`] environment variable; otherwise the first openable
/// entry of [`DICT_SEARCH_PATH`].
///
/// With `must_open` set, failure to open anything is an error naming the
/// offending path and OS error. Without it, `Ok(None)` is returned and the
/// caller treats the dictionary as empty.
///
/// # Errors
///
/// Returns `FileOpen`, `EnvFileOpen`, or `NoDictionary` when `must_open`
/// is set and no file can be opened.
pub fn open_dictionary(
    path: Option<&Path>,
    must_open: bool,
) -> Result<Option<DictReader<BufReader<File>>>, ColorNameError> {
    if let Some(path) = path {
        return match File::open(path) {
            Ok(file) => Ok(Some(DictReader::new(BufReader::new(file)))),
            Err(source) if must_open => Err(ColorNameError::FileOpen {
                path: path.to_path_buf(),
                source,
            }),
            Err(_) => Ok(None),
        };
    }

    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        return match File::open(&env_path) {
            Ok(file) => Ok(Some(DictReader::new(BufReader::new(file)))),
            Err(source) if must_open => Err(ColorNameError::EnvFileOpen {
                path: env_path.into(),
                source,
            }),
            Err(_) => Ok(None),
        };
    }

    for candidate in DICT_SEARCH_PATH.split(':') {
        if let Ok(file) = File::open(candidate) {
            return Ok(Some(DictReader::new(BufReader::new(file))));
        }
    }

    if must_open {
        Err(ColorNameError::NoDictionary)
    } else {
        Ok(None)
    }
}

/// A streaming reader over one dictionary file.
///
/// Carries its own line counter for diagnostics; the counter belongs to
/// the reader, so independent scans never interfere.
#[derive(Debug)]
pub struct DictReader<R: BufRead> {
    reader: R,
    line_no: u64,
    buf: String,
}

impl<R: BufRead> DictReader<R> {
    /// Wrap a buffered reader positioned at the start of a dictionary.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: String::new(),
        }
    }

    /// Number of the line most recently read, starting at 1.
    #[must_use]
    pub const fn line_no(&self) -> u64 {
        self.line_no
    }

    /// Read the next color record, or `Ok(None)` at end of file.
    ///
    /// Comment and blank lines are skipped silently; lines that are not
    /// `<R> <G> <B> <name>` (including samples above 65535) are reported
    /// as a warning with their line number and skipped.
    ///
    /// # Errors
    ///
    /// Returns `Read` if the underlying reader fails.
    pub fn next_record(&mut self) -> Result<Option<ColorRecord>, ColorNameError> {
        loop {
            self.buf.clear();
            self.line_no += 1;
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }

            let line = self.buf.trim_end_matches(['\n', '\r']);
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            if let Some(record) = parse_data_line(line) {
                return Ok(Some(record));
            }
            log::warn!(
                "can't parse color names dictionary line {}: '{}'",
                self.line_no,
                line
            );
        }
    }
}

fn parse_data_line(line: &str) -> Option<ColorRecord> {
    let caps = DATA_LINE_RE.captures(line)?;
    let red = caps[1].parse::<u16>().ok()?;
    let green = caps[2].parse::<u16>().ok()?;
    let blue = caps[3].parse::<u16>().ok()?;
    Some(ColorRecord::new(&caps[4], red, green, blue))
}
