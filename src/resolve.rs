//! Resolving color names to colors and colors back to names.
//!
//! Forward resolution streams the dictionary file directly and returns
//! the color of the first entry whose canonicalized name matches the
//! canonicalized query, so a name whose color duplicates an earlier
//! entry still resolves (the in-memory [`ColorDict`] deduplicates by
//! color, not by name).
//!
//! # Examples
//!
//! ```no_run
//! use colordict::resolve;
//!
//! // Uses the RGBDEF environment variable or the built-in search path.
//! let pink = resolve::parse_color_name("Light Pink", 255)?;
//! let name = resolve::name_for(pink, 255, false)?;
//! # Ok::<(), colordict::ColorNameError>(())
//! ```

use std::io::BufRead;

use crate::color::{DeviceColor, NormalizedColor, DICT_MAXVAL};
use crate::dict::{ColorDict, ColorMatch};
use crate::dictfile::{open_dictionary, DictReader};
use crate::error::ColorNameError;

/// Maximum round-trip error a maxval may introduce before a rounding
/// advisory is logged.
const ROUNDING_EPSILON: f64 = 1.0 / 65536.0;

/// Canonical form of a color name: all whitespace removed and alphabetic
/// characters lowercased, in a single left-to-right pass.
#[must_use]
pub fn canonicalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Resolve a color name to its normalized color.
///
/// Opens the dictionary file (explicit paths are not taken here; the
/// environment variable and search path apply) and scans it for the first
/// entry whose canonicalized name equals the canonicalized query.
///
/// # Errors
///
/// Fails with an open error if no dictionary file can be opened, and with
/// `UnknownColor` if the scan exhausts the file without a match.
pub fn resolve_name(name: &str) -> Result<NormalizedColor, ColorNameError> {
    let reader = open_dictionary(None, true)?.ok_or(ColorNameError::NoDictionary)?;
    resolve_name_from(reader, name)
}

/// Like [`resolve_name`], scanning an already-open dictionary stream.
///
/// # Errors
///
/// Returns `UnknownColor` if no entry matches, or `Read` on stream
/// failure.
pub fn resolve_name_from<R: BufRead>(
    mut reader: DictReader<R>,
    name: &str,
) -> Result<NormalizedColor, ColorNameError> {
    let canon = canonicalize(name);
    while let Some(record) = reader.next_record()? {
        if canonicalize(&record.name) == canon {
            return Ok(record.color.normalize(DICT_MAXVAL));
        }
    }
    Err(ColorNameError::UnknownColor(name.to_string()))
}

/// Resolve a color name to a device color at `maxval`.
///
/// Each channel is rounded independently to the nearest value `maxval`
/// can represent. When `close_ok` is false, `maxval` differs from the
/// dictionary scale, and any channel's round-trip error exceeds 1/65536,
/// a rounding advisory naming the exact and approximated values is
/// logged; resolution still succeeds.
///
/// # Errors
///
/// Same failures as [`resolve_name`].
pub fn resolve_name_to_device(
    name: &str,
    maxval: u16,
    close_ok: bool,
) -> Result<DeviceColor, ColorNameError> {
    let exact = resolve_name(name)?;
    let device = exact.quantize(maxval);

    if !close_ok && maxval != DICT_MAXVAL && !represents_exactly(exact, device, maxval) {
        log::warn!(
            "color '{name}' cannot be represented exactly with a maxval of {maxval}; \
             approximating as ({}, {}, {}) (the color dictionary uses maxval {DICT_MAXVAL}, \
             so that maxval will always work)",
            device.red,
            device.green,
            device.blue,
        );
    }

    Ok(device)
}

/// Resolve a color name to a device color, accepting approximation
/// silently.
///
/// # Errors
///
/// Same failures as [`resolve_name`].
pub fn parse_color_name(name: &str, maxval: u16) -> Result<DeviceColor, ColorNameError> {
    resolve_name_to_device(name, maxval, true)
}

fn represents_exactly(exact: NormalizedColor, device: DeviceColor, maxval: u16) -> bool {
    let close = |sample: u16, fraction: f64| {
        (f64::from(sample) / f64::from(maxval) - fraction).abs() <= ROUNDING_EPSILON
    };
    close(device.red, exact.red) && close(device.green, exact.green) && close(device.blue, exact.blue)
}

/// Find a name for `color` (samples relative to `maxval`).
///
/// The dictionary is loaded fresh; callers doing repeated reverse lookups
/// should build a [`ColorDict`] once and use [`name_from_dict`].
///
/// With `hex_ok` set, an unopenable dictionary file is treated as empty
/// and any inexact match falls back to an X11-style `#rrggbb` specifier.
/// Without it, the dictionary file must open, and an inexact match
/// returns the nearest name.
///
/// # Errors
///
/// Open failures when `hex_ok` is false; `EmptyDictionary` when the
/// dictionary has no entries and hex is not permitted.
pub fn name_for(color: DeviceColor, maxval: u16, hex_ok: bool) -> Result<String, ColorNameError> {
    let dict = ColorDict::load(None, !hex_ok)?;
    name_from_dict(&dict, color, maxval, hex_ok)
}

/// Like [`name_for`], against an already-built dictionary.
///
/// # Errors
///
/// Returns `EmptyDictionary` when `dict` has no entries and `hex_ok` is
/// false.
pub fn name_from_dict(
    dict: &ColorDict,
    color: DeviceColor,
    maxval: u16,
    hex_ok: bool,
) -> Result<String, ColorNameError> {
    match dict.lookup_color(color, maxval) {
        Some(ColorMatch::Exact(record)) => Ok(record.name.clone()),
        Some(ColorMatch::Nearest { record, .. }) => {
            if hex_ok {
                Ok(color.hex(maxval))
            } else {
                Ok(record.name.clone())
            }
        }
        None => {
            if hex_ok {
                Ok(color.hex(maxval))
            } else {
                Err(ColorNameError::EmptyDictionary)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(text: &str) -> DictReader<Cursor<&str>> {
        DictReader::new(Cursor::new(text))
    }

    const SAMPLE: &str = "\
65535 49344 52171 pink
65535 49344 52171 lightpink
0 0 0 black
";

    #[test]
    fn test_canonicalize_lowercases_and_strips() {
        assert_eq!(canonicalize("Light Pink"), "lightpink");
        assert_eq!(canonicalize("  GREY\t42 "), "grey42");
        assert_eq!(canonicalize("black"), "black");
        assert_eq!(canonicalize(" \t "), "");
    }

    #[test]
    fn test_resolve_first_matching_entry() {
        let color = resolve_name_from(reader(SAMPLE), "PINK").unwrap();
        let device = color.quantize(255);
        assert_eq!(device, DeviceColor::new(255, 192, 203));
    }

    #[test]
    fn test_resolve_name_deduplicated_by_dict_still_found() {
        // "lightpink" never makes it into a ColorDict (duplicate color),
        // but the streaming scan sees it
        let color = resolve_name_from(reader(SAMPLE), "Light Pink").unwrap();
        assert_eq!(color.quantize(255), DeviceColor::new(255, 192, 203));
    }

    #[test]
    fn test_resolve_unknown_name() {
        let err = resolve_name_from(reader(SAMPLE), "puce").unwrap_err();
        assert!(matches!(err, ColorNameError::UnknownColor(name) if name == "puce"));
    }

    #[test]
    fn test_resolve_query_whitespace_and_case_ignored() {
        let a = resolve_name_from(reader(SAMPLE), "black").unwrap();
        let b = resolve_name_from(reader(SAMPLE), " B L A C K ").unwrap();
        assert_eq!(a, b);
    }

    fn sample_dict() -> ColorDict {
        ColorDict::from_reader(reader(SAMPLE)).unwrap()
    }

    #[test]
    fn test_name_from_dict_exact() {
        let name = name_from_dict(&sample_dict(), DeviceColor::new(255, 192, 203), 255, true)
            .unwrap();
        assert_eq!(name, "pink");
    }

    #[test]
    fn test_name_from_dict_approximate_without_hex() {
        let name = name_from_dict(&sample_dict(), DeviceColor::new(250, 192, 203), 255, false)
            .unwrap();
        assert_eq!(name, "pink");
    }

    #[test]
    fn test_name_from_dict_approximate_with_hex() {
        let name = name_from_dict(&sample_dict(), DeviceColor::new(250, 192, 203), 255, true)
            .unwrap();
        assert_eq!(name, "#fac0cb");
    }

    #[test]
    fn test_name_from_dict_empty_with_hex() {
        let name = name_from_dict(&ColorDict::new(), DeviceColor::new(1, 2, 3), 255, true)
            .unwrap();
        assert_eq!(name, "#010203");
    }

    #[test]
    fn test_name_from_dict_empty_without_hex() {
        let err = name_from_dict(&ColorDict::new(), DeviceColor::new(1, 2, 3), 255, false)
            .unwrap_err();
        assert!(matches!(err, ColorNameError::EmptyDictionary));
    }

    #[test]
    fn test_hex_fallback_shape() {
        let name = name_from_dict(&ColorDict::new(), DeviceColor::new(255, 0, 128), 255, true)
            .unwrap();
        assert_eq!(name, "#ff0080");
        assert!(name.chars().skip(1).all(|c| c.is_ascii_hexdigit()));
    }
}
