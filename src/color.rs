//! Core color value types.
//!
//! Three representations of the same conceptual color are used throughout
//! the crate:
//!
//! - [`DeviceColor`]: integer samples relative to a caller-supplied maxval
//!   (e.g. 255 for 8-bit channels). The color dictionary file format uses
//!   the fixed maxval [`DICT_MAXVAL`].
//! - [`NormalizedColor`]: samples as fractions in `[0, 1]`, independent of
//!   any maxval; the canonical interchange form.
//! - [`HsvColor`]: hue in degrees plus saturation/value fractions.
//!
//! # Examples
//!
//! ```
//! use colordict::color::{DeviceColor, DICT_MAXVAL};
//!
//! let pink = DeviceColor::new(65535, 49344, 52171);
//! let normalized = pink.normalize(DICT_MAXVAL);
//! let eight_bit = normalized.quantize(255);
//! assert_eq!(eight_bit, DeviceColor::new(255, 192, 203));
//! ```

use std::fmt;

/// Maxval of the color dictionary file format.
///
/// Every `<R> <G> <B> <name>` line in a dictionary file expresses its
/// samples on this scale, so a dictionary color can always be represented
/// exactly at this maxval.
pub const DICT_MAXVAL: u16 = 65535;

/// An RGB color quantized to an integer maxval.
///
/// The maxval itself is not stored; operations that depend on it take it
/// as a parameter, following the convention of pixel buffers in image
/// pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeviceColor {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl DeviceColor {
    /// Create a device color from raw samples.
    #[must_use]
    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }

    /// Samples as a `(red, green, blue)` tuple.
    #[must_use]
    pub const fn samples(&self) -> (u16, u16, u16) {
        (self.red, self.green, self.blue)
    }

    /// Convert to fractional samples by dividing by `maxval`.
    #[must_use]
    pub fn normalize(&self, maxval: u16) -> NormalizedColor {
        NormalizedColor {
            red: f64::from(self.red) / f64::from(maxval),
            green: f64::from(self.green) / f64::from(maxval),
            blue: f64::from(self.blue) / f64::from(maxval),
        }
    }

    /// Rescale samples from `maxval` to `new_maxval` by truncating integer
    /// division. Identity when the maxvals are equal.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "min() bounds the value")]
    pub fn rescale(&self, maxval: u16, new_maxval: u16) -> Self {
        if maxval == new_maxval {
            return *self;
        }
        let scale = |sample: u16| -> u16 {
            let scaled = u32::from(sample) * u32::from(new_maxval) / u32::from(maxval);
            scaled.min(u32::from(u16::MAX)) as u16
        };
        Self {
            red: scale(self.red),
            green: scale(self.green),
            blue: scale(self.blue),
        }
    }

    /// X11-style hex specifier `#rrggbb`, computed from the color rescaled
    /// to the 0-255 range.
    #[must_use]
    pub fn hex(&self, maxval: u16) -> String {
        let c = self.rescale(maxval, 255);
        format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
    }
}

impl From<(u16, u16, u16)> for DeviceColor {
    fn from((red, green, blue): (u16, u16, u16)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u16; 3]> for DeviceColor {
    fn from([red, green, blue]: [u16; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for DeviceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// An RGB color as fractions in `[0, 1]`, independent of any maxval.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl NormalizedColor {
    /// Create a normalized color from fractional samples.
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Quantize to integer samples at `maxval`, rounding each channel
    /// independently to the nearest representable value.
    #[must_use]
    pub fn quantize(&self, maxval: u16) -> DeviceColor {
        DeviceColor {
            red: unnormalize(self.red, maxval),
            green: unnormalize(self.green, maxval),
            blue: unnormalize(self.blue, maxval),
        }
    }
}

/// Round a fractional sample to the nearest integer sample at `maxval`.
#[expect(clippy::cast_possible_truncation, reason = "samples are fractions in [0, 1]")]
#[expect(clippy::cast_sign_loss, reason = "samples are fractions in [0, 1]")]
pub(crate) fn unnormalize(sample: f64, maxval: u16) -> u16 {
    (sample * f64::from(maxval) + 0.5) as u16
}

/// A color in HSV space.
///
/// `hue` is in degrees in `[0, 360)`; `saturation` and `value` are
/// fractions in `[0, 1]`. Hue is undefined for achromatic colors and is
/// reported as 0 by convention.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HsvColor {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl HsvColor {
    /// Create an HSV color.
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

/// One entry of the color dictionary: a name and its color on the
/// dictionary scale ([`DICT_MAXVAL`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRecord {
    /// The color name, verbatim from the file (may contain spaces).
    pub name: String,
    /// The color, with samples on the 0..=65535 dictionary scale.
    pub color: DeviceColor,
}

impl ColorRecord {
    /// Create a record from a name and dictionary-scale samples.
    #[must_use]
    pub fn new(name: impl Into<String>, red: u16, green: u16, blue: u16) -> Self {
        Self {
            name: name.into(),
            color: DeviceColor::new(red, green, blue),
        }
    }
}

impl fmt::Display for ColorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.color.red, self.color.green, self.color.blue, self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_round_trip_at_dict_maxval() {
        let color = DeviceColor::new(65535, 49344, 52171);
        let back = color.normalize(DICT_MAXVAL).quantize(DICT_MAXVAL);
        assert_eq!(back, color);
    }

    #[test]
    fn test_quantize_rounds_to_nearest() {
        // 0.5 at maxval 255 is 127.5, which rounds up
        let c = NormalizedColor::new(0.5, 0.0, 1.0).quantize(255);
        assert_eq!(c, DeviceColor::new(128, 0, 255));
    }

    #[test]
    fn test_rescale_identity() {
        let c = DeviceColor::new(10, 20, 30);
        assert_eq!(c.rescale(255, 255), c);
    }

    #[test]
    fn test_rescale_truncates() {
        // From the 65535 scale down to 255 the factor is 1/257
        let c = DeviceColor::new(65535, 49344, 513);
        assert_eq!(c.rescale(DICT_MAXVAL, 255), DeviceColor::new(255, 192, 1));
    }

    #[test]
    fn test_hex_formatting() {
        let c = DeviceColor::new(255, 192, 203);
        assert_eq!(c.hex(255), "#ffc0cb");

        let dark = DeviceColor::new(0, 0, 0);
        assert_eq!(dark.hex(255), "#000000");
    }

    #[test]
    fn test_hex_rescales_from_other_maxvals() {
        let white = DeviceColor::new(65535, 65535, 65535);
        assert_eq!(white.hex(DICT_MAXVAL), "#ffffff");
    }

    #[test]
    fn test_record_display_matches_file_format() {
        let rec = ColorRecord::new("light pink", 65535, 47802, 49601);
        assert_eq!(rec.to_string(), "65535 47802 49601 light pink");
    }
}
