//! Stateless colorspace conversions: YCbCr to RGB and RGB to/from HSV.
//!
//! All functions are pure. RGB samples are relative to a caller-supplied
//! maxval; YCbCr inputs may be on any scale as long as all three share it,
//! and the output is on the same scale.

use crate::color::{unnormalize, DeviceColor, HsvColor};
use crate::error::ColorNameError;

/// Grayness threshold for the HSV decomposition.
const EPSILON: f64 = 1e-5;

/// The color wheel is divided into six 60 degree sectors.
const SECTOR_DEGREES: f64 = 60.0;

/// The color with luminance `y`, blue chrominance `cb`, and red
/// chrominance `cr`.
///
/// Inputs can be on any common scale; the output is on the same scale.
/// The green channel is floored at zero. No other clamping to the
/// caller's maxval is performed, so rounding may push an output sample
/// past the input scale's maximum.
#[must_use]
#[expect(clippy::cast_possible_truncation, reason = "float-to-int casts saturate")]
#[expect(clippy::cast_sign_loss, reason = "float-to-int casts saturate at zero")]
pub fn rgb_from_ycbcr(y: u16, cb: i32, cr: i32) -> DeviceColor {
    let y = f64::from(y);
    let cb = f64::from(cb);
    let cr = f64::from(cr);

    DeviceColor {
        red: (y + 1.4022 * cr) as u16,
        green: (y - 0.7145 * cr - 0.3456 * cb).max(0.0) as u16,
        blue: (y + 1.7710 * cb) as u16,
    }
}

/// Convert an HSV color to RGB samples at `maxval`.
///
/// Zero saturation produces the gray `(v, v, v)`. Otherwise the hue
/// selects one of six 60 degree sectors and the channels come from the
/// fixed sector table, each scaled and rounded to `maxval`.
///
/// # Errors
///
/// Returns `InvalidHue` when the hue lies outside `[0, 360)`; that is a
/// contract violation by the caller, not a recoverable input.
#[expect(clippy::many_single_char_names, reason = "conventional HSV auxiliaries")]
pub fn rgb_from_hsv(hsv: HsvColor, maxval: u16) -> Result<DeviceColor, ColorNameError> {
    let v = hsv.value;

    let (r, g, b) = if hsv.saturation == 0.0 {
        (v, v, v)
    } else {
        #[expect(clippy::cast_possible_truncation, reason = "sector checked against 0..=5")]
        let sector = (hsv.hue / SECTOR_DEGREES).floor() as i32;
        // Fraction of the way through the sector, in [0, 1)
        let f = (hsv.hue - f64::from(sector) * SECTOR_DEGREES) / SECTOR_DEGREES;
        let m = v * (1.0 - hsv.saturation);
        let n = v * (1.0 - hsv.saturation * f);
        let k = v * (1.0 - hsv.saturation * (1.0 - f));

        match sector {
            0 => (v, k, m),
            1 => (n, v, m),
            2 => (m, v, k),
            3 => (m, n, v),
            4 => (k, m, v),
            5 => (v, m, n),
            _ => return Err(ColorNameError::InvalidHue(hsv.hue)),
        }
    };

    Ok(DeviceColor {
        red: unnormalize(r, maxval),
        green: unnormalize(g, maxval),
        blue: unnormalize(b, maxval),
    })
}

#[derive(Clone, Copy)]
enum MaxChannel {
    Red,
    Green,
    Blue,
}

/// Decompose RGB samples at `maxval` into HSV.
///
/// Value is the largest normalized channel; saturation is the channel
/// range over the value (zero for black); hue comes from the angle
/// formula keyed by whichever channel attained the maximum, with negative
/// angles wrapped by 360. An achromatic color reports hue 0.
#[must_use]
pub fn hsv_from_rgb(color: DeviceColor, maxval: u16) -> HsvColor {
    let r = f64::from(color.red) / f64::from(maxval);
    let g = f64::from(color.green) / f64::from(maxval);
    let b = f64::from(color.blue) / f64::from(maxval);

    let (max_channel, value) = if r >= g {
        if r >= b {
            (MaxChannel::Red, r)
        } else {
            (MaxChannel::Blue, b)
        }
    } else if g >= b {
        (MaxChannel::Green, g)
    } else {
        (MaxChannel::Blue, b)
    };

    let range = value - r.min(g).min(b);

    let saturation = if value < EPSILON { 0.0 } else { range / value };

    let hue = if range < EPSILON {
        // Gray, so hue has no meaning; 0 by convention
        0.0
    } else {
        let cr = (value - r) / range;
        let cg = (value - g) / range;
        let cb = (value - b) / range;

        let angle = match max_channel {
            MaxChannel::Red => 60.0 * (cb - cg),
            MaxChannel::Green => 120.0 + 60.0 * (cr - cb),
            MaxChannel::Blue => 240.0 + 60.0 * (cg - cr),
        };
        if angle >= 0.0 { angle } else { 360.0 + angle }
    };

    HsvColor {
        hue,
        saturation,
        value,
    }
}
