//! # colordict
//!
//! Color name resolution and colorspace conversion for image processing
//! pipelines.
//!
//! The crate maps human-readable color names (and `#rrggbb` hex specs) to
//! RGB samples and back, backed by a text-file color dictionary in the
//! classic `rgb.txt` shape, and provides pure RGB/HSV and YCbCr/RGB
//! conversions.
//!
//! ## Quick Start
//!
//! ```no_run
//! use colordict::prelude::*;
//!
//! // Resolve a name through the RGBDEF env var / built-in search path.
//! let pink = resolve::parse_color_name("pink", 255)?;
//!
//! // Reverse: find a name (or hex spec) for a pixel value.
//! let name = resolve::name_for(pink, 255, true)?;
//! # Ok::<(), colordict::ColorNameError>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Dictionary**: a line-oriented text file of `<R> <G> <B> <name>`
//!   records on a fixed 0..=65535 scale, streamed by
//!   [`dictfile::DictReader`] and held in memory by [`dict::ColorDict`]
//!   with first-match-wins semantics and a reverse color index
//! - **Resolution**: [`resolve`] canonicalizes names (lowercase, no
//!   whitespace) and converts between names, normalized fractions, and
//!   device samples at any maxval
//! - **Conversion**: [`convert`] holds the stateless RGB/HSV/YCbCr math
//!
//! Diagnostics that do not stop an operation (malformed dictionary lines,
//! rounding advisories) are emitted through the `log` crate; everything
//! fatal surfaces as a [`ColorNameError`].

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod convert;
pub mod dict;
pub mod dictfile;
pub mod error;
pub mod resolve;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{ColorRecord, DeviceColor, HsvColor, NormalizedColor, DICT_MAXVAL};
    pub use crate::convert;
    pub use crate::dict::{ColorDict, ColorMatch};
    pub use crate::dictfile::{open_dictionary, DictReader};
    pub use crate::error::ColorNameError;
    pub use crate::resolve;
}

// Re-export key types at crate root
pub use color::{ColorRecord, DeviceColor, HsvColor, NormalizedColor, DICT_MAXVAL};
pub use dict::{ColorDict, ColorMatch};
pub use error::ColorNameError;
