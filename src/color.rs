//! Color types, seed-to-color selection and automatic palettes.
//!
//! A seed string is hashed once and different bit ranges of the hash pick
//! the hue, a saturation offset, a lightness offset and the symmetry mode.
//! One base HSL color is then expanded into a small palette of related
//! RGB colors via fixed hue/saturation/lightness offsets.

use crate::hash::cyrb53;

/// A color in HSL space: hue in degrees `[0, 360)`, saturation and
/// lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

/// An RGB color with `i32` channels.
///
/// Channels nominally lie in `[0, 255]` but palette arithmetic and bias
/// jitter may push them outside that range; the rasterizer clamps at paint
/// time, matching how a canvas `fillStyle` would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }
}

/// A palette entry: a color plus a selection weight.
///
/// A weight of zero means "unweighted"; weighted selection only kicks in
/// when every entry in a palette carries a nonzero weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub color: Rgb,
    pub weight: f64,
}

impl Swatch {
    pub const fn new(color: Rgb) -> Self {
        Self { color, weight: 0.0 }
    }

    pub const fn weighted(color: Rgb, weight: f64) -> Self {
        Self { color, weight }
    }
}

impl From<Rgb> for Swatch {
    fn from(color: Rgb) -> Self {
        Self::new(color)
    }
}

/// Light or dark presentation preference of the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    #[default]
    Light,
    Dark,
}

/// Mirror axis of the generated pattern.
///
/// Determines how much of the grid is procedurally generated (half for the
/// single-axis modes, a quarter for [`Symmetry::Quad`]) and how that part
/// is reflected into the full square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    Horizontal,
    Vertical,
    Quad,
}

/// Derives a base color and a symmetry mode from a string.
///
/// Low hash bits pick the hue; shifted bit windows pick saturation and
/// lightness offsets so nearby seeds still diverge visually. The shifts
/// operate on the hash truncated to 32 bits, which is part of the stable
/// output contract.
///
/// Resulting ranges: hue `[0, 360)`, saturation `[50, 70)`, lightness
/// `[30, 45)` for [`Scheme::Light`] and `[80, 95)` for [`Scheme::Dark`].
#[must_use]
pub fn string_color(text: &str, scheme: Scheme) -> (Hsl, Symmetry) {
    let num = cyrb53(text, 0);
    let low = num as u32;

    let hue = ((num & 0xfff) % 360) as u16;
    let sat_mod = (((low << 3) & 0xff) % 20) as u8;
    let light_mod = (((low << 5) & 0xff) % 15) as u8;
    let light_base = match scheme {
        Scheme::Light => 30,
        Scheme::Dark => 80,
    };

    let symmetry = match num % 3 {
        0 => Symmetry::Horizontal,
        1 => Symmetry::Vertical,
        _ => Symmetry::Quad,
    };

    (Hsl::new(hue, 50 + sat_mod, light_base + light_mod), symmetry)
}

/// Converts HSL to RGB using the trig-free min/max formula.
///
/// `h` is in degrees and may lie outside `[0, 360)`; `s` and `l` are
/// fractions, usually in `[0, 1]` but tolerated outside it (the formula's
/// own min/max terms bound the output). Channels are rounded half away
/// from zero.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let channel = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (channel * 255.0).round() as i32
    };
    Rgb::new(f(0.0), f(8.0), f(4.0))
}

/// Expands one base color into a palette of four related colors.
///
/// Two hue-shifted siblings at the base saturation/lightness, one lighter
/// and one darker accent at boosted saturation. All entries are
/// unweighted.
#[must_use]
pub fn auto_palette(base: Hsl) -> Vec<Swatch> {
    let h = f64::from(base.h);
    let s = f64::from(base.s);
    let l = f64::from(base.l);

    [
        (h - 10.0, s, l),
        (h + 15.0, s, l),
        (h - 5.0, s + 20.0, l + 20.0),
        (h + 8.0, s + 20.0, l - 20.0),
    ]
    .into_iter()
    .map(|(h, s, l)| Swatch::new(hsl_to_rgb(h, s / 100.0, l / 100.0)))
    .collect()
}
