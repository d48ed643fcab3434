//! Deterministic seeded pixel-art avatar generation.
//!
//! A seed string is hashed into a base color and a symmetry mode, the base
//! color is expanded into a small palette, a seeded random sequence paints
//! a half (or quarter) grid of cells, the grid is mirrored into a full
//! symmetric square, and the result is rasterized to PNG. The same seed
//! always produces byte-identical output, across runs and platforms.
//!
//! ## Examples
//!
//! ```
//! use seedpix::{get_avatar, AvatarOptions};
//!
//! let avatar = get_avatar("alice", &AvatarOptions::default())?;
//! assert!(!avatar.image.bytes().is_empty());
//! // `avatar.color` is the base HSL color, handy as a UI accent.
//! assert!(avatar.color.h < 360);
//! # Ok::<(), image::ImageError>(())
//! ```
//!
//! The raw pattern API gives full control over the grid:
//!
//! ```
//! use seedpix::{randpix, Options, Symmetry};
//!
//! let image = randpix(&Options {
//!     seed: "alice".into(),
//!     size: 16,
//!     scale: 4,
//!     symmetry: Symmetry::Quad,
//!     ..Options::default()
//! })?;
//! # Ok::<(), image::ImageError>(())
//! ```

pub mod color;
pub mod hash;
pub mod pattern;
pub mod raster;
pub mod rng;

pub use color::{
    auto_palette, hsl_to_rgb, string_color, Hsl, Rgb, Scheme, Swatch,
    Symmetry,
};
pub use pattern::{create_final_pattern, Pattern};
pub use raster::{rasterize, EncodedImage};
pub use rng::SeedRng;

/// Options for the raw pattern API, [`randpix`].
///
/// Construct with struct-update syntax over [`Options::default`] and
/// override what you need. `size == 0` yields an empty image; negative
/// weights and empty palettes are caller contract violations with
/// unspecified visual results.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Seed string the whole generation derives from. The empty string is
    /// a valid seed.
    pub seed: String,
    /// Grid side length, in cells.
    pub size: u32,
    /// Pixels per cell.
    pub scale: u32,
    /// Forces every painted cell to one color, bypassing the palette.
    pub color: Option<Rgb>,
    /// Palette to draw cell colors from. When absent (and `color` is
    /// too), a palette is derived from the seed.
    pub palette: Option<Vec<Swatch>>,
    /// Probability that a cell is painted rather than transparent.
    pub fill_factor: f64,
    pub symmetry: Symmetry,
    /// Magnitude of per-channel color jitter; 0 disables it.
    pub color_bias: u32,
    /// Use one shared jitter draw for all three channels of a cell
    /// instead of an independent draw per channel.
    pub grayscale_bias: bool,
}

impl Options {
    /// Defaults with the given seed.
    #[must_use]
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            ..Self::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: String::new(),
            size: 8,
            scale: 1,
            color: None,
            palette: None,
            fill_factor: 0.6,
            symmetry: Symmetry::Vertical,
            color_bias: 0,
            grayscale_bias: false,
        }
    }
}

/// Overrides for [`get_avatar`]. Unset fields keep the computed defaults;
/// set fields win.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvatarOptions {
    /// Explicit light/dark preference. When unset, the host preference is
    /// consulted (see [`SchemeSource`]), falling back to light.
    pub scheme: Option<Scheme>,
    /// Overrides the generation seed; the accent color still derives from
    /// the avatar text.
    pub seed: Option<String>,
    pub size: Option<u32>,
    pub scale: Option<u32>,
    pub color: Option<Rgb>,
    pub palette: Option<Vec<Swatch>>,
    pub fill_factor: Option<f64>,
    pub symmetry: Option<Symmetry>,
    pub color_bias: Option<u32>,
    pub grayscale_bias: Option<bool>,
}

/// Host environment's presentation preference, as an injected capability.
///
/// Returning `None` means "unknown"; the orchestrator then falls back to
/// [`Scheme::Light`]. Implementations must not fail louder than that.
pub trait SchemeSource {
    fn prefers_dark(&self) -> Option<bool>;
}

/// A generated avatar: the encoded image plus the base color it was
/// derived from (for UI accent use — this is the base color, not the
/// palette).
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    pub image: EncodedImage,
    pub color: Hsl,
}

/// Generates a pattern image from explicit options.
///
/// Seeds a fresh [`SeedRng`] from `options.seed`, builds the symmetric
/// pattern and rasterizes it. Deterministic: equal options yield
/// byte-identical PNGs.
pub fn randpix(options: &Options) -> Result<EncodedImage, image::ImageError> {
    let mut rng = SeedRng::new(&options.seed);

    let derived;
    let palette: &[Swatch] = match (&options.palette, options.color) {
        (Some(palette), _) => palette,
        (None, Some(_)) => &[],
        (None, None) => {
            let (base, _) = string_color(&options.seed, Scheme::Light);
            derived = auto_palette(base);
            &derived
        }
    };

    let size = options.size as usize;
    let grid = create_final_pattern(
        size,
        size,
        options.symmetry,
        palette,
        options.fill_factor,
        options.color,
        options.color_bias,
        options.grayscale_bias,
        &mut rng,
    );
    rasterize(&grid, options.scale)
}

/// Generates an avatar for `text`, resolving the color scheme from an
/// injected host preference.
pub fn get_avatar_with(
    text: &str,
    options: &AvatarOptions,
    host: &dyn SchemeSource,
) -> Result<Avatar, image::ImageError> {
    let scheme = options.scheme.unwrap_or_else(|| {
        match host.prefers_dark() {
            Some(true) => Scheme::Dark,
            Some(false) | None => Scheme::Light,
        }
    });

    let (color, symmetry) = string_color(text, scheme);
    let image = randpix(&Options {
        seed: options.seed.clone().unwrap_or_else(|| text.to_owned()),
        size: options.size.unwrap_or(10),
        scale: options.scale.unwrap_or(10),
        color: options.color,
        palette: Some(
            options
                .palette
                .clone()
                .unwrap_or_else(|| auto_palette(color)),
        ),
        fill_factor: options.fill_factor.unwrap_or(0.6),
        symmetry: options.symmetry.unwrap_or(symmetry),
        color_bias: options.color_bias.unwrap_or(50),
        grayscale_bias: options.grayscale_bias.unwrap_or(false),
    })?;

    Ok(Avatar { image, color })
}

/// Generates an avatar for `text` with no host preference available
/// (light scheme unless `options.scheme` says otherwise).
pub fn get_avatar(
    text: &str,
    options: &AvatarOptions,
) -> Result<Avatar, image::ImageError> {
    struct NoHost;
    impl SchemeSource for NoHost {
        fn prefers_dark(&self) -> Option<bool> {
            None
        }
    }
    get_avatar_with(text, options, &NoHost)
}
