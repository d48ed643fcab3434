//! Seeded random pattern generation and symmetric reflection.
//!
//! A half (or quarter) grid of cells is painted from a seeded random
//! sequence, then mirrored into the full square. Cell iteration is
//! row-major, left to right, top to bottom; that order fixes which values
//! each cell consumes from the sequence and is part of the determinism
//! contract, as is the draw count of every operation here.

use crate::color::{Rgb, Swatch, Symmetry};
use crate::rng::SeedRng;

/// A generated grid of cells, `[row][col]`; `None` is a transparent cell
/// that the rasterizer leaves unpainted.
pub type Pattern = Vec<Vec<Option<Rgb>>>;

/// Draws a jitter value in roughly `[-bias/2, bias/2)`.
///
/// `floor(rand * bias - bias / 2)`, so zero bias always yields zero and
/// the distribution is centered near zero.
pub fn scale_bias(bias: u32, rng: &mut SeedRng) -> i32 {
    let bias = f64::from(bias);
    (rng.next_f64() * bias - bias / 2.0).floor() as i32
}

/// Selects a color from a palette, honoring entry weights.
///
/// Performs a cumulative-weight draw first: prefix-sum the weights, draw
/// `rand * total`, return the first entry whose running total exceeds the
/// draw. When the scan exhausts (all weights zero), falls back to a
/// uniform draw. Both paths consume from `rng`, so a palette's weights
/// determine not just the selection but the number of values consumed.
///
/// The palette must be non-empty.
pub fn random_color(palette: &[Swatch], rng: &mut SeedRng) -> Rgb {
    let mut total = 0.0;
    let cumulative: Vec<f64> = palette
        .iter()
        .map(|swatch| {
            total += swatch.weight;
            total
        })
        .collect();

    let draw = rng.next_f64() * total;
    for (swatch, &bound) in palette.iter().zip(&cumulative) {
        if bound > draw {
            return swatch.color;
        }
    }

    palette[(rng.next_f64() * palette.len() as f64) as usize].color
}

/// Paints a `w × h` grid of cells from the random sequence.
///
/// One draw per cell decides paint-or-skip against `fill_chance`. Painted
/// cells take `forced` when given, otherwise a palette selection. A
/// nonzero `bias` then jitters the painted color's channels: one shared
/// draw per cell when `grayscale_bias`, otherwise one draw per channel.
/// Jitter applies to forced colors too.
#[allow(clippy::too_many_arguments)]
pub fn create_pattern(
    w: usize,
    h: usize,
    palette: &[Swatch],
    fill_chance: f64,
    forced: Option<Rgb>,
    bias: u32,
    grayscale_bias: bool,
    rng: &mut SeedRng,
) -> Pattern {
    let mut pattern = Vec::with_capacity(h);
    for _ in 0..h {
        let mut row = Vec::with_capacity(w);
        for _ in 0..w {
            if rng.next_f64() >= fill_chance {
                row.push(None);
                continue;
            }
            let mut color = match forced {
                Some(color) => color,
                None => random_color(palette, rng),
            };
            if bias > 0 {
                if grayscale_bias {
                    let jitter = scale_bias(bias, rng);
                    color.r += jitter;
                    color.g += jitter;
                    color.b += jitter;
                } else {
                    color.r += scale_bias(bias, rng);
                    color.g += scale_bias(bias, rng);
                    color.b += scale_bias(bias, rng);
                }
            }
            row.push(Some(color));
        }
        pattern.push(row);
    }
    pattern
}

/// Mirrors a half (or quarter) pattern into the full grid.
///
/// Horizontal appends the rows in reverse; the half's last row is the
/// shared center, so it is skipped from the mirrored copy when `is_odd`.
/// Vertical prepends each row's reversed cells; there the half's *first*
/// cell is the shared center, so `is_odd` drops it from the mirrored
/// prefix instead. Quad composes both, vertical first.
pub fn reflect(symmetry: Symmetry, pattern: Pattern, is_odd: bool) -> Pattern {
    let skip = usize::from(is_odd);
    match symmetry {
        Symmetry::Horizontal => {
            let mirrored: Vec<_> =
                pattern.iter().rev().skip(skip).cloned().collect();
            let mut full = pattern;
            full.extend(mirrored);
            full
        }
        Symmetry::Vertical => pattern
            .into_iter()
            .map(|row| {
                let mut full: Vec<_> =
                    row[skip..].iter().rev().copied().collect();
                full.extend(row);
                full
            })
            .collect(),
        Symmetry::Quad => reflect(
            Symmetry::Horizontal,
            reflect(Symmetry::Vertical, pattern, is_odd),
            is_odd,
        ),
    }
}

/// Generates the half/quarter pattern for a `w × h` grid and reflects it.
///
/// Horizontal halves the height, vertical the width, quad both; odd full
/// dimensions round the generated half up, and the overlap is resolved by
/// [`reflect`] via `is_odd`, computed here before any mirroring. Mixed
/// parity of `w` and `h` is not validated; both axes then share the one
/// `is_odd` flag, best effort.
#[allow(clippy::too_many_arguments)]
pub fn create_final_pattern(
    w: usize,
    h: usize,
    symmetry: Symmetry,
    palette: &[Swatch],
    fill_chance: f64,
    forced: Option<Rgb>,
    bias: u32,
    grayscale_bias: bool,
    rng: &mut SeedRng,
) -> Pattern {
    let (gen_w, gen_h, is_odd) = match symmetry {
        Symmetry::Horizontal => (w, h.div_ceil(2), h % 2 == 1),
        Symmetry::Vertical => (w.div_ceil(2), h, w % 2 == 1),
        Symmetry::Quad => {
            (w.div_ceil(2), h.div_ceil(2), w % 2 == 1 || h % 2 == 1)
        }
    };

    let half = create_pattern(
        gen_w,
        gen_h,
        palette,
        fill_chance,
        forced,
        bias,
        grayscale_bias,
        rng,
    );
    reflect(symmetry, half, is_odd)
}
