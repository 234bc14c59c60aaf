use rand::Rng;

use crate::foundation::core::{CropOffset, CropRect, PixelSize, ResizeMode};

/// Resolved plan for bringing a background to the template's dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitPlan {
    /// Stretch the whole source to the target, ignoring aspect ratio.
    Stretch,
    /// Resize the source to `scaled` (aspect ratio preserved, factor >= 1),
    /// then sample `window`, a target-sized rectangle inside it.
    Window {
        /// Dimensions the source is resized to before sampling.
        scaled: PixelSize,
        /// Target-sized sample rectangle, fully inside `scaled`.
        window: CropRect,
    },
}

/// Compute the source rectangle of the background to sample.
///
/// `crop` centers a target-sized window on the minimally upscaled source and
/// translates it by `offset`, clamping so the window never leaves the image;
/// offsets may therefore accumulate without bound upstream. `random` draws
/// the translation uniformly per axis on every call from `rng`, covering the
/// same range a clamped offset could reach. `scale` uses the whole source.
pub fn fit_background(
    bg: PixelSize,
    target: PixelSize,
    mode: ResizeMode,
    offset: CropOffset,
    rng: &mut impl Rng,
) -> FitPlan {
    match mode {
        ResizeMode::Scale => FitPlan::Stretch,
        ResizeMode::Crop => windowed(bg, target, offset),
        ResizeMode::Random => {
            let scaled = upscaled(bg, target);
            let offset = CropOffset {
                x: random_component(scaled.width, target.width, rng),
                y: random_component(scaled.height, target.height, rng),
            };
            windowed(bg, target, offset)
        }
    }
}

fn windowed(bg: PixelSize, target: PixelSize, offset: CropOffset) -> FitPlan {
    let scaled = upscaled(bg, target);
    let window = CropRect {
        x: clamped_origin(scaled.width, target.width, offset.x),
        y: clamped_origin(scaled.height, target.height, offset.y),
        width: target.width,
        height: target.height,
    };
    FitPlan::Window { scaled, window }
}

/// Minimal aspect-preserving upscale making both dimensions >= the target.
/// Sources already covering the target are left at their own size.
fn upscaled(bg: PixelSize, target: PixelSize) -> PixelSize {
    let fx = f64::from(target.width) / f64::from(bg.width);
    let fy = f64::from(target.height) / f64::from(bg.height);
    let factor = fx.max(fy).max(1.0);
    PixelSize {
        width: ((f64::from(bg.width) * factor).ceil() as u32).max(target.width),
        height: ((f64::from(bg.height) * factor).ceil() as u32).max(target.height),
    }
}

fn clamped_origin(scaled: u32, target: u32, offset: i32) -> u32 {
    let slack = i64::from(scaled) - i64::from(target);
    let centered = slack / 2 + i64::from(offset);
    centered.clamp(0, slack) as u32
}

fn random_component(scaled: u32, target: u32, rng: &mut impl Rng) -> i32 {
    let half_slack = (i64::from(scaled) - i64::from(target)) / 2;
    if half_slack == 0 {
        return 0;
    }
    rng.gen_range(-half_slack..=half_slack) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
