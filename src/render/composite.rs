use image::{RgbaImage, imageops, imageops::FilterType};

use crate::{
    foundation::error::{PreviewError, PreviewResult},
    foundation::math::lerp_u8,
    preview::model::{GarmentType, TintColor},
    preview::placement::{PlacementRule, anchor, fit_within},
};

/// Fixed tint blend factor: 40% tint layer, 60% original garment.
pub const TINT_BLEND: f32 = 0.4;

/// Fixed opacity applied to the resized design's alpha channel.
pub const DESIGN_OPACITY: f32 = 0.75;

/// Composite a user design onto a tinted base garment.
///
/// Produces a fresh image with `base`'s dimensions:
///
/// 1. blend `base` toward a solid `tint` layer by [`TINT_BLEND`];
/// 2. fit the design into the garment's placement box preserving aspect
///    ratio, resampling with Lanczos3;
/// 3. scale the resized design's alpha by [`DESIGN_OPACITY`];
/// 4. paste it centered plus the garment's vertical offset, masked by its
///    own alpha; out-of-canvas pixels are clipped, never an error.
pub fn composite(
    base: &RgbaImage,
    tint: TintColor,
    garment: GarmentType,
    design: &RgbaImage,
) -> PreviewResult<RgbaImage> {
    if base.width() == 0 || base.height() == 0 {
        return Err(PreviewError::validation(
            "base garment must have positive dimensions",
        ));
    }
    if design.width() == 0 || design.height() == 0 {
        return Err(PreviewError::EmptyDesign);
    }

    let rule = PlacementRule::for_garment(garment);
    let (max_w, max_h) = rule.max_box(base.width(), base.height());
    let (new_w, new_h) = fit_within(design.width(), design.height(), max_w, max_h)?;

    let mut canvas = tint_garment(base, tint);

    let mut resized = imageops::resize(design, new_w, new_h, FilterType::Lanczos3);
    fade_alpha(&mut resized, DESIGN_OPACITY);

    let (x, y) = anchor(canvas.width(), canvas.height(), new_w, new_h, rule.top_offset_px);
    tracing::debug!(garment = %garment, new_w, new_h, x, y, "placing design");
    paste_masked(&mut canvas, &resized, x, y);

    Ok(canvas)
}

/// Blend `base` toward a solid `tint` layer by the fixed [`TINT_BLEND`]
/// factor, across all four channels.
pub fn tint_garment(base: &RgbaImage, tint: TintColor) -> RgbaImage {
    let t = u16::from((TINT_BLEND * 255.0).round() as u8);
    let tint_px = tint.channels();

    let mut out = base.clone();
    for px in out.pixels_mut() {
        for i in 0..4 {
            px.0[i] = lerp_u8(px.0[i], tint_px[i], t);
        }
    }
    out
}

/// Scale every alpha byte by `factor`, rounding to nearest.
fn fade_alpha(img: &mut RgbaImage, factor: f32) {
    for px in img.pixels_mut() {
        px.0[3] = (f32::from(px.0[3]) * factor).round().clamp(0.0, 255.0) as u8;
    }
}

/// Blend `src` onto `canvas` at signed position `(x, y)`, weighting each
/// pixel by its own alpha across all four channels. Source pixels falling
/// outside the canvas are dropped.
fn paste_masked(canvas: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (cw, ch) = (i64::from(canvas.width()), i64::from(canvas.height()));
    for (sx, sy, px) in src.enumerate_pixels() {
        let tx = x + i64::from(sx);
        let ty = y + i64::from(sy);
        if tx < 0 || ty < 0 || tx >= cw || ty >= ch {
            continue;
        }
        let a = u16::from(px.0[3]);
        if a == 0 {
            continue;
        }
        let dst = canvas.get_pixel_mut(tx as u32, ty as u32);
        for i in 0..4 {
            dst.0[i] = lerp_u8(dst.0[i], px.0[i], a);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
