use crate::{
    foundation::error::{PreviewError, PreviewResult},
    preview::model::GarmentType,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-garment placement geometry.
///
/// Bounds the fraction of the garment canvas the design may cover and shifts
/// it vertically after centering.
pub struct PlacementRule {
    /// Maximum design width as a fraction of canvas width.
    pub max_width_frac: f64,
    /// Maximum design height as a fraction of canvas height.
    pub max_height_frac: f64,
    /// Vertical offset in pixels applied after centering (positive is down).
    pub top_offset_px: i64,
}

impl PlacementRule {
    /// Placement geometry for `garment`.
    ///
    /// Total over [`GarmentType`]; there is no fallback rule for unknown
    /// garments, those are rejected at the string boundary.
    pub fn for_garment(garment: GarmentType) -> Self {
        match garment {
            GarmentType::RoundNeck => Self {
                max_width_frac: 0.65,
                max_height_frac: 0.45,
                top_offset_px: 50,
            },
            GarmentType::VNeck => Self {
                max_width_frac: 0.65,
                max_height_frac: 0.45,
                top_offset_px: 80,
            },
            GarmentType::Polo => Self {
                max_width_frac: 0.65,
                max_height_frac: 0.45,
                top_offset_px: 80,
            },
            GarmentType::Hoodie => Self {
                max_width_frac: 0.55,
                max_height_frac: 0.35,
                top_offset_px: -60,
            },
        }
    }

    /// Maximum design box in pixels for a canvas, truncating toward zero.
    pub fn max_box(self, canvas_width: u32, canvas_height: u32) -> (u32, u32) {
        let max_w = (f64::from(canvas_width) * self.max_width_frac) as u32;
        let max_h = (f64::from(canvas_height) * self.max_height_frac) as u32;
        (max_w, max_h)
    }
}

/// Largest `(width, height)` fitting the design inside `max_width x
/// max_height` while preserving its aspect ratio.
///
/// The binding axis lands exactly on its bound; the other is rounded from
/// the design aspect and clamped to at least one pixel for extreme ratios.
pub fn fit_within(
    design_width: u32,
    design_height: u32,
    max_width: u32,
    max_height: u32,
) -> PreviewResult<(u32, u32)> {
    if design_width == 0 || design_height == 0 {
        return Err(PreviewError::EmptyDesign);
    }
    if max_width == 0 || max_height == 0 {
        return Err(PreviewError::validation(
            "placement box is empty: garment canvas too small",
        ));
    }

    let aspect = f64::from(design_width) / f64::from(design_height);
    if f64::from(max_width) / aspect <= f64::from(max_height) {
        let new_height = (f64::from(max_width) / aspect).round() as u32;
        Ok((max_width, new_height.max(1)))
    } else {
        let new_width = (f64::from(max_height) * aspect).round() as u32;
        Ok((new_width.max(1), max_height))
    }
}

/// Top-left paste position: centered on the canvas, shifted vertically by
/// `top_offset_px`.
///
/// Coordinates are signed and unclamped; the paste clips whatever falls
/// outside the canvas. Centering uses floor division.
pub fn anchor(
    canvas_width: u32,
    canvas_height: u32,
    design_width: u32,
    design_height: u32,
    top_offset_px: i64,
) -> (i64, i64) {
    let x = (i64::from(canvas_width) - i64::from(design_width)).div_euclid(2);
    let y = (i64::from(canvas_height) - i64::from(design_height)).div_euclid(2) + top_offset_px;
    (x, y)
}

#[cfg(test)]
#[path = "../../tests/unit/preview/placement.rs"]
mod tests;
