use image::RgbaImage;

use crate::{
    assets::store::GarmentSource, foundation::error::PreviewResult,
    preview::model::PreviewRequest, render::composite,
};

/// Render one garment preview from an explicit request.
///
/// Resolves the base garment through `source`, then delegates to
/// [`composite`](crate::composite). The request's size field is carried for
/// the caller only and never affects the output.
#[tracing::instrument(skip(source, request), fields(garment = %request.garment))]
pub fn render_preview(
    source: &dyn GarmentSource,
    request: &PreviewRequest,
) -> PreviewResult<RgbaImage> {
    let base = source.resolve(request.garment)?;
    composite::composite(&base, request.tint, request.garment, &request.design)
}
