use std::path::PathBuf;

use anyhow::Context;
use image::RgbaImage;

use crate::{
    assets::decode, foundation::error::PreviewResult, preview::model::GarmentType,
};

/// Resolver supplying the decoded base image for a garment type.
///
/// The compositor never touches the filesystem itself; callers inject a
/// source so tests can run against in-memory fixtures.
pub trait GarmentSource {
    /// Decoded base garment image for `garment`.
    fn resolve(&self, garment: GarmentType) -> PreviewResult<RgbaImage>;
}

#[derive(Clone, Debug)]
/// Filesystem-backed garment source reading one bundled asset per garment.
pub struct DirGarmentStore {
    root: PathBuf,
}

impl DirGarmentStore {
    /// Store reading garment assets from directory `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Bundled asset file name for `garment`.
    pub fn asset_file(garment: GarmentType) -> &'static str {
        match garment {
            GarmentType::RoundNeck => "round_neck.png",
            GarmentType::VNeck => "v_neck.png",
            GarmentType::Polo => "polo.png",
            GarmentType::Hoodie => "hoodie.png",
        }
    }
}

impl GarmentSource for DirGarmentStore {
    fn resolve(&self, garment: GarmentType) -> PreviewResult<RgbaImage> {
        let path = self.root.join(Self::asset_file(garment));
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read garment asset {}", path.display()))?;
        decode::decode_image(&bytes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
