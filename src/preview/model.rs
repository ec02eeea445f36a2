use std::fmt;

use image::RgbaImage;

use crate::foundation::error::{PreviewError, PreviewResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Supported garment styles.
///
/// The garment type selects both the base asset (see [`crate::GarmentSource`])
/// and the placement geometry (see [`crate::PlacementRule`]).
pub enum GarmentType {
    /// Classic round-neck t-shirt.
    RoundNeck,
    /// V-neck t-shirt.
    VNeck,
    /// Polo shirt.
    Polo,
    /// Hooded sweatshirt.
    Hoodie,
}

impl GarmentType {
    /// All supported garment types, in UI order.
    pub const ALL: [GarmentType; 4] = [
        GarmentType::RoundNeck,
        GarmentType::VNeck,
        GarmentType::Polo,
        GarmentType::Hoodie,
    ];

    /// Parse a user-facing garment tag.
    ///
    /// Accepts the UI labels ("Round Neck", "V-Neck", "Polo", "Hoodie")
    /// ignoring case, whitespace, hyphens and underscores. Anything else is
    /// rejected with [`PreviewError::InvalidGarmentType`] rather than mapped
    /// to a default placement.
    pub fn parse(tag: &str) -> PreviewResult<Self> {
        let norm: String = tag
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match norm.as_str() {
            "roundneck" => Ok(GarmentType::RoundNeck),
            "vneck" => Ok(GarmentType::VNeck),
            "polo" => Ok(GarmentType::Polo),
            "hoodie" => Ok(GarmentType::Hoodie),
            _ => Err(PreviewError::invalid_garment_type(tag)),
        }
    }

    /// User-facing label for this garment type.
    pub fn label(self) -> &'static str {
        match self {
            GarmentType::RoundNeck => "Round Neck",
            GarmentType::VNeck => "V-Neck",
            GarmentType::Polo => "Polo",
            GarmentType::Hoodie => "Hoodie",
        }
    }
}

impl fmt::Display for GarmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Garment size selected in the UI.
///
/// Size is cosmetic request metadata: it never affects the composited
/// preview. The same base asset and placement apply to every size.
pub enum GarmentSize {
    /// Small.
    S,
    /// Medium.
    #[default]
    M,
    /// Large.
    L,
    /// Extra large.
    XL,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Straight RGBA8 color blended over the base garment.
pub struct TintColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; full for hex-picked colors.
    pub a: u8,
}

impl TintColor {
    /// Opaque white, the color-picker default.
    pub const WHITE: TintColor = TintColor {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Parse a hex-encoded color, `#rrggbb` or `#rrggbbaa` (leading `#`
    /// optional). The 6-digit form is fully opaque.
    pub fn from_hex(s: &str) -> PreviewResult<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PreviewError::validation(format!(
                "tint must be #rrggbb or #rrggbbaa hex, got '{s}'"
            )));
        }

        let byte = |i: usize| -> PreviewResult<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| PreviewError::validation(format!("tint hex digit pair: {e}")))
        };
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a,
        })
    }

    pub(crate) fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for TintColor {
    fn default() -> Self {
        Self::WHITE
    }
}

#[derive(Clone, Debug)]
/// One compositing request, collected explicitly from presentation state.
///
/// Holds everything the compositor needs; there is no implicit session or
/// global state behind the pipeline. The scalar fields serialize on their
/// own; the request itself does not, since it carries decoded pixels.
pub struct PreviewRequest {
    /// Garment style to render on.
    pub garment: GarmentType,
    /// Tint blended over the base garment.
    pub tint: TintColor,
    /// Selected size, carried for the caller; no effect on the output image.
    pub size: GarmentSize,
    /// Decoded user design (straight alpha; opaque when the upload had none).
    pub design: RgbaImage,
}

impl PreviewRequest {
    /// Build a request with default tint (white) and size (M).
    pub fn new(garment: GarmentType, design: RgbaImage) -> Self {
        Self {
            garment,
            tint: TintColor::WHITE,
            size: GarmentSize::default(),
            design,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preview/model.rs"]
mod tests;
