//! Stitchpress composites a user-uploaded design onto a base garment image.
//!
//! The pipeline is a single pure CPU transform over straight-alpha RGBA8
//! buffers:
//!
//! 1. **Tint**: blend the base garment toward a solid color layer (fixed 40%).
//! 2. **Place**: derive the garment-specific max box and fit the design into
//!    it preserving aspect ratio (Lanczos3 resampling).
//! 3. **Fade**: scale the design's alpha channel down to 75% opacity.
//! 4. **Paste**: blend the design onto the tinted garment using its own alpha
//!    as the per-pixel mask, silently clipping anything outside the canvas.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: compositing is pure and stable for a given input;
//!   inputs are never mutated.
//! - **No IO in the compositor**: base garments arrive through an injected
//!   [`GarmentSource`]; uploads arrive as already-decoded images.
//! - **Straight RGBA8** end to end: masks and blends operate on
//!   non-premultiplied pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod preview;
mod render;

pub use assets::decode::decode_image;
pub use assets::store::{DirGarmentStore, GarmentSource};
pub use foundation::error::{PreviewError, PreviewResult};
pub use preview::model::{GarmentSize, GarmentType, PreviewRequest, TintColor};
pub use preview::placement::{PlacementRule, anchor, fit_within};
pub use render::composite::{DESIGN_OPACITY, TINT_BLEND, composite, tint_garment};
pub use render::pipeline::render_preview;
