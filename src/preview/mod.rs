pub mod model;
pub mod placement;
