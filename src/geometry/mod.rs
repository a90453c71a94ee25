pub mod point;
pub mod ring;
pub mod simplify;

pub use point::{Bounds, LngLat};
pub use ring::Ring;
pub use simplify::simplify_ring;
