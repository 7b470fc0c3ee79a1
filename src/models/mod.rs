/// Square pixel storage
pub mod grid;
/// Packed pixel and its role
pub mod pixel;
/// The plan aggregate
pub mod plan;
/// Version, error correction level, mask and mode
pub mod symbol;

pub use grid::PixelGrid;
pub use pixel::{Pixel, PixelRole};
pub use plan::Plan;
pub use symbol::{ECLevel, MaskPattern, Mode, Version};
