mod circle;
mod coordinate;
mod membership;

pub use circle::*;
pub use coordinate::*;
pub use membership::*;
