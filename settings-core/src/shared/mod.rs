pub mod ids;
pub mod sequence;

pub use ids::*;
pub use sequence::*;
