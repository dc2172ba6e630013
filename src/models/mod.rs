pub mod params;
pub mod result;
pub mod selection;
pub mod stats;

pub use params::*;
pub use result::*;
pub use selection::*;
pub use stats::*;
