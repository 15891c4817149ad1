mod coord;
mod element;
mod poi;

pub use coord::*;
pub use element::*;
pub use poi::*;
