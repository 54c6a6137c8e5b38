pub mod domain;
pub mod wire;
mod util;

pub use domain::*;
pub use wire::*;
pub use util::*;
