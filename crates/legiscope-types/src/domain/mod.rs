mod commission;
mod feed;
mod profile;

pub use commission::*;
pub use feed::*;
pub use profile::*;
