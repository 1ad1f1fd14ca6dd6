mod types;
mod misc;
mod err;

pub use types::*;
pub use misc::*;
pub use err::*;

pub mod util;
