mod mat;

pub use mat::*;
pub use crate::MatTrait;
