//! Matrix algebra and exact reductions over the two-element field.
//! 
//! Every operation here is defined through XOR / AND on `FF2`, never 
//! through integer arithmetic.

mod ops;
mod elem;
mod pivot;
mod snf;
mod rref;

pub use ops::*;
pub use elem::*;
pub use pivot::*;
pub use snf::*;
pub use rref::*;

use zhom::FF2;
use crate::dense::Mat;

pub type F2Mat = Mat<FF2>;
pub type F2Vec = Vec<FF2>;
