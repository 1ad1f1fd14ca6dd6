mod base;

pub use base::*;

pub mod dense;
pub mod f2;
