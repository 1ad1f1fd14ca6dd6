mod simplex;
mod hypergraph;
mod chain_basis;
mod boundary;
mod coset;
mod homology;
mod homology_calc;
mod hypergraph_homology;

pub use simplex::*;
pub use hypergraph::*;
pub use chain_basis::*;
pub use boundary::*;
pub use coset::*;
pub use homology::*;
pub use homology_calc::*;
pub use hypergraph_homology::*;

pub mod config;
pub mod sink;
