use log::debug;
use num_traits::One;
use zhom::{err, Error, Result, FF2};
use zhom_matrix::f2::F2Mat;
use crate::{ChainBasis, Vertex};

/// The boundary map `∂ₖ : Cₖ → Cₖ₋₁` as a `|Cₖ₋₁| × |Cₖ|` matrix, 
/// with entry `(r, c)` set iff the `r`-th cell of `lower` is a facet of 
/// the `c`-th cell of `upper`. 
/// 
/// Fails with `MissingFace` unless `lower` contains every facet of 
/// every cell of `upper`.
pub fn boundary_matrix<V>(lower: &ChainBasis<V>, upper: &ChainBasis<V>) -> Result<F2Mat>
where V: Vertex { 
    let (m, n) = (lower.len(), upper.len());
    let mut d = F2Mat::zero((m, n));

    for (j, cell) in upper.iter().enumerate() { 
        for face in cell.faces() { 
            let Some(i) = lower.index_of(&face) else { 
                return err!(Error::MissingFace { 
                    face: face.to_string(), 
                    cell: cell.to_string() 
                })
            };
            d[(i, j)] = FF2::one();
        }
    }

    debug!("∂{}: {m} x {n}.", upper.dim());

    Ok(d)
}
