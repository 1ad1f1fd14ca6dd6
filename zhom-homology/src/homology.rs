use std::fmt::Display;
use serde_json::Value;
use zhom::util::format::{subscript, vs_symbol};
use zhom::{Result, FF2};
use zhom_matrix::MatTrait;
use zhom_matrix::f2::{F2Mat, F2Vec};
use crate::sink::{mat_json, vec_json, LogEntries};
use crate::{ChainBasis, Simplex, Vertex};

/// The `k`-th homology `Ker ∂ₖ / Im ∂ₖ₊₁` over the two-element field, 
/// together with the intermediate data it was derived from. 
/// 
/// All vectors are coordinates over the `k`-chain basis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mod2Homology { 
    pub(crate) dim: usize,
    pub(crate) rank_k: usize,
    pub(crate) rank_k1: usize,
    pub(crate) betti: usize,
    pub(crate) kernel: F2Mat,
    pub(crate) image: F2Mat,
    pub(crate) projection: F2Mat,
    pub(crate) generators: Vec<F2Vec>,
    pub(crate) shortest: Option<Vec<Vec<F2Vec>>>,
}

impl Mod2Homology { 
    pub fn dim(&self) -> usize { 
        self.dim
    }

    /// Rank of `∂ₖ`.
    pub fn rank_k(&self) -> usize { 
        self.rank_k
    }

    /// Rank of `∂ₖ₊₁`.
    pub fn rank_k1(&self) -> usize { 
        self.rank_k1
    }

    /// Dimension of `Ker ∂ₖ`.
    pub fn nullity(&self) -> usize { 
        self.kernel.ncols()
    }

    /// `|Cₖ| - rank ∂ₖ - rank ∂ₖ₊₁`.
    pub fn betti(&self) -> usize { 
        self.betti
    }

    /// Columns span `Ker ∂ₖ`.
    pub fn kernel(&self) -> &F2Mat { 
        &self.kernel
    }

    /// Columns span `Im ∂ₖ₊₁`.
    pub fn image(&self) -> &F2Mat { 
        &self.image
    }

    /// Kernel vectors projected onto the cokernel of `∂ₖ₊₁`, one per row, 
    /// before reduction.
    pub fn projection(&self) -> &F2Mat { 
        &self.projection
    }

    pub fn generators(&self) -> &[F2Vec] { 
        &self.generators
    }

    /// For each generator, the minimum-weight elements of its coset.
    pub fn shortest(&self) -> Option<&[Vec<F2Vec>]> { 
        self.shortest.as_deref()
    }

    pub fn is_zero(&self) -> bool { 
        self.generators.is_empty()
    }

    pub fn interpret<V>(&self, basis: &ChainBasis<V>) -> Result<Vec<Vec<Simplex<V>>>>
    where V: Vertex { 
        basis.interpret(&self.generators)
    }

    pub fn interpret_shortest<V>(&self, basis: &ChainBasis<V>) -> Result<Option<Vec<Vec<Vec<Simplex<V>>>>>>
    where V: Vertex { 
        let Some(shortest) = &self.shortest else { 
            return Ok(None)
        };
        let res = shortest.iter().map(|reps| 
            basis.interpret(reps)
        ).collect::<Result<Vec<_>>>()?;
        Ok(Some(res))
    }

    /// Entries `k`, `betti{k}`, `ker`, `im`, `proj` and `basis`. 
    /// 
    /// `proj` and `basis` hold the shortest representatives when they were computed.
    pub fn log_entries(&self) -> LogEntries { 
        let k = self.dim;
        let basis = match &self.shortest { 
            Some(s) => Value::from(s.iter().map(|reps| 
                Value::from(reps.iter().map(|v| vec_json(v)).collect::<Vec<_>>())
            ).collect::<Vec<_>>()),
            None => Value::from(self.generators.iter().map(|v| vec_json(v)).collect::<Vec<_>>())
        };

        let mut e = LogEntries::new();
        e.insert("k".into(), k.into());
        e.insert(format!("betti{k}"), self.betti().into());
        e.insert("ker".into(), mat_json(&self.kernel));
        e.insert("im".into(), mat_json(&self.image));
        e.insert("proj".into(), basis.clone());
        e.insert("basis".into(), basis);
        e
    }
}

impl Display for Mod2Homology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "H{} = {}", subscript(self.dim), vs_symbol(&FF2::math_symbol(), self.betti()))
    }
}

#[cfg(test)]
mod tests { 
    use serde_json::json;
    use crate::config::HomologyOpts;
    use crate::homology_basis;
    use super::*;

    // boundary of the triangle (1,2,3), no 2-cells.
    fn triangle(opts: &HomologyOpts) -> Mod2Homology { 
        let d1 = F2Mat::from_bits((3, 3), [
            1,1,0,
            1,0,1,
            0,1,1
        ]);
        let d2 = F2Mat::zero((3, 0));
        homology_basis(1, &d1, &d2, opts).unwrap()
    }

    #[test]
    fn display() { 
        let h = triangle(&HomologyOpts::default());
        assert_eq!(h.to_string(), "H₁ = F₂");
    }

    #[test]
    fn log_entries() { 
        let h = triangle(&HomologyOpts::default());
        let e = h.log_entries();

        assert_eq!(e.get("k"), Some(&json!(1)));
        assert_eq!(e.get("betti1"), Some(&json!(1)));
        assert_eq!(e.get("basis"), Some(&json!([[1,1,1]])));
        assert_eq!(e.get("im"), Some(&json!([[], [], []])));
    }

    #[test]
    fn log_entries_shortest() { 
        let h = triangle(&HomologyOpts::new().shortest(true));
        let e = h.log_entries();

        assert_eq!(e.get("basis"), Some(&json!([[[1,1,1]]])));
        assert_eq!(e.get("proj"), e.get("basis"));
    }
}
