use std::fmt::Display;
use log::info;
use serde::Serialize;
use serde_json::Map;
use zhom::util::format::chain_sum;
use zhom::{ensure, Error, Result};
use zhom_matrix::f2::F2Mat;
use crate::config::HomologyOpts;
use crate::sink::{mat_json, to_json, LogEntries, LogSink};
use crate::{boundary_matrix, homology_basis, ChainBasis, Hypergraph, Mod2Homology, Simplex, Vertex};

/// Mod-2 homology of the simplicial complex spanned by the edges of a hypergraph.
#[derive(Clone, Debug)]
pub struct HypergraphHomology<V>
where V: Vertex { 
    max_dim: usize,
    chains: [ChainBasis<V>; 3],
    boundaries: [F2Mat; 2],
    homology: Mod2Homology,
    basis: Vec<Vec<Simplex<V>>>,
    shortest_basis: Option<Vec<Vec<Vec<Simplex<V>>>>>,
}

/// Computes `Hₖ` of the complex spanned by `h`, for `1 <= k <= h.max_dim()`.
pub fn hypergraph_homology_basis<H>(h: &H, k: usize, opts: &HomologyOpts) -> Result<HypergraphHomology<H::Vertex>>
where H: Hypergraph { 
    HypergraphHomology::calculate(h, k, opts)
}

/// `hypergraph_homology_basis`, merging the chain bases, the boundary 
/// matrices and the intermediate data of the extraction into `sink`.
pub fn hypergraph_homology_basis_logged<H>(h: &H, k: usize, opts: &HomologyOpts, sink: &mut dyn LogSink) -> Result<HypergraphHomology<H::Vertex>>
where H: Hypergraph, H::Vertex: Serialize { 
    let res = HypergraphHomology::calculate(h, k, opts)?;
    sink.merge(res.complex_entries()?)?;
    sink.merge(res.log_entries()?)?;
    Ok(res)
}

impl<V> HypergraphHomology<V>
where V: Vertex { 
    pub fn calculate<H>(h: &H, k: usize, opts: &HomologyOpts) -> Result<Self>
    where H: Hypergraph<Vertex = V> { 
        let max_dim = h.max_dim();
        ensure!(1 <= k && k <= max_dim, Error::InvalidDimension { k, max_dim });

        let chains = [k - 1, k, k + 1].map(|i| 
            ChainBasis::from_hypergraph(h, i)
        );

        let d_k  = boundary_matrix(&chains[0], &chains[1])?;
        let d_k1 = boundary_matrix(&chains[1], &chains[2])?;

        let homology = homology_basis(k, &d_k, &d_k1, opts)?;
        let basis = homology.interpret(&chains[1])?;
        let shortest_basis = homology.interpret_shortest(&chains[1])?;

        info!("{homology} (max dim = {max_dim}, |C{k}| = {}).", chains[1].len());

        Ok(Self { 
            max_dim,
            chains,
            boundaries: [d_k, d_k1],
            homology,
            basis,
            shortest_basis
        })
    }

    pub fn dim(&self) -> usize { 
        self.homology.dim()
    }

    pub fn max_dim(&self) -> usize { 
        self.max_dim
    }

    pub fn betti(&self) -> usize { 
        self.homology.betti()
    }

    /// The chain basis of dimension `i`, held for `k - 1 <= i <= k + 1`.
    pub fn chains(&self, i: usize) -> Option<&ChainBasis<V>> { 
        let j = (i + 1).checked_sub(self.dim())?;
        self.chains.get(j)
    }

    /// `∂ᵢ`, held for `i = k` and `i = k + 1`.
    pub fn boundary(&self, i: usize) -> Option<&F2Mat> { 
        let j = i.checked_sub(self.dim())?;
        self.boundaries.get(j)
    }

    pub fn homology(&self) -> &Mod2Homology { 
        &self.homology
    }

    /// Each generator as the list of `k`-simplices it selects.
    pub fn basis(&self) -> &[Vec<Simplex<V>>] { 
        &self.basis
    }

    pub fn shortest_basis(&self) -> Option<&[Vec<Vec<Simplex<V>>>]> { 
        self.shortest_basis.as_deref()
    }
}

impl<V> HypergraphHomology<V>
where V: Vertex + Serialize { 
    /// Entries `maxdim`, `kchains` and `bd`, the latter two keyed by dimension.
    pub fn complex_entries(&self) -> Result<LogEntries> { 
        let kchains = self.chains.iter().map(|c| { 
            let cells = c.iter().collect::<Vec<_>>();
            Ok((c.dim().to_string(), to_json(&cells)?))
        }).collect::<Result<Map<_, _>>>()?;

        let k = self.dim();
        let bd = self.boundaries.iter().enumerate().map(|(j, d)| 
            ((k + j).to_string(), mat_json(d))
        ).collect::<Map<_, _>>();

        let mut e = LogEntries::new();
        e.insert("maxdim".into(), self.max_dim.into());
        e.insert("kchains".into(), kchains.into());
        e.insert("bd".into(), bd.into());
        Ok(e)
    }

    /// The entries of `Mod2Homology::log_entries`, with `basis` holding 
    /// the generators as lists of simplices.
    pub fn log_entries(&self) -> Result<LogEntries> { 
        let mut e = self.homology.log_entries();
        let basis = match &self.shortest_basis { 
            Some(s) => to_json(s)?,
            None => to_json(&self.basis)?
        };
        e.insert("basis".into(), basis);
        Ok(e)
    }
}

impl<V> Display for HypergraphHomology<V>
where V: Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.homology)?;
        for z in self.basis.iter() { 
            write!(f, "\n  {}", chain_sum(z.iter()))?;
        }
        Ok(())
    }
}
