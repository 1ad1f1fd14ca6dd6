use std::collections::BTreeSet;
use std::ops::Index;
use itertools::Itertools;
use log::debug;
use num_traits::Zero;
use zhom::{ensure, mismatch, IndexList, Result, FF2};
use crate::{Hypergraph, Simplex, Vertex};

/// The `k`-simplices of a complex in lexicographic order. 
/// 
/// The position of a simplex in this list is its row / column index 
/// in every boundary matrix built from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainBasis<V>
where V: Vertex { 
    dim: usize,
    cells: IndexList<Simplex<V>>
}

impl<V> ChainBasis<V>
where V: Vertex {
    /// Sorts and deduplicates `cells`. Every cell must have `dim + 1` vertices.
    pub fn new<I>(dim: usize, cells: I) -> Result<Self>
    where I: IntoIterator<Item = Simplex<V>> { 
        let cells = cells.into_iter().collect::<BTreeSet<_>>();
        for s in cells.iter() { 
            ensure!(s.len() == dim + 1, mismatch!("{s} is not a {dim}-simplex"));
        }
        Ok(Self::from_sorted(dim, cells))
    }

    fn from_sorted(dim: usize, cells: BTreeSet<Simplex<V>>) -> Self { 
        let cells = cells.into_iter().collect();
        Self { dim, cells }
    }

    /// All `k`-simplices spanned by the edges. 
    /// 
    /// An edge of size `k + 1` contributes itself, and a larger edge 
    /// contributes every one of its `(k + 1)`-subsets.
    pub fn from_edges<'a, I>(k: usize, edges: I) -> Self
    where I: IntoIterator<Item = &'a BTreeSet<V>> { 
        let mut cells = BTreeSet::new();

        for e in edges { 
            if e.len() == k + 1 { 
                let v = e.iter().cloned().collect();
                cells.insert(Simplex::from_sorted(v));
            } else if e.len() > k + 1 { 
                // combinations of a sorted sequence stay sorted.
                cells.extend(
                    e.iter().cloned().combinations(k + 1).map(Simplex::from_sorted)
                );
            }
        }

        debug!("C{k}: {} cells.", cells.len());

        Self::from_sorted(k, cells)
    }

    pub fn from_hypergraph<H>(h: &H, k: usize) -> Self
    where H: Hypergraph<Vertex = V> { 
        Self::from_edges(k, h.edges())
    }

    pub fn dim(&self) -> usize { 
        self.dim
    }

    pub fn len(&self) -> usize { 
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool { 
        self.cells.is_empty()
    }

    pub fn index_of(&self, s: &Simplex<V>) -> Option<usize> { 
        self.cells.index_of(s)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Simplex<V>> { 
        self.cells.iter()
    }

    /// The cells selected by the nonzero entries of `v`.
    pub fn chain(&self, v: &[FF2]) -> Result<Vec<Simplex<V>>> { 
        ensure!(v.len() == self.len(), mismatch!("vector of length {} over a basis of {} cells", v.len(), self.len()));
        Ok(self.iter().zip(v.iter()).filter_map(|(s, a)| 
            (!a.is_zero()).then(|| s.clone())
        ).collect())
    }

    /// `chain` applied to each vector in turn.
    pub fn interpret<'a, I>(&self, vecs: I) -> Result<Vec<Vec<Simplex<V>>>>
    where I: IntoIterator<Item = &'a Vec<FF2>> { 
        vecs.into_iter().map(|v| self.chain(v)).collect()
    }

    /// Indicator vector of `chain`. Cells outside the basis are rejected.
    pub fn vectorize<'a, I>(&self, chain: I) -> Result<Vec<FF2>>
    where I: IntoIterator<Item = &'a Simplex<V>> { 
        let mut v = vec![FF2::zero(); self.len()];
        for s in chain { 
            let Some(i) = self.index_of(s) else { 
                return zhom::err!(mismatch!("{s} is not in C{}", self.dim))
            };
            v[i] += FF2::from(true);
        }
        Ok(v)
    }
}

impl<V> Index<usize> for ChainBasis<V>
where V: Vertex { 
    type Output = Simplex<V>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}
