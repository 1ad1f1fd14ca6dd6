use std::fmt::{Debug, Display};
use std::hash::Hash;
use serde::{Deserialize, Serialize};
use zhom::util::format::tuple;

pub trait Vertex: 
    Clone + 
    Eq + 
    Ord + 
    Hash + 
    Display + 
    Debug + 
    'static
{}

impl<T> Vertex for T where T: 
    Clone + 
    Eq + 
    Ord + 
    Hash + 
    Display + 
    Debug + 
    'static
{}

/// A `k`-simplex: `k + 1` distinct vertices, kept sorted. 
/// 
/// Simplices compare lexicographically by their vertex tuples.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<V>", bound(deserialize = "V: Vertex + Deserialize<'de>"))]
pub struct Simplex<V>(Vec<V>);

impl<V> Simplex<V>
where V: Vertex {
    /// Sorts the vertices and drops repeated ones.
    pub fn new<I>(vertices: I) -> Self
    where I: IntoIterator<Item = V> { 
        let mut v = vertices.into_iter().collect::<Vec<_>>();
        v.sort();
        v.dedup();
        Self(v)
    }

    pub(crate) fn from_sorted(vertices: Vec<V>) -> Self { 
        debug_assert!(vertices.windows(2).all(|w| w[0] < w[1]));
        Self(vertices)
    }

    pub fn vertices(&self) -> &[V] { 
        &self.0
    }

    pub fn len(&self) -> usize { 
        self.0.len()
    }

    pub fn is_empty(&self) -> bool { 
        self.0.is_empty()
    }

    /// `k` for a `k`-simplex. The empty simplex has no dimension.
    pub fn dim(&self) -> Option<usize> { 
        self.0.len().checked_sub(1)
    }

    /// The `k + 1` facets of a `k`-simplex, the `i`-th omitting the `i`-th vertex. 
    /// A vertex has no facets.
    pub fn faces(&self) -> impl Iterator<Item = Simplex<V>> + '_ { 
        let n = if self.len() > 1 { self.len() } else { 0 };
        (0..n).map(move |i| { 
            let mut v = self.0.clone();
            v.remove(i);
            Self(v)
        })
    }

    pub fn contains(&self, v: &V) -> bool { 
        self.0.binary_search(v).is_ok()
    }
}

impl<V> Display for Simplex<V>
where V: Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", tuple(self.0.iter()))
    }
}

impl<V> From<Vec<V>> for Simplex<V>
where V: Vertex {
    fn from(v: Vec<V>) -> Self {
        Self::new(v)
    }
}

impl<V, const N: usize> From<[V; N]> for Simplex<V>
where V: Vertex {
    fn from(v: [V; N]) -> Self {
        Self::new(v)
    }
}
