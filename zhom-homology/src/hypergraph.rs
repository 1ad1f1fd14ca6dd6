use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use zhom::{Error, Result};
use crate::Vertex;

/// A source of edges, each edge being a set of vertices.
pub trait Hypergraph { 
    type Vertex: Vertex;

    fn edges<'a>(&'a self) -> impl Iterator<Item = &'a BTreeSet<Self::Vertex>> + 'a;

    /// Largest edge size, `None` if there are no edges.
    fn max_edge_size(&self) -> Option<usize> { 
        self.edges().map(|e| e.len()).max()
    }

    /// Dimension of the largest simplex spanned by an edge. 
    fn max_dim(&self) -> usize { 
        self.max_edge_size().unwrap_or(0).saturating_sub(1)
    }
}

/// Edges stored as a plain list. 
/// 
/// Deserializes from a JSON array of vertex arrays, e.g. `[[1,2,3],[3,4]]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeList<V>
where V: Ord { 
    edges: Vec<BTreeSet<V>>
}

impl<V> EdgeList<V>
where V: Vertex { 
    pub fn new() -> Self { 
        Self { edges: vec![] }
    }

    pub fn push<I>(&mut self, edge: I)
    where I: IntoIterator<Item = V> { 
        self.edges.push(edge.into_iter().collect())
    }

    pub fn len(&self) -> usize { 
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool { 
        self.edges.is_empty()
    }

    pub fn from_json(input: &str) -> Result<Self>
    where V: DeserializeOwned { 
        serde_json::from_str(input).map_err(|e| 
            Error::Serialization(format!("invalid edge list: {e}"))
        )
    }
}

impl<V, E> FromIterator<E> for EdgeList<V>
where V: Vertex, E: IntoIterator<Item = V> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let edges = iter.into_iter().map(|e| e.into_iter().collect()).collect();
        Self { edges }
    }
}

impl<V> Hypergraph for EdgeList<V>
where V: Vertex { 
    type Vertex = V;

    fn edges<'a>(&'a self) -> impl Iterator<Item = &'a BTreeSet<V>> + 'a {
        self.edges.iter()
    }
}
