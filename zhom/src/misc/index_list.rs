use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Index;

use bimap::BiHashMap;

/// An ordered, duplicate-free list with constant-time reverse lookup.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct IndexList<E>
where E: Eq + Hash {
    data: BiHashMap<usize, E>
}

impl<E> IndexList<E>
where E: Eq + Hash {
    pub fn new() -> Self {
        Self { data: BiHashMap::new() }
    }

    pub fn len(&self) -> usize { 
        self.data.len()
    }

    pub fn is_empty(&self) -> bool { 
        self.data.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&E> { 
        self.data.get_by_left(&i)
    }

    pub fn index_of(&self, x: &E) -> Option<usize> {
        self.data.get_by_right(x).cloned()
    }

    pub fn contains(&self, x: &E) -> bool { 
        self.data.contains_right(x)
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> { 
        (0..self.len()).filter_map(|i| 
            self.data.get_by_left(&i)
        )
    }

    pub fn into_vec(self) -> Vec<E> { 
        let mut data = self.data;
        let n = data.len();
        (0..n).filter_map(|i| 
            data.remove_by_left(&i).map(|e| e.1)
        ).collect()
    }
}

impl<E> FromIterator<E> for IndexList<E>
where E: Eq + Hash {
    // later duplicates are dropped, keeping indices contiguous.
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut data = BiHashMap::new();
        for e in iter { 
            if !data.contains_right(&e) { 
                let i = data.len();
                data.insert(i, e);
            }
        }
        Self { data }
    }
}

impl<E> Index<usize> for IndexList<E>
where E: Eq + Hash {
    type Output = E;

    fn index(&self, index: usize) -> &Self::Output {
        self.data.get_by_left(&index).unwrap_or_else(|| 
            panic!("index {index} out of range for IndexList of length {}", self.len())
        )
    }
}

impl<E> Debug for IndexList<E>
where E: Eq + Hash + Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
