use core::sync::atomic::{AtomicUsize, Ordering};
use serde::{Deserialize, Serialize};

/// Largest image rank for which the shortest-representative search runs 
/// by default. The search visits `2^rank` coset elements.
pub const DEFAULT_COSET_LIMIT: usize = 20;

static COSET_LIMIT: AtomicUsize = AtomicUsize::new(DEFAULT_COSET_LIMIT);

pub fn coset_limit() -> usize {
    COSET_LIMIT.load(Ordering::Relaxed)
}

pub fn set_coset_limit(val: usize) {
    COSET_LIMIT.store(val, Ordering::Relaxed)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomologyOpts { 
    pub shortest: bool,
    pub coset_limit: Option<usize>,
}

impl HomologyOpts { 
    pub fn new() -> Self { 
        Self::default()
    }

    pub fn shortest(mut self, val: bool) -> Self { 
        self.shortest = val;
        self
    }

    pub fn coset_limit(mut self, limit: usize) -> Self { 
        self.coset_limit = Some(limit);
        self
    }

    /// The explicit limit if one was set, the process-wide one otherwise.
    pub fn effective_coset_limit(&self) -> usize { 
        self.coset_limit.unwrap_or_else(coset_limit)
    }
}
