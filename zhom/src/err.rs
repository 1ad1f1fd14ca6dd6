use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Error { 
    #[display("dimension mismatch: {_0}")]
    DimensionMismatch(String),

    #[display("face {face} of {cell} is missing from the lower chain basis")]
    MissingFace { face: String, cell: String },

    #[display("invalid dimension {k}: must lie in 1..={max_dim}")]
    InvalidDimension { k: usize, max_dim: usize },

    #[display("not a chain complex: rank {rank_k} + rank {rank_k1} exceeds the chain rank {dim}")]
    NotAChainComplex { rank_k: usize, rank_k1: usize, dim: usize },

    #[display("coset search over 2^{rank} elements exceeds the limit 2^{limit}")]
    CosetSearchTooLarge { rank: usize, limit: usize },

    #[display("serialization failure: {_0}")]
    Serialization(String),
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! err {
    ($e:expr) => {{
        Err( $crate::Error::from($e) )
    }}
}

#[macro_export]
macro_rules! ensure {
    ($cond:expr, $e:expr) => {{
        if !$cond { 
            return $crate::err!($e);
        }
    }}
}

/// Shorthand for `Error::DimensionMismatch` with a formatted message.
#[macro_export]
macro_rules! mismatch {
    ($($arg:tt)*) => {{
        $crate::Error::DimensionMismatch(format!($($arg)*))
    }}
}

#[cfg(test)]
mod tests { 
    use super::*;

    fn check(n: usize) -> Result<usize> { 
        ensure!(n > 0, mismatch!("expected positive, got {n}"));
        Ok(n)
    }

    #[test]
    fn ensure_ok() { 
        assert_eq!(check(3), Ok(3));
    }

    #[test]
    fn ensure_err() { 
        let e = check(0).unwrap_err();
        assert_eq!(e, Error::DimensionMismatch("expected positive, got 0".into()));
        assert_eq!(e.to_string(), "dimension mismatch: expected positive, got 0");
    }

    #[test]
    fn display() { 
        let e = Error::InvalidDimension { k: 4, max_dim: 2 };
        assert_eq!(e.to_string(), "invalid dimension 4: must lie in 1..=2");

        let e = Error::MissingFace { face: "(1,2)".into(), cell: "(1,2,3)".into() };
        assert_eq!(e.to_string(), "face (1,2) of (1,2,3) is missing from the lower chain basis");
    }
}
