use std::ops::{Add, Mul, AddAssign, MulAssign};
use auto_impl_ops::auto_ops;
use num_traits::Zero;
use zhom::{ensure, err, mismatch, Result, FF2};
use crate::dense::*;
use super::{F2Mat, F2Vec};

pub fn dot(v: &[FF2], w: &[FF2]) -> Result<FF2> { 
    ensure!(v.len() == w.len(), mismatch!("dot of vectors of length {} and {}", v.len(), w.len()));
    Ok(v.iter().zip(w.iter()).map(|(a, b)| a * b).sum())
}

/// Product over the two-element field. Rows of `a` that are entirely 
/// zero are skipped.
pub fn matmul(a: &F2Mat, b: &F2Mat) -> Result<F2Mat> { 
    let (l, m) = a.shape();
    let (m2, n) = b.shape();
    ensure!(m == m2, mismatch!("matmul of {l}x{m} and {m2}x{n}"));

    let cols = (0..n).map(|j| b.col_vec(j)).collect::<Vec<_>>();
    let mut res = F2Mat::zero((l, n));

    for i in 0..l { 
        let row = a.row_vec(i);
        if row.iter().all(|x| x.is_zero()) { 
            continue
        }
        for (j, col) in cols.iter().enumerate() { 
            res[(i, j)] = dot(&row, col)?;
        }
    }

    Ok(res)
}

/// Product `m[0] m[1] ... m[n]`, or `m[n] ... m[1] m[0]` if `reverse`.
pub fn matmul_reduce(mats: &[&F2Mat], reverse: bool) -> Result<F2Mat> { 
    let mut iter: Box<dyn Iterator<Item = &&F2Mat>> = if reverse { 
        Box::new(mats.iter().rev())
    } else { 
        Box::new(mats.iter())
    };

    let Some(first) = iter.next() else { 
        return err!(mismatch!("product of an empty list of matrices"))
    };

    iter.try_fold((*first).clone(), |p, a| matmul(&p, a))
}

pub fn matadd(a: &F2Mat, b: &F2Mat) -> Result<F2Mat> { 
    ensure!(a.shape() == b.shape(), mismatch!("matadd of {:?} and {:?}", a.shape(), b.shape()));
    let (m, n) = a.shape();
    Ok(F2Mat::from_data((m, n), 
        (0..m).flat_map(|i| (0..n).map(move |j| a[(i, j)] + b[(i, j)]))
    ))
}

pub fn vecadd(v: &[FF2], w: &[FF2]) -> Result<F2Vec> { 
    ensure!(v.len() == w.len(), mismatch!("vecadd of vectors of length {} and {}", v.len(), w.len()));
    Ok(v.iter().zip(w.iter()).map(|(a, b)| a + b).collect())
}

/// Number of nonzero entries.
pub fn weight(v: &[FF2]) -> usize { 
    v.iter().filter(|a| !a.is_zero()).count()
}

pub fn is_zero_vec(v: &[FF2]) -> bool { 
    v.iter().all(|a| a.is_zero())
}

/// Returns a copy of `m` with rows `i` and `j` swapped.
pub fn swap_rows(m: &F2Mat, i: usize, j: usize) -> F2Mat { 
    let mut res = m.clone();
    res.swap_rows(i, j);
    res
}

/// Returns a copy of `m` with columns `i` and `j` swapped.
pub fn swap_cols(m: &F2Mat, i: usize, j: usize) -> F2Mat { 
    let mut res = m.clone();
    res.swap_cols(i, j);
    res
}

/// Returns a copy of `m` with row `i` XOR-ed into row `j`.
pub fn add_row_to(m: &F2Mat, i: usize, j: usize) -> F2Mat { 
    let mut res = m.clone();
    res.xor_row_into(i, j);
    res
}

/// Returns a copy of `m` with column `i` XOR-ed into column `j`.
pub fn add_col_to(m: &F2Mat, i: usize, j: usize) -> F2Mat { 
    let mut res = m.clone();
    res.xor_col_into(i, j);
    res
}

impl F2Mat { 
    pub fn from_bits<I>(shape: (usize, usize), data: I) -> Self
    where I: IntoIterator<Item = u8> { 
        Self::from_data(shape, data.into_iter().map(FF2::from))
    }

    pub fn to_bits(&self) -> Vec<Vec<u8>> { 
        self.rows_iter().map(|row| 
            row.into_iter().map(u8::from).collect()
        ).collect()
    }

    pub fn count_ones(&self) -> usize { 
        self.iter().filter(|e| !e.2.is_zero()).count()
    }

    /// Number of ones on the diagonal.
    pub fn diag_ones(&self) -> usize { 
        let n = self.nrows().min(self.ncols());
        (0..n).filter(|&i| !self[(i, i)].is_zero()).count()
    }

    pub fn nonzero_rows(&self) -> Vec<F2Vec> { 
        self.rows_iter().filter(|row| !is_zero_vec(row)).collect()
    }

    pub(crate) fn xor_row_into(&mut self, i: usize, j: usize) { 
        assert_ne!(i, j);
        for c in 0..self.ncols() { 
            let a = self[(i, c)];
            self[(j, c)] += a;
        }
    }

    pub(crate) fn xor_col_into(&mut self, i: usize, j: usize) { 
        assert_ne!(i, j);
        for r in 0..self.nrows() { 
            let a = self[(r, i)];
            self[(r, j)] += a;
        }
    }
}

#[auto_ops]
impl<'a, 'b> Mul<&'b F2Mat> for &'a F2Mat {
    type Output = F2Mat;
    fn mul(self, rhs: &'b F2Mat) -> Self::Output {
        matmul(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

#[auto_ops]
impl<'a, 'b> Add<&'b F2Mat> for &'a F2Mat {
    type Output = F2Mat;
    fn add(self, rhs: &'b F2Mat) -> Self::Output {
        matadd(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}
