use std::ops::{Index, IndexMut, Range};
use nalgebra::{DMatrix, Scalar};
use delegate::delegate;
use derive_more::Display;
use num_traits::{Zero, One};
use zhom::{ensure, mismatch, Result};
use crate::MatTrait;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub struct Mat<R> {
    inner: DMatrix<R>
}

impl<R> MatTrait for Mat<R> {
    fn shape(&self) -> (usize, usize) {
        (self.inner.nrows(), self.inner.ncols())
    }
}

impl<R> Mat<R> {
    pub fn inner(&self) -> &DMatrix<R> {
        &self.inner
    }

    pub fn into_inner(self) -> DMatrix<R> {
        self.inner
    }

    // column-major, as stored.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &R)> { 
        let m = self.nrows();
        self.inner.iter().enumerate().map(move |(i, a)| 
            (i % m, i / m, a)
        )
    }
}

impl<R> Mat<R>
where R: Scalar {
    pub fn from_data<I>(shape: (usize, usize), data: I) -> Self
    where I: IntoIterator<Item = R> { 
        DMatrix::from_row_iterator(shape.0, shape.1, data).into()
    }

    /// Builds a matrix from its rows. All rows must share the length `ncols`.
    pub fn from_rows(ncols: usize, rows: Vec<Vec<R>>) -> Result<Self> { 
        for (i, row) in rows.iter().enumerate() { 
            ensure!(row.len() == ncols, mismatch!("row {i} has length {}, expected {ncols}", row.len()));
        }
        let nrows = rows.len();
        Ok(Self::from_data((nrows, ncols), rows.into_iter().flatten()))
    }

    pub fn zero(shape: (usize, usize)) -> Self
    where R: Zero { 
        let inner = DMatrix::zeros(shape.0, shape.1);
        Self::from(inner)
    }

    pub fn is_zero(&self) -> bool
    where R: Zero { 
        self.iter().all(|e| e.2.is_zero())
    }

    pub fn id(size: usize) -> Self
    where R: Zero + One { 
        let inner = DMatrix::identity(size, size);
        Self::from(inner)
    }

    pub fn is_id(&self) -> bool
    where R: Zero + One { 
        self.is_square() && self.iter().all(|(i, j, a)| 
            i == j && a.is_one() || 
            i != j && a.is_zero()
        )
    }

    pub fn diag<I>(shape: (usize, usize), entries: I) -> Self
    where R: Zero, I: IntoIterator<Item = R> {
        let mut mat = Self::zero(shape);
        for (i, a) in entries.into_iter().enumerate() {
            mat[(i, i)] = a;
        }
        mat
    }

    pub fn is_diag(&self) -> bool
    where R: Zero { 
        self.iter().all(|(i, j, a)| 
            i == j || a.is_zero()
        )
    }

    pub fn submat(&self, rows: Range<usize>, cols: Range<usize>) -> Mat<R> { 
        let (i0, i1) = (rows.start, rows.end);
        let (j0, j1) = (cols.start, cols.end);

        assert!(i0 <= i1 && i1 <= self.nrows());
        assert!(j0 <= j1 && j1 <= self.ncols());

        let view = self.inner.view((i0, j0), (i1 - i0, j1 - j0));
        Self::from(view.clone_owned())
    }

    pub fn submat_rows(&self, rows: Range<usize>) -> Mat<R> { 
        let n = self.ncols();
        self.submat(rows, 0 .. n)
    }

    pub fn submat_cols(&self, cols: Range<usize>) -> Mat<R> { 
        let m = self.nrows();
        self.submat(0 .. m, cols)
    }

    pub fn transpose(&self) -> Mat<R> { 
        Self::from(self.inner.transpose())
    }

    pub fn row_vec(&self, i: usize) -> Vec<R> { 
        self.inner.row(i).iter().cloned().collect()
    }

    pub fn col_vec(&self, j: usize) -> Vec<R> { 
        self.inner.column(j).iter().cloned().collect()
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = Vec<R>> + '_ { 
        (0..self.nrows()).map(|i| self.row_vec(i))
    }

    pub fn map<S, F>(&self, f: F) -> Mat<S>
    where S: Scalar, F: FnMut(R) -> S { 
        Mat::from(self.inner.map(f))
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.inner.swap_rows(i, j);
    }

    pub fn swap_cols(&mut self, i: usize, j: usize) {
        self.inner.swap_columns(i, j);
    }
}

impl<R> From<DMatrix<R>> for Mat<R> {
    fn from(inner: DMatrix<R>) -> Self {
        Self { inner }
    }
}

impl<R> Index<(usize, usize)> for Mat<R>
where R: Scalar {
    type Output = R;
    delegate! { 
        to self.inner { 
            fn index(&self, index: (usize, usize)) -> &R;
        }
    }
}

impl<R> IndexMut<(usize, usize)> for Mat<R>
where R: Scalar {
    delegate! { 
        to self.inner { 
            fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output;
        }
    }
}

impl<R> Default for Mat<R>
where R: Scalar + Zero {
    fn default() -> Self {
        Self::zero((0, 0))
    }
}
