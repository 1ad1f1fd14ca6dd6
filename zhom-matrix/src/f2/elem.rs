use derive_more::Display;
use super::F2Mat;

/// An elementary operation over the two-element field. 
/// Each one is its own inverse.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum ElemOp { 
    #[display("swap-rows({_0}, {_1})")]
    SwapRows(usize, usize),

    #[display("swap-cols({_0}, {_1})")]
    SwapCols(usize, usize),

    /// XOR row `.0` into row `.1`.
    #[display("add-row({_0} -> {_1})")]
    AddRow(usize, usize),

    /// XOR column `.0` into column `.1`.
    #[display("add-col({_0} -> {_1})")]
    AddCol(usize, usize),
}

impl ElemOp { 
    pub fn is_row_op(&self) -> bool { 
        matches!(self, ElemOp::SwapRows(..) | ElemOp::AddRow(..))
    }

    /// Applies to a copy of `m`.
    pub fn apply(&self, m: &F2Mat) -> F2Mat { 
        let mut res = m.clone();
        self.apply_in_place(&mut res);
        res
    }

    pub(crate) fn apply_in_place(&self, m: &mut F2Mat) { 
        match *self { 
            ElemOp::SwapRows(i, j) => m.swap_rows(i, j),
            ElemOp::SwapCols(i, j) => m.swap_cols(i, j),
            ElemOp::AddRow(i, j)   => m.xor_row_into(i, j),
            ElemOp::AddCol(i, j)   => m.xor_col_into(i, j),
        }
    }

    /// For a row operation `E`, the column operation realizing 
    /// right multiplication by `E⁻¹ = E`.
    pub fn inv_on_right(&self) -> ElemOp { 
        match *self { 
            ElemOp::SwapRows(i, j) => ElemOp::SwapCols(i, j),
            ElemOp::AddRow(i, j)   => ElemOp::AddCol(j, i),
            ElemOp::SwapCols(..) | 
            ElemOp::AddCol(..)     => panic!("{self} is not a row operation."),
        }
    }
}

/// Log of the row and column operations applied to an `m × n` matrix `M`. 
/// 
/// Writing `L` for the product of row operations and `R` for that of 
/// column operations, the log materializes `L`, `L⁻¹` and `R` on demand, 
/// so no transformation matrix is touched during the reduction itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpLog { 
    shape: (usize, usize),
    left: Vec<ElemOp>,
    right: Vec<ElemOp>,
}

impl OpLog { 
    pub fn new(shape: (usize, usize)) -> Self { 
        Self { shape, left: vec![], right: vec![] }
    }

    pub fn shape(&self) -> (usize, usize) { 
        self.shape
    }

    pub fn len(&self) -> usize { 
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool { 
        self.len() == 0
    }

    pub fn left_ops(&self) -> &[ElemOp] { 
        &self.left
    }

    pub fn right_ops(&self) -> &[ElemOp] { 
        &self.right
    }

    pub fn push(&mut self, op: ElemOp) { 
        if op.is_row_op() { 
            self.left.push(op)
        } else { 
            self.right.push(op)
        }
    }

    /// `L = Eₖ ⋯ E₁`.
    pub fn left_mat(&self) -> F2Mat { 
        let mut l = F2Mat::id(self.shape.0);
        for e in self.left.iter() { 
            e.apply_in_place(&mut l);
        }
        l
    }

    /// `L⁻¹ = E₁ ⋯ Eₖ`, built by column operations on the identity.
    pub fn left_inv_mat(&self) -> F2Mat { 
        let mut linv = F2Mat::id(self.shape.0);
        for e in self.left.iter() { 
            e.inv_on_right().apply_in_place(&mut linv);
        }
        linv
    }

    /// `R = F₁ ⋯ Fₗ`.
    pub fn right_mat(&self) -> F2Mat { 
        let mut r = F2Mat::id(self.shape.1);
        for f in self.right.iter() { 
            f.apply_in_place(&mut r);
        }
        r
    }
}

#[cfg(test)]
mod tests { 
    use crate::MatTrait;
    use super::*;

    fn sample() -> F2Mat { 
        F2Mat::from_bits((3, 4), [
            1,0,1,1,
            0,1,1,0,
            1,1,0,1
        ])
    }

    #[test]
    fn apply_is_pure() { 
        let a = sample();
        let b = ElemOp::AddRow(0, 2).apply(&a);
        assert_eq!(a, sample());
        assert_ne!(a, b);
    }

    #[test]
    fn self_inverse() { 
        let a = sample();
        for e in [
            ElemOp::SwapRows(0, 2), 
            ElemOp::SwapCols(1, 3), 
            ElemOp::AddRow(1, 0), 
            ElemOp::AddCol(2, 3)
        ] { 
            assert_eq!(e.apply(&e.apply(&a)), a, "{e}");
        }
    }

    #[test]
    fn inv_on_right() { 
        assert_eq!(ElemOp::SwapRows(0, 2).inv_on_right(), ElemOp::SwapCols(0, 2));
        assert_eq!(ElemOp::AddRow(1, 3).inv_on_right(), ElemOp::AddCol(3, 1));
    }

    #[test]
    fn log_replay() { 
        let a = sample();
        let ops = [
            ElemOp::AddRow(0, 2), 
            ElemOp::SwapCols(0, 3), 
            ElemOp::SwapRows(1, 2), 
            ElemOp::AddCol(1, 2),
            ElemOp::AddRow(2, 0),
        ];

        let mut log = OpLog::new(a.shape());
        let mut s = a.clone();
        for e in ops { 
            e.apply_in_place(&mut s);
            log.push(e);
        }

        assert_eq!(log.len(), 5);
        assert_eq!(log.left_ops().len(), 3);

        let (l, linv, r) = (log.left_mat(), log.left_inv_mat(), log.right_mat());

        assert_eq!(&(&l * &a) * &r, s);
        assert!((&l * &linv).is_id());
        assert!((&linv * &l).is_id());
    }

    #[test]
    fn empty_log() { 
        let log = OpLog::new((2, 3));
        assert!(log.is_empty());
        assert!(log.left_mat().is_id());
        assert!(log.left_inv_mat().is_id());
        assert_eq!(log.right_mat(), F2Mat::id(3));
    }
}
