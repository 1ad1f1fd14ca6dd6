use std::cmp::min;
use log::{debug, trace};
use num_traits::Zero;
use crate::dense::*;
use super::{next_pivot, ElemOp, F2Mat, OpLog};

pub fn snf(target: &F2Mat) -> SnfResult { 
    let copy = target.clone();
    snf_in_place(copy)
}

pub fn snf_in_place(target: F2Mat) -> SnfResult { 
    debug!("start snf: {:?}.", target.shape());
    trace!("{}", target);

    let mut calc = SnfCalc::new(target);

    calc.process();

    debug!("snf done: rank = {}, ops = {}.", calc.rank, calc.log.len());
    trace!("{}", calc.target);

    calc.result()
}

/// `L M R = S`, with `S` diagonal and `L L⁻¹ = I`.
#[derive(Clone, Debug)]
pub struct SnfResult { 
    result: F2Mat,
    l: F2Mat,
    linv: F2Mat,
    r: F2Mat,
    rank: usize,
}

impl SnfResult { 
    pub fn result(&self) -> &F2Mat { 
        &self.result
    }

    pub fn l(&self) -> &F2Mat { 
        &self.l
    }

    pub fn linv(&self) -> &F2Mat { 
        &self.linv
    }

    pub fn r(&self) -> &F2Mat { 
        &self.r
    }

    pub fn rank(&self) -> usize { 
        self.rank
    }

    pub fn destruct(self) -> (F2Mat, [F2Mat; 3]) { 
        (self.result, [self.l, self.linv, self.r])
    }
}

pub struct SnfCalc { 
    target: F2Mat,
    log: OpLog,
    rank: usize,
}

impl SnfCalc { 
    pub fn new(target: F2Mat) -> Self { 
        let log = OpLog::new(target.shape());
        Self { target, log, rank: 0 }
    }

    pub fn rank(&self) -> usize { 
        self.rank
    }

    pub fn result(self) -> SnfResult { 
        let l = self.log.left_mat();
        let linv = self.log.left_inv_mat();
        let r = self.log.right_mat();

        SnfResult { 
            result: self.target, 
            l, linv, r,
            rank: self.rank
        }
    }

    pub fn process(&mut self) { 
        let (m, n) = self.target.shape();
        for s in 0..min(m, n) { 
            if !self.eliminate_step(s) { 
                break
            }
        }
    }

    fn eliminate_step(&mut self, s: usize) -> bool { 
        let Some((i, j)) = next_pivot(&self.target, s, s) else { 
            return false
        };

        trace!("select-pivot: ({i}, {j})");

        if i > s { 
            self.apply(ElemOp::SwapRows(s, i));
        }

        if j > s { 
            self.apply(ElemOp::SwapCols(s, j));
        }

        self.eliminate_col(s);
        self.eliminate_row(s);
        self.rank += 1;

        true
    }

    // clear column `s` below the pivot.
    fn eliminate_col(&mut self, s: usize) { 
        let m = self.target.nrows();
        let rows = (s + 1 .. m).filter(|&i| 
            !self.target[(i, s)].is_zero()
        ).collect::<Vec<_>>();

        for i in rows { 
            self.apply(ElemOp::AddRow(s, i));
        }
    }

    // clear row `s` right of the pivot.
    fn eliminate_row(&mut self, s: usize) { 
        let n = self.target.ncols();
        let cols = (s + 1 .. n).filter(|&j| 
            !self.target[(s, j)].is_zero()
        ).collect::<Vec<_>>();

        for j in cols { 
            self.apply(ElemOp::AddCol(s, j));
        }
    }

    fn apply(&mut self, e: ElemOp) { 
        e.apply_in_place(&mut self.target);
        self.log.push(e);

        trace!("{e}\n{}", self.target);
    }
}
