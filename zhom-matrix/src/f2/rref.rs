use log::{debug, trace};
use num_traits::Zero;
use crate::dense::*;
use super::{next_pivot, ElemOp, F2Mat, OpLog};

pub fn rref(target: &F2Mat) -> RrefResult { 
    let copy = target.clone();
    rref_in_place(copy)
}

pub fn rref_in_place(target: F2Mat) -> RrefResult { 
    debug!("start rref: {:?}.", target.shape());
    trace!("{}", target);

    let mut calc = RrefCalc::new(target);

    calc.process();

    debug!("rref done: rank = {}.", calc.pivots.len());
    trace!("{}", calc.target);

    calc.result()
}

/// Checks that `m` is in reduced row-echelon form: nonzero rows come first, 
/// leading ones move strictly right, and each leading one is the only 
/// nonzero entry of its column.
pub fn is_rref(m: &F2Mat) -> bool { 
    let (r, c) = m.shape();
    let mut prev: Option<usize> = None;
    let mut seen_zero = false;

    for i in 0..r { 
        let lead = (0..c).find(|&j| !m[(i, j)].is_zero());
        let Some(j) = lead else { 
            seen_zero = true;
            continue
        };

        if seen_zero || prev.is_some_and(|p| p >= j) { 
            return false
        }
        if (0..r).any(|k| k != i && !m[(k, j)].is_zero()) { 
            return false
        }
        prev = Some(j);
    }
    true
}

/// `L M = S`, with `S` in reduced row-echelon form and `L L⁻¹ = I`.
#[derive(Clone, Debug)]
pub struct RrefResult { 
    result: F2Mat,
    l: F2Mat,
    linv: F2Mat,
    pivots: Vec<(usize, usize)>,
}

impl RrefResult { 
    pub fn result(&self) -> &F2Mat { 
        &self.result
    }

    pub fn l(&self) -> &F2Mat { 
        &self.l
    }

    pub fn linv(&self) -> &F2Mat { 
        &self.linv
    }

    pub fn pivots(&self) -> &[(usize, usize)] { 
        &self.pivots
    }

    pub fn rank(&self) -> usize { 
        self.pivots.len()
    }

    pub fn destruct(self) -> (F2Mat, [F2Mat; 2]) { 
        (self.result, [self.l, self.linv])
    }
}

pub struct RrefCalc { 
    target: F2Mat,
    log: OpLog,
    pivots: Vec<(usize, usize)>,
}

impl RrefCalc { 
    pub fn new(target: F2Mat) -> Self { 
        let log = OpLog::new(target.shape());
        Self { target, log, pivots: vec![] }
    }

    pub fn result(self) -> RrefResult { 
        let l = self.log.left_mat();
        let linv = self.log.left_inv_mat();

        RrefResult { 
            result: self.target, 
            l, linv,
            pivots: self.pivots
        }
    }

    pub fn process(&mut self) { 
        let (m, n) = self.target.shape();
        let (mut s1, mut s2) = (0, 0);

        // s2 skips columns without a pivot.
        while s1 < m && s2 < n { 
            let Some((i, j)) = next_pivot(&self.target, s1, s2) else { 
                break
            };

            trace!("select-pivot: ({i}, {j})");

            if i > s1 { 
                self.apply(ElemOp::SwapRows(s1, i));
            }

            self.eliminate_col(s1, j);
            self.pivots.push((s1, j));

            (s1, s2) = (s1 + 1, j + 1);
        }
    }

    // clear column `j` above and below the pivot at `(i, j)`.
    fn eliminate_col(&mut self, i: usize, j: usize) { 
        let m = self.target.nrows();
        let rows = (0..m).filter(|&k| 
            k != i && !self.target[(k, j)].is_zero()
        ).collect::<Vec<_>>();

        for k in rows { 
            self.apply(ElemOp::AddRow(i, k));
        }
    }

    fn apply(&mut self, e: ElemOp) { 
        e.apply_in_place(&mut self.target);
        self.log.push(e);

        trace!("{e}\n{}", self.target);
    }
}
