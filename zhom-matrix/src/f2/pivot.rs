use num_traits::Zero;
use crate::dense::*;
use super::F2Mat;

/// First nonzero entry of the submatrix starting at `(s1, s2)`, scanning 
/// column by column and, within a column, top to bottom.
pub fn next_pivot(m: &F2Mat, s1: usize, s2: usize) -> Option<(usize, usize)> { 
    let (r, c) = m.shape();
    (s2..c).find_map(|j| 
        (s1..r).find(|&i| !m[(i, j)].is_zero()).map(|i| (i, j))
    )
}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn pivot() {
        let a = F2Mat::from_bits((3, 3), [
            1,0,1,
            0,1,0,
            0,1,1
        ]);

        assert_eq!(next_pivot(&a, 0, 0), Some((0, 0)));
        assert_eq!(next_pivot(&a, 1, 0), Some((1, 1)));
        assert_eq!(next_pivot(&a, 2, 0), Some((2, 1)));
        assert_eq!(next_pivot(&a, 0, 2), Some((0, 2)));
        assert_eq!(next_pivot(&a, 1, 2), Some((2, 2)));
        assert_eq!(next_pivot(&a, 3, 0), None);
        assert_eq!(next_pivot(&a, 0, 3), None);
    }

    #[test]
    fn no_pivot() {
        let a = F2Mat::from_bits((2, 3), [
            1,1,1,
            0,0,0,
        ]);
        assert_eq!(next_pivot(&a, 1, 0), None);

        let z = F2Mat::zero((0, 4));
        assert_eq!(next_pivot(&z, 0, 0), None);
    }
}
