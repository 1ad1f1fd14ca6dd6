use log::{debug, trace};
use zhom::{ensure, mismatch, Error, Result, FF2};
use zhom_matrix::MatTrait;
use zhom_matrix::f2::{weight, F2Mat, F2Vec};

/// Every element of `v + im`, where the columns of `image` form a basis of `im`. 
/// 
/// The `2^r` elements are listed in the order of their combination masks, 
/// the first image vector being the most significant bit. The first element 
/// is `v` itself. Fails with `CosetSearchTooLarge` if `r` exceeds `limit`.
pub fn coset(image: &F2Mat, v: &[FF2], limit: usize) -> Result<Vec<F2Vec>> { 
    let mut res = vec![];
    for_each_in_coset(image, v, limit, |w| res.push(w))?;
    Ok(res)
}

/// The minimum-weight elements of `v + im`, in the order `coset` lists them.
pub fn shortest_in_coset(image: &F2Mat, v: &[FF2], limit: usize) -> Result<Vec<F2Vec>> { 
    let mut min = weight(v);
    let mut res = vec![];

    for_each_in_coset(image, v, limit, |w| { 
        let wt = weight(&w);
        if wt < min { 
            min = wt;
            res.clear();
            res.push(w);
        } else if wt == min { 
            res.push(w);
        }
    })?;

    debug!("shortest in coset: weight = {min}, count = {}.", res.len());

    Ok(res)
}

fn for_each_in_coset<F>(image: &F2Mat, v: &[FF2], limit: usize, mut f: F) -> Result<()>
where F: FnMut(F2Vec) { 
    let (n, r) = image.shape();
    ensure!(v.len() == n, mismatch!("coset representative of length {} in a space of dim {n}", v.len()));
    ensure!(r <= limit && r < u64::BITS as usize, Error::CosetSearchTooLarge { rank: r, limit });

    let basis = (0..r).map(|j| image.col_vec(j)).collect::<Vec<_>>();

    trace!("enumerate coset: 2^{r} elements.");

    for mask in 0..(1u64 << r) { 
        let mut w = v.to_vec();
        for (idx, b) in basis.iter().enumerate() { 
            if (mask >> (r - 1 - idx)) & 1 == 1 { 
                w.iter_mut().zip(b.iter()).for_each(|(x, y)| *x += y);
            }
        }
        f(w);
    }

    Ok(())
}
