use log::{debug, info, warn};
use zhom::{ensure, mismatch, Error, Result};
use zhom_matrix::MatTrait;
use zhom_matrix::f2::{matmul_reduce, rref_in_place, snf, F2Mat};
use crate::config::HomologyOpts;
use crate::sink::LogSink;
use crate::{shortest_in_coset, Mod2Homology};

/// Computes `Hₖ = Ker ∂ₖ / Im ∂ₖ₊₁` for `∂ₖ : Cₖ → Cₖ₋₁` and `∂ₖ₊₁ : Cₖ₊₁ → Cₖ`.
pub fn homology_basis(k: usize, d_k: &F2Mat, d_k1: &F2Mat, opts: &HomologyOpts) -> Result<Mod2Homology> { 
    HomologyCalc::new(k, d_k, d_k1, opts).calculate()
}

/// `homology_basis`, merging the intermediate data into `sink`.
pub fn homology_basis_logged(k: usize, d_k: &F2Mat, d_k1: &F2Mat, opts: &HomologyOpts, sink: &mut dyn LogSink) -> Result<Mod2Homology> { 
    let h = homology_basis(k, d_k, d_k1, opts)?;
    sink.merge(h.log_entries())?;
    Ok(h)
}

pub struct HomologyCalc<'a> { 
    k: usize,
    d_k: &'a F2Mat,
    d_k1: &'a F2Mat,
    opts: &'a HomologyOpts,
}

impl<'a> HomologyCalc<'a> { 
    pub fn new(k: usize, d_k: &'a F2Mat, d_k1: &'a F2Mat, opts: &'a HomologyOpts) -> Self { 
        Self { k, d_k, d_k1, opts }
    }

    //          d_k1          d_k
    //    Cₖ₊₁ ------> Cₖ ------> Cₖ₋₁
    //
    //  L1 d_k R1 = S1,  L2 d_k1 R2 = S2.
    //
    //  Ker d_k   = span R1[:, r1..]
    //  Im  d_k1  = span L2⁻¹[:, ..r2]
    //  Cₖ / Im   ≅ span L2⁻¹[:, r2..],  with projection L2[r2.., :].

    pub fn calculate(&self) -> Result<Mod2Homology> { 
        let (k, d_k, d_k1) = (self.k, self.d_k, self.d_k1);
        let n = d_k.ncols();

        ensure!(d_k1.nrows() == n, mismatch!(
            "∂{k} has {n} columns but ∂{} has {} rows", k + 1, d_k1.nrows()
        ));

        debug!("calculate H{k}: {} -> {n} -> {}", d_k1.ncols(), d_k.nrows());

        let s1 = snf(d_k);
        let s2 = snf(d_k1);
        let (r1, r2) = (s1.rank(), s2.rank());

        ensure!(r1 + r2 <= n, Error::NotAChainComplex { rank_k: r1, rank_k1: r2, dim: n });

        let nullity = n - r1;
        let betti = n - r1 - r2;

        info!("H{k}: rank{k} = {r1}, rank{} = {r2}, nullity{k} = {nullity}, betti{k} = {betti}.", k + 1);

        let kernel = s1.r().submat_cols(r1..n);
        let image = s2.linv().submat_cols(0..r2);
        let cokernel = s2.linv().submat_cols(r2..n);
        let cokproj = s2.l().submat_rows(r2..n);

        let projection = matmul_reduce(&[&cokernel, &cokproj, &kernel], false)?.transpose();
        let generators = rref_in_place(projection.clone()).result().nonzero_rows();

        if generators.len() != betti { 
            warn!("H{k}: found {} generators, expected {betti}.", generators.len());
        }

        let shortest = if self.opts.shortest { 
            let limit = self.opts.effective_coset_limit();
            let reps = generators.iter().map(|v| 
                shortest_in_coset(&image, v, limit)
            ).collect::<Result<Vec<_>>>()?;
            Some(reps)
        } else { 
            None
        };

        Ok(Mod2Homology { 
            dim: k,
            rank_k: r1,
            rank_k1: r2,
            betti,
            kernel,
            image,
            projection,
            generators,
            shortest
        })
    }
}
