use log::LevelFilter;
use zhom::Error;
use zhom::util::log::init_simple_logger;
use zhom_matrix::f2::{matmul, rref, F2Mat};
use zhom_matrix::MatTrait;
use zhom_homology::config::HomologyOpts;
use zhom_homology::{hypergraph_homology_basis, EdgeList, HypergraphHomology, Simplex};

fn compute<const N: usize>(edges: Vec<[i32; N]>, k: usize) -> HypergraphHomology<i32> { 
    // fails once installed; later calls are no-ops.
    let _ = init_simple_logger(LevelFilter::Warn);

    let h = EdgeList::from_iter(edges);
    hypergraph_homology_basis(&h, k, &HomologyOpts::default()).unwrap()
}

// every generator is a cycle, and the generators stay independent modulo the boundaries.
fn check_generators(res: &HypergraphHomology<i32>) { 
    let h = res.homology();
    let k = res.dim();
    let n = res.chains(k).unwrap().len();
    let d_k = res.boundary(k).unwrap();

    for v in h.generators() { 
        let z = F2Mat::from_data((n, 1), v.iter().cloned());
        assert!(matmul(d_k, &z).unwrap().is_zero());
    }

    let mut rows = vec![];
    for j in 0..h.image().ncols() { 
        rows.push(h.image().col_vec(j));
    }
    rows.extend(h.generators().iter().cloned());

    let m = F2Mat::from_rows(n, rows).unwrap();
    assert_eq!(rref(&m).rank(), h.rank_k1() + h.betti());
}

#[test]
fn triangle() { 
    let res = compute(vec![[1, 2], [2, 3], [1, 3]], 1);

    assert_eq!(res.betti(), 1);
    assert_eq!(res.homology().rank_k(), 2);
    assert_eq!(res.homology().rank_k1(), 0);
    assert_eq!(res.basis(), &[vec![
        Simplex::from([1, 2]), Simplex::from([1, 3]), Simplex::from([2, 3])
    ]]);
    check_generators(&res);
}

#[test]
fn filled_triangle() { 
    let res = compute(vec![[1, 2, 3]], 1);

    assert_eq!(res.max_dim(), 2);
    assert_eq!(res.homology().rank_k(), 2);
    assert_eq!(res.homology().rank_k1(), 1);
    assert_eq!(res.betti(), 0);
    assert!(res.basis().is_empty());

    let res = compute(vec![[1, 2, 3]], 2);
    assert_eq!(res.betti(), 0);
}

#[test]
fn hollow_tetrahedron() { 
    let edges = vec![[1, 2, 3], [1, 2, 4], [1, 3, 4], [2, 3, 4]];

    let res = compute(edges.clone(), 1);
    assert_eq!(res.betti(), 0);

    let res = compute(edges, 2);
    assert_eq!(res.betti(), 1);
    assert_eq!(res.basis().len(), 1);
    assert_eq!(res.basis()[0].len(), 4);
    check_generators(&res);
}

#[test]
fn solid_tetrahedron() { 
    let res = compute(vec![[1, 2, 3, 4]], 2);
    assert_eq!(res.chains(2).unwrap().len(), 4);
    assert_eq!(res.chains(3).unwrap().len(), 1);
    assert_eq!(res.betti(), 0);
}

#[test]
fn torus() { 
    // 7-vertex triangulation: (i, i+1, i+3), (i, i+2, i+3) mod 7.
    let edges = (0..7).flat_map(|i| [
        [i, (i + 1) % 7, (i + 3) % 7],
        [i, (i + 2) % 7, (i + 3) % 7],
    ]).collect::<Vec<_>>();

    let res = compute(edges.clone(), 1);
    assert_eq!(res.chains(1).unwrap().len(), 21);
    assert_eq!(res.chains(2).unwrap().len(), 14);
    assert_eq!(res.homology().rank_k(), 6);
    assert_eq!(res.homology().rank_k1(), 13);
    assert_eq!(res.betti(), 2);
    check_generators(&res);

    let res = compute(edges, 2);
    assert_eq!(res.betti(), 1);
    assert_eq!(res.basis()[0].len(), 14);
}

#[test]
fn disjoint_cycles() { 
    let res = compute(vec![
        [1, 2], [2, 3], [1, 3],
        [4, 5], [5, 6], [4, 6],
    ], 1);

    assert_eq!(res.betti(), 2);
    check_generators(&res);

    let mut cells = res.basis().iter().flatten().cloned().collect::<Vec<_>>();
    cells.sort();
    cells.dedup();
    assert_eq!(cells.len(), 6);
}

#[test]
fn shortest() { 
    // the square 1-2-4-3 with the triangle (1,2,3) filled.
    let h = EdgeList::from_iter([vec![1, 2, 3], vec![2, 4], vec![3, 4]]);
    let opts = HomologyOpts::new().shortest(true);
    let res = hypergraph_homology_basis(&h, 1, &opts).unwrap();

    assert_eq!(res.betti(), 1);

    let s = res.shortest_basis().unwrap();
    assert_eq!(s, &[vec![vec![
        Simplex::from([2, 3]), Simplex::from([2, 4]), Simplex::from([3, 4])
    ]]]);
}

#[test]
fn shortest_guard() { 
    let h = EdgeList::from_iter([vec![1, 2, 3], vec![2, 4], vec![3, 4]]);
    let opts = HomologyOpts::new().shortest(true).coset_limit(0);
    let e = hypergraph_homology_basis(&h, 1, &opts);

    assert!(matches!(e, Err(Error::CosetSearchTooLarge { rank: 1, limit: 0 })));
}

#[test]
fn invalid_dimension() { 
    let h = EdgeList::from_iter([[1, 2, 3]]);
    let opts = HomologyOpts::default();

    assert_eq!(
        hypergraph_homology_basis(&h, 0, &opts).unwrap_err(),
        Error::InvalidDimension { k: 0, max_dim: 2 }
    );
    assert_eq!(
        hypergraph_homology_basis(&h, 3, &opts).unwrap_err(),
        Error::InvalidDimension { k: 3, max_dim: 2 }
    );

    let empty = EdgeList::<i32>::new();
    assert!(hypergraph_homology_basis(&empty, 1, &opts).is_err());
}

#[test]
fn string_vertices() { 
    let h = EdgeList::<String>::from_json(r#"[["a","b"],["b","c"],["a","c"],["c","d"]]"#).unwrap();
    let res = hypergraph_homology_basis(&h, 1, &HomologyOpts::default()).unwrap();

    assert_eq!(res.betti(), 1);
    assert_eq!(res.basis()[0].len(), 3);
    assert!(res.to_string().starts_with("H₁ = F₂"));
}
