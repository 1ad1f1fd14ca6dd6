use std::fmt::Display;
use itertools::Itertools;

const SUB_DIGITS: [char; 10] = ['₀','₁','₂','₃','₄','₅','₆','₇','₈','₉'];
const SUP_DIGITS: [char; 10] = ['⁰','¹','²','³','⁴','⁵','⁶','⁷','⁸','⁹'];

fn map_digits(i: usize, table: &[char; 10]) -> String { 
    i.to_string().chars().map(|c| 
        c.to_digit(10).map(|d| table[d as usize]).unwrap_or(c)
    ).collect()
}

pub fn subscript(i: usize) -> String {
    map_digits(i, &SUB_DIGITS)
}

pub fn superscript(i: usize) -> String {
    map_digits(i, &SUP_DIGITS)
}

/// Formal sum of generators, e.g. `(1,2) + (2,3)`. Empty sums print as `0`.
pub fn chain_sum<X, I>(terms: I) -> String
where X: Display, I: IntoIterator<Item = X> { 
    let s = terms.into_iter().map(|x| x.to_string()).join(" + ");
    if s.is_empty() { 
        "0".to_string()
    } else { 
        s
    }
}

/// Vertex tuple, e.g. `(1,2,3)`.
pub fn tuple<X, I>(elems: I) -> String
where X: Display, I: IntoIterator<Item = X> { 
    format!("({})", elems.into_iter().join(","))
}

/// `F₂ⁿ`-style symbol of a vector space of the given dimension.
pub fn vs_symbol(symbol: &str, dim: usize) -> String { 
    match dim { 
        0 => "0".to_string(),
        1 => symbol.to_string(),
        _ => format!("{symbol}{}", superscript(dim))
    }
}
