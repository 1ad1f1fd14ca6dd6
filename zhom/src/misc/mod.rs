mod index_list;

pub use index_list::*;
