//! The three interchangeable edge stores behind `EdgeStore`.

mod list;
mod matrix;
mod table;

pub use list::AdjacencyList;
pub use matrix::AdjacencyMatrix;
pub use table::EdgeTable;
