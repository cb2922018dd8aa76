//! Board topology: squares, layouts, and the validated square graph.
//!
//! - `layout`: the JSON layout document as read from disk
//! - `square`: a single cell with its flags, links, and occupant
//! - `graph`: the validated arena of squares with per-color paths

pub mod graph;
pub mod layout;
pub mod square;

pub use graph::BoardGraph;
pub use layout::{BoardLayout, CellSpec, CLASSIC_BOARD};
pub use square::{BoardSquare, Coord};
