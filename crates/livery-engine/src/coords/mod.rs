//! Geometry values stored on widgets. Logical points, origin top-left.

mod size;

pub use size::Size;
