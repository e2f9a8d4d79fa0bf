//! This is a simple example how to scramble and solve the cube.
//!
//! ```
//! use pocketcube::prelude::*;
//!
//! let start = FaceCube::new().apply_moves(&parse_moves("U").unwrap());
//! let solution = solve(&start).unwrap();
//!
//! assert_eq!(format_moves(&solution.moves), "U U U");
//! assert!(start.apply_moves(&solution.moves).is_solved());
//! ```
//!
//! Only clockwise quarter turns exist, so `U'` is written (and solved) as `U U U`.

pub mod cube;
pub mod solve;

pub mod prelude {
	pub use crate::cube::{facecube::*, turn::*, *};
	pub use crate::solve::{solve, SearchStats, Solution, SolveError, Solver};
}
