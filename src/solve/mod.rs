pub mod bfs;

use crate::cube::Puzzle;

pub use bfs::{solve, Solver};

/// Counters of a single search
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, serde::Serialize)]
pub struct SearchStats {
	/// States whose successors were generated
	pub expanded: usize,
	/// Nodes created besides the root
	pub generated: usize,
	/// The largest size the frontier reached
	pub max_frontier: usize,
}

/// A shortest path from the start to a solved state.
#[derive(Clone, Debug)]
pub struct Solution<P: Puzzle> {
	/// The moves from the start to the goal
	pub moves: Vec<P::Move>,
	/// `states[i]` is the state after `moves[i]`. The start itself is not included.
	pub states: Vec<P>,
	pub stats: SearchStats,
}

impl<P: Puzzle> Solution<P> {
	pub fn len(&self) -> usize {
		self.moves.len()
	}

	/// The start was already solved
	pub fn is_empty(&self) -> bool {
		self.moves.is_empty()
	}
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
	#[error("No solution exists, all {expanded} reachable states were explored")]
	Exhausted { expanded: usize },
	#[error("Gave up after expanding {expanded} states")]
	LimitReached { expanded: usize },
}
