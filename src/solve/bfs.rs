use std::collections::{HashSet, VecDeque};

use crate::cube::{facecube::FaceCube, Puzzle};

use super::{SearchStats, Solution, SolveError};

/// Log the progress every time this many states were expanded
const PROGRESS_INTERVAL: usize = 100_000;

/// A node of the search tree. Nodes live in an arena and point to their
/// parent by index, together with the move that led from the parent here.
struct Node<P: Puzzle> {
	state: P,
	key: P::Key,
	link: Option<(usize, P::Move)>,
}

/// FIFO of node indices which also knows the keys it currently holds
struct QueueFrontier<P: Puzzle> {
	queue: VecDeque<usize>,
	members: HashSet<P::Key>,
}

impl<P: Puzzle> QueueFrontier<P> {
	fn new() -> Self {
		Self {
			queue: VecDeque::new(),
			members: HashSet::new(),
		}
	}

	fn push(&mut self, idx: usize, key: P::Key) {
		self.queue.push_back(idx);
		self.members.insert(key);
	}

	/// Remove the oldest node and forget its key
	fn pop(&mut self, nodes: &[Node<P>]) -> Option<usize> {
		let idx = self.queue.pop_front()?;
		self.members.remove(&nodes[idx].key);
		Some(idx)
	}

	fn contains(&self, key: &P::Key) -> bool {
		self.members.contains(key)
	}

	fn len(&self) -> usize {
		self.queue.len()
	}
}

/// Walk from the goal back to the root and return the moves and states in
/// start-to-goal order.
fn reconstruct<P: Puzzle>(nodes: &[Node<P>], goal: usize) -> (Vec<P::Move>, Vec<P>) {
	let mut moves = vec![];
	let mut states = vec![];

	let mut current = goal;
	while let Some((parent, action)) = nodes[current].link {
		moves.push(action);
		states.push(nodes[current].state.clone());
		current = parent;
	}

	moves.reverse();
	states.reverse();
	(moves, states)
}

/// Breadth first search for the closest solved state.
///
/// Since every move costs the same, the first solved state taken from the
/// frontier is one with the fewest moves.
#[derive(Clone, Copy, Default, Debug)]
pub struct Solver {
	limit: Option<usize>,
}

impl Solver {
	/// A solver that runs until it finds a solution or runs out of states
	pub fn new() -> Self {
		Self::default()
	}

	/// A solver that gives up after `limit` expansions
	pub fn with_limit(limit: usize) -> Self {
		Self { limit: Some(limit) }
	}

	pub fn solve<P: Puzzle>(&self, start: &P) -> Result<Solution<P>, SolveError> {
		let mut nodes: Vec<Node<P>> = vec![Node {
			state: start.clone(),
			key: start.fingerprint(),
			link: None,
		}];
		let mut frontier = QueueFrontier::<P>::new();
		frontier.push(0, nodes[0].key.clone());

		let mut explored = HashSet::<P::Key>::new();
		let mut stats = SearchStats {
			max_frontier: 1,
			..SearchStats::default()
		};

		while let Some(idx) = frontier.pop(&nodes) {
			if nodes[idx].state.is_solved() {
				let (moves, states) = reconstruct(&nodes, idx);
				log::info!(
					"Found a solution of length {} after expanding {} states",
					moves.len(),
					stats.expanded
				);
				return Ok(Solution { moves, states, stats });
			}

			if let Some(limit) = self.limit {
				if limit <= stats.expanded {
					log::info!("Search limit of {} expansions reached", limit);
					return Err(SolveError::LimitReached {
						expanded: stats.expanded,
					});
				}
			}

			explored.insert(nodes[idx].key.clone());
			stats.expanded += 1;
			if stats.expanded % PROGRESS_INTERVAL == 0 {
				log::debug!(
					"Expanded {} states, {} in the frontier",
					stats.expanded,
					frontier.len()
				);
			}

			for mv in P::moves() {
				let next = nodes[idx].state.apply(*mv);
				let key = next.fingerprint();

				if explored.contains(&key) || frontier.contains(&key) {
					continue;
				}

				nodes.push(Node {
					state: next,
					key: key.clone(),
					link: Some((idx, *mv)),
				});
				frontier.push(nodes.len() - 1, key);
				stats.generated += 1;
			}
			stats.max_frontier = stats.max_frontier.max(frontier.len());
		}

		log::info!("No solution, explored all {} reachable states", stats.expanded);
		Err(SolveError::Exhausted {
			expanded: stats.expanded,
		})
	}
}

/// Solve the cube without any limit on the search.
pub fn solve(cube: &FaceCube) -> Result<Solution<FaceCube>, SolveError> {
	Solver::new().solve(cube)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cube::turn::*;
	use std::error::Error;
	use strum::IntoEnumIterator;

	/// Positions on a ring of 5 with a goal that may be out of reach
	#[derive(Clone, Debug, PartialEq)]
	struct Ring {
		pos: u8,
		goal: u8,
	}

	#[derive(Clone, Copy, Debug, PartialEq)]
	enum Step {
		Forward,
		Jump,
		Back,
	}

	impl Puzzle for Ring {
		type Move = Step;
		type Key = u8;

		fn moves() -> &'static [Step] {
			&[Step::Forward, Step::Jump, Step::Back]
		}

		fn is_solved(&self) -> bool {
			self.pos == self.goal
		}

		fn fingerprint(&self) -> u8 {
			self.pos
		}

		fn apply(&self, mv: Step) -> Self {
			let pos = match mv {
				Step::Forward => (self.pos + 1) % 5,
				Step::Jump => (self.pos + 2) % 5,
				Step::Back => (self.pos + 4) % 5,
			};
			Self { pos, goal: self.goal }
		}
	}

	/// Replaying the solution has to give a solved cube and the stored states
	fn check_replay(start: &FaceCube, solution: &Solution<FaceCube>) {
		assert_eq!(solution.moves.len(), solution.states.len());

		let mut cube = *start;
		for (mv, state) in solution.moves.iter().zip(solution.states.iter()) {
			cube = cube.apply(*mv);
			assert_eq!(cube, *state);
		}
		assert!(cube.is_solved());
	}

	#[test]
	fn solved_start_needs_no_moves() -> Result<(), Box<dyn Error>> {
		let start = FaceCube::new();
		let solution = solve(&start)?;

		assert!(solution.is_empty());
		assert!(solution.states.is_empty());
		assert_eq!(solution.stats.expanded, 0);
		assert_eq!(solution.stats.generated, 0);
		Ok(())
	}

	#[test]
	/// A single up turn is only undone by three more of them
	fn single_up_turn() -> Result<(), Box<dyn Error>> {
		let start = FaceCube::new().apply(Move::U);
		let solution = solve(&start)?;

		assert_eq!(solution.moves, vec![Move::U, Move::U, Move::U]);
		check_replay(&start, &solution);
		Ok(())
	}

	#[test]
	/// Turning the opposite face back also solves, but up is expanded first
	fn ties_follow_expansion_order() -> Result<(), Box<dyn Error>> {
		let start = FaceCube::new().apply(Move::U);
		assert!(start.apply_moves(&[Move::D, Move::D, Move::D]).is_solved());

		let solution = solve(&start)?;
		assert_eq!(solution.moves, vec![Move::U, Move::U, Move::U]);
		Ok(())
	}

	#[test]
	/// d quarter turns of one face are 4 - d moves away from solved
	fn single_face_distances() -> Result<(), Box<dyn Error>> {
		for mv in Move::iter() {
			for d in 1..=3 {
				let start = FaceCube::new().apply_moves(&vec![mv; d]);
				let solution = solve(&start)?;

				assert_eq!(solution.len(), 4 - d, "{} turned {} times", mv, d);
				check_replay(&start, &solution);
			}
		}
		Ok(())
	}

	#[test]
	/// No sequence shorter than the found one solves the cube
	fn two_move_scramble_is_minimal() -> Result<(), Box<dyn Error>> {
		let start = FaceCube::new().apply_moves(&parse_moves("U R")?);
		let solution = solve(&start)?;

		assert!(solution.len() <= 6);
		check_replay(&start, &solution);

		for len in 0..solution.len() {
			let total = ALL_MOVES.len().pow(len as u32);
			for mut code in 0..total {
				let mut cube = start;
				for _ in 0..len {
					cube = cube.apply(ALL_MOVES[code % ALL_MOVES.len()]);
					code /= ALL_MOVES.len();
				}
				assert!(!cube.is_solved(), "Found a solution of length {}", len);
			}
		}
		Ok(())
	}

	#[test]
	fn limit_stops_the_search() -> Result<(), Box<dyn Error>> {
		let start = FaceCube::new().apply_moves(&parse_moves("U R")?);
		let res = Solver::with_limit(5).solve(&start);
		assert_eq!(res.err(), Some(SolveError::LimitReached { expanded: 5 }));

		// A solved start is found before the limit is looked at
		let solution = Solver::with_limit(0).solve(&FaceCube::new())?;
		assert!(solution.is_empty());

		let solution = Solver::with_limit(1000).solve(&FaceCube::new().apply(Move::F))?;
		assert_eq!(solution.moves, vec![Move::F, Move::F, Move::F]);
		Ok(())
	}

	#[test]
	/// Every reachable state is expanded once before giving up
	fn unreachable_goal_exhausts() {
		let start = Ring { pos: 0, goal: 7 };
		let res = Solver::new().solve(&start);
		assert_eq!(res.err(), Some(SolveError::Exhausted { expanded: 5 }));
	}

	#[test]
	/// States already in the frontier are not queued twice
	fn duplicates_are_suppressed() -> Result<(), Box<dyn Error>> {
		let start = Ring { pos: 0, goal: 3 };
		let solution = Solver::new().solve(&start)?;

		assert_eq!(solution.moves, vec![Step::Forward, Step::Jump]);
		assert_eq!(
			solution.states,
			vec![Ring { pos: 1, goal: 3 }, Ring { pos: 3, goal: 3 }]
		);
		assert_eq!(solution.stats.generated, 4);
		assert_eq!(solution.stats.expanded, 4);
		assert_eq!(solution.stats.max_frontier, 3);
		Ok(())
	}
}
