use std::str::FromStr;

use crate::cube::{turn::*, *};

use const_for::const_for;

/// n[i] = s[ t[i] ] where t is the transformation, s the old and n the new state
pub type Transform = [u8; NUM_FACELETS];

/// The colors of a single face. Indexed by `[row][col]`.
pub type Grid = [[Color; CUBE_DIM]; CUBE_DIM];

/// The faces in the order they are stored
const SIDES: [Face; NUM_SIDES] = [
	Face::Up,
	Face::Down,
	Face::Back,
	Face::Front,
	Face::Left,
	Face::Right,
];

/// A 2x2 cube stored facelet by facelet.
///
/// The facelet `(face, row, col)` lives at `face * CUBE_AREA + row * CUBE_DIM + col`.
/// Every face is looked at from outside. The four side faces have row 0
/// next to the up face. The up face has row 0 next to the back face, the down
/// face has row 0 next to the front face. Column 0 is the left column of
/// what you see.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct FaceCube {
	pub data: [Color; NUM_FACELETS],
}

/// Canonical key of a cube, one byte per facelet in storage order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Fingerprint([u8; NUM_FACELETS]);

impl std::fmt::Display for Fingerprint {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for b in self.0 {
			match Color::from_repr(b) {
				Some(c) => write!(f, "{}", c)?,
				None => write!(f, "?")?,
			}
		}
		Ok(())
	}
}

const fn solved_data() -> [Color; NUM_FACELETS] {
	let mut out = [Color::White; NUM_FACELETS];

	const_for!(i in 0..NUM_FACELETS => {
		out[i] = Color::of_face(SIDES[i / CUBE_AREA]);
	});

	out
}

const SOLVED: [Color; NUM_FACELETS] = solved_data();

impl Default for FaceCube {
	/// Creates a *solved* cube!
	fn default() -> Self {
		Self { data: SOLVED }
	}
}

/// Chain 2 transformations (t1 and t2) to one transformation.
/// It returns a new transformation, in which first t1 is applied, then t2.
pub const fn chain_transform(t1: Transform, t2: Transform) -> Transform {
	let mut out = [0; NUM_FACELETS];

	const_for!(i in 0..NUM_FACELETS => {
		out[i] = t1[ t2[i] as usize ];
	});

	out
}

pub const fn is_base(t1: Transform) -> bool {
	const_for!(i in 0..NUM_FACELETS => {
		if t1[i] != i as u8 { return false; }
	});

	true
}

// ==== TRANSFORMATION TABLES =====

/*
 * Each face is stored as: row0col0, row0col1, row1col0, row1col1.
 * The own face of a turn always reads 2, 0, 3, 1 (shifted to its block),
 * which is the clockwise rotation. The remaining entries move one strip from
 * each neighbour to the next one.
 */

// Neutral Transformation: Does nothing
pub const T_BASE: Transform = [
	0, 1, 2, 3, // up
	4, 5, 6, 7, // down
	8, 9, 10, 11, // back
	12, 13, 14, 15, // front
	16, 17, 18, 19, // left
	20, 21, 22, 23, // right
];

const T_UP: Transform = [
	2, 0, 3, 1, // up (totally changed)
	4, 5, 6, 7, // down (unchanged)
	16, 17, 10, 11, // back gets the top row of left
	20, 21, 14, 15, // front gets the top row of right
	12, 13, 18, 19, // left gets the top row of front
	8, 9, 22, 23, // right gets the top row of back
];

const T_DOWN: Transform = [
	0, 1, 2, 3, // up
	6, 4, 7, 5, // down (totally changed)
	8, 9, 22, 23, // back gets the bottom row of right
	12, 13, 18, 19, // front gets the bottom row of left
	16, 17, 10, 11, // left gets the bottom row of back
	20, 21, 14, 15, // right gets the bottom row of front
];

const T_LEFT: Transform = [
	11, 1, 9, 3, // up gets the (reversed) right column of back
	12, 5, 14, 7, // down gets the left column of front
	8, 6, 10, 4, // back gets the (reversed) left column of down
	0, 13, 2, 15, // front gets the left column of up
	18, 16, 19, 17, // left (totally changed)
	20, 21, 22, 23, // right
];

const T_RIGHT: Transform = [
	0, 13, 2, 15, // up gets the right column of front
	4, 10, 6, 8, // down gets the (reversed) left column of back
	3, 9, 1, 11, // back gets the (reversed) right column of up
	12, 5, 14, 7, // front gets the right column of down
	16, 17, 18, 19, // left
	22, 20, 23, 21, // right (totally changed)
];

const T_FRONT: Transform = [
	0, 1, 19, 17, // up gets the right column of left
	22, 20, 6, 7, // down gets the left column of right
	8, 9, 10, 11, // back
	14, 12, 15, 13, // front (totally changed)
	16, 4, 18, 5, // left gets the near row of down
	2, 21, 3, 23, // right gets the near row of up
];

const T_BACK: Transform = [
	21, 23, 2, 3, // up gets the right column of right
	4, 5, 16, 18, // down gets the left column of left
	10, 8, 11, 9, // back (totally changed)
	12, 13, 14, 15, // front
	1, 17, 0, 19, // left gets the far row of up
	20, 7, 22, 6, // right gets the far row of down
];

/// The transformation of every move, indexed by `move as usize`
pub const TRANSFORM: [Transform; NUM_SIDES] = [T_UP, T_DOWN, T_LEFT, T_RIGHT, T_FRONT, T_BACK];

/// Collapse a sequence of moves into one transformation.
pub fn sequence_transform(moves: &[Move]) -> Transform {
	moves
		.iter()
		.fold(T_BASE, |out, mv| chain_transform(out, TRANSFORM[*mv as usize]))
}

// =========

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseCubeError {
	#[error("The given string has {0} facelets, expected {}", NUM_FACELETS)]
	Length(usize),
	#[error("The facelet at position {0} has the invalid color '{1}'")]
	Color(usize, char),
}

impl FromStr for FaceCube {
	type Err = ParseCubeError;

	/// Parse 24 color characters in storage order. Whitespace is ignored,
	/// so the faces may be separated.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
		if chars.len() != NUM_FACELETS {
			return Err(ParseCubeError::Length(chars.len()));
		}

		let mut cube = FaceCube::new();
		for (i, c) in chars.into_iter().enumerate() {
			cube.data[i] = Color::from_char(c).ok_or(ParseCubeError::Color(i, c))?;
		}

		Ok(cube)
	}
}

impl From<FaceCube> for String {
	fn from(val: FaceCube) -> Self {
		val.data.iter().map(|c| c.to_char()).collect()
	}
}

impl TryFrom<String> for FaceCube {
	type Error = ParseCubeError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::from_str(&value)
	}
}

impl std::fmt::Display for FaceCube {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for c in self.data {
			write!(f, "{}", c)?;
		}
		Ok(())
	}
}

/// Return index of (x/y) at the given side
const fn help(side: Face, x: usize, y: usize) -> usize {
	side as usize * CUBE_AREA + x + y * CUBE_DIM
}

impl FaceCube {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a cube from the grid of every face.
	pub fn from_faces<F>(mut grid: F) -> Self
	where
		F: FnMut(Face) -> Grid,
	{
		let mut cube = Self::new();
		for side in SIDES {
			let g = grid(side);
			for (y, row) in g.iter().enumerate() {
				for (x, col) in row.iter().enumerate() {
					cube.data[help(side, x, y)] = *col;
				}
			}
		}
		cube
	}

	/// The grid of the given face
	pub fn face(&self, side: Face) -> Grid {
		let mut out = [[Color::White; CUBE_DIM]; CUBE_DIM];
		for (y, row) in out.iter_mut().enumerate() {
			for (x, col) in row.iter_mut().enumerate() {
				*col = self.data[help(side, x, y)];
			}
		}
		out
	}

	/// Apply the transformation and return the resulting cube
	pub fn apply_transform(&self, trans: &Transform) -> Self {
		let mut out = *self;
		for i in 0..NUM_FACELETS {
			out.data[i] = self.data[trans[i] as usize];
		}
		out
	}

	/// Turn the cube with the given move. `self` is left untouched.
	pub fn apply(&self, mv: Move) -> Self {
		// Get the transformation matrix (which is easy because it's carefully sorted)
		self.apply_transform(&TRANSFORM[mv as usize])
	}

	/// Apply the given sequence of moves.
	pub fn apply_moves(&self, moves: &[Move]) -> Self {
		self.apply_transform(&sequence_transform(moves))
	}

	/// Every face shows a single color. The colors of different faces are
	/// not compared to each other.
	pub fn is_solved(&self) -> bool {
		self.data
			.chunks_exact(CUBE_AREA)
			.all(|side| side.iter().all(|c| *c == side[0]))
	}

	pub fn fingerprint(&self) -> Fingerprint {
		Fingerprint(self.data.map(|c| c as u8))
	}

	/// A solved cube turned by `len` random moves, together with these moves
	pub fn scramble(len: usize) -> (Self, Vec<Move>) {
		let moves = random_sequence(len);
		(Self::new().apply_moves(&moves), moves)
	}

	/// Print the cube in the *standard output* with ANSI-colors
	pub fn print(&self) {
		// Generate a space depending on the size of CUBE_DIM
		let space: String = " ".repeat(2 * CUBE_DIM + 1);

		// Print Up-side
		for j in 0..CUBE_DIM {
			print!("{}", space);
			for i in 0..CUBE_DIM {
				print!("{}▀ ", self.data[help(Face::Up, i, j)].ansi());
			}
			println!();
		}

		// Print Left, Front, Right, Back
		const ROW: [Face; 4] = [Face::Left, Face::Front, Face::Right, Face::Back];
		for j in 0..CUBE_DIM {
			for s in ROW {
				for i in 0..CUBE_DIM {
					print!("{}▄ ", self.data[help(s, i, j)].ansi());
				}
				print!(" ");
			}
			println!();
		}
		println!();

		// Print Down-side
		for j in 0..CUBE_DIM {
			print!("{}", space);
			for i in 0..CUBE_DIM {
				print!("{}▀ ", self.data[help(Face::Down, i, j)].ansi());
			}
			println!();
		}
		// Reset ansii color
		println!("\x1b[00m");
	}
}

impl Puzzle for FaceCube {
	type Move = Move;
	type Key = Fingerprint;

	fn moves() -> &'static [Move] {
		&ALL_MOVES
	}

	fn is_solved(&self) -> bool {
		FaceCube::is_solved(self)
	}

	fn fingerprint(&self) -> Fingerprint {
		FaceCube::fingerprint(self)
	}

	fn apply(&self, mv: Move) -> Self {
		FaceCube::apply(self, mv)
	}
}

// ===== Tests =====
