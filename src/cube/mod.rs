pub mod facecube;
pub mod turn;

use std::hash::Hash;

/// The dimension of the cube
pub const CUBE_DIM: usize = 2;

/// The number of facelets per side
pub const CUBE_AREA: usize = CUBE_DIM * CUBE_DIM;

/// The number of sides of a cube
pub const NUM_SIDES: usize = 6;

/// The number of facelets of the whole cube
pub const NUM_FACELETS: usize = CUBE_AREA * NUM_SIDES;

/// The fixed face identifiers. The discriminant is the position of the
/// face inside the facelet array.
#[derive(
	Eq, PartialEq, PartialOrd, Ord, Hash, Copy, Clone, Debug, strum::EnumCount, strum::EnumIter,
	strum::FromRepr, strum::Display,
)]
#[repr(u8)]
pub enum Face {
	// It must only contain unit fields!
	Up,
	Down,
	Back,
	Front,
	Left,
	Right,
}

/// A sticker color. Colors carry no meaning besides being compared.
#[derive(
	Eq, PartialEq, PartialOrd, Ord, Hash, Copy, Clone, Debug, strum::EnumCount, strum::EnumIter,
	strum::FromRepr,
)]
#[repr(u8)]
pub enum Color {
	White,
	Yellow,
	Green,
	Blue,
	Red,
	Orange,
}

impl Color {
	/// The color a face has on the solved cube.
	pub const fn of_face(face: Face) -> Self {
		match face {
			Face::Up => Color::White,
			Face::Down => Color::Yellow,
			Face::Back => Color::Green,
			Face::Front => Color::Blue,
			Face::Left => Color::Red,
			Face::Right => Color::Orange,
		}
	}

	/// The character used for the color in the string form of a cube.
	pub const fn to_char(self) -> char {
		match self {
			Color::White => 'w',
			Color::Yellow => 'y',
			Color::Green => 'g',
			Color::Blue => 'b',
			Color::Red => 'r',
			Color::Orange => 'o',
		}
	}

	/// Parse the color from its character. Upper case is accepted as well.
	pub fn from_char(c: char) -> Option<Self> {
		let res = match c.to_ascii_lowercase() {
			'w' => Color::White,
			'y' => Color::Yellow,
			'g' => Color::Green,
			'b' => Color::Blue,
			'r' => Color::Red,
			'o' => Color::Orange,
			_ => return None,
		};
		Some(res)
	}

	/// Returns the ANSI-colorcode for the color.
	pub const fn ansi(self) -> &'static str {
		match self {
			Color::White => "\x1b[00m",
			Color::Yellow => "\x1b[93m",
			Color::Green => "\x1b[32m",
			Color::Blue => "\x1b[34m",
			Color::Red => "\x1b[31m",
			Color::Orange => "\x1b[33m",
		}
	}
}

impl std::fmt::Display for Color {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.to_char())
	}
}

/// A puzzle whose state graph can be searched.
///
/// Every implementation has to be a pure state model: `apply` never mutates
/// `self` and equal states must produce equal fingerprints.
pub trait Puzzle: Clone {
	type Move: Copy + std::fmt::Debug + 'static;
	type Key: Eq + Hash + Clone;

	/// All moves, in the order the search expands them.
	fn moves() -> &'static [Self::Move];

	fn is_solved(&self) -> bool;

	/// A canonical key for membership tests.
	fn fingerprint(&self) -> Self::Key;

	/// Return the state after applying the move.
	fn apply(&self, mv: Self::Move) -> Self;
}

#[cfg(test)]
mod tests {
	use super::*;
	use strum::IntoEnumIterator;

	#[test]
	/// Every face gets its own color and the characters are unique
	fn face_colors_are_distinct() {
		let mut seen = Vec::new();
		for face in Face::iter() {
			let col = Color::of_face(face);
			assert!(!seen.contains(&col), "{} shares its color", face);
			seen.push(col);
		}

		for col in Color::iter() {
			assert_eq!(Color::from_char(col.to_char()), Some(col));
			assert_eq!(Color::from_char(col.to_char().to_ascii_uppercase()), Some(col));
		}
		assert_eq!(Color::from_char('x'), None);
	}

	/// The moves of a generic puzzle can be walked without a concrete type
	fn move_count<P: Puzzle>() -> usize {
		P::moves().iter().copied().count()
	}

	#[test]
	fn generic_moves_are_static() {
		assert_eq!(move_count::<facecube::FaceCube>(), NUM_SIDES);
	}
}
