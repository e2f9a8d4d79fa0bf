use std::str::FromStr;

use rand::Rng;
use strum::EnumCount;

use super::Face;

/// A clockwise quarter turn of one face, seen from outside the cube.
/// There is no inverse symbol: three turns undo one.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Debug)]
#[derive(strum::EnumIter, strum::EnumCount, strum::EnumString, strum::Display)]
#[derive(serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum Move {
	U,
	D,
	L,
	R,
	F,
	B,
}

/// All moves in the order they are expanded by the search
pub const ALL_MOVES: [Move; Move::COUNT] = [Move::U, Move::D, Move::L, Move::R, Move::F, Move::B];

impl Move {
	/// The face turned by the move
	pub const fn face(self) -> Face {
		match self {
			Move::U => Face::Up,
			Move::D => Face::Down,
			Move::L => Face::Left,
			Move::R => Face::Right,
			Move::F => Face::Front,
			Move::B => Face::Back,
		}
	}
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseMoveError {
	#[error("\"{0}\" is not a move (expected U, D, L, R, F or B)")]
	Side(String),
	#[error("\"{0}\" has an invalid suffix (expected nothing, ' or 2)")]
	Suffix(String),
}

/// Parse a single token. `X2` and `X'` are spelled out as two and three
/// quarter turns of `X`.
fn parse_token(token: &str) -> Result<Vec<Move>, ParseMoveError> {
	let split = token.chars().next().map_or(0, char::len_utf8);
	let (side, suffix) = token.split_at(split);
	let side = Move::from_str(side).map_err(|_| ParseMoveError::Side(token.to_string()))?;

	let count = match suffix {
		"" => 1,
		"2" => 2,
		"'" => 3,
		_ => return Err(ParseMoveError::Suffix(token.to_string())),
	};

	Ok(vec![side; count])
}

/// Parse a whitespace separated sequence of moves.
pub fn parse_moves<T>(string: T) -> Result<Vec<Move>, ParseMoveError>
where
	T: AsRef<str>,
{
	let mut out = Vec::new();
	for token in string.as_ref().split_whitespace() {
		out.extend(parse_token(token)?);
	}
	Ok(out)
}

/// Write the moves separated by a single space.
pub fn format_moves(moves: &[Move]) -> String {
	moves.iter().map(|m| m.to_string()).collect::<Vec<_>>().join(" ")
}

/// Generate `len` uniformly random moves.
pub fn random_sequence(len: usize) -> Vec<Move> {
	let mut rng = rand::thread_rng();
	(0..len).map(|_| ALL_MOVES[rng.gen_range(0..Move::COUNT)]).collect()
}
