use std::{error::Error, io::Write, str::FromStr};

use clap::Parser;

use pocketcube::prelude::*;

/// 2x2 Rubik's Cube solver finding the shortest sequence of clockwise quarter turns
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Use a sequence to apply on the cube (U D L R F B, with optional ' or 2)
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Set the cube from a string of 24 colors (the same format as when you output the cube via the "-c"-flag)
	#[arg(long, default_value_t = String::new())]
	set: String,

	/// Solve the cube (the output is a sequence)
	#[arg(long, default_value_t = false)]
	solve: bool,

	/// Output length of sequence (if --solve is used)
	#[arg(short, long, default_value_t = false)]
	length: bool,

	/// Output every cube on the way to the solved one (if --solve is used)
	#[arg(long, default_value_t = false)]
	steps: bool,

	/// Output the solution as JSON (if --solve is used)
	#[arg(long, default_value_t = false)]
	json: bool,

	/// Give up after expanding this many cubes
	#[arg(long)]
	max_nodes: Option<usize>,

	/// Output the cube as a string rather than colored
	#[arg(short, long, default_value_t = false)]
	char_print: bool,

	/// Scramble the cube
	#[arg(short, long, default_value_t = false)]
	random: bool,

	/// Number of random moves used by "-r". Long scrambles take a long time to solve
	#[arg(long, default_value_t = 4)]
	scramble_len: usize,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,

	/// Log the progress of the search
	#[arg(short, long, default_value_t = false)]
	verbose: bool,
}

/// The JSON document written by "--json"
#[derive(serde::Serialize)]
struct Report<'a> {
	start: FaceCube,
	moves: &'a [Move],
	states: &'a [FaceCube],
	stats: SearchStats,
}

/// Write a cube either as its string or with colors to the stdout
fn show(out: &mut dyn Write, cube: &FaceCube, char_print: bool) -> std::io::Result<()> {
	if char_print {
		writeln!(out, "{}", cube)
	} else {
		cube.print();
		Ok(())
	}
}

fn main() -> Result<(), Box<dyn Error>> {
	let args = Args::parse();

	let level = if args.verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};
	// Colors only make sense on a terminal
	let char_print = args.char_print || !args.output.is_empty();

	let mut cube = FaceCube::default();

	// Generate a random input cube
	if args.random {
		let (scrambled, moves) = FaceCube::scramble(args.scramble_len);
		log::info!("Scrambled with {}", format_moves(&moves));
		if !args.json {
			writeln!(out, "Scramble: {}", format_moves(&moves))?;
		}
		cube = scrambled;
	}

	// Parses a cube out of the cube string
	if !args.set.is_empty() {
		cube = FaceCube::from_str(&args.set)?;
	}

	// Applies turns from args
	cube = cube.apply_moves(&parse_moves(&args.sequence)?);

	// Solve the cube and only outputs the sequence
	if args.solve {
		let solver = match args.max_nodes {
			Some(limit) => Solver::with_limit(limit),
			None => Solver::new(),
		};
		let solution = solver.solve(&cube)?;

		if args.json {
			let report = Report {
				start: cube,
				moves: &solution.moves,
				states: &solution.states,
				stats: solution.stats,
			};
			serde_json::to_writer_pretty(&mut out, &report)?;
			writeln!(out)?;
			return Ok(());
		}

		write!(out, "{}", format_moves(&solution.moves))?;
		if args.length {
			writeln!(out, " (len={})", solution.len())?;
		} else {
			writeln!(out)?;
		}

		if args.steps {
			show(out.as_mut(), &cube, char_print)?;
			for (mv, state) in solution.moves.iter().zip(solution.states.iter()) {
				writeln!(out, "{}:", mv)?;
				show(out.as_mut(), state, char_print)?;
			}
		}
		return Ok(());
	}

	// Print the resulting cube (either as a string or with colors)
	show(out.as_mut(), &cube, char_print)?;

	Ok(())
}
