// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq)]
enum Cell {
	Empty,
	East,
	South,
}

struct Seafloor {
	cells: Vec<Cell>,
	width: usize,
}

impl Seafloor {
	fn height(&self) -> usize {
		self.cells.len() / self.width
	}

	/// Moves first the east-facing herd, then the south-facing one, each
	/// herd all at once. Returns the number of sea cucumbers that moved.
	fn step(&mut self) -> usize {
		let (width, height) = (self.width, self.height());
		let mut moved = 0;

		for (herd, d) in [(Cell::East, [1, 0]), (Cell::South, [0, 1])] {
			let mut cells = self.cells.clone();
			for y in 0..height {
				for x in 0..width {
					if self.cells[y * width + x] != herd { continue }
					let to = (y + d[1]) % height * width + (x + d[0]) % width;
					if self.cells[to] == Cell::Empty {
						cells[y * width + x] = Cell::Empty;
						cells[to] = herd;
						moved += 1;
					}
				}
			}
			self.cells = cells;
		}

		moved
	}
}


fn input_seafloor_from_str(s: &str) -> Seafloor {
	parsing::try_seafloor_from_str(s).unwrap()
}


/// The first step on which no sea cucumber moves.
pub(crate) fn part1(s: &str) -> usize {
	let mut seafloor = input_seafloor_from_str(s);
	(1..).find(|_| seafloor.step() == 0).unwrap()
}


pub(crate) fn part2(_: &str) -> &'static str {
	"Merry Christmas!"
}


mod parsing {
	use super::{Cell, Seafloor};

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum SeafloorError {
		Cell { line: usize, column: usize, found: char },
		Width { line: usize, found: usize, expected: usize },
		Empty,
	}

	pub(super) fn try_seafloor_from_str(s: &str) -> Result<Seafloor, SeafloorError> {
		use SeafloorError as E;
		let (mut width, mut cells) = (None, Vec::new());
		for (l, line) in s.lines().enumerate() {
			match *width.get_or_insert(line.len()) {
				expected if expected != line.len() =>
					return Err(E::Width { line: l + 1, found: line.len(), expected }),
				_ => ()
			}
			for (c, chr) in line.chars().enumerate() {
				cells.push(match chr {
					'.' => Cell::Empty,
					'>' => Cell::East,
					'v' => Cell::South,
					found => return Err(E::Cell { line: l + 1, column: c + 1, found }),
				});
			}
		}
		match width {
			None | Some(0) => Err(E::Empty),
			Some(width) => Ok(Seafloor { cells, width }),
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		v...>>.vv>
		.>v.>>.v..
		>v>>..>v..
		>>v>v>.>.v
		v>v.vv.v..
		>.>>..v...
		.vv..>.>v.
		v.v..>>v.v
		....v..v.>
	" };
	assert_eq!(part1(INPUT), 58);
	assert_eq!(part2(INPUT), "Merry Christmas!");
}
