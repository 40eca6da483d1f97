// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Grid {
	levels: Vec<u8>,
	width: usize,
}

impl Grid {
	fn adjacent_positions(&self, from_pos: usize) -> impl Iterator<Item = usize> {
		let (x, y) = ((from_pos % self.width) as isize, (from_pos / self.width) as isize);
		let (w, h) = (self.width as isize, (self.levels.len() / self.width) as isize);
		[(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)]
			.into_iter()
			.filter_map(move |(dx, dy)| {
				let (x, y) = (x + dx, y + dy);
				(x >= 0 && x < w && y >= 0 && y < h).then_some((y * w + x) as usize)
			})
	}

	/// Advances one step, returning the number of flashes.
	///
	/// Energy rises by one everywhere; anything over 9 flashes, feeding
	/// its neighbors and cascading, then resets to 0. Nothing flashes
	/// twice in one step.
	fn step(&mut self) -> usize {
		let mut flashing = Vec::new();
		for (pos, level) in self.levels.iter_mut().enumerate() {
			*level += 1;
			if *level > 9 { flashing.push(pos) }
		}
		let mut flashed = vec![false; self.levels.len()];
		while let Some(pos) = flashing.pop() {
			if std::mem::replace(&mut flashed[pos], true) { continue }
			for adj_pos in self.adjacent_positions(pos) {
				self.levels[adj_pos] += 1;
				if self.levels[adj_pos] > 9 && !flashed[adj_pos] {
					flashing.push(adj_pos);
				}
			}
		}
		let mut flashes = 0;
		for (pos, level) in self.levels.iter_mut().enumerate() {
			if flashed[pos] { *level = 0; flashes += 1 }
		}
		flashes
	}
}


fn input_grid_from_str(s: &str) -> Grid {
	parsing::try_grid_from_str(s).unwrap()
}


pub(crate) fn part1(s: &str) -> usize {
	let mut grid = input_grid_from_str(s);
	(0..100).map(|_| grid.step()).sum()
}


pub(crate) fn part2(s: &str) -> usize {
	let mut grid = input_grid_from_str(s);
	let size = grid.levels.len();
	(1..).find(|_| grid.step() == size).unwrap()
}


mod parsing {
	use super::Grid;

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum GridError {
		Empty,
		Width { line: usize, found: usize, expected: usize },
		Level { line: usize, column: usize, found: char },
	}

	pub(super) fn try_grid_from_str(s: &str) -> Result<Grid, GridError> {
		use GridError as E;
		let mut width = None;
		let mut levels = Vec::new();
		for (l, line) in s.lines().enumerate() {
			match *width.get_or_insert(line.len()) {
				expected if expected != line.len() =>
					return Err(E::Width { line: l + 1, found: line.len(), expected }),
				_ => ()
			}
			for (c, chr) in line.chars().enumerate() {
				let level = chr.to_digit(10)
					.ok_or(E::Level { line: l + 1, column: c + 1, found: chr })?;
				levels.push(level as u8);
			}
		}
		match width {
			None | Some(0) => Err(E::Empty),
			Some(width) => Ok(Grid { levels, width }),
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		5483143223
		2745854711
		5264556173
		6141336146
		6357385478
		4167524645
		2176841721
		6882881134
		4846848554
		5283751526
	" };
	assert_eq!(part1(INPUT), 1656);
	assert_eq!(part2(INPUT), 195);
}
