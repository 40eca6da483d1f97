// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const BOARD_SIZE: usize = 5;

#[cfg_attr(test, derive(Debug))]
struct Board {
	numbers: [[u8; BOARD_SIZE]; BOARD_SIZE],
	hits: [[bool; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
	fn new(numbers: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
		Board { numbers, hits: [[false; BOARD_SIZE]; BOARD_SIZE] }
	}

	/// Marks `number` if present; returns the score if that completed
	/// any row or column (diagonals don’t count).
	fn mark(&mut self, number: u8) -> Option<u64> {
		let (row, column) = self.numbers.iter()
			.enumerate()
			.find_map(|(r, row)| row.iter()
				.position(|&n| n == number)
				.map(|c| (r, c)))?;
		self.hits[row][column] = true;
		let bingo = self.hits[row].iter().all(|&hit| hit)
			|| self.hits.iter().all(|hits| hits[column]);
		bingo.then(|| self.unmarked_sum() * number as u64)
	}

	fn unmarked_sum(&self) -> u64 {
		self.numbers.iter()
			.zip(&self.hits)
			.flat_map(|(numbers, hits)| numbers.iter().zip(hits))
			.filter(|&(_, &hit)| !hit)
			.map(|(&number, _)| number as u64)
			.sum()
	}
}


fn input_game_from_str(s: &str) -> (Vec<u8>, Vec<Board>) {
	parsing::try_game_from_str(s).unwrap()
}


pub(crate) fn part1(s: &str) -> u64 {
	let (draws, mut boards) = input_game_from_str(s);
	for draw in draws {
		for board in &mut boards {
			if let Some(score) = board.mark(draw) {
				return score
			}
		}
	}
	panic!("No board got bingo!")
}


pub(crate) fn part2(s: &str) -> u64 {
	let (draws, mut boards) = input_game_from_str(s);
	let mut last_score = None;
	for draw in draws {
		let mut done = vec![false; boards.len()];
		for (b, board) in boards.iter_mut().enumerate() {
			if let Some(score) = board.mark(draw) {
				last_score = Some(score);
				done[b] = true;
			}
		}
		let mut done = done.into_iter();
		boards.retain(|_| !done.next().unwrap());
	}
	last_score.expect("No board got bingo!")
}


mod parsing {
	use super::{Board, BOARD_SIZE};

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum GameError {
		Empty,
		Draw { column: usize, source: std::num::ParseIntError },
		BoardNumber { line: usize, source: std::num::ParseIntError },
		BoardShape { line: usize, found: usize },
	}

	pub(super) fn try_game_from_str(s: &str) -> Result<(Vec<u8>, Vec<Board>), GameError> {
		use GameError as E;

		let mut lines = s.lines().enumerate();
		let (_, draws_line) = lines.next().ok_or(E::Empty)?;
		let draws = draws_line.split(',')
			.enumerate()
			.map(|(c, draw)| draw.parse()
				.map_err(|e| E::Draw { column: c + 1, source: e }))
			.collect::<Result<Vec<_>, _>>()?;

		let mut boards = Vec::new();
		let mut rows = Vec::with_capacity(BOARD_SIZE);
		for (l, line) in lines {
			if line.is_empty() { continue }
			let row = line.split_ascii_whitespace()
				.map(|number| number.parse()
					.map_err(|e| E::BoardNumber { line: l + 1, source: e }))
				.collect::<Result<Vec<u8>, _>>()?;
			let row: [u8; BOARD_SIZE] = row.try_into()
				.map_err(|found: Vec<u8>| E::BoardShape { line: l + 1, found: found.len() })?;
			rows.push(row);
			if rows.len() == BOARD_SIZE {
				boards.push(Board::new(std::mem::take(&mut rows).try_into().unwrap()));
			}
		}
		if !rows.is_empty() {
			return Err(E::BoardShape { line: s.lines().count(), found: rows.len() })
		}
		Ok((draws, boards))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

		22 13 17 11  0
		 8  2 23  4 24
		21  9 14 16  7
		 6 10  3 18  5
		 1 12 20 15 19

		 3 15  0  2 22
		 9 18 13 17  5
		19  8  7 25 23
		20 11 10 24  4
		14 21 16 12  6

		14 21 17 24  4
		10 16 15  9 19
		18  8 23 26 20
		22 11 13  6  5
		 2  0 12  3  7
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT), 4512);
		assert_eq!(part2(INPUT), 1924);
	}
}
