// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


fn input_positions_from_str(s: &str) -> [u8; 2] {
	parsing::try_positions_from_str(s).unwrap()
}

fn advance(pos: u8, steps: u64) -> u8 {
	((pos as u64 + steps - 1) % 10 + 1) as u8
}


/// Plays with the deterministic die until one player reaches 1000,
/// returning the losing score times the number of rolls.
pub(crate) fn part1(s: &str) -> u64 {
	let mut positions = input_positions_from_str(s);
	let mut scores = [0u64; 2];
	let mut rolls = 0u64;
	for player in (0..2).cycle() {
		// Three consecutive rolls of a die cycling 1 through 100
		let steps = (0..3)
			.map(|_| { rolls += 1; (rolls - 1) % 100 + 1 })
			.sum();
		positions[player] = advance(positions[player], steps);
		scores[player] += positions[player] as u64;
		if scores[player] >= 1000 {
			return scores[1 - player] * rolls
		}
	}
	unreachable!()
}


/// Number of universes in which the more frequently winning player wins
/// when playing with the three-roll Dirac die to 21.
pub(crate) fn part2(s: &str) -> u64 {
	// How many of the 27 three-roll outcomes sum to each total
	const ROLL_COUNTS: [(u64, u64); 7] =
		[(3, 1), (4, 3), (5, 6), (6, 7), (7, 6), (8, 3), (9, 1)];

	let positions = input_positions_from_str(s);
	let mut universes = HashMap::from([((positions, [0u8; 2]), 1u64)]);
	let mut wins = [0u64; 2];
	for player in (0..2).cycle() {
		if universes.is_empty() { break }
		let mut next = HashMap::with_capacity(universes.len() * 7);
		for ((positions, scores), count) in universes {
			for (steps, frequency) in ROLL_COUNTS {
				let mut positions = positions;
				let mut scores = scores;
				positions[player] = advance(positions[player], steps);
				scores[player] += positions[player];
				if scores[player] >= 21 {
					wins[player] += count * frequency;
				} else {
					*next.entry((positions, scores)).or_insert(0) += count * frequency;
				}
			}
		}
		universes = next;
	}
	wins.into_iter().max().unwrap()
}


mod parsing {
	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum PositionsError<'a> {
		Format { line: usize, found: &'a str },
		Position { line: usize, source: std::num::ParseIntError },
		Range { line: usize, found: u8 },
		Players { found: usize },
	}

	pub(super) fn try_positions_from_str(s: &str) -> Result<[u8; 2], PositionsError> {
		use PositionsError as E;
		let positions = s.lines()
			.enumerate()
			.map(|(l, line)| {
				let position = line
					.strip_prefix("Player ")
					.and_then(|rest| rest.split_once(" starting position: "))
					.ok_or(E::Format { line: l + 1, found: line })?
					.1;
				let position: u8 = position.parse()
					.map_err(|e| E::Position { line: l + 1, source: e })?;
				if !(1..=10).contains(&position) {
					return Err(E::Range { line: l + 1, found: position })
				}
				Ok(position)
			})
			.collect::<Result<Vec<_>, _>>()?;
		positions.try_into()
			.map_err(|found: Vec<u8>| E::Players { found: found.len() })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Player 1 starting position: 4
		Player 2 starting position: 8
	" };
	assert_eq!(part1(INPUT), 739785);
	assert_eq!(part2(INPUT), 444356092776315);
}
