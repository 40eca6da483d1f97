// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


/// Hallway positions where an amphipod may stop (not above a room).
const HALLWAY_STOPS: [usize; 7] = [0, 1, 3, 5, 7, 9, 10];

/// Hallway position above room `r`.
fn room_x(room: usize) -> usize {
	2 + 2 * room
}

/// Energy per step for amphipod kind `0..4` (A through D).
fn step_cost(kind: u8) -> u64 {
	10u64.pow(kind as u32)
}


/// The burrow’s mutable state: seven usable hallway stops plus four
/// rooms of `DEPTH` slots each, shallowest first.
#[derive(Clone, PartialEq, Eq, Hash)]
struct Burrow<const DEPTH: usize> {
	hallway: [Option<u8>; 11],
	rooms: [[Option<u8>; DEPTH]; 4],
}

impl<const DEPTH: usize> Burrow<DEPTH> {
	fn is_organized(&self) -> bool {
		self.rooms.iter().enumerate()
			.all(|(r, room)| room.iter().all(|&slot| slot == Some(r as u8)))
	}

	/// Whether room `r` holds no amphipods of other kinds, so its own
	/// may move in.
	fn is_open(&self, room: usize) -> bool {
		self.rooms[room].iter().all(|&slot| slot.map_or(true, |kind| kind == room as u8))
	}

	fn hallway_is_clear(&self, from_x: usize, to_x: usize) -> bool {
		let range = if from_x < to_x { from_x + 1..=to_x } else { to_x..=from_x - 1 };
		self.hallway[range].iter().all(Option::is_none)
	}

	/// Moves any amphipod that can walk straight into its destination
	/// room, repeating until none can. Such moves are never detours, so
	/// taking them eagerly prunes nothing.
	fn flush_hallway(&mut self) -> u64 {
		let mut cost = 0;
		loop {
			let moved = HALLWAY_STOPS.into_iter().any(|x| {
				let Some(kind) = self.hallway[x] else { return false };
				let room = kind as usize;
				if !self.is_open(room) || !self.hallway_is_clear(x, room_x(room)) {
					return false
				}
				let depth = self.rooms[room].iter().rposition(Option::is_none).unwrap();
				self.hallway[x] = None;
				self.rooms[room][depth] = Some(kind);
				let dist = x.abs_diff(room_x(room)) + depth + 1;
				cost += dist as u64 * step_cost(kind);
				true
			});
			if !moved { break }
		}
		cost
	}

	/// Least total energy to organize the burrow from this state, if it
	/// can be organized at all.
	fn min_cost(&self, memo: &mut HashMap<Burrow<DEPTH>, Option<u64>>) -> Option<u64> {
		if self.is_organized() { return Some(0) }
		if let Some(&cost) = memo.get(self) { return cost }

		let mut min_cost = None;
		for (room, slots) in self.rooms.iter().enumerate() {
			// Only the shallowest amphipod can move, and only out of a
			// room still holding strangers
			if self.is_open(room) { continue }
			let Some(depth) = slots.iter().position(Option::is_some) else { continue };
			let kind = slots[depth].unwrap();
			let from_x = room_x(room);

			for x in HALLWAY_STOPS {
				if self.hallway[x].is_some() || !self.hallway_is_clear(from_x, x) { continue }
				let mut next = self.clone();
				next.rooms[room][depth] = None;
				next.hallway[x] = Some(kind);
				let dist = depth + 1 + x.abs_diff(from_x);
				let mut cost = dist as u64 * step_cost(kind);
				cost += next.flush_hallway();
				if let Some(rest) = next.min_cost(memo) {
					let total = cost + rest;
					min_cost = Some(min_cost.map_or(total, |min: u64| min.min(total)));
				}
			}
		}

		memo.insert(self.clone(), min_cost);
		min_cost
	}
}


fn input_burrow_from_str(s: &str) -> Burrow<2> {
	parsing::try_burrow_from_str(s).unwrap()
}

fn organize<const DEPTH: usize>(mut burrow: Burrow<DEPTH>) -> u64 {
	let cost = burrow.flush_hallway();
	cost + burrow.min_cost(&mut HashMap::new()).expect("Cannot organize the burrow!")
}


pub(crate) fn part1(s: &str) -> u64 {
	organize(input_burrow_from_str(s))
}


/// Unfolds the burrow by slipping two extra rows of amphipods between
/// the original two.
pub(crate) fn part2(s: &str) -> u64 {
	const INSERTED: [[u8; 4]; 2] = [[3, 2, 1, 0], [3, 1, 0, 2]];
	let folded = input_burrow_from_str(s);
	let mut rooms = [[None; 4]; 4];
	for (r, room) in folded.rooms.into_iter().enumerate() {
		rooms[r] = [room[0], Some(INSERTED[0][r]), Some(INSERTED[1][r]), room[1]];
	}
	organize(Burrow::<4> { hallway: folded.hallway, rooms })
}


mod parsing {
	use super::Burrow;

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum BurrowError {
		MissingLine { line: usize },
		MissingColumn { line: usize, column: usize },
		Token { line: usize, column: usize, found: char },
	}

	fn try_amphipod(chr: char, l: usize, c: usize) -> Result<Option<u8>, BurrowError> {
		match chr {
			'.' => Ok(None),
			'A'..='D' => Ok(Some(chr as u8 - b'A')),
			found => Err(BurrowError::Token { line: l + 1, column: c + 1, found }),
		}
	}

	pub(super) fn try_burrow_from_str(s: &str) -> Result<Burrow<2>, BurrowError> {
		use BurrowError as E;
		let mut lines = s.lines();

		// Top wall
		lines.next().ok_or(E::MissingLine { line: 1 })?;

		let hallway_line = lines.next().ok_or(E::MissingLine { line: 2 })?;
		let mut hallway = [None; 11];
		for (x, slot) in hallway.iter_mut().enumerate() {
			let chr = hallway_line.chars().nth(x + 1)
				.ok_or(E::MissingColumn { line: 2, column: x + 2 })?;
			*slot = try_amphipod(chr, 1, x + 1)?;
		}

		let mut rooms = [[None; 2]; 4];
		for depth in 0..2 {
			let line = lines.next().ok_or(E::MissingLine { line: depth + 3 })?;
			for (r, room) in rooms.iter_mut().enumerate() {
				let x = 3 + 2 * r;
				let chr = line.chars().nth(x)
					.ok_or(E::MissingColumn { line: depth + 3, column: x + 1 })?;
				room[depth] = try_amphipod(chr, depth + 2, x)?;
			}
		}

		Ok(Burrow { hallway, rooms })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		#############
		#...........#
		###B#C#B#D###
		  #A#D#C#A#
		  #########
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT), 12521);
		assert_eq!(part2(INPUT), 44169);
	}
}
