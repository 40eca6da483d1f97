// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Cavern {
	risks: Vec<u8>,
	width: usize,
}

impl Cavern {
	fn adjacent_positions(&self, from_pos: usize) -> impl Iterator<Item = usize> {
		let (p, w, l) = (from_pos as isize, self.width as isize, self.risks.len() as isize);
		[
			(from_pos % self.width > 0).then_some(p - 1),
			(from_pos % self.width < self.width - 1).then_some(p + 1),
			Some(p - w),
			Some(p + w),
		]
			.into_iter()
			.flatten()
			.filter_map(move |p| (p >= 0 && p < l).then_some(p as usize))
	}

	/// Dijkstra from the top-left to the bottom-right position.
	fn lowest_total_risk(&self) -> u64 {
		use std::collections::BinaryHeap;

		#[derive(PartialEq, Eq)]
		struct State { total_risk: u64, pos: usize }

		impl Ord for State {
			fn cmp(&self, other: &Self) -> std::cmp::Ordering {
				other.total_risk.cmp(&self.total_risk)
					.then_with(|| self.pos.cmp(&other.pos))
			}
		}

		impl PartialOrd for State {
			fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
				Some(self.cmp(other))
			}
		}

		let target = self.risks.len() - 1;
		let mut heap = BinaryHeap::new();
		heap.push(State { total_risk: 0, pos: 0 });
		let mut settled = vec![false; self.risks.len()];

		while let Some(State { total_risk, pos }) = heap.pop() {
			if pos == target { return total_risk }
			if std::mem::replace(&mut settled[pos], true) { continue }
			for adj_pos in self.adjacent_positions(pos) {
				if settled[adj_pos] { continue }
				heap.push(State {
					total_risk: total_risk + self.risks[adj_pos] as u64,
					pos: adj_pos,
				});
			}
		}
		panic!("No path to the bottom-right position!")
	}

	/// The full map for part two: the scanned tile repeated five times in
	/// either direction, risks incremented per tile step and wrapping
	/// from 9 back around to 1.
	fn tiled(&self, times: usize) -> Self {
		let height = self.risks.len() / self.width;
		let width = self.width * times;
		let mut risks = Vec::with_capacity(self.risks.len() * times * times);
		for y in 0..height * times {
			for x in 0..width {
				let tile_risk = self.risks[y % height * self.width + x % self.width];
				let added = (y / height + x / self.width) as u8;
				risks.push((tile_risk + added - 1) % 9 + 1);
			}
		}
		Cavern { risks, width }
	}
}


fn input_cavern_from_str(s: &str) -> Cavern {
	parsing::try_cavern_from_str(s).unwrap()
}


pub(crate) fn part1(s: &str) -> u64 {
	input_cavern_from_str(s).lowest_total_risk()
}


pub(crate) fn part2(s: &str) -> u64 {
	input_cavern_from_str(s).tiled(5).lowest_total_risk()
}


mod parsing {
	use super::Cavern;

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum CavernError {
		Empty,
		Width { line: usize, found: usize, expected: usize },
		Risk { line: usize, column: usize, found: char },
	}

	pub(super) fn try_cavern_from_str(s: &str) -> Result<Cavern, CavernError> {
		use CavernError as E;
		let mut width = None;
		let mut risks = Vec::with_capacity(s.len());
		for (l, line) in s.lines().enumerate() {
			match *width.get_or_insert(line.len()) {
				expected if expected != line.len() =>
					return Err(E::Width { line: l + 1, found: line.len(), expected }),
				_ => ()
			}
			for (c, chr) in line.chars().enumerate() {
				match chr.to_digit(10) {
					Some(risk) if risk > 0 => risks.push(risk as u8),
					_ => return Err(E::Risk { line: l + 1, column: c + 1, found: chr }),
				}
			}
		}
		match width {
			None | Some(0) => Err(E::Empty),
			Some(width) => Ok(Cavern { risks, width }),
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1163751742
		1381373672
		2136511328
		3694931569
		7463417111
		1319128137
		1359912421
		3125421639
		1293138521
		2311944581
	" };
	assert_eq!(part1(INPUT), 40);
	assert_eq!(part2(INPUT), 315);
}
