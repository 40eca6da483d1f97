// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Heightmap {
	heights: Vec<u8>,
	width: usize,
}

impl Heightmap {
	fn adjacent_positions(&self, from_pos: usize) -> impl Iterator<Item = usize> + '_ {
		let (p, w, l) = (from_pos as isize, self.width as isize, self.heights.len() as isize);
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

	fn low_points(&self) -> impl Iterator<Item = usize> + '_ {
		(0..self.heights.len()).filter(|&pos| self.adjacent_positions(pos)
			.all(|adj_pos| self.heights[adj_pos] > self.heights[pos]))
	}

	/// Flood-fills the basin draining into `low_pos`, bounded by
	/// height-9 positions, returning its size.
	fn basin_size(&self, low_pos: usize) -> usize {
		use std::collections::{HashSet, VecDeque};
		let mut queue = VecDeque::from([low_pos]);
		let mut seen = HashSet::new();
		while let Some(pos) = queue.pop_front() {
			if !seen.insert(pos) { continue }
			queue.extend(self.adjacent_positions(pos)
				.filter(|&adj_pos| self.heights[adj_pos] < 9 && !seen.contains(&adj_pos)));
		}
		seen.len()
	}
}


fn input_heightmap_from_str(s: &str) -> Heightmap {
	parsing::try_heightmap_from_str(s).unwrap()
}


pub(crate) fn part1(s: &str) -> u64 {
	let heightmap = input_heightmap_from_str(s);
	heightmap.low_points()
		.map(|pos| heightmap.heights[pos] as u64 + 1)
		.sum()
}


pub(crate) fn part2(s: &str) -> usize {
	let heightmap = input_heightmap_from_str(s);
	let mut basin_sizes = heightmap.low_points()
		.map(|pos| heightmap.basin_size(pos))
		.collect::<Vec<_>>();
	basin_sizes.sort_unstable();
	basin_sizes.into_iter().rev().take(3).product()
}


mod parsing {
	use super::Heightmap;

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum HeightmapError {
		Empty,
		Width { line: usize, found: usize, expected: usize },
		Height { line: usize, column: usize, found: char },
	}

	pub(super) fn try_heightmap_from_str(s: &str) -> Result<Heightmap, HeightmapError> {
		use HeightmapError as E;
		let mut width = None;
		let mut heights = Vec::with_capacity(s.len());
		for (l, line) in s.lines().enumerate() {
			match *width.get_or_insert(line.len()) {
				expected if expected != line.len() =>
					return Err(E::Width { line: l + 1, found: line.len(), expected }),
				_ => ()
			}
			for (c, chr) in line.chars().enumerate() {
				let height = chr.to_digit(10)
					.ok_or(E::Height { line: l + 1, column: c + 1, found: chr })?;
				heights.push(height as u8);
			}
		}
		match width {
			None | Some(0) => Err(E::Empty),
			Some(width) => Ok(Heightmap { heights, width }),
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2199943210
		3987894921
		9856789892
		8767896789
		9899965678
	" };
	assert_eq!(part1(INPUT), 15);
	assert_eq!(part2(INPUT), 1134);
}
