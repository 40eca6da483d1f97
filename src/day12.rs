// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


const START_CAVE: &str = "start";
const END_CAVE: &str = "end";

/// Traversable connections, keyed by where they can be entered from.
/// Connections back into `start` or out of `end` are never traversable
/// and are left out when the map is built.
type CaveMap<'a> = HashMap<&'a str, Vec<&'a str>>;

fn is_small(cave: &str) -> bool {
	cave.chars().next().is_some_and(|chr| chr.is_ascii_lowercase())
}


fn input_cave_map_from_str(s: &str) -> CaveMap {
	parsing::try_cave_map_from_str(s).unwrap()
}

/// Counts distinct paths from `cave` to `end`, visiting small caves at
/// most once — except that one small cave may be visited a second time
/// while `spare_visit` holds.
fn count_paths<'a>(
	cave_map: &CaveMap<'a>,
	cave: &'a str,
	visited: &mut Vec<&'a str>,
	spare_visit: bool,
) -> usize {
	if cave == END_CAVE { return 1 }

	let mut spare_visit = spare_visit;
	if is_small(cave) && visited.contains(&cave) {
		if !spare_visit { return 0 }
		spare_visit = false;
	}

	visited.push(cave);
	let paths = cave_map.get(cave)
		.into_iter()
		.flatten()
		.map(|next_cave| count_paths(cave_map, next_cave, visited, spare_visit))
		.sum();
	visited.pop();
	paths
}


pub(crate) fn part1(s: &str) -> usize {
	count_paths(&input_cave_map_from_str(s), START_CAVE, &mut Vec::new(), false)
}


pub(crate) fn part2(s: &str) -> usize {
	count_paths(&input_cave_map_from_str(s), START_CAVE, &mut Vec::new(), true)
}


mod parsing {
	use super::{CaveMap, START_CAVE, END_CAVE};

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum CaveMapError<'a> {
		Format { line: usize, found: &'a str },
		MissingStart,
		MissingEnd,
	}

	pub(super) fn try_cave_map_from_str(s: &str) -> Result<CaveMap, CaveMapError> {
		let mut cave_map = CaveMap::new();
		for (l, line) in s.lines().enumerate() {
			let (from, to) = line.split_once('-')
				.ok_or(CaveMapError::Format { line: l + 1, found: line })?;
			if to != START_CAVE && from != END_CAVE {
				cave_map.entry(from).or_default().push(to);
			}
			if from != START_CAVE && to != END_CAVE {
				cave_map.entry(to).or_default().push(from);
			}
		}
		if !cave_map.contains_key(START_CAVE) { return Err(CaveMapError::MissingStart) }
		if !cave_map.values().flatten().any(|&cave| cave == END_CAVE) {
			return Err(CaveMapError::MissingEnd)
		}
		Ok(cave_map)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUTS: [&str; 3] = [
		indoc::indoc! { "
			start-A
			start-b
			A-c
			A-b
			b-d
			A-end
			b-end
		" },
		indoc::indoc! { "
			dc-end
			HN-start
			start-kj
			dc-start
			dc-HN
			LN-dc
			HN-end
			kj-sa
			kj-HN
			kj-dc
		" },
		indoc::indoc! { "
			fs-end
			he-DX
			fs-he
			start-DX
			pj-DX
			end-zg
			zg-sl
			zg-pj
			pj-he
			RW-he
			fs-DX
			pj-RW
			zg-RW
			start-pj
			he-WI
			zg-he
			pj-fs
			start-RW
		" },
	];

	#[test]
	fn tests() {
		assert_eq!(part1(INPUTS[0]), 10);
		assert_eq!(part1(INPUTS[1]), 19);
		assert_eq!(part1(INPUTS[2]), 226);
		assert_eq!(part2(INPUTS[0]), 36);
		assert_eq!(part2(INPUTS[1]), 103);
		assert_eq!(part2(INPUTS[2]), 3509);
	}
}
