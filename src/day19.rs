// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{HashMap, HashSet};


type Point = [i32; 3];

/// Minimum number of shared beacons for two scanners’ regions to be
/// considered overlapping.
const OVERLAP: usize = 12;

fn face([x, y, z]: Point, facing: u8) -> Point {
	match facing {
		0 => [x, y, z],
		1 => [-x, -y, z],
		2 => [y, -x, z],
		3 => [-y, x, z],
		4 => [z, y, -x],
		_ => [-z, y, x],
	}
}

fn roll([x, y, z]: Point, roll: u8) -> Point {
	match roll {
		0 => [x, y, z],
		1 => [x, -z, y],
		2 => [x, -y, -z],
		_ => [x, z, -y],
	}
}

/// One of the 24 proper axis-aligned rotations (6 facings of the
/// x-axis, 4 rolls around it).
fn rotate(point: Point, rotation: u8) -> Point {
	roll(face(point, rotation / 4), rotation % 4)
}


/// Tries each rotation of `scan` for a translation that lands at least
/// `OVERLAP` of its beacons on known ones, returning the scanner
/// position and the beacons in absolute coordinates.
fn try_align(beacons: &HashSet<Point>, scan: &[Point]) -> Option<(Point, Vec<Point>)> {
	for rotation in 0..24 {
		let rotated = scan.iter().map(|&p| rotate(p, rotation)).collect::<Vec<_>>();
		let mut offset_counts = HashMap::new();
		for p in &rotated {
			for q in beacons {
				let offset = [q[0] - p[0], q[1] - p[1], q[2] - p[2]];
				*offset_counts.entry(offset).or_insert(0usize) += 1;
			}
		}
		if let Some((&offset, _)) = offset_counts.iter().find(|&(_, &count)| count >= OVERLAP) {
			let translated = rotated.iter()
				.map(|p| [p[0] + offset[0], p[1] + offset[1], p[2] + offset[2]])
				.collect();
			return Some((offset, translated))
		}
	}
	None
}

/// Merges all scans into the first scanner’s frame of reference,
/// returning the unique beacons and the scanner positions.
fn align_scans(mut scans: Vec<Vec<Point>>) -> (HashSet<Point>, Vec<Point>) {
	let mut pending = scans.split_off(1);
	let mut beacons: HashSet<Point> = scans.pop()
		.expect("No scanner reports!")
		.into_iter()
		.collect();
	let mut scanners = vec![[0, 0, 0]];
	while !pending.is_empty() {
		let unaligned = pending.len();
		pending.retain(|scan| match try_align(&beacons, scan) {
			Some((scanner, aligned)) => {
				beacons.extend(aligned);
				scanners.push(scanner);
				false
			}
			None => true,
		});
		if pending.len() == unaligned {
			panic!("Could not align {unaligned} of the scanners!")
		}
	}
	(beacons, scanners)
}


fn input_scans_from_str(s: &str) -> Vec<Vec<Point>> {
	parsing::try_scans_from_str(s).unwrap()
}


pub(crate) fn part1(s: &str) -> usize {
	align_scans(input_scans_from_str(s)).0.len()
}


pub(crate) fn part2(s: &str) -> i32 {
	use itertools::Itertools as _;
	let (_, scanners) = align_scans(input_scans_from_str(s));
	scanners.iter()
		.tuple_combinations()
		.map(|(a, b)| (a[0] - b[0]).abs() + (a[1] - b[1]).abs() + (a[2] - b[2]).abs())
		.max()
		.expect("Fewer than two scanners!")
}


mod parsing {
	use super::Point;

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum ScansError {
		Header { line: usize },
		Coord { line: usize, source: std::num::ParseIntError },
		Shape { line: usize, found: usize },
	}

	pub(super) fn try_scans_from_str(s: &str) -> Result<Vec<Vec<Point>>, ScansError> {
		use ScansError as E;
		let mut scans = Vec::new();
		for (l, line) in s.lines().enumerate() {
			if line.is_empty() { continue }
			if line.starts_with("--- scanner ") {
				scans.push(Vec::new());
				continue
			}
			let scan = scans.last_mut().ok_or(E::Header { line: l + 1 })?;
			let coords = line.split(',')
				.map(|coord| coord.parse()
					.map_err(|e| E::Coord { line: l + 1, source: e }))
				.collect::<Result<Vec<_>, _>>()?;
			let point: Point = coords.try_into()
				.map_err(|found: Vec<i32>| E::Shape { line: l + 1, found: found.len() })?;
			scan.push(point);
		}
		Ok(scans)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rotations() {
		use std::collections::HashSet;
		let rotated = (0..24).map(|r| rotate([1, 2, 3], r)).collect::<HashSet<_>>();
		assert_eq!(rotated.len(), 24);
		assert!(rotated.contains(&[-2, 1, 3]));
		assert!(!rotated.contains(&[-1, 2, 3]));
	}

	/// Beacons shared by every scanner; irregular enough that no wrong
	/// rotation lines 12 of them up by coincidence.
	const SHARED_BEACONS: [Point; 13] = [
		[1, 2, 3], [10, -4, 7], [-3, 14, 2], [8, 8, -9], [-12, 5, 6],
		[4, -7, -2], [0, 11, -8], [-6, -9, 13], [15, 3, 5], [7, -13, 1],
		[-10, 0, -4], [2, 6, 12], [9, -1, -11],
	];

	/// Renders the scene as seen by a scanner at `pos` whose axes are
	/// rotated by `rotation`.
	fn scan_from(id: usize, pos: Point, rotation: u8, extra_beacons: &[Point]) -> String {
		use std::fmt::Write;
		let mut scan = format!("--- scanner {id} ---\n");
		for beacon in SHARED_BEACONS.iter().chain(extra_beacons) {
			let [x, y, z] = rotate(
				[beacon[0] - pos[0], beacon[1] - pos[1], beacon[2] - pos[2]],
				rotation,
			);
			_ = writeln!(scan, "{x},{y},{z}");
		}
		scan
	}

	#[test]
	fn tests() {
		let input = [
			scan_from(0, [0, 0, 0], 0, &[]),
			scan_from(1, [100, -200, 300], 7, &[]),
			scan_from(2, [-50, 75, -125], 16, &[[40, 40, 40], [41, -41, 0]]),
		].join("\n");

		// 13 shared beacons plus scanner 2’s two private ones
		assert_eq!(part1(&input), 15);
		// Scanners 1 and 2 are the farthest apart
		assert_eq!(part2(&input), 850);
	}
}
