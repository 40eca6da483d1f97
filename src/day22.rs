// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// An axis-aligned box of cubes, with exclusive upper bounds.
#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Cuboid {
	min: [i64; 3],
	max: [i64; 3],
}

impl Cuboid {
	fn is_empty(&self) -> bool {
		(0..3).any(|axis| self.min[axis] >= self.max[axis])
	}

	fn volume(&self) -> u64 {
		if self.is_empty() { return 0 }
		(0..3).map(|axis| (self.max[axis] - self.min[axis]) as u64).product()
	}

	fn intersection(&self, other: &Cuboid) -> Cuboid {
		Cuboid {
			min: [0, 1, 2].map(|axis| self.min[axis].max(other.min[axis])),
			max: [0, 1, 2].map(|axis| self.max[axis].min(other.max[axis])),
		}
	}

	/// Splits off the parts of `self` outside `other`, as up to six
	/// disjoint per-axis slabs.
	fn subtract(&self, other: &Cuboid) -> Vec<Cuboid> {
		let overlap = self.intersection(other);
		if overlap.is_empty() { return vec![*self] }

		let mut fragments = Vec::new();
		// Remaining span of each axis not yet carved into slabs
		let (mut min, mut max) = (self.min, self.max);
		for axis in 0..3 {
			if min[axis] < overlap.min[axis] {
				let mut slab_max = max;
				slab_max[axis] = overlap.min[axis];
				fragments.push(Cuboid { min, max: slab_max });
				min[axis] = overlap.min[axis];
			}
			if max[axis] > overlap.max[axis] {
				let mut slab_min = min;
				slab_min[axis] = overlap.max[axis];
				fragments.push(Cuboid { min: slab_min, max });
				max[axis] = overlap.max[axis];
			}
		}
		fragments
	}
}


/// Applies the reboot steps in order, keeping the lit region as a list
/// of disjoint cuboids.
fn lit_cuboids(steps: Vec<(bool, Cuboid)>) -> Vec<Cuboid> {
	let mut lit: Vec<Cuboid> = Vec::new();
	for (on, cuboid) in steps {
		lit = lit.iter().flat_map(|l| l.subtract(&cuboid)).collect();
		if on { lit.push(cuboid) }
	}
	lit
}


fn input_steps_from_str(s: &str) -> Vec<(bool, Cuboid)> {
	parsing::try_steps_from_str(s).unwrap()
}


/// Lit cubes within the initialization region, 50 cubes out from the
/// origin on every axis.
pub(crate) fn part1(s: &str) -> u64 {
	let region = Cuboid { min: [-50; 3], max: [51; 3] };
	lit_cuboids(input_steps_from_str(s)).iter()
		.map(|cuboid| cuboid.intersection(&region).volume())
		.sum()
}


pub(crate) fn part2(s: &str) -> u64 {
	lit_cuboids(input_steps_from_str(s)).iter()
		.map(Cuboid::volume)
		.sum()
}


mod parsing {
	use super::Cuboid;

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum StepsError<'a> {
		Format { line: usize, found: &'a str },
		Coord { line: usize, source: std::num::ParseIntError },
		Range { line: usize, axis: usize },
	}

	pub(super) fn try_steps_from_str(s: &str) -> Result<Vec<(bool, Cuboid)>, StepsError> {
		use StepsError as E;
		s.lines()
			.enumerate()
			.map(|(l, line)| {
				let format = E::Format { line: l + 1, found: line };
				let (on, ranges) = if let Some(ranges) = line.strip_prefix("on ") {
					(true, ranges)
				} else if let Some(ranges) = line.strip_prefix("off ") {
					(false, ranges)
				} else {
					return Err(format)
				};

				let (mut min, mut max) = ([0; 3], [0; 3]);
				let mut ranges = ranges.split(',');
				for (axis, prefix) in ["x=", "y=", "z="].into_iter().enumerate() {
					let range = ranges.next()
						.and_then(|range| range.strip_prefix(prefix))
						.and_then(|range| range.split_once(".."))
						.ok_or(E::Format { line: l + 1, found: line })?;
					min[axis] = range.0.parse()
						.map_err(|e| E::Coord { line: l + 1, source: e })?;
					// The input’s upper bounds are inclusive
					max[axis] = range.1.parse::<i64>()
						.map_err(|e| E::Coord { line: l + 1, source: e })? + 1;
					if min[axis] >= max[axis] {
						return Err(E::Range { line: l + 1, axis })
					}
				}
				if ranges.next().is_some() { return Err(format) }
				Ok((on, Cuboid { min, max }))
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn subtract() {
		let cube = |min: i64, size: i64| Cuboid { min: [min; 3], max: [min + size; 3] };

		// No overlap leaves the cuboid whole
		assert_eq!(cube(0, 10).subtract(&cube(20, 10)), vec![cube(0, 10)]);
		// Full overlap leaves nothing
		assert!(cube(2, 3).subtract(&cube(0, 10)).is_empty());

		// A corner overlap carves off three disjoint slabs
		let fragments = cube(0, 10).subtract(&cube(5, 10));
		assert_eq!(fragments.len(), 3);
		assert_eq!(fragments.iter().map(Cuboid::volume).sum::<u64>(), 1000 - 125);
		for (i, a) in fragments.iter().enumerate() {
			for b in &fragments[i + 1..] {
				assert!(a.intersection(b).is_empty());
			}
		}
	}

	const INPUT: &str = indoc::indoc! { "
		on x=10..12,y=10..12,z=10..12
		on x=11..13,y=11..13,z=11..13
		off x=9..11,y=9..11,z=9..11
		on x=10..10,y=10..10,z=10..10
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT), 39);
		assert_eq!(part2(INPUT), 39);
	}
}
