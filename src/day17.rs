// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Target {
	x: [i64; 2],
	y: [i64; 2],
}

impl Target {
	fn contains(&self, [x, y]: [i64; 2]) -> bool {
		x >= self.x[0] && x <= self.x[1] && y >= self.y[0] && y <= self.y[1]
	}

	fn launch(&self, [mut vx, mut vy]: [i64; 2]) -> Option<i64> {
		let (mut pos, mut apex) = ([0, 0], 0);
		loop {
			pos = [pos[0] + vx, pos[1] + vy];
			vx -= vx.signum();
			vy -= 1;
			apex = apex.max(pos[1]);
			if self.contains(pos) { return Some(apex) }
			// Overshot (the target lies right of and below the launch site)
			if pos[0] > self.x[1] || pos[1] < self.y[0] { return None }
		}
	}

	/// Apexes of every launch velocity that hits the target.
	fn hits(&self) -> impl Iterator<Item = i64> + '_ {
		// Any drag-stalled horizontal velocity beyond the far edge
		// overshoots in one step; a downward velocity below the bottom
		// edge likewise, and anything fired upward at `vy` comes back
		// through zero at `-vy - 1`.
		(1..=self.x[1])
			.flat_map(move |vx| (self.y[0]..-self.y[0]).map(move |vy| [vx, vy]))
			.filter_map(|velocity| self.launch(velocity))
	}
}


fn input_target_from_str(s: &str) -> Target {
	parsing::try_target_from_str(s.trim_end()).unwrap()
}


pub(crate) fn part1(s: &str) -> i64 {
	input_target_from_str(s).hits().max().expect("No hits on target!")
}


pub(crate) fn part2(s: &str) -> usize {
	input_target_from_str(s).hits().count()
}


mod parsing {
	use super::Target;

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum TargetError<'a> {
		Format(&'a str),
		Coord(std::num::ParseIntError),
		Orientation,
	}

	fn try_range_from_str(s: &str) -> Result<[i64; 2], TargetError> {
		let (from, to) = s.split_once("..").ok_or(TargetError::Format(s))?;
		let range = [
			from.parse().map_err(TargetError::Coord)?,
			to.parse().map_err(TargetError::Coord)?,
		];
		if range[0] > range[1] { return Err(TargetError::Format(s)) }
		Ok(range)
	}

	pub(super) fn try_target_from_str(s: &str) -> Result<Target, TargetError> {
		let ranges = s.strip_prefix("target area: x=").ok_or(TargetError::Format(s))?;
		let (x, y) = ranges.split_once(", y=").ok_or(TargetError::Format(ranges))?;
		let target = Target { x: try_range_from_str(x)?, y: try_range_from_str(y)? };
		// The probe launches up and to the right of the launch site
		if target.x[0] <= 0 || target.y[1] >= 0 { return Err(TargetError::Orientation) }
		Ok(target)
	}
}


#[test]
fn tests() {
	const INPUT: &str = "target area: x=20..30, y=-10..-5";
	assert_eq!(part1(INPUT), 45);
	assert_eq!(part2(INPUT), 112);
}
