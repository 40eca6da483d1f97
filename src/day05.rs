// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Line {
	from: [i64; 2],
	to: [i64; 2],
}

impl Line {
	fn is_axis_aligned(&self) -> bool {
		self.from[0] == self.to[0] || self.from[1] == self.to[1]
	}

	fn points(&self) -> impl Iterator<Item = [i64; 2]> + '_ {
		let step = [(self.to[0] - self.from[0]).signum(), (self.to[1] - self.from[1]).signum()];
		let len = (self.to[0] - self.from[0]).abs().max((self.to[1] - self.from[1]).abs());
		(0..=len).map(move |i| [self.from[0] + i * step[0], self.from[1] + i * step[1]])
	}
}


fn input_lines_from_str(s: &str) -> Vec<Line> {
	parsing::try_lines_from_str(s).unwrap()
}

fn overlaps(lines: impl Iterator<Item = Line>) -> usize {
	use std::collections::HashMap;
	let mut counts = HashMap::new();
	for line in lines {
		for point in line.points() {
			*counts.entry(point).or_insert(0u32) += 1;
		}
	}
	counts.into_values().filter(|&count| count >= 2).count()
}


pub(crate) fn part1(s: &str) -> usize {
	overlaps(input_lines_from_str(s).into_iter().filter(Line::is_axis_aligned))
}


pub(crate) fn part2(s: &str) -> usize {
	// Diagonal lines run at exactly 45 degrees
	overlaps(input_lines_from_str(s).into_iter())
}


mod parsing {
	use super::Line;

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum LineError<'a> {
		Format(&'a str),
		Coord(std::num::ParseIntError),
	}

	fn try_point_from_str(s: &str) -> Result<[i64; 2], LineError> {
		let (x, y) = s.split_once(',').ok_or(LineError::Format(s))?;
		Ok([x.parse().map_err(LineError::Coord)?, y.parse().map_err(LineError::Coord)?])
	}

	impl<'a> TryFrom<&'a str> for Line {
		type Error = LineError<'a>;
		fn try_from(s: &'a str) -> Result<Self, Self::Error> {
			let (from, to) = s.split_once(" -> ").ok_or(LineError::Format(s))?;
			Ok(Line { from: try_point_from_str(from)?, to: try_point_from_str(to)? })
		}
	}

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) struct LinesError<'a> { line: usize, source: LineError<'a> }

	pub(super) fn try_lines_from_str(s: &str) -> Result<Vec<Line>, LinesError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| Line::try_from(line)
				.map_err(|e| LinesError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		0,9 -> 5,9
		8,0 -> 0,8
		9,4 -> 3,4
		2,2 -> 2,1
		7,0 -> 7,4
		6,4 -> 2,0
		0,9 -> 2,9
		3,4 -> 1,4
		0,0 -> 8,8
		5,5 -> 8,2
	" };
	assert_eq!(part1(INPUT), 5);
	assert_eq!(part2(INPUT), 12);
}
