// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Diagnostics {
	width: usize,
	numbers: Vec<u32>,
}

impl Diagnostics {
	/// Whether ones are (at least as) common as zeros in the given bit
	/// position, counted over `numbers` (most significant bit first).
	fn ones_lead(numbers: &[u32], width: usize, bit: usize) -> bool {
		let ones = numbers.iter()
			.filter(|number| *number >> (width - 1 - bit) & 1 == 1)
			.count();
		2 * ones >= numbers.len()
	}

	fn power_consumption(&self) -> u64 {
		let gamma = (0..self.width).fold(0u64, |acc, bit|
			acc << 1 | u64::from(Self::ones_lead(&self.numbers, self.width, bit)));
		let epsilon = !gamma & ((1 << self.width) - 1);
		gamma * epsilon
	}

	/// Repeatedly filters `numbers` on the bit criteria until one remains.
	fn rating(&self, most_common: bool) -> u64 {
		let mut remaining = self.numbers.clone();
		for bit in 0..self.width {
			if remaining.len() == 1 { break }
			let keep = Self::ones_lead(&remaining, self.width, bit) == most_common;
			remaining.retain(|number|
				(number >> (self.width - 1 - bit) & 1 == 1) == keep);
		}
		assert_eq!(remaining.len(), 1);
		remaining[0] as u64
	}

	fn life_support_rating(&self) -> u64 {
		self.rating(true) * self.rating(false)
	}
}


fn input_diagnostics_from_str(s: &str) -> Diagnostics {
	parsing::try_diagnostics_from_str(s).unwrap()
}


pub(crate) fn part1(s: &str) -> u64 {
	input_diagnostics_from_str(s).power_consumption()
}


pub(crate) fn part2(s: &str) -> u64 {
	input_diagnostics_from_str(s).life_support_rating()
}


mod parsing {
	use super::Diagnostics;

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum DiagnosticsError {
		Empty,
		Width { line: usize, found: usize, expected: usize },
		Bit { line: usize, column: usize, found: char },
	}

	pub(super) fn try_diagnostics_from_str(s: &str) -> Result<Diagnostics, DiagnosticsError> {
		use DiagnosticsError as E;
		let mut width = None;
		let numbers = s.lines()
			.enumerate()
			.map(|(l, line)| {
				match *width.get_or_insert(line.len()) {
					expected if expected != line.len() =>
						return Err(E::Width { line: l + 1, found: line.len(), expected }),
					_ => ()
				}
				line.chars()
					.enumerate()
					.try_fold(0u32, |acc, (c, chr)| match chr {
						'0' => Ok(acc << 1),
						'1' => Ok(acc << 1 | 1),
						found => Err(E::Bit { line: l + 1, column: c + 1, found }),
					})
			})
			.collect::<Result<Vec<_>, _>>()?;
		match width {
			None | Some(0) => Err(E::Empty),
			Some(width) => Ok(Diagnostics { width, numbers }),
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		00100
		11110
		10110
		10111
		10101
		01111
		00111
		11100
		10000
		11001
		00010
		01010
	" };
	assert_eq!(part1(INPUT), 198);
	assert_eq!(part2(INPUT), 230);
}
