// Copyright (c) 2022 Bastiaan Marinus van de Weerd

/// Signal patterns as bit masks over wires `a` through `g`.
type Pattern = u8;

struct Entry {
	patterns: [Pattern; 10],
	outputs: [Pattern; 4],
}

impl Entry {
	/// Deduces which pattern renders which digit and decodes the
	/// four-digit output value.
	///
	/// Digits 1, 7, 4, and 8 use unique numbers of segments; the three
	/// six-segment patterns (0, 6, 9) and the three five-segment ones
	/// (2, 3, 5) are told apart by which known patterns they contain.
	fn decode_output(&self) -> u64 {
		let mut by_len = self.patterns;
		by_len.sort_unstable_by_key(|pattern| pattern.count_ones());

		let mut digits: [Pattern; 10] = [0; 10];
		digits[1] = by_len[0];
		digits[7] = by_len[1];
		digits[4] = by_len[2];
		digits[8] = by_len[9];

		for &pattern in &by_len[6..9] {
			if digits[4] & pattern == digits[4] { digits[9] = pattern }
			else if digits[7] & pattern == digits[7] { digits[0] = pattern }
			else { digits[6] = pattern }
		}
		for &pattern in &by_len[3..6] {
			if digits[7] & pattern == digits[7] { digits[3] = pattern }
			else if pattern & digits[9] == pattern { digits[5] = pattern }
			else { digits[2] = pattern }
		}

		self.outputs.iter()
			.map(|&output| digits.iter().position(|&digit| digit == output).unwrap() as u64)
			.fold(0, |acc, digit| acc * 10 + digit)
	}
}


fn input_entries_from_str(s: &str) -> Vec<Entry> {
	parsing::try_entries_from_str(s).unwrap()
}


pub(crate) fn part1(s: &str) -> usize {
	input_entries_from_str(s).iter()
		.flat_map(|entry| entry.outputs)
		.filter(|output| matches!(output.count_ones(), 2 | 3 | 4 | 7))
		.count()
}


pub(crate) fn part2(s: &str) -> u64 {
	input_entries_from_str(s).iter().map(Entry::decode_output).sum()
}


mod parsing {
	use super::{Entry, Pattern};

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum EntriesError {
		Wire { line: usize, found: char },
		Count { line: usize, found: usize, expected: usize },
		MissingOutputs { line: usize },
	}

	fn try_patterns_from_str<const N: usize>(s: &str, l: usize) -> Result<[Pattern; N], EntriesError> {
		let patterns = s.split_ascii_whitespace()
			.map(|pattern| pattern.chars()
				.try_fold(0, |acc, chr| match chr {
					'a'..='g' => Ok(acc | 1 << (chr as u8 - b'a')),
					found => Err(EntriesError::Wire { line: l, found }),
				}))
			.collect::<Result<Vec<_>, _>>()?;
		patterns.try_into()
			.map_err(|found: Vec<Pattern>| EntriesError::Count { line: l, found: found.len(), expected: N })
	}

	pub(super) fn try_entries_from_str(s: &str) -> Result<Vec<Entry>, EntriesError> {
		let mut entries = Vec::new();
		let mut lines = s.lines().enumerate().peekable();
		while let Some((l, line)) = lines.next() {
			let (patterns, outputs) = line.split_once('|')
				.ok_or(EntriesError::MissingOutputs { line: l + 1 })?;
			let patterns = try_patterns_from_str(patterns, l + 1)?;
			// The outputs occasionally wrap onto the following line
			let outputs = if outputs.trim().is_empty() {
				let (l, line) = lines.next().ok_or(EntriesError::MissingOutputs { line: l + 1 })?;
				try_patterns_from_str(line, l + 1)?
			} else {
				try_patterns_from_str(outputs, l + 1)?
			};
			entries.push(Entry { patterns, outputs });
		}
		Ok(entries)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
		edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
		fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
		fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
		aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
		fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
		dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
		bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
		egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
		gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT), 26);
		assert_eq!(part2(INPUT), 61229);

		let single = "acedgfb cdfbe gcdfa fbcad dab cefabd cdbgef eafb cagedb ab \
			| cdfeb fcadb cdfeb cdbaf";
		assert_eq!(part2(single), 5353);

		// Wrapped outputs parse the same
		let (first_line, _) = INPUT.split_once('\n').unwrap();
		let wrapped = first_line.replace("| ", "|\n");
		assert_eq!(part1(&wrapped), part1(first_line));
	}
}
