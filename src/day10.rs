// Copyright (c) 2022 Bastiaan Marinus van de Weerd


enum LineCheck {
	/// First closing character that didn’t match the opening one.
	Corrupted(char),
	/// Closing characters still expected, innermost first.
	Incomplete(Vec<char>),
}

fn check_line(line: &str) -> LineCheck {
	let mut expected_closes = Vec::new();
	for chr in line.chars() {
		match chr {
			'(' => expected_closes.push(')'),
			'[' => expected_closes.push(']'),
			'{' => expected_closes.push('}'),
			'<' => expected_closes.push('>'),
			close => match expected_closes.pop() {
				Some(expected) if expected == close => (),
				_ => return LineCheck::Corrupted(close),
			}
		}
	}
	expected_closes.reverse();
	LineCheck::Incomplete(expected_closes)
}


pub(crate) fn part1(s: &str) -> u64 {
	s.lines()
		.filter_map(|line| match check_line(line) {
			LineCheck::Corrupted(')') => Some(3),
			LineCheck::Corrupted(']') => Some(57),
			LineCheck::Corrupted('}') => Some(1197),
			LineCheck::Corrupted('>') => Some(25137),
			LineCheck::Corrupted(found) => panic!("Unexpected corrupt character {found:?}"),
			LineCheck::Incomplete(_) => None,
		})
		.sum()
}


pub(crate) fn part2(s: &str) -> u64 {
	let mut scores = s.lines()
		.filter_map(|line| match check_line(line) {
			LineCheck::Corrupted(_) => None,
			LineCheck::Incomplete(closes) => Some(closes.into_iter()
				.map(|close| match close {
					')' => 1,
					']' => 2,
					'}' => 3,
					'>' => 4,
					found => panic!("Unexpected completion character {found:?}"),
				})
				.fold(0u64, |acc, points| acc * 5 + points)),
		})
		.collect::<Vec<_>>();
	scores.sort_unstable();
	// There is always an odd number of incomplete lines
	scores[scores.len() / 2]
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		[({(<(())[]>[[{[]{<()<>>
		[(()[<>])]({[<{<<[]>>(
		{([(<{}[<>[]}>{[]{[(<()>
		(((({<>}<{<{<>}{[]{[]{}
		[[<[([]))<([[{}[[()]]]
		[{[{({}]{}}([{[{{{}}([]
		{<[[]]>}<{[{[{[]{()[[[]
		[<(<(<(<{}))><([]([]()
		<{([([[(<>()){}]>(<<{{
		<{([{{}}[<[[[<>{}]]]>[]]
	" };

	#[test]
	fn tests() {
		assert!(matches!(check_line("{([(<{}[<>[]}>{[]{[(<()>"), LineCheck::Corrupted('}')));
		assert_eq!(part1(INPUT), 26397);
		assert_eq!(part2(INPUT), 288957);
	}
}
