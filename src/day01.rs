// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn input_depths_from_str(s: &str) -> Vec<u64> {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	struct ParseDepthsError { line: usize, source: ParseIntError }

	s.lines()
		.enumerate()
		.map(|(l, line)| line.parse()
			.map_err(|e| ParseDepthsError { line: l + 1, source: e }))
		.collect::<Result<_, _>>()
		.unwrap()
}

fn count_increases(depths: &[u64], window: usize) -> usize {
	// A sliding window’s sum increases exactly when the value entering it
	// exceeds the value leaving it, so the sums themselves are never needed.
	depths.iter()
		.zip(depths.iter().skip(window))
		.filter(|(leaving, entering)| entering > leaving)
		.count()
}


pub(crate) fn part1(s: &str) -> usize {
	count_increases(&input_depths_from_str(s), 1)
}


pub(crate) fn part2(s: &str) -> usize {
	count_increases(&input_depths_from_str(s), 3)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		199
		200
		208
		210
		200
		207
		240
		269
		260
		263
	" };
	assert_eq!(part1(INPUT), 7);
	assert_eq!(part2(INPUT), 5);
}
