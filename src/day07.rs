// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn input_positions_from_str(s: &str) -> Vec<i64> {
	#[allow(dead_code)]
	#[derive(Debug)]
	struct ParsePositionsError { column: usize, source: std::num::ParseIntError }

	s.trim_end().split(',')
		.enumerate()
		.map(|(c, position)| position.parse()
			.map_err(|e| ParsePositionsError { column: c + 1, source: e }))
		.collect::<Result<_, _>>()
		.unwrap()
}


pub(crate) fn part1(s: &str) -> i64 {
	// Total walking distance is minimized at the median.
	let mut positions = input_positions_from_str(s);
	positions.sort_unstable();
	let median = positions[positions.len() / 2];
	positions.into_iter().map(|position| (position - median).abs()).sum()
}


pub(crate) fn part2(s: &str) -> i64 {
	use num_integer::Integer;

	let positions = input_positions_from_str(s);
	let total_fuel_to = |alignment: i64| positions.iter()
		.map(|position| {
			let distance = (position - alignment).abs();
			distance * (distance + 1) / 2
		})
		.sum::<i64>();

	// Triangular cost grows roughly with the square of the distance, which
	// puts the optimum near the mean, though not exactly at it; checking
	// either side of both the floored and ceiled mean covers the wiggle.
	let sum: i64 = positions.iter().sum();
	let mean = Integer::div_floor(&sum, &(positions.len() as i64));
	(mean - 1..=mean + 2).map(total_fuel_to).min().unwrap()
}


#[test]
fn tests() {
	const INPUT: &str = "16,1,2,0,4,2,7,1,2,14";
	assert_eq!(part1(INPUT), 37);
	assert_eq!(part2(INPUT), 168);
}
