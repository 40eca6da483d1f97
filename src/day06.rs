// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Number of fish at each timer value; newly spawned fish start at 8,
/// resetting parents go back to 6.
const NUM_TIMERS: usize = 9;

fn input_timer_counts_from_str(s: &str) -> [u64; NUM_TIMERS] {
	parsing::try_timer_counts_from_str(s).unwrap()
}

fn population_after(mut counts: [u64; NUM_TIMERS], days: usize) -> u64 {
	for _ in 0..days {
		let spawning = counts[0];
		counts.rotate_left(1);
		counts[6] += spawning;
		counts[8] = spawning;
	}
	counts.into_iter().sum()
}


pub(crate) fn part1(s: &str) -> u64 {
	population_after(input_timer_counts_from_str(s), 80)
}


pub(crate) fn part2(s: &str) -> u64 {
	population_after(input_timer_counts_from_str(s), 256)
}


mod parsing {
	use super::NUM_TIMERS;

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum TimersError {
		Timer { column: usize, source: std::num::ParseIntError },
		// Initial fish take 7 days to reproduce, so can’t start above 6
		Range { column: usize, found: usize },
	}

	pub(super) fn try_timer_counts_from_str(s: &str) -> Result<[u64; NUM_TIMERS], TimersError> {
		s.trim_end().split(',')
			.enumerate()
			.try_fold([0; NUM_TIMERS], |mut counts, (c, timer)| {
				let timer: usize = timer.parse()
					.map_err(|e| TimersError::Timer { column: c + 1, source: e })?;
				if timer > 6 { return Err(TimersError::Range { column: c + 1, found: timer }) }
				counts[timer] += 1;
				Ok(counts)
			})
	}
}


#[test]
fn tests() {
	const INPUT: &str = "3,4,3,1,2";
	assert_eq!(part1(INPUT), 5934);
	assert_eq!(part2(INPUT), 26984457539);
}
