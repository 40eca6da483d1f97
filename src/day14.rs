// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


struct Polymer {
	template: Vec<char>,
	rules: HashMap<(char, char), char>,
}

impl Polymer {
	/// Grows the polymer for `steps` insertion rounds, tracking only how
	/// often each adjacent pair occurs, and returns the difference between
	/// the most and least common elements.
	fn strength_after(&self, steps: usize) -> u64 {
		use itertools::Itertools as _;

		let mut pair_counts = HashMap::new();
		for (&left, &right) in self.template.iter().tuple_windows::<(_, _)>() {
			*pair_counts.entry((left, right)).or_insert(0u64) += 1;
		}

		for _ in 0..steps {
			let mut next_counts = HashMap::new();
			for ((left, right), count) in pair_counts {
				if let Some(&inserted) = self.rules.get(&(left, right)) {
					*next_counts.entry((left, inserted)).or_insert(0) += count;
					*next_counts.entry((inserted, right)).or_insert(0) += count;
				} else {
					*next_counts.entry((left, right)).or_insert(0) += count;
				}
			}
			pair_counts = next_counts;
		}

		// Every element is part of two pairs, except the two ends of the
		// polymer, which never change
		let mut element_counts = HashMap::new();
		for ((left, right), count) in pair_counts {
			*element_counts.entry(left).or_insert(0u64) += count;
			*element_counts.entry(right).or_insert(0u64) += count;
		}
		*element_counts.entry(self.template[0]).or_insert(0) += 1;
		*element_counts.entry(*self.template.last().unwrap()).or_insert(0) += 1;

		let (min, max) = element_counts.into_values()
			.map(|count| count / 2)
			.minmax()
			.into_option()
			.unwrap();
		max - min
	}
}


fn input_polymer_from_str(s: &str) -> Polymer {
	parsing::try_polymer_from_str(s).unwrap()
}


pub(crate) fn part1(s: &str) -> u64 {
	input_polymer_from_str(s).strength_after(10)
}


pub(crate) fn part2(s: &str) -> u64 {
	input_polymer_from_str(s).strength_after(40)
}


mod parsing {
	use std::collections::HashMap;
	use super::Polymer;

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum PolymerError<'a> {
		MissingTemplate,
		Rule { line: usize, found: &'a str },
	}

	pub(super) fn try_polymer_from_str(s: &str) -> Result<Polymer, PolymerError> {
		let mut lines = s.lines().enumerate();
		let template: Vec<char> = lines.next()
			.map(|(_, line)| line.chars().collect())
			.filter(|template: &Vec<char>| template.len() >= 2)
			.ok_or(PolymerError::MissingTemplate)?;
		let mut rules = HashMap::new();
		for (l, line) in lines {
			if line.is_empty() { continue }
			let rule = || -> Option<((char, char), char)> {
				let (pair, inserted) = line.split_once(" -> ")?;
				let mut pair_chars = pair.chars();
				let pair = (pair_chars.next()?, pair_chars.next()?);
				if pair_chars.next().is_some() { return None }
				let mut inserted_chars = inserted.chars();
				let inserted = inserted_chars.next()?;
				if inserted_chars.next().is_some() { return None }
				Some((pair, inserted))
			};
			let ((left, right), inserted) = rule()
				.ok_or(PolymerError::Rule { line: l + 1, found: line })?;
			rules.insert((left, right), inserted);
		}
		Ok(Polymer { template, rules })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		NNCB

		CH -> B
		HH -> N
		CB -> H
		NH -> C
		HB -> C
		HC -> B
		HN -> C
		NN -> C
		BB -> N
		BC -> B
		BN -> B
		CC -> N
		CN -> C
	" };
	assert_eq!(part1(INPUT), 1588);
	assert_eq!(part2(INPUT), 2188189693529);
}
