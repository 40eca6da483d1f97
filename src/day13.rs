// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


#[derive(Clone, Copy)]
enum Fold {
	AlongX(i64),
	AlongY(i64),
}

impl Fold {
	fn apply(self, [x, y]: [i64; 2]) -> [i64; 2] {
		match self {
			Fold::AlongX(at) if x > at => [2 * at - x, y],
			Fold::AlongY(at) if y > at => [x, 2 * at - y],
			_ => [x, y],
		}
	}
}


fn input_page_from_str(s: &str) -> (HashSet<[i64; 2]>, Vec<Fold>) {
	parsing::try_page_from_str(s).unwrap()
}

fn fold_dots(dots: HashSet<[i64; 2]>, folds: impl IntoIterator<Item = Fold>) -> HashSet<[i64; 2]> {
	folds.into_iter().fold(dots, |dots, fold|
		dots.into_iter().map(|dot| fold.apply(dot)).collect())
}

fn render_dots(dots: &HashSet<[i64; 2]>) -> String {
	use std::fmt::Write;
	let width = dots.iter().map(|&[x, _]| x).max().unwrap_or(0);
	let height = dots.iter().map(|&[_, y]| y).max().unwrap_or(0);
	let mut rendered = String::new();
	for y in 0..=height {
		for x in 0..=width {
			_ = rendered.write_char(if dots.contains(&[x, y]) { '#' } else { '.' });
		}
		if y < height { _ = rendered.write_char('\n') }
	}
	rendered
}


pub(crate) fn part1(s: &str) -> usize {
	let (dots, folds) = input_page_from_str(s);
	fold_dots(dots, folds.into_iter().take(1)).len()
}


pub(crate) fn part2(s: &str) -> String {
	let (dots, folds) = input_page_from_str(s);
	render_dots(&fold_dots(dots, folds))
}


mod parsing {
	use std::collections::HashSet;
	use super::Fold;

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum PageError<'a> {
		DotFormat { line: usize, found: &'a str },
		Coord { line: usize, source: std::num::ParseIntError },
		FoldFormat { line: usize, found: &'a str },
	}

	pub(super) fn try_page_from_str(s: &str) -> Result<(HashSet<[i64; 2]>, Vec<Fold>), PageError> {
		use PageError as E;
		let mut dots = HashSet::new();
		let mut folds = Vec::new();
		for (l, line) in s.lines().enumerate() {
			if line.is_empty() { continue }
			if let Some(fold) = line.strip_prefix("fold along ") {
				let (axis, at) = fold.split_once('=')
					.ok_or(E::FoldFormat { line: l + 1, found: line })?;
				let at = at.parse().map_err(|e| E::Coord { line: l + 1, source: e })?;
				folds.push(match axis {
					"x" => Fold::AlongX(at),
					"y" => Fold::AlongY(at),
					_ => return Err(E::FoldFormat { line: l + 1, found: line }),
				});
			} else {
				let (x, y) = line.split_once(',')
					.ok_or(E::DotFormat { line: l + 1, found: line })?;
				dots.insert([
					x.parse().map_err(|e| E::Coord { line: l + 1, source: e })?,
					y.parse().map_err(|e| E::Coord { line: l + 1, source: e })?,
				]);
			}
		}
		Ok((dots, folds))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		6,10
		0,14
		9,10
		0,3
		10,4
		4,11
		6,0
		6,12
		4,1
		0,13
		10,12
		3,4
		3,0
		8,4
		1,10
		2,14
		8,10
		9,0

		fold along y=7
		fold along x=5
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT), 17);
		assert_eq!(part2(INPUT), indoc::indoc! { "
			#####
			#...#
			#...#
			#...#
			#####" });
	}
}
