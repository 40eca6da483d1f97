// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// A regular number and the number of pairs it is nested inside. A whole
/// snailfish number is its in-order sequence of leaves; the tree shape
/// follows from the depths alone.
#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Leaf {
	depth: u8,
	value: u64,
}

#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Number(Vec<Leaf>);

impl Number {
	/// Explodes the leftmost pair nested inside four pairs, if any.
	fn explode(&mut self) -> bool {
		let Some(i) = self.0.iter().position(|leaf| leaf.depth > 4) else { return false };
		// The leftmost too-deep leaf is the left half of a plain pair,
		// so its partner is the next leaf over
		if i > 0 {
			self.0[i - 1].value += self.0[i].value;
		}
		if i + 2 < self.0.len() {
			self.0[i + 2].value += self.0[i + 1].value;
		}
		self.0[i] = Leaf { depth: self.0[i].depth - 1, value: 0 };
		self.0.remove(i + 1);
		true
	}

	/// Splits the leftmost regular number of 10 or greater, if any.
	fn split(&mut self) -> bool {
		use num_integer::Integer;
		let Some(i) = self.0.iter().position(|leaf| leaf.value >= 10) else { return false };
		let Leaf { depth, value } = self.0[i];
		self.0[i] = Leaf { depth: depth + 1, value: value / 2 };
		self.0.insert(i + 1, Leaf { depth: depth + 1, value: Integer::div_ceil(&value, &2) });
		true
	}

	fn reduce(&mut self) {
		loop {
			if self.explode() { continue }
			if self.split() { continue }
			break
		}
	}

	fn add(mut self, other: Number) -> Number {
		self.0.extend(other.0);
		for leaf in &mut self.0 { leaf.depth += 1 }
		self.reduce();
		self
	}

	/// Three times the left half of each pair plus two times the right.
	fn magnitude(&self) -> u64 {
		fn node_magnitude(leaves: &[Leaf], i: &mut usize, depth: u8) -> u64 {
			if leaves[*i].depth == depth {
				let value = leaves[*i].value;
				*i += 1;
				value
			} else {
				3 * node_magnitude(leaves, i, depth + 1)
					+ 2 * node_magnitude(leaves, i, depth + 1)
			}
		}
		node_magnitude(&self.0, &mut 0, 0)
	}
}


fn input_numbers_from_str(s: &str) -> Vec<Number> {
	parsing::try_numbers_from_str(s).unwrap()
}


pub(crate) fn part1(s: &str) -> u64 {
	input_numbers_from_str(s).into_iter()
		.reduce(Number::add)
		.expect("No snailfish numbers to add!")
		.magnitude()
}


pub(crate) fn part2(s: &str) -> u64 {
	use itertools::Itertools as _;
	input_numbers_from_str(s).into_iter()
		.tuple_combinations()
		.flat_map(|(left, right)| [
			left.clone().add(right.clone()).magnitude(),
			right.add(left).magnitude(),
		])
		.max()
		.expect("Fewer than two snailfish numbers!")
}


mod parsing {
	use super::{Leaf, Number};

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum NumberError {
		Expected { column: usize, expected: &'static str },
		Eof,
	}

	struct Cursor<'a> {
		bytes: &'a [u8],
		pos: usize,
	}

	impl Cursor<'_> {
		fn expect(&mut self, byte: u8, expected: &'static str) -> Result<(), NumberError> {
			match self.bytes.get(self.pos) {
				Some(&found) if found == byte => { self.pos += 1; Ok(()) }
				Some(_) => Err(NumberError::Expected { column: self.pos + 1, expected }),
				None => Err(NumberError::Eof),
			}
		}

		fn node(&mut self, depth: u8, leaves: &mut Vec<Leaf>) -> Result<(), NumberError> {
			if let Some(b'[') = self.bytes.get(self.pos) {
				self.pos += 1;
				self.node(depth + 1, leaves)?;
				self.expect(b',', "‘,’")?;
				self.node(depth + 1, leaves)?;
				return self.expect(b']', "‘]’")
			}
			let start = self.pos;
			while matches!(self.bytes.get(self.pos), Some(digit) if digit.is_ascii_digit()) {
				self.pos += 1;
			}
			if self.pos == start {
				return Err(NumberError::Expected { column: start + 1, expected: "a regular number" })
			}
			// The range holds ASCII digits only
			let value = std::str::from_utf8(&self.bytes[start..self.pos]).unwrap()
				.parse().unwrap();
			leaves.push(Leaf { depth, value });
			Ok(())
		}
	}

	pub(super) fn try_number_from_str(s: &str) -> Result<Number, NumberError> {
		let mut cursor = Cursor { bytes: s.as_bytes(), pos: 0 };
		let mut leaves = Vec::new();
		cursor.node(0, &mut leaves)?;
		if cursor.pos < cursor.bytes.len() {
			return Err(NumberError::Expected { column: cursor.pos + 1, expected: "end of line" })
		}
		Ok(Number(leaves))
	}

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) struct NumbersError { line: usize, source: NumberError }

	pub(super) fn try_numbers_from_str(s: &str) -> Result<Vec<Number>, NumbersError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| try_number_from_str(line)
				.map_err(|e| NumbersError { line: l + 1, source: e }))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn number(s: &str) -> Number {
		parsing::try_number_from_str(s).unwrap()
	}

	#[test]
	fn explode() {
		for (input, expected) in [
			("[[[[[9,8],1],2],3],4]", "[[[[0,9],2],3],4]"),
			("[7,[6,[5,[4,[3,2]]]]]", "[7,[6,[5,[7,0]]]]"),
			("[[6,[5,[4,[3,2]]]],1]", "[[6,[5,[7,0]]],3]"),
			("[[3,[2,[1,[7,3]]]],[6,[5,[4,[3,2]]]]]", "[[3,[2,[8,0]]],[9,[5,[4,[3,2]]]]]"),
			("[[3,[2,[8,0]]],[9,[5,[4,[3,2]]]]]", "[[3,[2,[8,0]]],[9,[5,[7,0]]]]"),
		] {
			let mut exploded = number(input);
			assert!(exploded.explode());
			assert_eq!(exploded, number(expected));
		}
	}

	#[test]
	fn add() {
		let sum = number("[[[[4,3],4],4],[7,[[8,4],9]]]").add(number("[1,1]"));
		assert_eq!(sum, number("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]"));

		for (lines, expected) in [
			(&["[1,1]", "[2,2]", "[3,3]", "[4,4]"][..], "[[[[1,1],[2,2]],[3,3]],[4,4]]"),
			(&["[1,1]", "[2,2]", "[3,3]", "[4,4]", "[5,5]"], "[[[[3,0],[5,3]],[4,4]],[5,5]]"),
			(&["[1,1]", "[2,2]", "[3,3]", "[4,4]", "[5,5]", "[6,6]"], "[[[[5,0],[7,4]],[5,5]],[6,6]]"),
		] {
			let sum = lines.iter().map(|line| number(line)).reduce(Number::add).unwrap();
			assert_eq!(sum, number(expected));
		}
	}

	#[test]
	fn magnitude() {
		assert_eq!(number("[[1,2],[[3,4],5]]").magnitude(), 143);
		assert_eq!(number("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]").magnitude(), 1384);
		assert_eq!(number("[[[[1,1],[2,2]],[3,3]],[4,4]]").magnitude(), 445);
		assert_eq!(number("[[[[3,0],[5,3]],[4,4]],[5,5]]").magnitude(), 791);
	}

	const INPUT: &str = indoc::indoc! { "
		[[[0,[5,8]],[[1,7],[9,6]]],[[4,[1,2]],[[1,4],2]]]
		[[[5,[2,8]],4],[5,[[9,9],0]]]
		[6,[[[6,2],[5,6]],[[7,6],[4,7]]]]
		[[[6,[0,7]],[0,9]],[4,[9,[9,0]]]]
		[[[7,[6,4]],[3,[1,3]]],[[[5,5],1],9]]
		[[6,[[7,3],[3,2]]],[[[3,8],[5,7]],4]]
		[[[[5,4],[7,7]],8],[[8,3],8]]
		[[9,3],[[9,9],[6,[4,9]]]]
		[[2,[[7,7],7]],[[5,8],[[9,3],[0,2]]]]
		[[[[5,2],5],[8,[3,7]]],[[5,[7,5]],[4,4]]]
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT), 4140);
		assert_eq!(part2(INPUT), 3993);
	}
}
