// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


#[derive(Clone, Copy)]
enum Reg { W, X, Y, Z }

#[derive(Clone, Copy)]
enum Operand {
	Reg(Reg),
	Num(i64),
}

enum Inst {
	Inp(Reg),
	Add(Reg, Operand),
	Mul(Reg, Operand),
	Div(Reg, Operand),
	Mod(Reg, Operand),
	Eql(Reg, Operand),
}


struct Alu([i64; 4]);

impl Alu {
	fn get(&self, operand: Operand) -> i64 {
		match operand {
			Operand::Reg(reg) => self.0[reg as usize],
			Operand::Num(num) => num,
		}
	}

	fn run(&mut self, program: &[Inst], inputs: impl IntoIterator<Item = i64>) {
		let mut inputs = inputs.into_iter();
		for inst in program {
			match *inst {
				Inst::Inp(reg) =>
					self.0[reg as usize] = inputs.next().expect("Ran out of inputs!"),
				Inst::Add(reg, operand) => self.0[reg as usize] += self.get(operand),
				Inst::Mul(reg, operand) => self.0[reg as usize] *= self.get(operand),
				Inst::Div(reg, operand) => self.0[reg as usize] /= self.get(operand),
				Inst::Mod(reg, operand) => self.0[reg as usize] %= self.get(operand),
				Inst::Eql(reg, operand) =>
					self.0[reg as usize] = (self.0[reg as usize] == self.get(operand)) as i64,
			}
		}
	}
}


/// Splits the program at its `inp` instructions, one block per input
/// digit. Each block reads one digit and carries only `z` over to the
/// next.
fn input_blocks_from_str(s: &str) -> Vec<Vec<Inst>> {
	let program = parsing::try_program_from_str(s).unwrap();
	let mut blocks: Vec<Vec<Inst>> = Vec::new();
	for inst in program {
		if matches!(inst, Inst::Inp(_)) {
			blocks.push(Vec::new());
		}
		blocks.last_mut().expect("Program starts before the first input!").push(inst);
	}
	blocks
}

fn run_block(block: &[Inst], digit: i64, z: i64) -> i64 {
	let mut alu = Alu([0, 0, 0, z]);
	alu.run(block, [digit]);
	alu.0[Reg::Z as usize]
}

/// Upper bound on `z` entering each block from which zero is still
/// reachable. A block only ever shrinks `z` through its `div z 26`, so
/// with `n` such blocks left anything at `26.pow(n)` or above is a dead
/// end.
fn z_bounds(blocks: &[Vec<Inst>]) -> Vec<i64> {
	let mut bounds = Vec::with_capacity(blocks.len());
	let mut pops = 0;
	for block in blocks.iter().rev() {
		if block.iter().any(|inst| matches!(inst,
				Inst::Div(Reg::Z, Operand::Num(26)))) {
			pops += 1;
		}
		bounds.push(26i64.checked_pow(pops).unwrap_or(i64::MAX));
	}
	bounds.reverse();
	bounds
}

fn search(
	blocks: &[Vec<Inst>],
	bounds: &[i64],
	digits: &[i64; 9],
	index: usize,
	z: i64,
	failed: &mut HashSet<(usize, i64)>,
	number: &mut Vec<u8>,
) -> bool {
	let Some(block) = blocks.get(index) else { return z == 0 };
	if z >= bounds[index] || failed.contains(&(index, z)) { return false }
	for &digit in digits {
		number.push(digit as u8);
		if search(blocks, bounds, digits, index + 1, run_block(block, digit, z), failed, number) {
			return true
		}
		number.pop();
	}
	failed.insert((index, z));
	false
}

/// Finds the first accepted model number trying digits in the given
/// order at every position.
fn find_model_number(s: &str, digits: [i64; 9]) -> u64 {
	let blocks = input_blocks_from_str(s);
	let bounds = z_bounds(&blocks);
	let mut number = Vec::with_capacity(blocks.len());
	if !search(&blocks, &bounds, &digits, 0, 0, &mut HashSet::new(), &mut number) {
		panic!("No valid model number!")
	}
	number.into_iter().fold(0, |number, digit| number * 10 + digit as u64)
}


pub(crate) fn part1(s: &str) -> u64 {
	find_model_number(s, [9, 8, 7, 6, 5, 4, 3, 2, 1])
}


pub(crate) fn part2(s: &str) -> u64 {
	find_model_number(s, [1, 2, 3, 4, 5, 6, 7, 8, 9])
}


mod parsing {
	use super::{Inst, Operand, Reg};

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum ProgramError<'a> {
		Opcode { line: usize, found: &'a str },
		Register { line: usize, found: &'a str },
		Operand { line: usize, found: &'a str },
	}

	fn try_reg_from_str(s: &str, line: usize) -> Result<Reg, ProgramError> {
		match s {
			"w" => Ok(Reg::W),
			"x" => Ok(Reg::X),
			"y" => Ok(Reg::Y),
			"z" => Ok(Reg::Z),
			found => Err(ProgramError::Register { line, found }),
		}
	}

	fn try_operand_from_str(s: &str, line: usize) -> Result<Operand, ProgramError> {
		if let Ok(reg) = try_reg_from_str(s, line) {
			return Ok(Operand::Reg(reg))
		}
		s.parse()
			.map(Operand::Num)
			.map_err(|_| ProgramError::Operand { line, found: s })
	}

	pub(super) fn try_program_from_str(s: &str) -> Result<Vec<Inst>, ProgramError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| {
				let l = l + 1;
				let mut tokens = line.split_ascii_whitespace();
				let missing = ProgramError::Opcode { line: l, found: line };
				let opcode = tokens.next().ok_or(missing)?;
				let reg = try_reg_from_str(
					tokens.next().ok_or(ProgramError::Register { line: l, found: "" })?, l)?;
				if opcode == "inp" {
					return Ok(Inst::Inp(reg))
				}
				let operand = try_operand_from_str(
					tokens.next().ok_or(ProgramError::Operand { line: l, found: "" })?, l)?;
				match opcode {
					"add" => Ok(Inst::Add(reg, operand)),
					"mul" => Ok(Inst::Mul(reg, operand)),
					"div" => Ok(Inst::Div(reg, operand)),
					"mod" => Ok(Inst::Mod(reg, operand)),
					"eql" => Ok(Inst::Eql(reg, operand)),
					found => Err(ProgramError::Opcode { line: l, found }),
				}
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn run(s: &str, inputs: impl IntoIterator<Item = i64>) -> [i64; 4] {
		let mut alu = Alu([0; 4]);
		alu.run(&parsing::try_program_from_str(s).unwrap(), inputs);
		alu.0
	}

	#[test]
	fn alu() {
		assert_eq!(run("inp x\nmul x -1", [15]), [0, -15, 0, 0]);

		assert_eq!(run("inp z\ninp x\nmul z 3\neql z x", [1, 3]), [0, 3, 0, 1]);
		assert_eq!(run("inp z\ninp x\nmul z 3\neql z x", [1, 4]), [0, 4, 0, 0]);

		const BINARY: &str = indoc::indoc! { "
			inp w
			add z w
			mod z 2
			div w 2
			add y w
			mod y 2
			div w 2
			add x w
			mod x 2
			div w 2
			mod w 2
		" };
		assert_eq!(run(BINARY, [9]), [1, 0, 0, 1]);
		assert_eq!(run(BINARY, [6]), [0, 1, 1, 0]);
	}

	/// Accepts two-digit numbers where the second digit is one below the
	/// first: the first block pushes its digit plus 5 onto `z`, the
	/// second pops it and compares.
	const INPUT: &str = indoc::indoc! { "
		inp w
		mul z 26
		add z w
		add z 5
		div z 1
		inp w
		mul x 0
		add x z
		mod x 26
		div z 26
		add x -6
		eql x w
		eql x 0
		mul y 0
		add y 25
		mul y x
		add y 1
		mul z y
		mul y 0
		add y w
		add y 14
		mul y x
		add z y
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT), 98);
		assert_eq!(part2(INPUT), 21);
	}
}
