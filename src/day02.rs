// Copyright (c) 2022 Bastiaan Marinus van de Weerd


enum Command {
	Forward(i64),
	Down(i64),
	Up(i64),
}


fn input_commands_from_str(s: &str) -> Vec<Command> {
	parsing::try_commands_from_str(s).unwrap()
}


pub(crate) fn part1(s: &str) -> i64 {
	let (mut pos, mut depth) = (0, 0);
	for command in input_commands_from_str(s) {
		use Command::*;
		match command {
			Forward(distance) => pos += distance,
			Down(distance) => depth += distance,
			Up(distance) => depth -= distance,
		}
	}
	pos * depth
}


pub(crate) fn part2(s: &str) -> i64 {
	let (mut pos, mut depth, mut aim) = (0, 0, 0);
	for command in input_commands_from_str(s) {
		use Command::*;
		match command {
			Forward(distance) => { pos += distance; depth += aim * distance }
			Down(distance) => aim += distance,
			Up(distance) => aim -= distance,
		}
	}
	pos * depth
}


mod parsing {
	use super::Command;

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum CommandError<'a> {
		Format(&'a str),
		Direction(&'a str),
		Distance(std::num::ParseIntError),
	}

	impl<'a> TryFrom<&'a str> for Command {
		type Error = CommandError<'a>;
		fn try_from(s: &'a str) -> Result<Self, Self::Error> {
			let (direction, distance) = s.split_once(' ')
				.ok_or(CommandError::Format(s))?;
			let distance = distance.parse().map_err(CommandError::Distance)?;
			match direction {
				"forward" => Ok(Command::Forward(distance)),
				"down" => Ok(Command::Down(distance)),
				"up" => Ok(Command::Up(distance)),
				found => Err(CommandError::Direction(found)),
			}
		}
	}

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) struct CommandsError<'a> { line: usize, source: CommandError<'a> }

	pub(super) fn try_commands_from_str(s: &str) -> Result<Vec<Command>, CommandsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| Command::try_from(line)
				.map_err(|e| CommandsError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		forward 5
		down 5
		forward 8
		up 3
		down 8
		forward 2
	" };
	assert_eq!(part1(INPUT), 150);
	assert_eq!(part2(INPUT), 900);
}
