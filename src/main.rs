// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day12;
mod day13;
mod day14;
mod day15;
mod day16;
mod day17;
mod day18;
mod day19;
mod day20;
mod day21;
mod day22;
mod day23;
mod day24;
mod day25;


/// Reads the day’s input from the conventional `dayNN_input.txt` file
/// in the working directory.
fn input_string(day: u8) -> String {
	let path = format!("day{day:02}_input.txt");
	match std::fs::read_to_string(&path) {
		Ok(s) => s,
		Err(e) => panic!("Could not read {path}: {e}"),
	}
}

macro_rules! print_answers { ( $day:expr, $( $num:literal ),+ $(,)? ) => {
	paste::paste! { match $day {
		$( $num => {
			let input = input_string($num);
			println!(concat!("Day ", stringify!($num), "a: {}"), [<day $num>]::part1(&input));
			println!(concat!("Day ", stringify!($num), "b: {}"), [<day $num>]::part2(&input));
		} )+
		day => panic!("No such day: {day}"),
	} }
} }

fn main() {
	let day = std::env::args().nth(1)
		.and_then(|arg| arg.parse::<u8>().ok())
		.expect("Expected a day number as the first argument");
	print_answers!(day,
		01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 12, 13,
		14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25);
}
