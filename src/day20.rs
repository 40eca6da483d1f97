// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const TABLE_LEN: usize = 512;

struct Image {
	/// Lit pixels in the finite region that differs from the background.
	pixels: Vec<bool>,
	width: usize,
	/// State of the infinite background; flips between steps when the
	/// enhancement table maps all-dark neighborhoods to lit.
	background: bool,
}

impl Image {
	fn pixel(&self, x: isize, y: isize) -> bool {
		let (w, h) = (self.width as isize, (self.pixels.len() / self.width) as isize);
		if x < 0 || x >= w || y < 0 || y >= h { return self.background }
		self.pixels[(y * w + x) as usize]
	}

	/// Applies the enhancement table once, growing the tracked region by
	/// one pixel on each side.
	fn enhance(&self, table: &[bool; TABLE_LEN]) -> Image {
		let (w, h) = (self.width as isize, (self.pixels.len() / self.width) as isize);
		let width = self.width + 2;
		let mut pixels = Vec::with_capacity(width * (self.pixels.len() / self.width + 2));
		for y in -1..=h {
			for x in -1..=w {
				let mut index = 0;
				for dy in -1..=1 {
					for dx in -1..=1 {
						index = index << 1 | self.pixel(x + dx, y + dy) as usize;
					}
				}
				pixels.push(table[index]);
			}
		}
		let background = table[if self.background { TABLE_LEN - 1 } else { 0 }];
		Image { pixels, width, background }
	}

	fn count_lit(&self) -> usize {
		// With a lit background the count would be infinite
		assert!(!self.background);
		self.pixels.iter().filter(|&&lit| lit).count()
	}
}


fn input_from_str(s: &str) -> ([bool; TABLE_LEN], Image) {
	parsing::try_enhancement_from_str(s).unwrap()
}

fn lit_after(s: &str, steps: usize) -> usize {
	let (table, mut image) = input_from_str(s);
	for _ in 0..steps {
		image = image.enhance(&table);
	}
	image.count_lit()
}


pub(crate) fn part1(s: &str) -> usize {
	lit_after(s, 2)
}


pub(crate) fn part2(s: &str) -> usize {
	lit_after(s, 50)
}


mod parsing {
	use super::{Image, TABLE_LEN};

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum EnhancementError {
		Pixel { line: usize, column: usize, found: char },
		TableLen { found: usize },
		Width { line: usize, found: usize, expected: usize },
		MissingImage,
	}

	fn try_pixels_from_str(s: &str, l: usize) -> Result<Vec<bool>, EnhancementError> {
		s.chars()
			.enumerate()
			.map(|(c, chr)| match chr {
				'.' => Ok(false),
				'#' => Ok(true),
				found => Err(EnhancementError::Pixel { line: l, column: c + 1, found }),
			})
			.collect()
	}

	pub(super) fn try_enhancement_from_str(s: &str)
	-> Result<([bool; TABLE_LEN], Image), EnhancementError> {
		use EnhancementError as E;

		let mut lines = s.lines().enumerate();
		// The table may wrap across multiple lines, up to the first
		// blank one
		let mut table = Vec::with_capacity(TABLE_LEN);
		for (l, line) in lines.by_ref() {
			if line.is_empty() { break }
			table.extend(try_pixels_from_str(line, l + 1)?);
		}
		let table: [bool; TABLE_LEN] = table.try_into()
			.map_err(|found: Vec<bool>| E::TableLen { found: found.len() })?;

		let (mut width, mut pixels) = (None, Vec::new());
		for (l, line) in lines {
			if line.is_empty() { continue }
			match *width.get_or_insert(line.len()) {
				expected if expected != line.len() =>
					return Err(E::Width { line: l + 1, found: line.len(), expected }),
				_ => ()
			}
			pixels.extend(try_pixels_from_str(line, l + 1)?);
		}
		match width {
			None | Some(0) => Err(E::MissingImage),
			Some(width) => Ok((table, Image { pixels, width, background: false })),
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	/// Table mapping every neighborhood to its center pixel; enhancing
	/// never changes the image.
	fn identity_input(image: &str) -> String {
		let table = (".".repeat(16) + &"#".repeat(16)).repeat(16);
		format!("{table}\n\n{image}")
	}

	/// Table lighting any neighborhood that isn’t fully dark; a single
	/// lit pixel dilates into a square growing by one on each side per
	/// step.
	fn dilating_input(image: &str) -> String {
		let table = ".".to_owned() + &"#".repeat(TABLE_LEN - 1);
		format!("{table}\n\n{image}")
	}

	#[test]
	fn tests() {
		let identity = identity_input("#..\n.#.\n..#");
		assert_eq!(part1(&identity), 3);
		assert_eq!(part2(&identity), 3);

		let dilating = dilating_input("...\n.#.\n...");
		assert_eq!(part1(&dilating), 5 * 5);
		assert_eq!(part2(&dilating), 101 * 101);
	}

	#[test]
	fn flashing_background() {
		// All-dark neighborhoods light up, so the infinite background
		// flashes on; the next step leaves only the one pixel whose
		// whole neighborhood went dark
		let table = "#".to_owned() + &".".repeat(TABLE_LEN - 1);
		let (table, image) = parsing::try_enhancement_from_str(&format!("{table}\n\n...\n.#.\n..."))
			.unwrap();
		let enhanced = image.enhance(&table);
		assert!(enhanced.background);
		assert_eq!(enhanced.enhance(&table).count_lit(), 1);
	}
}
