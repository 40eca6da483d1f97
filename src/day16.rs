// Copyright (c) 2022 Bastiaan Marinus van de Weerd


enum Operation {
	Sum,
	Product,
	Minimum,
	Maximum,
	GreaterThan,
	LessThan,
	EqualTo,
}

enum PacketBody {
	Literal(u64),
	Operator { operation: Operation, packets: Vec<Packet> },
}

struct Packet {
	version: u8,
	body: PacketBody,
}

impl Packet {
	fn version_sum(&self) -> u64 {
		self.version as u64 + match &self.body {
			PacketBody::Literal(_) => 0,
			PacketBody::Operator { packets, .. } =>
				packets.iter().map(Packet::version_sum).sum(),
		}
	}

	fn evaluate(&self) -> u64 {
		use Operation::*;
		match &self.body {
			PacketBody::Literal(value) => *value,
			PacketBody::Operator { operation, packets } => {
				let mut values = packets.iter().map(Packet::evaluate);
				match operation {
					Sum => values.sum(),
					Product => values.product(),
					Minimum => values.min().unwrap(),
					Maximum => values.max().unwrap(),
					// The comparisons take exactly two sub-packets
					GreaterThan => (values.next().unwrap() > values.next().unwrap()) as u64,
					LessThan => (values.next().unwrap() < values.next().unwrap()) as u64,
					EqualTo => (values.next().unwrap() == values.next().unwrap()) as u64,
				}
			}
		}
	}
}


fn input_packet_from_str(s: &str) -> Packet {
	parsing::try_packet_from_str(s.trim_end()).unwrap()
}


pub(crate) fn part1(s: &str) -> u64 {
	input_packet_from_str(s).version_sum()
}


pub(crate) fn part2(s: &str) -> u64 {
	input_packet_from_str(s).evaluate()
}


mod parsing {
	use super::{Operation, Packet, PacketBody};

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum PacketError {
		Hex { column: usize, found: char },
		Eof { bit: usize },
		OperationType { bit: usize, found: u8 },
		ComparisonArity { bit: usize, found: usize },
	}

	/// Cursor over the bit stream unpacked from the hexadecimal input.
	struct Bits {
		bits: Vec<bool>,
		pos: usize,
	}

	impl Bits {
		fn take(&mut self, len: usize) -> Result<u64, PacketError> {
			debug_assert!(len <= 64);
			if self.pos + len > self.bits.len() { return Err(PacketError::Eof { bit: self.pos }) }
			let mut value = 0;
			for _ in 0..len {
				value = value << 1 | self.bits[self.pos] as u64;
				self.pos += 1;
			}
			Ok(value)
		}

		fn try_packet(&mut self) -> Result<Packet, PacketError> {
			let version = self.take(3)? as u8;
			let type_id = self.take(3)? as u8;

			if type_id == 4 {
				let mut value = 0;
				loop {
					let group = self.take(5)?;
					value = value << 4 | group & 0b1111;
					if group & 0b10000 == 0 { break }
				}
				return Ok(Packet { version, body: PacketBody::Literal(value) })
			}

			let operation = match type_id {
				0 => Operation::Sum,
				1 => Operation::Product,
				2 => Operation::Minimum,
				3 => Operation::Maximum,
				5 => Operation::GreaterThan,
				6 => Operation::LessThan,
				7 => Operation::EqualTo,
				found => return Err(PacketError::OperationType { bit: self.pos - 3, found }),
			};

			let mut packets = Vec::new();
			if self.take(1)? == 0 {
				let len = self.take(15)? as usize;
				let end = self.pos + len;
				while self.pos < end {
					packets.push(self.try_packet()?);
				}
			} else {
				let num_packets = self.take(11)? as usize;
				for _ in 0..num_packets {
					packets.push(self.try_packet()?);
				}
			}

			if matches!(operation,
					Operation::GreaterThan | Operation::LessThan | Operation::EqualTo)
					&& packets.len() != 2 {
				return Err(PacketError::ComparisonArity { bit: self.pos, found: packets.len() })
			}

			Ok(Packet { version, body: PacketBody::Operator { operation, packets } })
		}
	}

	pub(super) fn try_packet_from_str(s: &str) -> Result<Packet, PacketError> {
		let mut bits = Vec::with_capacity(s.len() * 4);
		for (c, chr) in s.chars().enumerate() {
			let nibble = chr.to_digit(16)
				.ok_or(PacketError::Hex { column: c + 1, found: chr })? as u8;
			bits.extend((0..4).rev().map(|bit| nibble >> bit & 1 == 1));
		}
		// Any bits left over are the zero padding out to the last
		// hexadecimal character
		Bits { bits, pos: 0 }.try_packet()
	}
}


#[test]
fn tests() {
	assert_eq!(part1("D2FE28"), 6);
	assert_eq!(part1("38006F45291200"), 9);
	assert_eq!(part1("EE00D40C823060"), 14);
	assert_eq!(part1("8A004A801A8002F478"), 16);
	assert_eq!(part1("620080001611562C8802118E34"), 12);
	assert_eq!(part1("C0015000016115A2E0802F182340"), 23);
	assert_eq!(part1("A0016C880162017C3686B18A3D4780"), 31);

	assert_eq!(part2("C200B40A82"), 3);
	assert_eq!(part2("04005AC33890"), 54);
	assert_eq!(part2("880086C3E88112"), 7);
	assert_eq!(part2("CE00C43D881120"), 9);
	assert_eq!(part2("D8005AC2A8F0"), 1);
	assert_eq!(part2("F600BC2D8F"), 0);
	assert_eq!(part2("9C005AC2F8F0"), 0);
	assert_eq!(part2("9C0141080250320F1802104A08"), 1);
}
