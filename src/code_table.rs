use crate::counts::ByteCounts;
use biterator::Bit;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

/// The prefix code assigned to a single byte.
#[derive(Debug, Clone, PartialEq)]
pub struct Code(Vec<Bit>);

impl Code {
    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Bit>> for Code {
    fn from(bits: Vec<Bit>) -> Self {
        Code(bits)
    }
}

/// Renders the code as a string of `0` and `1` characters.
impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            let c = match bit {
                Bit::Zero => '0',
                Bit::One => '1',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// A mapping from byte values to their prefix codes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    pub(crate) fn new() -> Self {
        CodeTable {
            codes: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, byte: u8, code: Code) {
        self.codes.insert(byte, code);
    }

    /// The code for `byte`, or `None` if it never occurred in the input.
    pub fn get(&self, byte: u8) -> Option<&Code> {
        self.codes.get(&byte)
    }

    /// The number of bytes with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over the table in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> {
        self.codes.iter().map(|(&byte, code)| (byte, code))
    }

    /// The number of bits needed to encode an input with the given counts.
    pub fn weighted_length(&self, counts: &ByteCounts) -> usize {
        self.iter()
            .map(|(byte, code)| counts.get(byte) * code.len())
            .sum()
    }

    /// Write the table as text, one `<byte as two hex digits> <code>` line
    /// per byte, in ascending byte order.
    pub fn write_to<W: Write>(&self, output: &mut W) -> io::Result<()> {
        for (byte, code) in self.iter() {
            writeln!(output, "{byte:02x} {code}")?;
        }
        output.flush()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use biterator::Bit::{One, Zero};

    fn table() -> CodeTable {
        let mut table = CodeTable::new();
        table.insert(b'b', Code::from(vec![Zero]));
        table.insert(b'a', Code::from(vec![One, One]));
        table.insert(b'c', Code::from(vec![One, Zero]));
        table
    }

    #[test]
    fn code_displays_as_bit_string() {
        assert_eq!(Code::from(vec![One, Zero, Zero, One]).to_string(), "1001");
        assert_eq!(Code::from(Vec::<Bit>::new()).to_string(), "");
    }

    #[test]
    fn iterates_in_byte_order() {
        let table = table();
        let bytes: Vec<u8> = table.iter().map(|(byte, _)| byte).collect();
        assert_eq!(bytes, b"abc".to_vec());
    }

    #[test]
    fn weighted_length_sums_count_times_length() {
        let counts = ByteCounts::from_bytes(b"aabbbc");
        // a: 2 * 2, b: 3 * 1, c: 1 * 2
        assert_eq!(table().weighted_length(&counts), 9);
    }

    #[test]
    fn writes_one_line_per_byte() {
        let mut output: Vec<u8> = Vec::new();
        table().write_to(&mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "61 11\n62 0\n63 10\n");
    }
}
