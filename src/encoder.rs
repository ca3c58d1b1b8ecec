use crate::code_table::CodeTable;
use crate::counts::ByteCounts;
use crate::huffman::{BuildError, HuffmanTree};
use biterator::Bit;
use log::debug;
use std::io::{self, Read, Seek, Write};

/// Errors that can occur while encoding
#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error("Byte {0:#04x} has no code in the table")]
    UnknownSymbol(u8),
}

/// Huffman-code the bytes of `input` and write the resulting code table to
/// `output`.
///
/// `input` is read from its start and left at the position it had on entry.
/// The table is also returned so callers can encode with it.
pub fn encode<R, W>(input: &mut R, output: &mut W) -> Result<CodeTable, EncodeError>
where
    R: Read + Seek,
    W: Write,
{
    let counts = ByteCounts::from_reader(input)?;
    let tree = HuffmanTree::from_counts(&counts)?;
    let table = tree.code_table();
    table.write_to(output)?;

    debug!(
        "Encoding {} input bytes takes {} bits",
        counts.total(),
        table.weighted_length(&counts)
    );
    Ok(table)
}

/// The bits of an input stream, one code after another. Yields an error and
/// then stops at the first byte that has no code.
pub struct EncoderOutput<'t, I>
where
    I: Iterator<Item = u8>,
{
    input: I,
    table: &'t CodeTable,
    pending: std::slice::Iter<'t, Bit>,
    failed: bool,
}

impl<I: Iterator<Item = u8>> Iterator for EncoderOutput<'_, I> {
    type Item = Result<Bit, EncodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(bit) = self.pending.next().cloned() {
                return Some(Ok(bit));
            }
            if self.failed {
                return None;
            }

            let byte = self.input.next()?;
            match self.table.get(byte) {
                Some(code) => self.pending = code.bits().iter(),
                None => {
                    self.failed = true;
                    return Some(Err(EncodeError::UnknownSymbol(byte)));
                }
            }
        }
    }
}

impl CodeTable {
    /// Encode a stream of bytes as a stream of bits using this table.
    ///
    /// The bits are not packed or framed; that is left to the caller.
    pub fn encode<I>(&self, input: I) -> EncoderOutput<'_, I::IntoIter>
    where
        I: IntoIterator<Item = u8>,
    {
        EncoderOutput {
            input: input.into_iter(),
            table: self,
            pending: (&[]).iter(),
            failed: false,
        }
    }
}
