use crate::SYMBOL_COUNT;
use log::debug;
use std::io::{self, Read, Seek, SeekFrom};

const READ_CHUNK: usize = 8 * 1024;

/// Occurrence counts for every byte value, indexed by the byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteCounts([usize; SYMBOL_COUNT]);

impl ByteCounts {
    pub fn new() -> Self {
        ByteCounts([0; SYMBOL_COUNT])
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut counts = Self::new();
        counts.add_bytes(bytes);
        counts
    }

    /// Count every byte of a seekable stream, from its start to its end.
    ///
    /// Afterwards the stream is put back at the position it had on entry,
    /// whether or not counting succeeded, so later readers see it unconsumed.
    pub fn from_reader<R: Read + Seek>(reader: &mut R) -> io::Result<Self> {
        let entry_position = reader.stream_position()?;
        reader.seek(SeekFrom::Start(0))?;
        let counted = Self::count_to_end(reader);
        let restored = reader.seek(SeekFrom::Start(entry_position));

        // A counting failure is reported ahead of a failure to restore.
        let counts = counted?;
        restored?;
        debug!(
            "Counted {} bytes ({} distinct values)",
            counts.total(),
            counts.distinct()
        );
        Ok(counts)
    }

    fn count_to_end<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut counts = Self::new();
        let mut chunk = [0_u8; READ_CHUNK];
        loop {
            match reader.read(&mut chunk) {
                Ok(0) => return Ok(counts),
                Ok(read) => counts.add_bytes(&chunk[..read]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn add_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0[byte as usize] += 1;
        }
    }

    /// How many times `byte` occurred.
    pub fn get(&self, byte: u8) -> usize {
        self.0[byte as usize]
    }

    /// The number of byte values that occurred at least once.
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&count| count > 0).count()
    }

    /// The total number of bytes counted.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// The byte values that occurred, with their counts, in ascending byte
    /// order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        (0..=u8::MAX)
            .zip(self.0.iter().copied())
            .filter(|&(_, count)| count > 0)
    }
}

impl Default for ByteCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[usize; SYMBOL_COUNT]> for ByteCounts {
    fn from(counts: [usize; SYMBOL_COUNT]) -> Self {
        ByteCounts(counts)
    }
}
