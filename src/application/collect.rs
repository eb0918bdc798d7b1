//! Bounded slurp of an input stream of unknown length

use std::io::{ErrorKind, Read};

use tracing::debug;

use crate::domain::{InputError, InputTooLarge};

/// Ceiling on accepted input (1 GiB)
pub const INPUT_LIMIT: usize = 1024 * 1024 * 1024;

const INITIAL_CAPACITY: usize = 2048;
const GROWTH_FACTOR: usize = 4;

/// Reads a whole stream into memory, refusing anything above a size ceiling
#[derive(Debug, Clone)]
pub struct InputCollector {
    limit: usize,
}

impl InputCollector {
    /// Create a collector with the default 1 GiB ceiling
    pub fn new() -> Self {
        Self { limit: INPUT_LIMIT }
    }

    /// Create a collector with a custom ceiling
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    #[cfg(test)]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Read `source` until end of stream.
    ///
    /// # Errors
    /// `InputError::TooLarge` if more than `limit` bytes were available,
    /// `InputError::Read` if the stream itself failed
    pub fn collect<R: Read>(&self, source: R) -> Result<Vec<u8>, InputError> {
        self.collect_counting(source).map(|(bytes, _)| bytes)
    }

    /// Same as [`collect`](Self::collect), also returning the number of buffer growths.
    pub(crate) fn collect_counting<R: Read>(
        &self,
        mut source: R,
    ) -> Result<(Vec<u8>, u32), InputError> {
        let mut buf = vec![0u8; INITIAL_CAPACITY];
        let mut len = 0;
        let mut growths = 0;

        loop {
            if len == buf.len() {
                // Clamped to limit + 1 so one extra byte can reveal the overflow.
                // Once there, the free space is empty and the next read yields 0.
                let grown = if len < self.limit / GROWTH_FACTOR {
                    len * GROWTH_FACTOR
                } else {
                    self.limit + 1
                };
                if grown > len {
                    buf.resize(grown, 0);
                    growths += 1;
                    debug!(capacity = grown, "grew input buffer");
                }
            }

            let n = match source.read(&mut buf[len..]) {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(InputError::Read(e)),
            };
            if n == 0 {
                break;
            }
            len += n;
        }

        if len > self.limit {
            return Err(InputTooLarge { limit: self.limit }.into());
        }

        buf.truncate(len);
        buf.shrink_to_fit();
        Ok((buf, growths))
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}
