//! Byte-stream front: assembles little-endian 32-bit raw words from a
//! [`Read`](std::io::Read) instance and yields the decoded hits.

use crate::{ConfigError, Hit, Interpreter, InterpreterOptions};

use std::collections::VecDeque;
use std::io::{ErrorKind, Read};

/// [`Decoder`] configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderOptions {
    /// Whether to keep reading after a (temporary) EOF condition. If set,
    /// iteration over [`Hits`] will never return `None` unless the EOF
    /// condition is eventually resolved.
    pub ignore_eof: bool,

    /// Configuration of the wrapped [`Interpreter`].
    pub interpreter: InterpreterOptions,
}

#[derive(Debug, thiserror::Error)]
enum DecoderErrorInt {
    #[error("buffer failed to read from source: {0}")]
    Io(#[from] std::io::Error),
    #[error("EOF encountered")]
    Eof,
    #[error("EOF inside a raw word ({0} of 4 bytes read)")]
    TruncatedWord(usize),
}

/// Set of errors that can occur while decoding from a byte stream.
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte stream ended in the middle of a 32-bit word.
    #[error("byte stream ended inside a raw word ({bytes} of 4 bytes read)")]
    TruncatedWord { bytes: usize },
}

struct WordBuffer<R>
where
    R: Read,
{
    reader: R,
    ignore_eof: bool,
}

impl<R> WordBuffer<R>
where
    R: Read,
{
    /// Reads the next little-endian 32-bit word. Continuously retries on
    /// a temporary EOF if `ignore_eof` is set.
    fn pop_word(&mut self) -> Result<u32, DecoderErrorInt> {
        let mut word = [0u8; 4];
        let mut read = 0;
        while read < word.len() {
            match self.reader.read(&mut word[read..]) {
                Ok(0) if self.ignore_eof => continue,
                Ok(0) if read == 0 => return Err(DecoderErrorInt::Eof),
                Ok(0) => return Err(DecoderErrorInt::TruncatedWord(read)),
                Ok(n) => read += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(u32::from_le_bytes(word))
    }
}

/// Streaming decoder over a byte source.
///
/// Combines an [`Interpreter`] with word assembly from any
/// [`Read`](Read) instance. See the crate-level example.
pub struct Decoder<R>
where
    R: Read,
{
    buffer: WordBuffer<R>,
    interpreter: Interpreter,
}

impl<R> Decoder<R>
where
    R: Read,
{
    /// Creates a decoder reading raw words from `reader`.
    pub fn new(reader: R, options: DecoderOptions) -> Result<Decoder<R>, ConfigError> {
        Ok(Decoder {
            buffer: WordBuffer {
                reader,
                ignore_eof: options.ignore_eof,
            },
            interpreter: Interpreter::new(options.interpreter)?,
        })
    }

    /// Returns a reference to the underlying [`Read`](Read).
    pub fn get_ref(&self) -> &R {
        &self.buffer.reader
    }

    /// Returns a mutable reference to the underlying [`Read`](Read).
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.buffer.reader
    }

    /// Returns an iterator over the decoded [`Hit`]s.
    pub fn hits(&mut self) -> Hits<R> {
        Hits::new(self)
    }
}

/// Iterator that yields [`Hit`]s.
pub struct Hits<'a, R>
where
    R: Read,
{
    decoder: &'a mut Decoder<R>,
    pending: VecDeque<Hit>,
    scratch: Vec<Hit>,
}

impl<'a, R> Hits<'a, R>
where
    R: Read,
{
    pub(super) fn new(decoder: &'a mut Decoder<R>) -> Self {
        Self {
            decoder,
            pending: VecDeque::new(),
            scratch: Vec::new(),
        }
    }
}

impl<'a, R> Iterator for Hits<'a, R>
where
    R: Read,
{
    type Item = Result<Hit, DecoderError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(hit) = self.pending.pop_front() {
                return Some(Ok(hit));
            }

            match self.decoder.buffer.pop_word() {
                Err(DecoderErrorInt::Eof) => return None,
                Err(DecoderErrorInt::Io(io)) => return Some(Err(DecoderError::Io(io))),
                Err(DecoderErrorInt::TruncatedWord(bytes)) => {
                    log::warn!("byte stream ended inside a raw word");
                    return Some(Err(DecoderError::TruncatedWord { bytes }));
                }
                Ok(word) => {
                    self.decoder
                        .interpreter
                        .interpret_word(word, &mut self.scratch);
                    self.pending.extend(self.scratch.drain(..));
                }
            }
        }
    }
}
