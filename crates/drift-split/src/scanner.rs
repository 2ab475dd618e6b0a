use std::io::Read;

use crate::{SplitError, DOCUMENT_SEPARATOR};

const READ_CHUNK: usize = 8 * 1024;

/// Incremental tokenizer for multi-document streams.
///
/// Scans any `io::Read` for segments terminated by the literal `"\n---"`
/// separator. Unscanned bytes stay buffered, so a separator straddling two
/// reads is never missed, and the buffer grows to hold the largest segment
/// rather than assuming any fixed size.
#[derive(Debug)]
pub struct DocumentScanner<R> {
    reader: R,
    buf: Vec<u8>,
    eof: bool,
    done: bool,
}

impl<R: Read> DocumentScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(READ_CHUNK),
            eof: false,
            done: false,
        }
    }

    /// The next raw (untrimmed) segment, or `None` at end of stream.
    pub fn next_document(&mut self) -> Result<Option<String>, SplitError> {
        if self.done {
            return Ok(None);
        }

        loop {
            if let Some((advance, token_len)) = split_document(&self.buf, self.eof) {
                let token = self.buf[..token_len].to_vec();
                self.buf.drain(..advance);
                if self.eof && self.buf.is_empty() {
                    self.done = true;
                }
                return Ok(Some(String::from_utf8(token)?));
            }

            if self.eof {
                // No token and nothing buffered: end of stream.
                self.done = true;
                return Ok(None);
            }

            self.fill()?;
        }
    }

    fn fill(&mut self) -> Result<(), SplitError> {
        let mut chunk = [0u8; READ_CHUNK];
        let n = self.reader.read(&mut chunk)?;
        if n == 0 {
            self.eof = true;
        } else {
            self.buf.extend_from_slice(&chunk[..n]);
        }
        Ok(())
    }
}

/// Locate the next segment in `data`.
///
/// Returns `(advance, token_len)`: the token is `data[..token_len]` and
/// `advance` bytes are consumed (token, separator, and the remainder of the
/// separator line). `None` means more input is needed, or end of stream when
/// `at_eof` and `data` is empty.
///
/// A separator only terminates a segment once the following newline is seen
/// (or the input ends), so `---` embedded mid-line never splits.
fn split_document(data: &[u8], at_eof: bool) -> Option<(usize, usize)> {
    let sep = DOCUMENT_SEPARATOR.as_bytes();

    if at_eof && data.is_empty() {
        return None;
    }

    if let Some(i) = find(data, sep) {
        let after = &data[i + sep.len()..];
        if after.is_empty() {
            // Separator at the buffer edge: only terminal at end of input.
            return at_eof.then_some((data.len(), i));
        }
        if let Some(j) = after.iter().position(|&b| b == b'\n') {
            return Some((i + sep.len() + j + 1, i));
        }
        // Partial separator line at end of input: the line is discarded.
        return at_eof.then_some((data.len(), i));
    }

    // Final, non-terminated segment.
    at_eof.then_some((data.len(), data.len()))
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
