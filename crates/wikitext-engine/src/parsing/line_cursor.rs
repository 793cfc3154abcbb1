use std::io::{self, BufRead};

/// Line terminator of the current line, remembered until the next line is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnding {
    /// End of input, no terminator.
    None,
    Cr,
    Lf,
    CrLf,
}

impl LineEnding {
    fn len(self) -> usize {
        match self {
            LineEnding::None => 0,
            LineEnding::Cr | LineEnding::Lf => 1,
            LineEnding::CrLf => 2,
        }
    }
}

/// Line-structured access over a byte stream with exact offset bookkeeping.
///
/// The cursor exposes one logical line at a time with `\n`, `\r` and `\r\n`
/// stripped, a settable position inside that line, and a running total of
/// bytes consumed since construction. The total is what parsed nodes use to
/// stamp their spans, so it must match byte offsets in the raw source:
///
/// - moving inside a line adjusts the total by the delta, backwards included
/// - advancing adds the unread remainder of the line plus its terminator
#[derive(Debug)]
pub struct LineCursor<R> {
    reader: R,
    /// One-slot lookahead: the byte read after a lone `\r`.
    pending: Option<u8>,
    /// `None` once the input is exhausted.
    line: Option<String>,
    ending: LineEnding,
    consumed_in_line: usize,
    consumed_total: usize,
}

impl<R: BufRead> LineCursor<R> {
    /// Creates a cursor positioned on the first line of `reader`.
    pub fn new(reader: R) -> io::Result<Self> {
        let mut cursor = Self {
            reader,
            pending: None,
            line: Some(String::new()),
            ending: LineEnding::None,
            consumed_in_line: 0,
            consumed_total: 0,
        };
        cursor.advance_line()?;
        Ok(cursor)
    }

    /// The current line without its terminator; `None` at end of input.
    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }

    /// The unconsumed part of the current line.
    pub fn remainder(&self) -> Option<&str> {
        self.line
            .as_deref()
            .map(|line| &line[self.consumed_in_line..])
    }

    pub fn consumed_in_line(&self) -> usize {
        self.consumed_in_line
    }

    /// Moves the in-line position, forwards or backwards.
    ///
    /// Ignored at end of input, past the end of the line, or inside a
    /// multi-byte character.
    pub fn set_consumed_in_line(&mut self, n: usize) {
        let Some(line) = &self.line else {
            return;
        };
        if n > line.len() || !line.is_char_boundary(n) {
            return;
        }
        self.consumed_total = self.consumed_total - self.consumed_in_line + n;
        self.consumed_in_line = n;
    }

    pub fn consumed_total(&self) -> usize {
        self.consumed_total
    }

    /// Reads the next logical line.
    ///
    /// The remainder of the current line and its terminator are added to the
    /// total first. Reaching end of input without reading a single byte
    /// leaves the cursor without a line.
    pub fn advance_line(&mut self) -> io::Result<()> {
        if let Some(line) = &self.line {
            self.consumed_total += line.len().saturating_sub(self.consumed_in_line);
        }
        self.consumed_total += self.ending.len();
        self.ending = LineEnding::None;
        self.consumed_in_line = 0;

        let mut bytes = Vec::new();
        let mut read_any = false;
        while let Some(b) = self.next_byte()? {
            read_any = true;
            match b {
                b'\n' => {
                    self.ending = if self.ending == LineEnding::Cr {
                        LineEnding::CrLf
                    } else {
                        LineEnding::Lf
                    };
                    break;
                }
                // a lone `\r` already ended this line: keep the byte for the next one
                _ if self.ending == LineEnding::Cr => {
                    self.pending = Some(b);
                    break;
                }
                b'\r' => self.ending = LineEnding::Cr,
                _ => bytes.push(b),
            }
        }

        self.line = if read_any {
            let line = String::from_utf8(bytes)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            Some(line)
        } else {
            None
        };
        Ok(())
    }

    pub fn is_at_end(&self) -> bool {
        self.line.is_none()
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(b) = self.pending.take() {
            return Ok(Some(b));
        }
        loop {
            let next = match self.reader.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if next.is_some() {
                self.reader.consume(1);
            }
            return Ok(next);
        }
    }
}
