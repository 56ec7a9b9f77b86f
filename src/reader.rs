//! Buffered line source, for efficient line oriented reading.
use std::{
    fs::File,
    io::{ErrorKind as IoErrorKind, Read},
    path::Path,
};

#[cfg(feature = "log")]
use log::warn;

use crate::error::{Error, Location};

/// Default read buffer depth.
/// RINEX lines are short (80 bytes), this holds several hundred of them.
pub const DEFAULT_BUFFER_SIZE: usize = 0x10000;

/// Default maximal line length, in bytes.
pub const DEFAULT_MAX_LINE_LEN: usize = 0x200 - 1;

/// One right-trimmed line of text: `\n` and `\r` are stripped,
/// trailing spaces are removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Line content
    pub text: String,
    /// 1-based row number
    pub row: usize,
    /// Physical length in bytes, carriage returns excluded
    pub length: usize,
    /// True when content exceeded the maximal line length
    pub truncated: bool,
}

impl Line {
    /// Builds a [Line] from given text, at given row
    pub fn new(text: &str, row: usize) -> Self {
        let text = text
            .trim_end_matches(|c: char| c == '\n' || c == '\r' || c == ' ')
            .to_string();
        let length = text.len();
        Self {
            text,
            row,
            length,
            truncated: false,
        }
    }

    /// Returns true if content exceeded the maximal line length
    /// and was truncated.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Outcome of [LineReader::read_line]
#[derive(Debug)]
pub enum LineResult {
    /// One complete line.
    Line(Line),
    /// Line exceeded the maximal length: returned truncated,
    /// with the corresponding error.
    Overflow(Line, Error),
    /// No more input
    Eof,
    /// Read failure
    Error(Error),
}

/// [LineReader] splits any [Read]able interface into lines,
/// keeping track of the current row for diagnostics.
pub struct LineReader<R: Read> {
    /// Source name, used in diagnostics
    name: String,
    /// Internal buffer
    buf: Vec<u8>,
    rd_ptr: usize,
    wr_ptr: usize,
    /// Current row
    row: usize,
    /// Current column within row
    col: usize,
    max_line_len: usize,
    eof: bool,
    reader: R,
}

impl LineReader<File> {
    /// Opens given file for line reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let name = path.to_string_lossy().to_string();
        let fd = File::open(path).map_err(|source| Error::IoOpen {
            name: name.clone(),
            source,
        })?;
        Self::new(fd, &name)
    }
}

impl<R: Read> LineReader<R> {
    /// Builds a [LineReader] on top of given [Read]able interface.
    /// `name` is only used in diagnostics.
    pub fn new(reader: R, name: &str) -> Result<Self, Error> {
        Self::with_buffer_size(reader, name, DEFAULT_BUFFER_SIZE)
    }

    /// Builds a [LineReader] with custom internal buffer depth
    pub fn with_buffer_size(reader: R, name: &str, size: usize) -> Result<Self, Error> {
        let size = size.max(1);
        let mut buf = Vec::new();
        buf.try_reserve_exact(size)
            .map_err(|_| Error::OutOfMemory)?;
        buf.resize(size, 0);
        Ok(Self {
            name: name.to_string(),
            buf,
            rd_ptr: 0,
            wr_ptr: 0,
            row: 0,
            col: 0,
            max_line_len: DEFAULT_MAX_LINE_LEN,
            eof: false,
            reader,
        })
    }

    /// Updates the maximal line length, in bytes
    pub fn set_max_line_len(&mut self, len: usize) {
        self.max_line_len = len;
    }

    /// Returns the maximal line length, in bytes
    pub fn max_line_len(&self) -> usize {
        self.max_line_len
    }

    /// Source name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows consumed so far
    pub fn row(&self) -> usize {
        self.row
    }

    /// Current column within current row
    pub fn col(&self) -> usize {
        self.col
    }

    fn location(&self) -> Location {
        Location::new(&self.name, self.row)
    }

    /// Refills the internal buffer. Returns false on end of stream.
    fn fill(&mut self) -> Result<bool, Error> {
        if self.eof {
            return Ok(false);
        }
        loop {
            match self.reader.read(&mut self.buf) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(false);
                },
                Ok(size) => {
                    self.rd_ptr = 0;
                    self.wr_ptr = size;
                    return Ok(true);
                },
                Err(e) if e.kind() == IoErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(Error::IoRead {
                        location: self.location(),
                        source,
                    })
                },
            }
        }
    }

    /// Reads next byte, None on end of stream
    fn next_byte(&mut self) -> Result<Option<u8>, Error> {
        if self.rd_ptr == self.wr_ptr && !self.fill()? {
            return Ok(None);
        }
        let byte = self.buf[self.rd_ptr];
        self.rd_ptr += 1;
        Ok(Some(byte))
    }

    /// Reads next line. Content beyond the maximal line length is consumed
    /// and dropped: the truncated line is returned along with
    /// [Error::LineOverflow]. The final line does not need a terminator.
    pub fn read_line(&mut self) -> LineResult {
        let mut content = Vec::<u8>::new();
        if content.try_reserve(self.max_line_len.min(256)).is_err() {
            return LineResult::Error(Error::OutOfMemory);
        }

        self.row += 1;
        self.col = 0;

        let mut empty = true;

        loop {
            let byte = match self.next_byte() {
                Ok(Some(byte)) => byte,
                Ok(None) => {
                    if empty {
                        // nothing left on this row
                        self.row -= 1;
                        return LineResult::Eof;
                    }
                    break;
                },
                Err(e) => return LineResult::Error(e),
            };

            empty = false;

            match byte {
                b'\n' => break,
                b'\r' => {},
                byte => {
                    self.col += 1;
                    if content.len() < self.max_line_len {
                        if content.try_reserve(1).is_err() {
                            return LineResult::Error(Error::OutOfMemory);
                        }
                        content.push(byte);
                    }
                },
            }
        }

        let text = String::from_utf8_lossy(&content);
        let mut line = Line::new(&text, self.row);
        line.length = self.col;
        line.truncated = self.col > self.max_line_len;

        if line.truncated {
            #[cfg(feature = "log")]
            warn!("{}: line too long ({} bytes)", self.location(), self.col);

            let err = Error::LineOverflow {
                location: self.location(),
                length: self.col,
                max: self.max_line_len,
            };
            LineResult::Overflow(line, err)
        } else {
            LineResult::Line(line)
        }
    }
}
