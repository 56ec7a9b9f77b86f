//! Parser session: one [LineReader] driving one [NavParser]
use std::{fs::File, io::Read, path::Path};

use crate::{
    error::Error,
    navigation::{
        node::NodeList,
        parser::{Input, NavParser, State},
    },
    reader::{LineReader, LineResult},
};

/// [NavReader] reads one navigation file to completion.
/// ```
/// use rinex_nav::prelude::*;
///
/// let nodes = NavReader::open("test_resources/NAV/V2/prn3prn7.21n")
///     .unwrap()
///     .read_nodes()
///     .unwrap();
///
/// assert_eq!(nodes.len(), 18);
/// assert_eq!(nodes.prns().collect::<Vec<_>>(), vec![3, 7]);
/// ```
pub struct NavReader<R: Read> {
    lines: LineReader<R>,
    parser: NavParser,
}

impl NavReader<File> {
    /// Opens given navigation file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let lines = LineReader::open(path)?;
        let parser = NavParser::new(lines.name());
        Ok(Self { lines, parser })
    }
}

impl<R: Read> NavReader<R> {
    /// Builds a [NavReader] on top of any [Read]able interface.
    /// `name` prefixes the diagnostics.
    pub fn new(reader: R, name: &str) -> Result<Self, Error> {
        Ok(Self {
            lines: LineReader::new(reader, name)?,
            parser: NavParser::new(name),
        })
    }

    /// Builds a [NavReader] with custom read buffer depth
    pub fn with_buffer_size(reader: R, name: &str, size: usize) -> Result<Self, Error> {
        Ok(Self {
            lines: LineReader::with_buffer_size(reader, name, size)?,
            parser: NavParser::new(name),
        })
    }

    /// Copies and returns [NavReader] with updated maximal line length
    pub fn with_max_line_len(mut self, len: usize) -> Self {
        self.lines.set_max_line_len(len);
        self
    }

    /// Reads all lines until end of file or first error.
    /// Returns the complete [NodeList]: partial content is never returned.
    pub fn read_nodes(mut self) -> Result<NodeList, Error> {
        while !self.parser.state().is_terminal() {
            match self.lines.read_line() {
                LineResult::Line(line) => {
                    self.parser.consume(Input::Line(&line));
                },
                LineResult::Overflow(line, err) => {
                    // truncated content is still processed,
                    // its own error prevails over the overflow
                    if self.parser.consume(Input::Line(&line)) != State::Error {
                        self.parser.fail(err);
                    }
                },
                LineResult::Eof => {
                    self.parser.consume(Input::Eof);
                },
                LineResult::Error(err) => self.parser.fail(err),
            }
        }
        self.parser.finish()
    }
}

/// Reads given navigation file into a [NodeList]
pub fn read_navfile<P: AsRef<Path>>(path: P) -> Result<NodeList, Error> {
    NavReader::open(path)?.read_nodes()
}
