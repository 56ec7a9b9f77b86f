//! Navigation file state machine.
//!
//! The header section ends on the first line that carries no known label:
//! that line is the first line of the first navigation message. Messages
//! are 8 lines long and the file may only end on a message boundary.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "log")]
use log::{debug, error, trace};

use crate::{
    error::{Error, Location},
    label::RecordLabel,
    navigation::node::{Node, NodeKind, NodeList},
    reader::Line,
};

/// [NavParser] states
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// Within the header section
    #[default]
    ExpectHeader,
    /// Expecting `PRN / EPOCH / SV CLK`
    BroadcastOrbit0,
    BroadcastOrbit1,
    BroadcastOrbit2,
    BroadcastOrbit3,
    BroadcastOrbit4,
    BroadcastOrbit5,
    BroadcastOrbit6,
    BroadcastOrbit7,
    /// Message boundary: next message or end of file
    ExpectOrbitOrEof,
    /// Fatal error occurred
    Error,
    /// End of file reached on a message boundary
    Finished,
}

impl State {
    /// Returns true once no more input will be processed
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Error | Self::Finished)
    }

    /// Orbit line expected in this state
    fn orbit_kind(&self) -> Option<NodeKind> {
        match self {
            Self::BroadcastOrbit0 => Some(NodeKind::BroadcastOrbit0),
            Self::BroadcastOrbit1 => Some(NodeKind::BroadcastOrbit1),
            Self::BroadcastOrbit2 => Some(NodeKind::BroadcastOrbit2),
            Self::BroadcastOrbit3 => Some(NodeKind::BroadcastOrbit3),
            Self::BroadcastOrbit4 => Some(NodeKind::BroadcastOrbit4),
            Self::BroadcastOrbit5 => Some(NodeKind::BroadcastOrbit5),
            Self::BroadcastOrbit6 => Some(NodeKind::BroadcastOrbit6),
            Self::BroadcastOrbit7 => Some(NodeKind::BroadcastOrbit7),
            _ => None,
        }
    }

    /// State following a successfully decoded orbit line
    fn next_orbit(&self) -> Self {
        match self {
            Self::BroadcastOrbit0 => Self::BroadcastOrbit1,
            Self::BroadcastOrbit1 => Self::BroadcastOrbit2,
            Self::BroadcastOrbit2 => Self::BroadcastOrbit3,
            Self::BroadcastOrbit3 => Self::BroadcastOrbit4,
            Self::BroadcastOrbit4 => Self::BroadcastOrbit5,
            Self::BroadcastOrbit5 => Self::BroadcastOrbit6,
            Self::BroadcastOrbit6 => Self::BroadcastOrbit7,
            Self::BroadcastOrbit7 => Self::ExpectOrbitOrEof,
            other => *other,
        }
    }
}

/// One input token
#[derive(Debug, Copy, Clone)]
pub enum Input<'a> {
    Line(&'a Line),
    /// End of input
    Eof,
}

/// Outcome of one dispatch step
enum Transition {
    /// Input consumed, move to given state
    Consume(State),
    /// Move to given state and dispatch the same input again
    Null(State),
}

/// [NavParser] builds the [NodeList] of one navigation file, one input at a time.
/// The first error is sticky: once in [State::Error], input is ignored.
#[derive(Debug)]
pub struct NavParser {
    name: String,
    state: State,
    nodes: NodeList,
    error: Option<Error>,
    /// Row of the last line consumed
    row: usize,
}

impl NavParser {
    /// Creates a new [NavParser]. `name` prefixes the diagnostics.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            state: State::default(),
            nodes: NodeList::default(),
            error: None,
            row: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the session error, if any
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Nodes built so far
    pub fn nodes(&self) -> &NodeList {
        &self.nodes
    }

    /// Consumes one input, following null transitions until the input is
    /// consumed. Returns the new state.
    pub fn consume(&mut self, input: Input) -> State {
        if let Input::Line(line) = input {
            self.row = line.row;
        }
        loop {
            match self.dispatch(input) {
                Ok(Transition::Consume(next)) => {
                    #[cfg(feature = "log")]
                    trace!("{}: {} -> {}", self.location(), self.state, next);
                    self.state = next;
                    break;
                },
                Ok(Transition::Null(next)) => {
                    #[cfg(feature = "log")]
                    debug!("{}: {} -> {} (null)", self.location(), self.state, next);
                    self.state = next;
                },
                Err(e) => {
                    self.fail(e);
                    break;
                },
            }
        }
        self.state
    }

    /// Enters [State::Error] with given error, unless an error already occurred.
    /// Nodes built so far are discarded.
    pub(crate) fn fail(&mut self, err: Error) {
        if self.error.is_some() {
            return;
        }
        #[cfg(feature = "log")]
        error!("{}", err);
        self.nodes.release();
        self.error = Some(err);
        self.state = State::Error;
    }

    /// Terminates this session, signaling end of input if that did not happen yet.
    pub fn finish(mut self) -> Result<NodeList, Error> {
        if !self.state.is_terminal() {
            self.consume(Input::Eof);
        }
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(self.nodes.release()),
        }
    }

    fn location(&self) -> Location {
        Location::new(&self.name, self.row)
    }

    fn dispatch(&mut self, input: Input) -> Result<Transition, Error> {
        match (self.state, input) {
            (State::Error, _) | (State::Finished, _) => Ok(Transition::Consume(self.state)),
            (State::ExpectOrbitOrEof, Input::Eof) => Ok(Transition::Consume(State::Finished)),
            (State::ExpectOrbitOrEof, Input::Line(_)) => Ok(Transition::Null(State::BroadcastOrbit0)),
            (state, Input::Eof) => Err(Error::UnexpectedEof {
                location: self.location(),
                state,
            }),
            (State::ExpectHeader, Input::Line(line)) => {
                let label = RecordLabel::classify(line.as_str());
                if !label.is_header() {
                    return Ok(Transition::Null(State::BroadcastOrbit0));
                }
                self.decode(NodeKind::from(label), line)?;
                Ok(Transition::Consume(State::ExpectHeader))
            },
            (state, Input::Line(line)) => {
                let kind = state.orbit_kind().ok_or(Error::UnknownNodeType)?;
                self.decode(kind, line)?;
                Ok(Transition::Consume(state.next_orbit()))
            },
        }
    }

    /// Appends a new node of given kind, populated from given line
    fn decode(&mut self, kind: NodeKind, line: &Line) -> Result<(), Error> {
        let name = &self.name;
        let node = self.nodes.append(Node::new(kind)?)?;
        node.decode(line.as_str()).map_err(|e| Error::Field {
            location: Location::new(name, line.row),
            record: kind,
            field: e.field,
            source: e.source,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        error::ErrorKind,
        tests::toolkit::{header_line, nav_block},
    };
    use strum::IntoEnumIterator;

    fn feed(parser: &mut NavParser, content: &[String]) -> State {
        for (i, text) in content.iter().enumerate() {
            parser.consume(Input::Line(&Line::new(text, i + 1)));
        }
        parser.state()
    }

    fn header() -> Vec<String> {
        vec![
            header_line("     2.11           N: GPS NAV DATA", "RINEX VERSION / TYPE"),
            header_line("", "END OF HEADER"),
        ]
    }

    /// Drives a parser into given state
    fn parser_in(state: State) -> NavParser {
        let mut parser = NavParser::new("test");
        let block = nav_block(1);
        match state {
            State::ExpectHeader => {},
            State::Error => parser.fail(Error::OutOfMemory),
            State::Finished => {
                feed(&mut parser, &block);
                parser.consume(Input::Eof);
            },
            State::ExpectOrbitOrEof => {
                feed(&mut parser, &block);
            },
            orbit => {
                let index = orbit.orbit_kind().and_then(|k| k.orbit_index()).unwrap();
                feed(&mut parser, &block[..index]);
                if index == 0 {
                    // enter data section without consuming anything
                    parser.state = State::BroadcastOrbit0;
                }
            },
        }
        assert_eq!(parser.state(), state);
        parser
    }

    #[test]
    fn header_section() {
        let mut parser = NavParser::new("test");
        assert_eq!(feed(&mut parser, &header()), State::ExpectHeader);
        assert_eq!(parser.nodes().len(), 2);
        assert_eq!(parser.nodes().get(1), Some(&Node::EndOfHeader));
    }

    #[test]
    fn null_transition_from_header() {
        let mut parser = NavParser::new("test");
        feed(&mut parser, &header());
        let block = nav_block(3);
        let line = Line::new(&block[0], 3);
        assert_eq!(parser.consume(Input::Line(&line)), State::BroadcastOrbit1);
        assert_eq!(parser.nodes().len(), 3);
        assert_eq!(parser.nodes().prns().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn null_transition_between_messages() {
        let mut parser = NavParser::new("test");
        let mut content = nav_block(3);
        content.extend(nav_block(7));
        assert_eq!(feed(&mut parser, &content[..8]), State::ExpectOrbitOrEof);
        let line = Line::new(&content[8], 9);
        assert_eq!(parser.consume(Input::Line(&line)), State::BroadcastOrbit1);
        feed(&mut parser, &content[9..]);
        assert_eq!(parser.consume(Input::Eof), State::Finished);
        let nodes = parser.finish().unwrap();
        assert_eq!(nodes.len(), 16);
        assert_eq!(nodes.prns().collect::<Vec<_>>(), vec![3, 7]);
    }

    #[test]
    fn totality() {
        let data = nav_block(1);
        let header = header();
        for state in State::iter() {
            // Eof
            let mut parser = parser_in(state);
            let next = parser.consume(Input::Eof);
            match state {
                State::ExpectOrbitOrEof | State::Finished => assert_eq!(next, State::Finished),
                _ => {
                    assert_eq!(next, State::Error);
                    let kind = parser.error().map(|e| e.kind());
                    if state == State::Error {
                        assert_eq!(kind, Some(ErrorKind::OutOfMemory));
                    } else {
                        assert_eq!(kind, Some(ErrorKind::Eof), "state {}", state);
                    }
                },
            }

            // header line
            let mut parser = parser_in(state);
            let line = Line::new(&header[1], 100);
            let next = parser.consume(Input::Line(&line));
            match state {
                State::ExpectHeader => assert_eq!(next, State::ExpectHeader),
                State::Finished => assert_eq!(next, State::Finished),
                // not a valid orbit line
                _ => assert_eq!(next, State::Error, "state {}", state),
            }

            // data line matching the expected orbit line
            let mut parser = parser_in(state);
            let index = state
                .orbit_kind()
                .and_then(|k| k.orbit_index())
                .unwrap_or(0);
            let line = Line::new(&data[index], 100);
            let next = parser.consume(Input::Line(&line));
            match state {
                State::ExpectHeader | State::ExpectOrbitOrEof => {
                    assert_eq!(next, State::BroadcastOrbit1)
                },
                State::Error | State::Finished => assert_eq!(next, state),
                orbit => assert_eq!(next, orbit.next_orbit()),
            }
        }
    }

    #[test]
    fn unexpected_eof() {
        let mut parser = NavParser::new("nav.21n");
        let mut content = header();
        content.extend(nav_block(1).into_iter().take(7));
        assert_eq!(feed(&mut parser, &content), State::BroadcastOrbit7);
        assert_eq!(parser.consume(Input::Eof), State::Error);
        assert!(parser.nodes().is_empty());
        let err = parser.finish().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Eof);
        assert_eq!(
            err.to_string(),
            "nav.21n:9: unexpected end of file while in state BroadcastOrbit7"
        );
    }

    #[test]
    fn empty_input() {
        let parser = NavParser::new("empty.21n");
        let err = parser.finish().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Eof);
    }

    #[test]
    fn sticky_error() {
        let mut parser = NavParser::new("nav.21n");
        let mut content = header();
        let mut block = nav_block(1);
        block[2] = block[2].replacen("0.", "1.2.", 1);
        content.extend(block);
        assert_eq!(feed(&mut parser, &content), State::Error);
        let err = parser.error().unwrap();
        assert_eq!(err.kind(), ErrorKind::FieldSyntax);
        assert_eq!(err.location().map(|l| l.row), Some(5));
        assert!(err.to_string().starts_with("nav.21n:5: BROADCAST ORBIT - 2: cuc: "));

        // further input is ignored
        assert_eq!(parser.consume(Input::Eof), State::Error);
        parser.fail(Error::OutOfMemory);
        assert_eq!(parser.error().map(|e| e.kind()), Some(ErrorKind::FieldSyntax));
        assert!(parser.nodes().is_empty());
    }

    #[test]
    fn finish_signals_eof() {
        let mut parser = NavParser::new("test");
        feed(&mut parser, &nav_block(30));
        assert_eq!(parser.state(), State::ExpectOrbitOrEof);
        let nodes = parser.finish().unwrap();
        assert_eq!(nodes.len(), 8);
    }
}
