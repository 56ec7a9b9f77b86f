//! Parsed nodes: one node per physical line of the navigation file.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    field::{Columns, DecodingError},
    header::{Comment, CreationInfo, DeltaUtc, FormatDecl, IonAlpha, IonBeta, LeapSeconds},
    label::RecordLabel,
    navigation::orbit::{
        BroadcastOrbit0, BroadcastOrbit1, BroadcastOrbit2, BroadcastOrbit3, BroadcastOrbit4,
        BroadcastOrbit5, BroadcastOrbit6, BroadcastOrbit7,
    },
};

/// Type tag of a [Node]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    #[strum(to_string = "RINEX VERSION / TYPE")]
    FormatDecl,
    #[strum(to_string = "PGM / RUN BY / DATE")]
    CreationInfo,
    #[strum(to_string = "COMMENT")]
    Comment,
    #[strum(to_string = "END OF HEADER")]
    EndOfHeader,
    #[strum(to_string = "ION ALPHA")]
    IonAlpha,
    #[strum(to_string = "ION BETA")]
    IonBeta,
    #[strum(to_string = "DELTA-UTC: A0,A1,T,W")]
    DeltaUtc,
    #[strum(to_string = "LEAP SECONDS")]
    LeapSeconds,
    #[strum(to_string = "PRN / EPOCH / SV CLK")]
    BroadcastOrbit0,
    #[strum(to_string = "BROADCAST ORBIT - 1")]
    BroadcastOrbit1,
    #[strum(to_string = "BROADCAST ORBIT - 2")]
    BroadcastOrbit2,
    #[strum(to_string = "BROADCAST ORBIT - 3")]
    BroadcastOrbit3,
    #[strum(to_string = "BROADCAST ORBIT - 4")]
    BroadcastOrbit4,
    #[strum(to_string = "BROADCAST ORBIT - 5")]
    BroadcastOrbit5,
    #[strum(to_string = "BROADCAST ORBIT - 6")]
    BroadcastOrbit6,
    #[strum(to_string = "BROADCAST ORBIT - 7")]
    BroadcastOrbit7,
    /// Not a valid node type
    #[strum(to_string = "INVALID")]
    Invalid,
}

impl NodeKind {
    /// Returns the orbit line index (0-7) for broadcast orbit kinds
    pub fn orbit_index(&self) -> Option<usize> {
        match self {
            Self::BroadcastOrbit0 => Some(0),
            Self::BroadcastOrbit1 => Some(1),
            Self::BroadcastOrbit2 => Some(2),
            Self::BroadcastOrbit3 => Some(3),
            Self::BroadcastOrbit4 => Some(4),
            Self::BroadcastOrbit5 => Some(5),
            Self::BroadcastOrbit6 => Some(6),
            Self::BroadcastOrbit7 => Some(7),
            _ => None,
        }
    }

    /// Returns the broadcast orbit kind of given line index (0-7)
    pub fn broadcast_orbit(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::BroadcastOrbit0),
            1 => Some(Self::BroadcastOrbit1),
            2 => Some(Self::BroadcastOrbit2),
            3 => Some(Self::BroadcastOrbit3),
            4 => Some(Self::BroadcastOrbit4),
            5 => Some(Self::BroadcastOrbit5),
            6 => Some(Self::BroadcastOrbit6),
            7 => Some(Self::BroadcastOrbit7),
            _ => None,
        }
    }

    /// Returns true for header record kinds
    pub fn is_header(&self) -> bool {
        !matches!(self, Self::Invalid) && self.orbit_index().is_none()
    }
}

impl From<RecordLabel> for NodeKind {
    fn from(label: RecordLabel) -> Self {
        match label {
            RecordLabel::FormatDecl => Self::FormatDecl,
            RecordLabel::CreationInfo => Self::CreationInfo,
            RecordLabel::Comment => Self::Comment,
            RecordLabel::IonAlpha => Self::IonAlpha,
            RecordLabel::IonBeta => Self::IonBeta,
            RecordLabel::DeltaUtc => Self::DeltaUtc,
            RecordLabel::LeapSeconds => Self::LeapSeconds,
            RecordLabel::EndOfHeader => Self::EndOfHeader,
            RecordLabel::Unrecognized => Self::Invalid,
        }
    }
}

/// [Node] is the parsed content of one physical line.
/// The payload is entirely determined by the variant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    FormatDecl(FormatDecl),
    CreationInfo(CreationInfo),
    Comment(Comment),
    EndOfHeader,
    IonAlpha(IonAlpha),
    IonBeta(IonBeta),
    DeltaUtc(DeltaUtc),
    LeapSeconds(LeapSeconds),
    BroadcastOrbit0(BroadcastOrbit0),
    BroadcastOrbit1(BroadcastOrbit1),
    BroadcastOrbit2(BroadcastOrbit2),
    BroadcastOrbit3(BroadcastOrbit3),
    BroadcastOrbit4(BroadcastOrbit4),
    BroadcastOrbit5(BroadcastOrbit5),
    BroadcastOrbit6(BroadcastOrbit6),
    BroadcastOrbit7(BroadcastOrbit7),
}

impl Node {
    /// Allocates a [Node] of given kind, with default payload.
    pub fn new(kind: NodeKind) -> Result<Self, Error> {
        Ok(match kind {
            NodeKind::FormatDecl => Self::FormatDecl(Default::default()),
            NodeKind::CreationInfo => Self::CreationInfo(Default::default()),
            NodeKind::Comment => Self::Comment(Default::default()),
            NodeKind::EndOfHeader => Self::EndOfHeader,
            NodeKind::IonAlpha => Self::IonAlpha(Default::default()),
            NodeKind::IonBeta => Self::IonBeta(Default::default()),
            NodeKind::DeltaUtc => Self::DeltaUtc(Default::default()),
            NodeKind::LeapSeconds => Self::LeapSeconds(Default::default()),
            NodeKind::BroadcastOrbit0 => Self::BroadcastOrbit0(Default::default()),
            NodeKind::BroadcastOrbit1 => Self::BroadcastOrbit1(Default::default()),
            NodeKind::BroadcastOrbit2 => Self::BroadcastOrbit2(Default::default()),
            NodeKind::BroadcastOrbit3 => Self::BroadcastOrbit3(Default::default()),
            NodeKind::BroadcastOrbit4 => Self::BroadcastOrbit4(Default::default()),
            NodeKind::BroadcastOrbit5 => Self::BroadcastOrbit5(Default::default()),
            NodeKind::BroadcastOrbit6 => Self::BroadcastOrbit6(Default::default()),
            NodeKind::BroadcastOrbit7 => Self::BroadcastOrbit7(Default::default()),
            NodeKind::Invalid => return Err(Error::UnknownNodeType),
        })
    }

    /// Returns the type tag of this [Node]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::FormatDecl(_) => NodeKind::FormatDecl,
            Self::CreationInfo(_) => NodeKind::CreationInfo,
            Self::Comment(_) => NodeKind::Comment,
            Self::EndOfHeader => NodeKind::EndOfHeader,
            Self::IonAlpha(_) => NodeKind::IonAlpha,
            Self::IonBeta(_) => NodeKind::IonBeta,
            Self::DeltaUtc(_) => NodeKind::DeltaUtc,
            Self::LeapSeconds(_) => NodeKind::LeapSeconds,
            Self::BroadcastOrbit0(_) => NodeKind::BroadcastOrbit0,
            Self::BroadcastOrbit1(_) => NodeKind::BroadcastOrbit1,
            Self::BroadcastOrbit2(_) => NodeKind::BroadcastOrbit2,
            Self::BroadcastOrbit3(_) => NodeKind::BroadcastOrbit3,
            Self::BroadcastOrbit4(_) => NodeKind::BroadcastOrbit4,
            Self::BroadcastOrbit5(_) => NodeKind::BroadcastOrbit5,
            Self::BroadcastOrbit6(_) => NodeKind::BroadcastOrbit6,
            Self::BroadcastOrbit7(_) => NodeKind::BroadcastOrbit7,
        }
    }

    /// Populates this [Node] from given line content
    pub(crate) fn decode(&mut self, line: &str) -> Result<(), DecodingError> {
        let cols = Columns::new(line);
        match self {
            Self::FormatDecl(payload) => *payload = FormatDecl::decode(&cols)?,
            Self::CreationInfo(payload) => *payload = CreationInfo::decode(&cols),
            Self::Comment(payload) => *payload = Comment::decode(&cols),
            Self::EndOfHeader => {},
            Self::IonAlpha(payload) => *payload = IonAlpha::decode(&cols)?,
            Self::IonBeta(payload) => *payload = IonBeta::decode(&cols)?,
            Self::DeltaUtc(payload) => *payload = DeltaUtc::decode(&cols)?,
            Self::LeapSeconds(payload) => *payload = LeapSeconds::decode(&cols)?,
            Self::BroadcastOrbit0(payload) => *payload = BroadcastOrbit0::decode(&cols)?,
            Self::BroadcastOrbit1(payload) => *payload = BroadcastOrbit1::decode(&cols)?,
            Self::BroadcastOrbit2(payload) => *payload = BroadcastOrbit2::decode(&cols)?,
            Self::BroadcastOrbit3(payload) => *payload = BroadcastOrbit3::decode(&cols)?,
            Self::BroadcastOrbit4(payload) => *payload = BroadcastOrbit4::decode(&cols)?,
            Self::BroadcastOrbit5(payload) => *payload = BroadcastOrbit5::decode(&cols)?,
            Self::BroadcastOrbit6(payload) => *payload = BroadcastOrbit6::decode(&cols)?,
            Self::BroadcastOrbit7(payload) => *payload = BroadcastOrbit7::decode(&cols)?,
        }
        Ok(())
    }

    /// Returns the `PRN / EPOCH / SV CLK` payload, if this is one
    pub fn as_broadcast_orbit0(&self) -> Option<&BroadcastOrbit0> {
        match self {
            Self::BroadcastOrbit0(orbit) => Some(orbit),
            _ => None,
        }
    }
}

/// Ordered, append-only list of [Node]s, in file order
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeList {
    nodes: Vec<Node>,
}

impl NodeList {
    /// Appends a [Node] and returns it for in-place population
    pub fn append(&mut self, node: Node) -> Result<&mut Node, Error> {
        self.nodes.try_reserve(1).map_err(|_| Error::OutOfMemory)?;
        self.nodes.push(node);
        let last = self.nodes.len() - 1;
        Ok(&mut self.nodes[last])
    }

    /// Moves all nodes out, leaving this list empty
    pub fn release(&mut self) -> NodeList {
        std::mem::take(self)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Returns the PRN of every navigation message, in file order
    pub fn prns(&self) -> impl Iterator<Item = u8> + '_ {
        self.nodes
            .iter()
            .filter_map(|node| node.as_broadcast_orbit0().map(|orbit| orbit.prn))
    }
}

impl IntoIterator for NodeList {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
