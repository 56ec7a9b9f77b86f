//! Navigation file: header parameters and navigation messages
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "log")]
use log::debug;

use gnss::prelude::SV;

use crate::{
    error::Error,
    header::{CreationInfo, DeltaUtc, FormatDecl},
    navigation::{
        klobuchar::KbModel,
        message::NavMessage,
        node::{Node, NodeKind, NodeList},
        session::read_navfile,
    },
    version::Version,
};

/// Pulls the next orbit line of a message out of the node stream
macro_rules! next_orbit {
    ($nodes:expr, $variant:ident) => {
        match $nodes.next() {
            Some(Node::$variant(orbit)) => orbit,
            Some(node) => {
                return Err(Error::OrbitSequence {
                    expected: NodeKind::$variant,
                    found: node.kind(),
                })
            },
            None => {
                return Err(Error::IncompleteMessage {
                    expected: NodeKind::$variant,
                })
            },
        }
    };
}

/// [NavFile] gathers the header parameters and every [NavMessage]
/// of one navigation file.
/// ```
/// use rinex_nav::prelude::*;
///
/// let nav = read_nav("test_resources/NAV/V2/brdc0010.21n")
///     .unwrap();
///
/// assert_eq!(nav.leap_seconds, Some(18));
/// assert!(nav.klobuchar().is_some());
/// assert_eq!(nav.messages.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavFile {
    /// `RINEX VERSION / TYPE`
    pub format: Option<FormatDecl>,
    /// `PGM / RUN BY / DATE`
    pub creation: Option<CreationInfo>,
    /// Header comments, in order of appearance
    pub comments: Vec<String>,
    /// Ionospheric parameters A0-A3
    pub iono_alpha: Option<[f64; 4]>,
    /// Ionospheric parameters B0-B3
    pub iono_beta: Option<[f64; 4]>,
    /// GPS to UTC parameters
    pub delta_utc: Option<DeltaUtc>,
    /// Leap seconds
    pub leap_seconds: Option<i32>,
    /// Navigation messages, in file order
    pub messages: Vec<NavMessage>,
}

impl NavFile {
    /// Builds a [NavFile] from a complete [NodeList].
    /// Orbit lines must come in complete blocks of 8 consecutive nodes.
    pub fn from_nodes(nodes: NodeList) -> Result<Self, Error> {
        let mut file = Self::default();
        let mut nodes = nodes.into_iter();

        while let Some(node) = nodes.next() {
            match node {
                Node::FormatDecl(decl) => file.format = Some(decl),
                Node::CreationInfo(info) => file.creation = Some(info),
                Node::Comment(comment) => file.comments.push(comment.text),
                Node::EndOfHeader => {},
                Node::IonAlpha(ion) => file.iono_alpha = Some(ion.alpha),
                Node::IonBeta(ion) => file.iono_beta = Some(ion.beta),
                Node::DeltaUtc(utc) => file.delta_utc = Some(utc),
                Node::LeapSeconds(leap) => file.leap_seconds = Some(leap.leap_seconds),
                Node::BroadcastOrbit0(o0) => {
                    let o1 = next_orbit!(nodes, BroadcastOrbit1);
                    let o2 = next_orbit!(nodes, BroadcastOrbit2);
                    let o3 = next_orbit!(nodes, BroadcastOrbit3);
                    let o4 = next_orbit!(nodes, BroadcastOrbit4);
                    let o5 = next_orbit!(nodes, BroadcastOrbit5);
                    let o6 = next_orbit!(nodes, BroadcastOrbit6);
                    let o7 = next_orbit!(nodes, BroadcastOrbit7);
                    file.messages.push(NavMessage::from_orbits(
                        &o0, &o1, &o2, &o3, &o4, &o5, &o6, &o7,
                    ));
                },
                node => {
                    return Err(Error::OrbitSequence {
                        expected: NodeKind::BroadcastOrbit0,
                        found: node.kind(),
                    })
                },
            }
        }

        #[cfg(feature = "log")]
        debug!("{} navigation messages", file.messages.len());

        Ok(file)
    }

    /// Returns declared format revision
    pub fn version(&self) -> Option<Version> {
        self.format.as_ref().map(|decl| decl.version)
    }

    pub fn has_iono_alpha(&self) -> bool {
        self.iono_alpha.is_some()
    }

    pub fn has_iono_beta(&self) -> bool {
        self.iono_beta.is_some()
    }

    pub fn has_delta_utc(&self) -> bool {
        self.delta_utc.is_some()
    }

    pub fn has_leap_seconds(&self) -> bool {
        self.leap_seconds.is_some()
    }

    /// Returns the Klobuchar model, when both alpha and beta
    /// parameters were broadcast.
    pub fn klobuchar(&self) -> Option<KbModel> {
        Some(KbModel {
            alpha: self.iono_alpha?,
            beta: self.iono_beta?,
        })
    }

    /// Returns an iterator over the satellites, in order of first appearance
    pub fn sv_iter(&self) -> impl Iterator<Item = SV> + '_ {
        let mut seen = Vec::<SV>::new();
        self.messages.iter().filter_map(move |msg| {
            let sv = msg.sv();
            if seen.contains(&sv) {
                None
            } else {
                seen.push(sv);
                Some(sv)
            }
        })
    }

    /// Returns an iterator over the messages of given satellite
    pub fn sv_messages(&self, sv: SV) -> impl Iterator<Item = &NavMessage> + '_ {
        self.messages.iter().filter(move |msg| msg.sv() == sv)
    }
}

/// Reads given navigation file and gathers its messages
pub fn read_nav<P: AsRef<Path>>(path: P) -> Result<NavFile, Error> {
    NavFile::from_nodes(read_navfile(path)?)
}
