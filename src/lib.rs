#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

pub mod epoch;
pub mod error;
pub mod field;
pub mod header;
pub mod label;
pub mod navigation;
pub mod reader;
pub mod version;

#[cfg(test)]
mod tests;

/// Package to include all basic structures
pub mod prelude {
    // export
    pub use crate::{
        epoch::DateTime,
        error::{Error, ErrorKind, Location},
        field::FieldError,
        header::{Comment, CreationInfo, DeltaUtc, FormatDecl, IonAlpha, IonBeta, LeapSeconds},
        label::RecordLabel,
        navigation::{
            parser::{Input, NavParser, State},
            read_nav, read_navfile, KbModel, NavFile, NavMessage, NavReader, Node, NodeKind,
            NodeList,
        },
        reader::{Line, LineReader, LineResult},
        version::Version,
    };

    // pub re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
}

pub use navigation::{read_nav, read_navfile};
