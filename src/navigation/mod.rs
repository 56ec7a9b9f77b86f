//! GPS navigation message files
mod file;
mod klobuchar;
mod message;
mod node;
mod orbit;
mod session;

pub mod parser;

pub use file::{read_nav, NavFile};
pub use klobuchar::KbModel;
pub use message::NavMessage;
pub use node::{Node, NodeKind, NodeList};
pub use orbit::{
    BroadcastOrbit0, BroadcastOrbit1, BroadcastOrbit2, BroadcastOrbit3, BroadcastOrbit4,
    BroadcastOrbit5, BroadcastOrbit6, BroadcastOrbit7,
};
pub use session::{read_navfile, NavReader};
