//! Error types for the protocol layer.

mod capability;
mod envelope;
mod extension;

pub use capability::*;
pub use envelope::*;
pub use extension::*;
