pub mod domain;
pub mod envelope;
pub mod error;
pub mod reference;

pub use domain::*;
pub use envelope::{Envelope, LoginData};
pub use error::{Error, Result};
pub use reference::{Entity, EntityKind, Labeled, Ref};
