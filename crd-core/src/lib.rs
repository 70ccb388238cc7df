//! crdlib Core - Fundamental types
//!
//! This crate provides the types shared by every crdlib crate:
//! - `UnitError`: Structured errors for unit algebra and conversion
//! - `UnitResult`: Result alias over `UnitError`

mod error;

pub use error::{codes, UnitError, UnitResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{UnitError, UnitResult};
}
