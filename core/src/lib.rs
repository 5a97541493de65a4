//! Conversion engine for Recast.
//!
//! - [`numeric`]: narrowing between numeric widths and literal parsing.
//! - [`convert`]: one converter per target shape.
//! - [`Caster`]: strict and defaulted entry points per shape plus generic
//!   dispatch by [`Shape`](recast_types::Shape).
//!
//! Everything here is synchronous and stateless. The only IO is draining
//! large-object handles, which happens in [`drain`].

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::unused_self)] // Facade methods share one receiver whether or not they read options

mod cast;
pub mod convert;
pub mod drain;
pub mod numeric;
pub mod resolve;

pub use cast::Caster;
pub use convert::{ConvertTo, Converter};
pub use resolve::{NameResolver, ResolveError};
