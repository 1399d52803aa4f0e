//! # grid-probe
//!
//! An engine-agnostic interpretation crate that drives a probe through a bounded 3D grid
//! from a list of single-character commands.
//!
//! A [`Grid`] holds the bounds and obstacles, a [`Probe`] holds position and one of six
//! [`Facing`]s, and the [`CommandInterpreter`] maps tokens to [`ProbeOp`]s while counting
//! blocked moves and collecting invalid tokens. [`RunSpec`] ties the pieces together and
//! produces a serializable [`RunReport`].

pub mod error;
pub mod facing;
pub mod grid;
pub mod interpreter;
pub mod probe;
pub mod report;
pub mod run;

pub use error::*;
pub use facing::*;
pub use grid::*;
pub use interpreter::*;
pub use probe::*;
pub use report::*;
pub use run::*;
