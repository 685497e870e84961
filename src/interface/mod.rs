//! stdin/stdout plumbing for the referee protocol.

pub mod input;
pub mod output;

pub use input::TurnReader;
pub use output::ActionWriter;
