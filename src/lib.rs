pub mod error;
pub mod interface;
pub mod kernel;
pub mod world;

// Re-export specific items for convenient access
pub use error::CoreError;
pub use kernel::reactor::Reactor;
