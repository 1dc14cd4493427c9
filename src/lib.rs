pub mod config;
pub mod console;
pub mod kernel;
pub mod projection;
pub mod thrust;

pub use kernel::reactor::Reactor;
