pub mod api;
pub mod components;
pub mod config;
pub mod interop;
pub mod research;

pub use api::*;
pub use components::*;
pub use config::*;
pub use interop::*;
