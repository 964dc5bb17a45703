pub mod config;
pub mod constants;
pub mod controller;
pub mod damp;
pub mod error;
pub mod images;
pub mod lifecycle;
pub mod resolver;
pub mod state;

pub use config::*;
pub use controller::*;
pub use damp::*;
pub use error::CursorError;
pub use images::*;
pub use lifecycle::*;
pub use resolver::*;
pub use state::*;
