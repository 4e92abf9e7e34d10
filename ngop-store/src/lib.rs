mod auth;
mod config;
mod email;
mod identity;
mod registry;
mod store;

pub mod seed;
pub mod session;

pub use auth::*;
pub use config::*;
pub use email::*;
pub use identity::*;
pub use registry::*;
pub use store::*;
