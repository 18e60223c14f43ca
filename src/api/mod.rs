pub mod routes;
mod server;
pub use server::{app, serve};
pub mod proxy;
pub mod public;
mod state;
pub use state::AppState;
