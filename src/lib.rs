pub mod api;
pub mod cache;
pub mod cli;
pub mod clients;
pub mod core;
pub mod fetch;
pub mod host;
pub mod notify;
pub mod worker;

#[cfg(test)]
mod testing;
