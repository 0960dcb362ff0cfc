//! Command implementations

pub mod account;
pub mod config;
pub mod instance;
pub mod keys;
pub mod version;
