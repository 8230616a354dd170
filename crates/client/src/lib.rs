//! lostfound_client - CLI client for the lostfound API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::LostFoundClient;
pub use error::{ClientError, Result};
