//! Core types and traits for the lostfound item tracker.
//!
//! Everything in this crate is pure: domain types, validation, the storage
//! contract and its error mapping. I/O lives in the `lostfound` binary.

pub mod item;
pub mod storage;
