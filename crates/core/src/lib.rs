//! Domain types shared by the database and API layers.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod types;
pub mod votes;
