//! Game implementations.

pub mod generals;
