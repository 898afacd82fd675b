//! Ownership of a scoped, exclusively-owned `Car`, and the three ways a
//! reference can be immutable.
//!
//! The binary (`unique_ptr`) is a thin wrapper over [`scope::run`].

pub mod car;
pub mod pointers;
pub mod scope;

pub use car::{Car, Console};
pub use scope::{run, Transfer};
