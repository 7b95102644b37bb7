//! A resizable, ordered sequence with an internal "current item" cursor.
//!
//! [`Sequence`] keeps its items contiguously in an owned backing store and
//! tracks a single cursor used for forward traversal and as the reference
//! point for positional insertion ([`Sequence::insert`], [`Sequence::attach`])
//! and removal ([`Sequence::remove_current`]). When the store is full, an
//! insertion grows it according to the policy in [`growth`].

pub mod growth;
mod sequence;

pub use cursor_seq_common::{
    Result,
    error::{Error, ErrorKind},
};
pub use sequence::Sequence;

#[cfg(test)]
mod tests;
