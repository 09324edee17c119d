//! Shared foundational types used across the Tessera fabric tools.
//!
//! This crate provides the dense [`Arena`] storage used by the circuit library
//! and the fabric registries, and the [`define_id!`] macro for their opaque ID
//! newtypes.

#![warn(missing_docs)]

pub mod arena;

pub use arena::{Arena, ArenaId};
