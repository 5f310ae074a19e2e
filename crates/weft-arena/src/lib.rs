//! Linear bump allocation with marker rollback.
//!
//! [`Arena`] hands out zero-filled allocations from a caller-provided
//! memory region by advancing a single offset. There is no per-allocation
//! free: a [`Marker`] captures the offset at some point, and
//! [`Arena::rollback`] forgets everything allocated after it. This is the
//! only memory source the transcoder uses, and the transcoder's
//! all-or-nothing contract rests on the rollback contract here.
//!
//! Allocations are described by typed [`Span`]s rather than borrowed
//! slices, so a caller can keep allocating while earlier spans are live;
//! spans resolve to slices through [`Arena::slice`] / [`Arena::slice_mut`].
//!
//! This crate is one of two that may contain `unsafe` code (along with
//! `weft-system`). All of it lives in `raw.rs`, each site with a
//! `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod error;
mod raw;
pub mod span;

pub use arena::{Arena, Marker};
pub use error::ArenaError;
pub use span::Span;
