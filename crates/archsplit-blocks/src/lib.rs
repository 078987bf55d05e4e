//! `__CUDA_ARCH__` block handling for archsplit.
//!
//! A header guarded with
//!
//! ```text
//! #ifdef __CUDA_ARCH__
//! device-only body
//! #endif
//! ```
//!
//! is rendered twice: once for the device, with every guarded body inlined
//! and the marker lines dropped, and once for the host, with every guarded
//! region collapsed to a single blank line.
//!
//! The `block` module discovers the guarded regions; the `transform` module
//! rewrites a document for one [`Mode`]. Matching is purely textual and does
//! not track nesting: an opening marker pairs with the nearest `#endif`
//! that follows it.

pub mod block;
pub mod transform;

pub use block::{Block, CLOSE_MARKER, OPEN_MARKER, find_blocks, has_blocks};
pub use transform::{Mode, transform};
