//! Filesystem helpers for archsplit
//!
//! Derives the generated header paths from an input path and reads/writes
//! whole text files with errors that carry the offending path.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use io::{read_text, write_text};
pub use path::{OutputPaths, variant_path};
