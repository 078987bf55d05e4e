//! Output path derivation.
//!
//! `<dir>/<stem><ext>` becomes `<dir>/<stem>_<suffix><ext>`, where `<ext>`
//! is the input's final extension with its dot, or nothing when the input
//! has no extension.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Returns the sibling of `input` whose file stem carries `_<suffix>`.
///
/// # Example
/// ```
/// use archsplit_fs::variant_path;
/// use std::path::Path;
///
/// let out = variant_path(Path::new("include/coll_defs.cuh"), "host");
/// assert_eq!(out, Path::new("include/coll_defs_host.cuh"));
/// ```
pub fn variant_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }
    name.push("_");
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// The pair of generated headers for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub host: PathBuf,
    pub device: PathBuf,
}

impl OutputPaths {
    /// Derives both output paths next to `input`.
    pub fn for_input(input: &Path) -> Self {
        Self {
            host: variant_path(input, "host"),
            device: variant_path(input, "device"),
        }
    }
}
