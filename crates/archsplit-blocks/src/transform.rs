//! Host and device rendering of guarded blocks.

use crate::block::BLOCK_REGEX;
use regex::Captures;
use std::fmt;

/// Which variant of the header to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Keep every guarded body, drop the marker lines.
    Device,
    /// Drop every guarded region, leaving one blank line in its place.
    Host,
}

impl Mode {
    /// Both modes, in the order the pipeline renders them.
    pub const ALL: [Mode; 2] = [Mode::Host, Mode::Device];

    /// Suffix appended to the file stem of the generated header.
    pub fn suffix(self) -> &'static str {
        match self {
            Mode::Device => "device",
            Mode::Host => "host",
        }
    }

    /// The text a matched block is replaced with.
    fn replacement(self, body: &str) -> &str {
        match self {
            Mode::Device => body,
            Mode::Host => "\n",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Renders `content` for the given mode.
///
/// Every guarded block is replaced in a single left-to-right pass over the
/// original text, so replacements never feed into later matches. Text outside
/// the blocks is returned byte for byte; a document without blocks comes back
/// unchanged.
///
/// # Example
/// ```
/// use archsplit_blocks::{Mode, transform};
///
/// let src = "void f() {\n#ifdef __CUDA_ARCH__\n  do_gpu_work();\n#endif\n}\n";
///
/// assert_eq!(transform(src, Mode::Device), "void f() {\n  do_gpu_work();\n}\n");
/// assert_eq!(transform(src, Mode::Host), "void f() {\n\n}\n");
/// ```
pub fn transform(content: &str, mode: Mode) -> String {
    let mut replaced = 0usize;
    let output = BLOCK_REGEX.replace_all(content, |caps: &Captures<'_>| {
        replaced += 1;
        mode.replacement(&caps[1]).to_string()
    });

    tracing::debug!(%mode, blocks = replaced, "Rendered guarded blocks");
    output.into_owned()
}
