//! Discovery of `__CUDA_ARCH__` guarded blocks.
//!
//! A block spans from the opening marker to the first closing marker after
//! it, including the rest of the closing marker's line:
//! ```text
//! #ifdef __CUDA_ARCH__
//! body here
//! #endif
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Directive that opens a device-only region.
pub const OPEN_MARKER: &str = "#ifdef __CUDA_ARCH__";

/// Directive that closes a device-only region.
pub const CLOSE_MARKER: &str = "#endif";

/// Opening marker, optional whitespace, a newline, then the shortest body up
/// to the next closing marker. A marker that starts its line takes the line's
/// indentation with it; a closing marker that starts its line also takes its
/// trailing blanks and line break, so marker lines vanish whole.
pub(crate) static BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let open = regex::escape(OPEN_MARKER);
    let close = regex::escape(CLOSE_MARKER);
    Regex::new(&format!(
        r"(?ms)(?:^[ \t]*)?{open}\s*\n(.*?)(?:^[ \t]*{close}(?:[ \t]*\r?\n)?|{close})"
    ))
    .expect("Invalid block regex")
});

/// A guarded region found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Byte offset where the region starts, indentation of the opening
    /// marker line included.
    pub start: usize,
    /// Byte offset just past the end of the region.
    pub end: usize,
    /// Text between the opening marker line and the closing marker.
    pub body: String,
    /// The 1-based line number of the opening marker.
    pub start_line: usize,
}

/// Finds every guarded block in `content`, in order of appearance.
///
/// These are exactly the regions [`crate::transform()`] replaces. An opening
/// marker with no closing marker after it yields no block.
///
/// # Example
/// ```
/// use archsplit_blocks::find_blocks;
///
/// let content = "int x;\n#ifdef __CUDA_ARCH__\n  gpu();\n#endif\n";
///
/// let blocks = find_blocks(content);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].body, "  gpu();\n");
/// assert_eq!(blocks[0].start_line, 2);
/// ```
pub fn find_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut scanned = 0;
    let mut line = 1;

    for caps in BLOCK_REGEX.captures_iter(content) {
        let (Some(whole), Some(body)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        line += content[scanned..whole.start()].matches('\n').count();
        scanned = whole.start();

        blocks.push(Block {
            start: whole.start(),
            end: whole.end(),
            body: body.as_str().to_string(),
            start_line: line,
        });
    }

    blocks
}

/// Checks whether `content` contains at least one complete guarded block.
///
/// ```
/// use archsplit_blocks::has_blocks;
///
/// assert!(has_blocks("#ifdef __CUDA_ARCH__\nx\n#endif"));
/// assert!(!has_blocks("#ifdef __CUDA_ARCH__\nnever closed\n"));
/// ```
pub fn has_blocks(content: &str) -> bool {
    BLOCK_REGEX.is_match(content)
}
