//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Split a header into host and device variants.
///
/// Every `#ifdef __CUDA_ARCH__ ... #endif` block is inlined in
/// `<stem>_device<ext>` and replaced by a blank line in `<stem>_host<ext>`.
/// Both files are written next to the input, overwriting existing files.
#[derive(Parser, Debug)]
#[command(name = "archsplit")]
#[command(author, version, about)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Header file to split
    pub input_file: PathBuf,
}

/// Example line shown under the usage text.
pub const USAGE_EXAMPLE: &str =
    "Example: archsplit src/include/internal/non_abi/nvshmemi_h_to_d_coll_defs.cuh";
