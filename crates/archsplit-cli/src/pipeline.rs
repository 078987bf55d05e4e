//! Reads one header and writes its host and device variants.

use archsplit_blocks::{Mode, transform};
use archsplit_fs::OutputPaths;
use std::path::Path;

use crate::error::{CliError, Result};

/// Picks the output path a mode renders into.
fn output_for(outputs: &OutputPaths, mode: Mode) -> &Path {
    match mode {
        Mode::Host => &outputs.host,
        Mode::Device => &outputs.device,
    }
}

/// Splits `input` into `<stem>_host<ext>` and `<stem>_device<ext>`.
///
/// The input is read once; the host variant is written before the device
/// variant. Existing outputs are overwritten.
pub fn run(input: &Path) -> Result<OutputPaths> {
    if !input.exists() {
        return Err(CliError::MissingInput {
            path: input.to_path_buf(),
        });
    }

    let outputs = OutputPaths::for_input(input);

    println!("Processing {}...", input.display());
    for mode in Mode::ALL {
        println!(
            "Generating {} version: {}",
            mode,
            output_for(&outputs, mode).display()
        );
    }

    let source = archsplit_fs::read_text(input)?;
    tracing::info!(
        input = %input.display(),
        blocks = archsplit_blocks::find_blocks(&source).len(),
        "Splitting header"
    );

    for mode in Mode::ALL {
        let path = output_for(&outputs, mode);
        archsplit_fs::write_text(path, &transform(&source, mode))?;
        println!("Generated {} version: {}", mode, path.display());
    }

    println!("Preprocessing completed successfully!");
    Ok(outputs)
}
