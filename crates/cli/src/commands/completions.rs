//! # CLI Completions Command
//!
//! Shell completions generation for the Groundwork CLI.

use clap::Command;
use clap_complete::Shell;
use error::Result;

/// Generates shell completions for the CLI
///
/// # Arguments
///
/// * `shell` - The shell to generate completions for
/// * `cmd` - The CLI command to generate completions for
///
/// # Returns
///
/// A `Result` indicating success or failure.
pub fn completions(shell: Shell, cmd: &mut Command) -> Result<()> {
    clap_complete::generate(shell, cmd, "groundwork", &mut std::io::stdout());
    Ok(())
}
