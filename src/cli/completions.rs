//! Shell completion script generation

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Binary name completions are registered under
const BIN_NAME: &str = "inspecta";

/// Write the completion script for `shell` to `out`.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut command = Cli::command();
    generate(shell, &mut command, BIN_NAME, out);
}

/// Print the completion script for `shell` to stdout
pub fn run(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_cover_subcommands() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();

        assert!(script.contains("inspecta"));
        assert!(script.contains("login"));
        assert!(script.contains("report"));
    }
}
