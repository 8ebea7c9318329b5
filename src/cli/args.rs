//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--pod <URL>`: Pod endpoint to operate against (or `POD_URL` env)
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};

/// Podlink - A client for LDP containers in Solid pods
#[derive(Parser, Debug)]
#[command(name = "pod")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pod endpoint URL, e.g. https://pod.example/alice/ (falls back to POD_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub pod: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an LDP container in the pod
    #[command(
        name = "create-container",
        long_about = "Create a Linked Data Platform container in the pod.\n\n\
            The container is declared as an ldp:BasicContainer via a fixed Turtle \
            description posted to the pod root. If the server rejects the request \
            (for example with 409 because the container exists), the rejection is \
            reported as a warning and the command still succeeds."
    )]
    CreateContainer {
        /// Name of the container to create
        name: String,
    },

    /// Create or replace a resource with the given values
    #[command(
        name = "publish",
        long_about = "Write values as the full content of a resource.\n\n\
            Values are stored one per line. If the resource already exists its \
            content is replaced; otherwise it is created inside the container."
    )]
    Publish {
        /// Container holding the resource
        container: String,
        /// Resource file name
        file: String,
        /// Values to store, one per line
        values: Vec<String>,
    },

    /// Read the values stored in a resource
    #[command(name = "read")]
    Read {
        /// Container holding the resource
        container: String,
        /// Resource file name
        file: String,
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Append values to a resource
    #[command(
        name = "update",
        long_about = "Append values to a resource.\n\n\
            Reads the current content, then writes it back with the new values \
            appended after it. The whole document is retransmitted; concurrent \
            writers to the same resource are not coordinated."
    )]
    Update {
        /// Container holding the resource
        container: String,
        /// Resource file name
        file: String,
        /// Values to append
        values: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_create_container() {
        let cli = Cli::try_parse_from([
            "pod",
            "--pod",
            "https://p.example/a",
            "create-container",
            "measurements",
        ])
        .unwrap();
        assert_eq!(cli.pod.as_deref(), Some("https://p.example/a"));
        assert!(
            matches!(cli.command, Command::CreateContainer { ref name } if name == "measurements")
        );
    }

    #[test]
    fn parses_publish_with_values() {
        let cli =
            Cli::try_parse_from(["pod", "publish", "measurements", "log.txt", "a", "b"]).unwrap();
        match cli.command {
            Command::Publish {
                container,
                file,
                values,
            } => {
                assert_eq!(container, "measurements");
                assert_eq!(file, "log.txt");
                assert_eq!(values, vec!["a", "b"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn publish_values_may_be_empty() {
        let cli = Cli::try_parse_from(["pod", "publish", "measurements", "log.txt"]).unwrap();
        match cli.command {
            Command::Publish { values, .. } => assert!(values.is_empty()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_read_json_flag() {
        let cli =
            Cli::try_parse_from(["pod", "read", "measurements", "log.txt", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::Read { json: true, .. }));
    }
}
