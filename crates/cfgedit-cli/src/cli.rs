//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// cfgedit - Edit config files with base64-obfuscated values
#[derive(Parser, Debug)]
#[command(name = "cfgedit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Fail on stored values that are not valid base64 instead of
    /// printing them as-is
    #[arg(long, global = true)]
    pub strict: bool,

    /// TOML file listing the files that may be modified
    #[arg(long, global = true, env = "CFGEDIT_ALLOW_LIST", value_name = "FILE")]
    pub allow_list: Option<PathBuf>,

    /// Allow modifying this file (repeatable)
    #[arg(long = "allow", global = true, value_name = "PATH")]
    pub allow: Vec<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Base64-encode every value of a plaintext config file
    ///
    /// Accepts a config file of the appropriate format with contents in
    /// plain text and base64 encodes the values.
    Encode {
        /// File to read
        in_file: PathBuf,

        /// File to write (defaults to the input file)
        out_file: Option<PathBuf>,
    },

    /// Create a new empty config file
    New {
        /// File to create
        file: PathBuf,
    },

    /// Delete a variable and its comments
    Remove {
        /// Config file
        file: PathBuf,

        /// Variable to delete
        var_name: String,
    },

    /// Base64-encode a value and write it to a variable
    Set {
        /// Config file
        file: PathBuf,

        /// Variable to write
        var_name: String,

        /// Plaintext value
        value: String,
    },

    /// Show the decoded value of a variable
    Show {
        /// Config file
        file: PathBuf,

        /// Variable to show
        var_name: String,

        /// Print the stored value without decoding
        #[arg(long)]
        raw: bool,
    },

    /// List the names of all variables (no values)
    ShowAll {
        /// Config file
        file: PathBuf,
    },
}
