//! Startup state handed to every command

use cfgedit_core::DecodeMode;

use crate::allowlist::AllowList;
use crate::cli::Cli;
use crate::error::Result;

/// What a command is permitted to do and how it reads values.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Files mutating commands may write
    pub allow_list: AllowList,
    /// How `show` treats values that are not valid base64
    pub decode_mode: DecodeMode,
}

impl Context {
    /// Build the context from parsed arguments: the allow-list file (if
    /// any) plus every `--allow` path.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut allow_list = match &cli.allow_list {
            Some(path) => AllowList::load(path)?,
            None => AllowList::new(),
        };
        for path in &cli.allow {
            allow_list.insert(path)?;
        }
        if allow_list.is_empty() {
            tracing::debug!("allow-list is empty; mutating commands will be refused");
        }

        let decode_mode = if cli.strict {
            DecodeMode::Strict
        } else {
            DecodeMode::Lenient
        };

        Ok(Self {
            allow_list,
            decode_mode,
        })
    }
}
