//! Read-only commands

use std::path::Path;

use cfgedit_core::ConfigFile;
use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

/// Print `NAME=value` for every occurrence of `var_name`.
pub fn run_show(ctx: &Context, file: &Path, var_name: &str, raw: bool) -> Result<()> {
    let config = ConfigFile::new(file).with_decode_mode(ctx.decode_mode);
    let values = if raw {
        config.get_raw_values(var_name)?
    } else {
        config.get_values(var_name)?
    };

    if values.len() > 1 {
        eprintln!(
            "{}: Multiple values found for '{}'",
            "warning".yellow().bold(),
            var_name
        );
    }
    for value in values {
        println!("{var_name}={value}");
    }
    Ok(())
}

/// Print the names of all variables in `file`, sorted.
pub fn run_show_all(file: &Path) -> Result<()> {
    for name in ConfigFile::new(file).list_names()? {
        println!("{name}");
    }
    Ok(())
}
