//! Commands that write config files

use std::path::Path;

use cfgedit_core::ConfigFile;
use colored::Colorize;

use crate::context::Context;
use crate::error::{CliError, Result};

/// Base64-encode every value of `in_file`, writing to `out_file` or back
/// to `in_file`. Both paths must be allow-listed.
pub fn run_encode(ctx: &Context, in_file: &Path, out_file: Option<&Path>) -> Result<()> {
    let input = ctx.allow_list.check(in_file)?;
    let output = out_file.map(|p| ctx.allow_list.check(p)).transpose()?;

    let count = ConfigFile::new(&input).encode_into(output.as_deref())?;

    let target = output.as_deref().unwrap_or(&input);
    println!(
        "{} Encoded {} value(s) into {}",
        "✓".green(),
        count,
        target.display().to_string().cyan()
    );
    Ok(())
}

/// Create an empty config file with the default header.
///
/// Creating is not gated by the allow-list, but editing the new file is.
pub fn run_new(ctx: &Context, file: &Path) -> Result<()> {
    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(CliError::user(format!(
                "Cannot create {}: directory {} does not exist",
                file.display(),
                parent.display()
            )));
        }
    }
    ConfigFile::new(file).create()?;

    println!("{} File successfully created!", "✓".green());
    if !ctx.allow_list.contains(file) {
        println!(
            "Add {} to the allow-list in order to edit it",
            file.display().to_string().cyan()
        );
    }
    Ok(())
}

/// Delete `var_name` and its comments from `file`.
pub fn run_remove(ctx: &Context, file: &Path, var_name: &str) -> Result<()> {
    let path = ctx.allow_list.check(file)?;
    ConfigFile::new(path).remove_variable(var_name)?;

    println!("{} Removed {}", "✓".green(), var_name.bold());
    Ok(())
}

/// Encode `value` and store it under `var_name` in `file`.
pub fn run_set(ctx: &Context, file: &Path, var_name: &str, value: &str) -> Result<()> {
    let path = ctx.allow_list.check(file)?;
    ConfigFile::new(path).set_value(var_name, value)?;

    println!("{} Set {}", "✓".green(), var_name.bold());
    Ok(())
}
