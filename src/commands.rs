//! Sample commands shipped with the `void` binary
//!
//! Each command is an ordinary handler: it reads its arguments from an
//! [`ArgRouter`] and does its own I/O.

use crate::{cli::VoidCli, error::Result, router::ArgRouter};
use anyhow::{Context, bail};
use std::{
    fs,
    io::{self, Write},
    path::Path,
};
use tracing::{debug, instrument};

const GREET_SWITCHES: &[&str] = &["shout"];
const ECHO_SWITCHES: &[&str] = &["n"];
const LS_SWITCHES: &[&str] = &["a", "all"];

/// Register `greet`, `echo` and `ls`
pub fn register_all(cli: &mut VoidCli) -> Result<()> {
    cli.register_command("greet", "Greet someone by name", greet)?;
    cli.register_command("echo", "Echo the provided arguments", echo)?;
    cli.register_command("ls", "List the entries of a directory", ls)?;
    Ok(())
}

/// `greet <name...> [--greeting <word>] [--shout]`
#[instrument(skip(args))]
pub fn greet(args: &ArgRouter) -> anyhow::Result<()> {
    let line = greeting_line(&with_switches(args, GREET_SWITCHES))?;
    println!("{line}");
    Ok(())
}

fn greeting_line(args: &ArgRouter) -> anyhow::Result<String> {
    if args.positional_args().is_empty() {
        bail!("please provide a name");
    }

    let greeting = args.flag_or_default("greeting", "Hello");
    let line = format!("{greeting}, {}!", args.positional_args().join(" "));

    Ok(if args.has_flag("shout") {
        line.to_uppercase()
    } else {
        line
    })
}

/// `echo <args...> [-n]`
#[instrument(skip(args))]
pub fn echo(args: &ArgRouter) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", echo_text(&with_switches(args, ECHO_SWITCHES)))?;
    stdout.flush()?;
    Ok(())
}

fn echo_text(args: &ArgRouter) -> String {
    let mut text = args.positional_args().join(" ");
    if !args.has_flag("n") {
        text.push('\n');
    }
    text
}

/// `ls [dir] [-a|--all]`
#[instrument(skip(args))]
pub fn ls(args: &ArgRouter) -> anyhow::Result<()> {
    let args = with_switches(args, LS_SWITCHES);
    let dir = args
        .positional_args()
        .first()
        .map_or(".", String::as_str);
    let show_hidden = args.has_flag("a") || args.has_flag("all");

    let entries = list_dir(dir, show_hidden)
        .with_context(|| format!("Failed to list directory: {dir}"))?;

    let mut stdout = io::stdout().lock();
    for entry in entries {
        writeln!(stdout, "{entry}")?;
    }
    Ok(())
}

/// Re-read the raw arguments so that `switches` never swallow a positional
fn with_switches(args: &ArgRouter, switches: &[&str]) -> ArgRouter {
    ArgRouter::with_switches(args.raw_args(), switches)
}

/// Entry names of `dir`, sorted, with directories suffixed by `/`
pub fn list_dir<P: AsRef<Path>>(dir: P, show_hidden: bool) -> io::Result<Vec<String>> {
    let dir = dir.as_ref();
    debug!("Listing directory: {}", dir.display());

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let mut name = entry.file_name().to_string_lossy().into_owned();

        if !show_hidden && name.starts_with('.') {
            continue;
        }

        if entry.file_type()?.is_dir() {
            name.push('/');
        }
        entries.push(name);
    }

    entries.sort();
    debug!("Found {} entries", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_greeting_line() {
        let args = ArgRouter::new(["Ada", "Lovelace"]);
        assert_eq!(greeting_line(&args).unwrap(), "Hello, Ada Lovelace!");
    }

    #[test]
    fn test_greeting_options() {
        let args = ArgRouter::new(["--greeting", "Hi", "Bob", "--shout"]);
        assert_eq!(greeting_line(&args).unwrap(), "HI, BOB!");
    }

    #[test]
    fn test_switch_before_name() {
        let args = with_switches(&ArgRouter::new(["--shout", "Bob"]), GREET_SWITCHES);
        assert_eq!(greeting_line(&args).unwrap(), "HELLO, BOB!");
    }

    #[test]
    fn test_echo_switch_before_args() {
        let args = with_switches(&ArgRouter::new(["-n", "a", "b"]), ECHO_SWITCHES);
        assert_eq!(echo_text(&args), "a b");

        let args = with_switches(&ArgRouter::new(["a", "b"]), ECHO_SWITCHES);
        assert_eq!(echo_text(&args), "a b\n");
    }

    #[test]
    fn test_greet_requires_name() {
        let err = greeting_line(&ArgRouter::new(["--shout"])).unwrap_err();
        assert_eq!(err.to_string(), "please provide a name");
    }

    #[test]
    fn test_list_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(temp_dir.path().join(".hidden"), "h").unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();

        let entries = list_dir(temp_dir.path(), false).unwrap();
        assert_eq!(entries, ["a.txt", "b.txt", "sub/"]);

        let entries = list_dir(temp_dir.path(), true).unwrap();
        assert_eq!(entries, [".hidden", "a.txt", "b.txt", "sub/"]);
    }

    #[test]
    fn test_list_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_dir(temp_dir.path().join("missing"), false).is_err());
    }

    #[test]
    fn test_register_all() {
        let mut cli = VoidCli::new("void", "0.1.0");
        register_all(&mut cli).unwrap();

        let names: Vec<_> = cli.command_names().collect();
        assert_eq!(names, ["echo", "greet", "ls"]);
    }
}
