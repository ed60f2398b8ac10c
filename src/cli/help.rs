//! Help and version text

use crate::cli::VoidCli;

const COMMON_COMMANDS: [(&str, &str); 2] = [
    ("help", "Show this help message"),
    ("version", "Show version information"),
];

/// `<app> version <version>`
pub fn render_version(cli: &VoidCli) -> String {
    format!("{} version {}", cli.app_name(), cli.app_version())
}

/// Usage block followed by the registered commands and the common commands
///
/// Descriptions are aligned to the longest registered command name. The
/// common commands reuse that width even when they are longer themselves.
pub fn render_help(cli: &VoidCli) -> String {
    let width = cli
        .command_names()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0);

    let mut text = format!(
        "{}\n\nUsage:\n  {} <command> [arguments]\n\nAvailable commands:\n",
        render_version(cli),
        cli.app_name()
    );

    for command in cli.commands() {
        text.push_str(&entry(width, command.name(), command.description()));
    }

    text.push_str("\nCommon commands:\n");
    for (name, description) in COMMON_COMMANDS {
        text.push_str(&entry(width, name, description));
    }

    text
}

fn entry(width: usize, name: &str, description: &str) -> String {
    format!("  {name:<width$}  {description}\n")
}
