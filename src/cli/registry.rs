//! Command registry and dispatch

use crate::{
    cli::help,
    config::Config,
    error::{CliError, Result},
    router::ArgRouter,
};
use std::{
    collections::BTreeMap,
    fmt,
    io::{self, Write},
};
use tracing::{debug, instrument, warn};

/// Function invoked with the parsed arguments of its command
pub type Handler = Box<dyn Fn(&ArgRouter) -> anyhow::Result<()>>;

const HELP_ALIASES: [&str; 3] = ["help", "-h", "--help"];
const VERSION_ALIASES: [&str; 3] = ["version", "-v", "--version"];

/// A named command with its description and handler
pub struct Command {
    name: String,
    description: String,
    handler: Option<Handler>,
}

impl Command {
    /// Create a command without a handler
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            handler: None,
        }
    }

    /// Attach the function run when this command is dispatched
    #[must_use]
    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ArgRouter) -> anyhow::Result<()> + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Name used to select this command
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line description shown in help
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// The CLI application: a set of commands plus the app identity
#[derive(Debug)]
pub struct VoidCli {
    commands: BTreeMap<String, Command>,
    app_name: String,
    app_version: String,
}

impl VoidCli {
    /// Create an application with no commands registered
    pub fn new(app_name: impl Into<String>, app_version: impl Into<String>) -> Self {
        Self {
            commands: BTreeMap::new(),
            app_name: app_name.into(),
            app_version: app_version.into(),
        }
    }

    /// Create an application using the identity from `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.app_name.clone(), config.app_version.clone())
    }

    /// Application name shown in help and version text
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Application version shown in help and version text
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Register a command built with [`Command::new`]
    ///
    /// Validation happens before the registry is touched, so a rejected
    /// command leaves it unchanged.
    #[instrument(skip(self, command), fields(command = %command.name))]
    pub fn register(&mut self, command: Command) -> Result<()> {
        if command.name.trim().is_empty() {
            return Err(CliError::InvalidCommand);
        }

        if command.handler.is_none() {
            return Err(CliError::invalid_handler(command.name));
        }

        if self.commands.contains_key(&command.name) {
            return Err(CliError::duplicate_command(command.name));
        }

        debug!("Registered command");
        self.commands.insert(command.name.clone(), command);
        Ok(())
    }

    /// Register a command from its parts
    pub fn register_command<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) -> Result<()>
    where
        F: Fn(&ArgRouter) -> anyhow::Result<()> + 'static,
    {
        self.register(Command::new(name, description).handler(handler))
    }

    /// Look up a registered command
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// Registered command names in alphabetical order
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Registered commands in alphabetical order
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when no commands are registered
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Full help text
    pub fn help_text(&self) -> String {
        help::render_help(self)
    }

    /// One-line version text
    pub fn version_text(&self) -> String {
        help::render_version(self)
    }

    /// Dispatch to standard output
    ///
    /// `args` starts at the command name, i.e. without the program name.
    pub fn run<I, S>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(args, &mut out)
    }

    /// Dispatch, writing help and version text to `out`
    ///
    /// Unknown commands print help and still fail. Handler errors are
    /// wrapped with the command name.
    pub fn run_with_output<I, S, W>(&self, args: I, out: &mut W) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        W: Write,
    {
        let mut args = args.into_iter().map(Into::into);

        let Some(name) = args.next() else {
            debug!("No command given, showing help");
            return self.write_help(out);
        };

        if HELP_ALIASES.contains(&name.as_str()) {
            return self.write_help(out);
        }

        if VERSION_ALIASES.contains(&name.as_str()) {
            writeln!(out, "{}", self.version_text())?;
            return Ok(());
        }

        let Some(command) = self.commands.get(&name) else {
            warn!(command = %name, "Unknown command");
            self.write_help(out)?;
            return Err(CliError::unknown_command(name));
        };

        self.execute(command, ArgRouter::new(args))
    }

    #[instrument(skip(self, command, router), fields(command = %command.name))]
    fn execute(&self, command: &Command, router: ArgRouter) -> Result<()> {
        let handler = command
            .handler
            .as_ref()
            .ok_or_else(|| CliError::invalid_handler(command.name.as_str()))?;

        debug!("Running command");
        handler(&router).map_err(|e| CliError::command_failed(command.name.as_str(), e))
    }

    fn write_help<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(self.help_text().as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
