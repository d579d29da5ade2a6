// ShowLog - app/session.rs
//
// Interactive read-eval-print loop over a parsed CommandMap.
//
// Design principles:
// - Single-threaded and blocking: one read per prompt, no background work.
// - Generic over BufRead/Write so the loop runs identically against a
//   terminal and against in-memory buffers in tests.
// - The command map is borrowed read-only; the loop never changes it.
// - A missing device name is detected before the first prompt, never
//   halfway through a session.

use crate::app::command::UserCommand;
use crate::core::filter::filter_commands;
use crate::core::model::CommandMap;
use crate::util::constants::{
    BOOTSTRAP_COMMAND, EXIT_MESSAGE, HELP_HINT, LIST_ALL_HEADER, NOT_FOUND_MESSAGE,
    SUGGESTIONS_HEADER,
};
use crate::util::error::SessionError;
use std::io::{self, BufRead, Write};

/// How a session ended. Both outcomes are a normal exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    /// The user typed an exit alias.
    Quit,
    /// The input stream closed (e.g. Ctrl-D or end of a piped script).
    EndOfInput,
}

/// State of one interactive session.
#[derive(Debug)]
pub struct Session<'a> {
    commands: &'a CommandMap,
    prompt_name: String,
    active: bool,
}

impl<'a> Session<'a> {
    /// Prepare a session, resolving the prompt name from the bootstrap
    /// command's first output line.
    pub fn new(commands: &'a CommandMap) -> Result<Self, SessionError> {
        let prompt_name = commands
            .get(BOOTSTRAP_COMMAND)
            .and_then(|lines| lines.first())
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .ok_or(SessionError::MissingPromptName {
                command: BOOTSTRAP_COMMAND,
            })?
            .to_string();

        tracing::debug!(
            prompt = %prompt_name,
            commands = commands.len(),
            "Session ready"
        );

        Ok(Self {
            commands,
            prompt_name,
            active: true,
        })
    }

    /// Device name shown in the prompt.
    pub fn prompt_name(&self) -> &str {
        &self.prompt_name
    }

    /// The full prompt, e.g. `SW1$ `.
    pub fn prompt(&self) -> String {
        format!("{}$ ", self.prompt_name)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Run the loop until an exit alias is entered or input runs out.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<SessionExit, SessionError> {
        let mut line = String::new();

        while self.active {
            write!(output, "\n{}", self.prompt())
                .and_then(|()| output.flush())
                .map_err(io_error("write prompt"))?;

            line.clear();
            let read = input
                .read_line(&mut line)
                .map_err(io_error("read input"))?;
            if read == 0 {
                // Leave the terminal on a fresh line after Ctrl-D.
                writeln!(output).map_err(io_error("write output"))?;
                self.active = false;
                tracing::debug!("Input closed; ending session");
                return Ok(SessionExit::EndOfInput);
            }

            let entered = line.trim_end_matches(|c| c == '\n' || c == '\r');
            self.handle(entered, &mut output)
                .map_err(io_error("write output"))?;
        }

        tracing::debug!("Session ended by user");
        Ok(SessionExit::Quit)
    }

    /// Execute one line of input, writing its response to `output`.
    ///
    /// Clears the active flag when the line is an exit alias.
    pub fn handle<W: Write>(&mut self, entered: &str, output: &mut W) -> io::Result<()> {
        match UserCommand::classify(entered) {
            UserCommand::Blank => Ok(()),
            UserCommand::Exit => {
                self.active = false;
                writeln!(output, "{EXIT_MESSAGE}")
            }
            UserCommand::Help => writeln!(output, "\n{HELP_HINT}"),
            UserCommand::ListCommands { search } => self.list_commands(&search, output),
            UserCommand::Lookup(command) => self.lookup(command, output),
        }
    }

    fn list_commands<W: Write>(&self, search: &str, output: &mut W) -> io::Result<()> {
        if search.is_empty() {
            writeln!(output, "\n{LIST_ALL_HEADER}\n")?;
            for command in self.commands.keys() {
                writeln!(output, "{command}")?;
            }
            return Ok(());
        }

        let matches = filter_commands(self.commands, search);
        tracing::debug!(search, matches = matches.len(), "Listing filtered commands");
        writeln!(output, "\nHere are commands with '{search}' in them:\n")?;
        for command in matches {
            writeln!(output, "{command}")?;
        }
        Ok(())
    }

    fn lookup<W: Write>(&self, command: &str, output: &mut W) -> io::Result<()> {
        if let Some(lines) = self.commands.get(command) {
            tracing::debug!(command, lines = lines.len(), "Command found");
            for line in lines {
                writeln!(output, "{line}")?;
            }
            return Ok(());
        }

        let suggestions = filter_commands(self.commands, command);
        tracing::debug!(command, suggestions = suggestions.len(), "Command not found");
        writeln!(output, "\n{NOT_FOUND_MESSAGE}")?;
        if !suggestions.is_empty() {
            writeln!(output, "\n{SUGGESTIONS_HEADER}\n")?;
            for suggestion in suggestions {
                writeln!(output, "{suggestion}")?;
            }
        }
        Ok(())
    }
}

/// Start a session over `commands` and run it to completion.
pub fn run<R: BufRead, W: Write>(
    commands: &CommandMap,
    input: R,
    output: W,
) -> Result<SessionExit, SessionError> {
    Session::new(commands)?.run(input, output)
}

fn io_error(operation: &'static str) -> impl Fn(io::Error) -> SessionError {
    move |source| SessionError::Io { operation, source }
}

// =============================================================================
// Unit tests
// =============================================================================
