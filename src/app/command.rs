// ShowLog - app/command.rs
//
// Classification of one line of user input into a session action.
// Pure: no I/O, no access to the command map.

use crate::util::constants::{EXIT_COMMANDS, HELP_COMMANDS, LIST_COMMANDS_KEYWORD};

/// What the user asked the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand<'a> {
    /// Empty input; the prompt is shown again. Whitespace-only input is a
    /// lookup like any other text.
    Blank,
    /// `quit`, `exit` or `q`.
    Exit,
    /// One of the help aliases.
    Help,
    /// `list_commands`, optionally followed by a search string.
    /// An empty `search` lists every command.
    ListCommands { search: String },
    /// Anything else: an exact command lookup.
    Lookup(&'a str),
}

impl<'a> UserCommand<'a> {
    /// Classify a line of input with its line terminator already removed.
    ///
    /// Checks run in a fixed order: exit aliases (case-sensitive), help
    /// aliases (case-insensitive), the `list_commands` keyword anywhere in
    /// the input (case-insensitive), then lookup.
    pub fn classify(input: &'a str) -> Self {
        if input.is_empty() {
            return UserCommand::Blank;
        }
        if EXIT_COMMANDS.contains(&input) {
            return UserCommand::Exit;
        }
        if HELP_COMMANDS
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(input))
        {
            return UserCommand::Help;
        }
        // Substring match anywhere, so `show list_commands` also lists.
        if input.to_lowercase().contains(LIST_COMMANDS_KEYWORD) {
            let search = input
                .split_whitespace()
                .skip(1)
                .collect::<Vec<_>>()
                .join(" ");
            return UserCommand::ListCommands { search };
        }
        UserCommand::Lookup(input)
    }
}
