// ShowLog - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// Referenced by DevWorkflow Part A Rule 11 (explicit named-constant limits).

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ShowLog";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ShowLog";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Log format
// =============================================================================

/// Substring that identifies a command boundary line in a captured log.
///
/// Matched anywhere in the line, not only at the start: a capture may glue
/// the tail of the previous command's output onto the next marker.
pub const COMMAND_MARKER: &str = "`show";

/// Delimiter surrounding the command text on a boundary line.
pub const COMMAND_DELIMITER: char = '`';

/// Command whose first output line supplies the interactive prompt name.
pub const BOOTSTRAP_COMMAND: &str = "show switchname";

// =============================================================================
// Interactive session
// =============================================================================

/// Inputs that end the session. Matched exactly (case-sensitive).
pub const EXIT_COMMANDS: &[&str] = &["quit", "exit", "q"];

/// Inputs that print the help hint. Matched case-insensitively.
pub const HELP_COMMANDS: &[&str] = &["help", "?", "-h", "--help"];

/// Keyword that lists (and optionally filters) the captured commands.
/// Recognised anywhere in the input, case-insensitively.
pub const LIST_COMMANDS_KEYWORD: &str = "list_commands";

/// Printed when an exit command is entered.
pub const EXIT_MESSAGE: &str = "Exiting";

/// Printed in response to a help alias.
pub const HELP_HINT: &str = "For a list of available commands, please type \"list_commands\"";

/// Printed when an exact lookup misses.
pub const NOT_FOUND_MESSAGE: &str = "ERROR: Could not find that command. Type \"help\" for help.";

/// Header printed before suggestions after a lookup miss.
pub const SUGGESTIONS_HEADER: &str = "Did you mean...";

/// Header printed before an unfiltered command listing.
pub const LIST_ALL_HEADER: &str = "No search string provided - showing all commands:";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
///
/// Lower than a typical daemon default because diagnostics share the
/// terminal with the interactive prompt.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Maximum length of a log line included in debug output.
/// Prevents accidental exposure of sensitive data in long lines.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Whether the welcome banner is shown when no config overrides it.
pub const DEFAULT_SHOW_BANNER: bool = true;
