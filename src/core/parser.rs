// ShowLog - core/parser.rs
//
// Turns a captured show-command log into a CommandMap.
// Core layer: accepts lines or text, never touches the filesystem directly.

use crate::core::model::{CommandMap, MalformedMarkerPolicy};
use crate::util::constants::{COMMAND_DELIMITER, COMMAND_MARKER, DEBUG_MAX_LINE_PREVIEW};
use crate::util::error::ParseError;

/// Classification of a single log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    /// Boundary line; carries the command text between the backticks.
    Marker(&'a str),
    /// Boundary line with no closing backtick.
    MalformedMarker,
    /// Anything else.
    Output,
}

/// Classify `line` as a command boundary or captured output.
///
/// The command is the text between the first and second backtick, so any
/// output glued in front of the marker is ignored.
fn classify(line: &str) -> LineKind<'_> {
    if !line.contains(COMMAND_MARKER) {
        return LineKind::Output;
    }
    let mut fields = line.trim().splitn(3, COMMAND_DELIMITER);
    let _before = fields.next();
    match (fields.next(), fields.next()) {
        (Some(command), Some(_)) => LineKind::Marker(command),
        _ => LineKind::MalformedMarker,
    }
}

/// Parse captured log lines into a command map.
///
/// Lines before the first boundary are discarded. Output lines are trimmed
/// and appended to the most recent command, which is registered on its
/// first appended line; a command seen twice keeps accumulating into the
/// same output sequence.
pub fn parse_lines<I, S>(lines: I, policy: MalformedMarkerPolicy) -> Result<CommandMap, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut commands = CommandMap::new();
    let mut current: Option<String> = None;
    let mut discarded: u64 = 0;
    let mut lines_processed: u64 = 0;

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_number = (idx as u64) + 1;
        lines_processed += 1;

        match classify(line) {
            LineKind::Marker(command) => {
                tracing::trace!(line = line_number, command, "Command boundary");
                // Not registered until its first output line arrives: a
                // command that printed nothing is not part of the map.
                current = Some(command.to_string());
            }
            LineKind::MalformedMarker => match policy {
                MalformedMarkerPolicy::Fatal => {
                    return Err(ParseError::MalformedMarker {
                        line_number,
                        line: preview(line),
                    });
                }
                MalformedMarkerPolicy::Skip => {
                    tracing::warn!(
                        line = line_number,
                        text = %preview(line),
                        "Skipping malformed command marker and its output"
                    );
                    current = None;
                }
            },
            LineKind::Output => match current.as_deref() {
                Some(command) => commands
                    .output_mut_or_insert(command)
                    .push(line.trim().to_string()),
                None => discarded += 1,
            },
        }
    }

    tracing::debug!(
        lines = lines_processed,
        commands = commands.len(),
        output_lines = commands.total_lines(),
        discarded,
        "Log parsed"
    );

    Ok(commands)
}

/// Parse a whole captured log held in memory.
pub fn parse_content(content: &str, policy: MalformedMarkerPolicy) -> Result<CommandMap, ParseError> {
    parse_lines(content.lines(), policy)
}

/// Truncate a line for inclusion in errors and diagnostics.
fn preview(line: &str) -> String {
    let trimmed = line.trim();
    match trimmed.char_indices().nth(DEBUG_MAX_LINE_PREVIEW) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

// =============================================================================
// Unit tests
// =============================================================================
