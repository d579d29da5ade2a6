// ShowLog - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies (Atlas Layer Rule: Core depends on std only).
//
// These types are the shared vocabulary across all layers.

use std::collections::btree_map::{self, BTreeMap};

// =============================================================================
// Command map (normalised output of parsing)
// =============================================================================

/// Captured show-command output, keyed by the exact command text.
///
/// Built once by the parser and read-only for the rest of the session.
/// Keys iterate in lexicographic order, which is the order every listing
/// is printed in. Output lines keep their captured order, duplicates and
/// blank lines included. An empty output sequence is valid: it records a
/// command that was captured but printed nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandMap {
    commands: BTreeMap<String, Vec<String>>,
}

impl CommandMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output sequence for `command`, inserting an empty one first if the
    /// command has not been seen yet.
    pub fn output_mut_or_insert(&mut self, command: &str) -> &mut Vec<String> {
        self.commands.entry(command.to_string()).or_default()
    }

    /// Captured output for an exact (case-sensitive) command.
    pub fn get(&self, command: &str) -> Option<&[String]> {
        self.commands.get(command).map(Vec::as_slice)
    }

    pub fn contains(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    /// Command keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// `(command, output)` pairs in lexicographic command order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.commands.iter()
    }

    /// Number of distinct commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Total captured output lines across all commands.
    pub fn total_lines(&self) -> usize {
        self.commands.values().map(Vec::len).sum()
    }
}

// =============================================================================
// Malformed marker policy
// =============================================================================

/// What the parser does with a boundary line that has an opening backtick
/// but no closing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedMarkerPolicy {
    /// Stop parsing and report the offending line.
    #[default]
    Fatal,
    /// Discard the line and every following line up to the next
    /// well-formed marker.
    Skip,
}

impl MalformedMarkerPolicy {
    /// Human-readable label, matching the config file spelling.
    pub fn label(&self) -> &'static str {
        match self {
            MalformedMarkerPolicy::Fatal => "fatal",
            MalformedMarkerPolicy::Skip => "skip",
        }
    }

    /// Parse the config file spelling (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "fatal" => Some(MalformedMarkerPolicy::Fatal),
            "skip" => Some(MalformedMarkerPolicy::Skip),
            _ => None,
        }
    }
}

impl std::fmt::Display for MalformedMarkerPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
