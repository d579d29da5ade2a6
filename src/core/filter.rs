// ShowLog - core/filter.rs
//
// Substring search over captured command names.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::CommandMap;
use std::collections::BTreeSet;

/// Return every command whose text contains `needle`.
///
/// Matching is case-sensitive, consistent with exact lookup. The set
/// iterates in lexicographic order so callers can print it directly.
/// An empty needle matches every command.
pub fn filter_commands<'a>(commands: &'a CommandMap, needle: &str) -> BTreeSet<&'a str> {
    commands
        .keys()
        .filter(|command| command.contains(needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_map(commands: &[&str]) -> CommandMap {
        let mut map = CommandMap::new();
        for cmd in commands {
            map.output_mut_or_insert(cmd).push("output".to_string());
        }
        map
    }

    #[test]
    fn test_substring_match() {
        let map = make_map(&["show switchname", "show version", "show vlan brief"]);
        let result: Vec<_> = filter_commands(&map, "version").into_iter().collect();
        assert_eq!(result, vec!["show version"]);
    }

    #[test]
    fn test_results_are_sorted() {
        let map = make_map(&["show vlan", "show interface", "show ip route vrf all"]);
        let result: Vec<_> = filter_commands(&map, "show").into_iter().collect();
        assert_eq!(result, vec!["show interface", "show ip route vrf all", "show vlan"]);
    }

    #[test]
    fn test_case_sensitive() {
        let map = make_map(&["show version"]);
        assert!(filter_commands(&map, "VERSION").is_empty());
        assert_eq!(filter_commands(&map, "vers").len(), 1);
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        let map = make_map(&["show switchname", "show version", "show clock"]);
        assert_eq!(filter_commands(&map, "").len(), 3);
    }

    #[test]
    fn test_no_match() {
        let map = make_map(&["show switchname"]);
        assert!(filter_commands(&map, "zoneset").is_empty());
    }

    #[test]
    fn test_typo_prefix_suggests_full_command() {
        let map = make_map(&["show switchname", "show version"]);
        let result: Vec<_> = filter_commands(&map, "show switchnam").into_iter().collect();
        assert_eq!(result, vec!["show switchname"]);
    }
}
