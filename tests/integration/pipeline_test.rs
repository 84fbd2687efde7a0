//! Property tests for the minification pipeline

use std::collections::HashSet;

use ksmin::minifier::tables::is_reserved;
use ksmin::minifier::transforms::{
    identifier_frequency, CompactWhitespace, ExclusionSet, RenameIdentifiers, Transform,
};
use ksmin::{minify, FlagError, Flags, Minifier};

use crate::helpers::load_fixture;

/// Every flag combination the pipeline accepts.
fn valid_flag_sets() -> impl Iterator<Item = Flags> {
    (0..=Flags::ALL.bits())
        .map(Flags::from_bits_truncate)
        .filter(|flags| flags.validate().is_ok())
}

fn literals(text: &str) -> Vec<&str> {
    text.lines()
        .flat_map(|line| line.split('"').skip(1).step_by(2))
        .collect()
}

// ============================================================================
// Literal Integrity
// ============================================================================

#[test]
fn literals_survive_every_flag_combination() {
    let source = load_fixture("launch.ks");
    let expected = literals(&source);
    assert!(expected.len() >= 10);

    for flags in valid_flag_sets() {
        let out = minify(&source, flags).unwrap();
        for literal in &expected {
            let quoted = format!("\"{}\"", literal);
            assert!(out.contains(&quoted), "{:?} lost {}", flags, quoted);
        }
    }
}

// ============================================================================
// Renaming
// ============================================================================

#[test]
fn renaming_is_bijective_and_avoids_exclusions() {
    let source = load_fixture("launch.ks").to_lowercase();
    let exclusions = ExclusionSet::new(["missionlog"]);
    let mut renamer = RenameIdentifiers::new(exclusions.clone());
    let mut text = source.clone();
    renamer.transform(&mut text);

    let renamed = renamer.renamed();
    assert!(!renamed.is_empty());
    let generated: HashSet<&String> = renamed.values().collect();
    assert_eq!(generated.len(), renamed.len());
    for name in generated {
        assert!(!exclusions.contains(name), "generated excluded name {}", name);
        assert!(!is_reserved(name));
    }
    assert!(!renamed.contains_key("missionlog"));
}

#[test]
fn more_frequent_identifiers_get_names_no_longer() {
    let source = load_fixture("launch.ks").to_lowercase();
    let exclusions = ExclusionSet::default();
    let frequency = identifier_frequency(&source, &exclusions);
    let mut renamer = RenameIdentifiers::new(exclusions.clone());
    let mut text = source.clone();
    renamer.transform(&mut text);
    let renamed = renamer.renamed();

    for (a, count_a) in &frequency {
        for (b, count_b) in &frequency {
            if count_a > count_b {
                assert!(
                    renamed[*a].len() <= renamed[*b].len(),
                    "{} ({}) vs {} ({})",
                    a,
                    count_a,
                    b,
                    count_b
                );
            }
        }
    }
}

// ============================================================================
// Alias Break-Even
// ============================================================================

#[test]
fn function_alias_appears_exactly_past_break_even() {
    // declaration "local a is vdot@." + newline = 18, reference "a(" = 2, "vdot(" = 5
    for count in 1..12 {
        let source: String = (0..count)
            .map(|i| format!("print vdot(x, y{}).\n", i))
            .collect();
        let out = minify(&source, Flags::ALL).unwrap();
        let profitable = count >= 2 && 18 + 2 * count < 5 * count;
        assert_eq!(out.contains("vdot@"), profitable, "count {}: {}", count, out);
        assert!(!out.contains("ALIAS"));
    }
}

#[test]
fn aliasing_never_grows_output() {
    let source = load_fixture("launch.ks");
    let without = minify(&source, Flags::ALL - Flags::ALIASING).unwrap();
    let with = minify(&source, Flags::ALL).unwrap();
    assert!(with.len() <= without.len());
}

#[test]
fn bind_applies_to_repeated_literal_vectors() {
    let source = load_fixture("launch.ks");
    let out = minify(&source, Flags::ALL).unwrap();
    assert!(!out.contains("v(0,0,1)"), "{}", out);
    assert!(out.contains("v@:bind(0,0,1)"), "{}", out);
}

// ============================================================================
// Whitespace
// ============================================================================

#[test]
fn whitespace_compaction_is_idempotent_on_fixture() {
    let source = load_fixture("launch.ks");
    for flags in valid_flag_sets() {
        let compactor = CompactWhitespace::new(flags);
        let once = compactor.compact(&source);
        assert_eq!(compactor.compact(&once), once, "{:?}", flags);
    }
}

// ============================================================================
// End to End
// ============================================================================

#[test]
fn default_flags_end_to_end() {
    assert_eq!(
        minify("set myVar to 5.\nprint myVar.\n", Flags::ALL).unwrap(),
        "set a to 5. print a."
    );
}

#[test]
fn launch_fixture_is_smaller_and_single_line() {
    let source = load_fixture("launch.ks");
    let minifier = Minifier::new(Flags::ALL).unwrap();
    let out = minifier.minify(&source);

    assert!(out.len() < source.len() * 3 / 4, "{}", out);
    assert!(!out.contains('\n'));
    assert!(out.starts_with("@lazyglobal off. "));
    assert!(out.contains("missionlog:add("));
    assert!(out.contains("\" m // hold on\""));
    assert!(!out.contains("gravity turn"));
    assert!(!out.contains("ship:altitude"));
}

#[test]
fn minifying_twice_changes_nothing_more_for_whitespace_only() {
    let flags = Flags::REMOVE_COMMENTS
        | Flags::REMOVE_INDENTATION
        | Flags::REMOVE_NEWLINES
        | Flags::REMOVE_SPACES;
    let once = minify(&load_fixture("launch.ks"), flags).unwrap();
    assert_eq!(minify(&once, flags).unwrap(), once);
}

#[test]
fn kept_comments_never_leak_alias_names() {
    let source = "print constant:pi.\n// constant:pi\n".repeat(4);
    let out = minify(&source, Flags::REPLACE_VARS | Flags::ALIAS_CONSTANTS).unwrap();
    assert!(!out.contains("ALIAS"), "{}", out);
    assert_eq!(out.matches("// constant:pi").count(), 4);

    let mut single = String::from("print constant:pi.\n");
    single.push_str(&"// constant:pi\n".repeat(3));
    let out = minify(&single, Flags::REPLACE_VARS | Flags::ALIAS_CONSTANTS).unwrap();
    assert_eq!(out, single);
}

#[test]
fn kept_comments_end_their_line_when_joining() {
    let out = minify("// header\nset x to 1.\nprint x.\n", Flags::ALL - Flags::REMOVE_COMMENTS)
        .unwrap();
    assert_eq!(out, "//header\nset a to 1. print a.");
}

#[test]
fn unicode_identifiers_are_not_split() {
    let source: String = (0..8).map(|i| format!("print ävdot({}).\n", i)).collect();
    let out = minify(&source, Flags::ALL).unwrap();
    assert!(!out.contains("vdot@"), "{}", out);
    assert!(out.starts_with("print a(0). print a(1)."), "{}", out);
}

#[test]
fn invalid_combination_is_rejected() {
    let err = minify("print vdot(a, b).", Flags::ALIAS_FUNCTIONS | Flags::REMOVE_SPACES)
        .unwrap_err();
    assert_eq!(
        err,
        FlagError::RequiresReplaceVars {
            flag: "alias-functions"
        }
    );
}
