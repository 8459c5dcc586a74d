// tests/grammar_expansion.rs
use shrubbery::Ruleset;

#[test]
fn one_round_expansions() {
    let rules = Ruleset::shrub();
    assert_eq!(rules.expand("X", 1), "F-[[X]+X]+F[+FX]-X");
    assert_eq!(rules.expand("F", 1), "FF");
    // Constants ride along unchanged.
    assert_eq!(rules.expand("X+", 1), "F-[[X]+X]+F[+FX]-X+");
}

#[test]
fn zero_rounds_is_identity() {
    let rules = Ruleset::shrub();
    assert_eq!(rules.expand("F-[[X]+X]", 0), "F-[[X]+X]");
    assert_eq!(rules.expand("", 0), "");
}

#[test]
fn expansion_is_deterministic_and_growing() {
    let rules = Ruleset::shrub();
    let mut previous = "X".to_owned();
    for rounds in 1..=6 {
        let expanded = rules.expand("X", rounds);
        assert_eq!(expanded, rules.expand("X", rounds));
        assert!(expanded.len() >= previous.len());
        previous = expanded;
    }
}

#[test]
fn brackets_stay_balanced() {
    let rules = Ruleset::shrub();
    for rounds in 0..=7 {
        let expanded = rules.expand("X", rounds);
        let opens = expanded.chars().filter(|&c| c == '[').count();
        let closes = expanded.chars().filter(|&c| c == ']').count();
        assert_eq!(opens, closes, "unbalanced after {rounds} rounds");
    }
}

#[test]
fn unknown_symbols_pass_through() {
    let rules = Ruleset::shrub();
    assert_eq!(rules.expand("?*?", 3), "?*?");
}

#[test]
fn custom_rules_compose() {
    // The classic algae grammar: lengths follow the Fibonacci numbers.
    let rules = Ruleset::new().with_rule('A', "AB").with_rule('B', "A");
    assert_eq!(rules.expand("A", 4), "ABAABABA");
}
