// tests/classifier_tests.rs

use pqs::{classify, classify_all, ClassificationResult, Grammar};

fn hyphens(n: usize) -> String {
    "-".repeat(n)
}

fn flags(result: &ClassificationResult) -> (bool, bool, bool) {
    (result.valid, result.is_axiom, result.is_theorem)
}

// ---
// Concrete cases
// ---

#[test]
fn test_axiom_with_one_leading_hyphen() {
    assert_eq!(flags(&classify("-p-q--")), (true, true, true));
}

#[test]
fn test_too_many_trailing_hyphens() {
    assert_eq!(flags(&classify("-p-q---")), (true, false, false));
}

#[test]
fn test_shortest_axiom() {
    assert_eq!(flags(&classify("pq-")), (true, true, true));
}

#[test]
fn test_unknown_symbols_are_invalid() {
    assert_eq!(flags(&classify("xyz")), (false, false, false));
}

#[test]
fn test_between_run_does_not_make_an_axiom() {
    assert_eq!(flags(&classify("p-q--")), (true, false, false));
}

#[test]
fn test_empty_string() {
    assert_eq!(flags(&classify("")), (true, false, false));
}

#[test]
fn test_result_keeps_the_original_input() {
    assert_eq!(classify("--P-Q---").input, "--P-Q---");
    assert_eq!(classify("a b c").input, "a b c");
}

// ---
// Properties
// ---

#[test]
fn test_strings_outside_the_alphabet_are_never_theorems() {
    for input in ["x", "abc", "  ", "0123", "🦀", "r", "\n", "ρ"] {
        assert_eq!(flags(&classify(input)), (false, false, false), "{:?}", input);
    }
}

#[test]
fn test_one_bad_character_invalidates_an_axiom() {
    for input in ["-p-q--x", "x-p-q--", "-p-_q--", "-p-q-- "] {
        assert_eq!(flags(&classify(input)), (false, false, false), "{:?}", input);
    }
}

#[test]
fn test_axiom_family() {
    for n in 0..64 {
        let x = hyphens(n);
        let input = format!("{x}pq{x}-");
        assert_eq!(flags(&classify(&input)), (true, true, true), "{}", input);
    }
}

#[test]
fn test_axioms_are_theorems() {
    for before in 0..16 {
        for between in 0..16 {
            let input = format!("{}p{}q{}", hyphens(before), hyphens(between), hyphens(before + 1));
            let result = classify(&input);
            assert!(result.is_axiom, "{}", input);
            assert!(result.is_theorem, "{}", input);
        }
    }
}

#[test]
fn test_hyphen_before_q_keeps_a_theorem() {
    for n in 0..32 {
        let x = hyphens(n);
        // axiom `x p q x-` with one hyphen inserted before the `q`
        let input = format!("{x}p-q{x}-");
        let result = classify(&input);
        assert!(result.is_theorem, "{}", input);
        // the between run is not constrained, so the counts still fit the axiom schema
        assert!(result.is_axiom, "{}", input);
    }
}

#[test]
fn test_one_rule_application_gives_a_theorem() {
    for n in 0..32 {
        let x = hyphens(n);
        // `x p - q x -` rewritten to `x p - - q x - -`
        let input = format!("{x}p--q{x}--");
        let result = classify(&input);
        assert!(result.is_theorem, "{}", input);
        assert!(!result.is_axiom, "{}", input);
    }
}

#[test]
fn test_repeated_rule_applications_stay_theorems() {
    for applications in 0..32 {
        let input = format!("--p-{}q---{}", hyphens(applications), hyphens(applications));
        assert!(classify(&input).is_theorem, "{}", input);
    }
}

#[test]
fn test_invalid_results_have_no_membership() {
    for input in ["p-q-!", "?", "--p--q----#", "p\u{0}q-"] {
        let result = classify(input);
        assert!(!result.valid);
        assert!(!result.is_axiom && !result.is_theorem, "{:?}", input);
    }
}

// ---
// Permissive marker handling
// ---

#[test]
fn test_repeated_markers_are_accepted() {
    // second `p` keeps the scan between the markers
    assert_eq!(flags(&classify("-p-p-q---")), (true, false, true));
    // a `q` with no `p` jumps straight past the markers
    assert_eq!(flags(&classify("q-")), (true, true, true));
    assert_eq!(flags(&classify("pqpq")), (true, false, true));
}

#[test]
fn test_markers_are_case_insensitive() {
    assert_eq!(flags(&classify("-P-Q--")), flags(&classify("-p-q--")));
    assert_eq!(flags(&classify("-p-Q--")), (true, true, true));
}

// ---
// Batches
// ---

#[test]
fn test_classify_all_preserves_order() {
    let inputs = ["xyz", "pq-", "", "-p-q---"];
    let results = classify_all(inputs, Grammar::Permissive);
    let order: Vec<&str> = results.iter().map(|r| r.input.as_str()).collect();
    assert_eq!(order, inputs);
    assert_eq!(results[1], classify("pq-"));
}

#[test]
fn test_classify_all_is_independent_per_input() {
    let batch = classify_all(vec!["pq-".to_string(), "x".to_string(), "pq-".to_string()], Grammar::Permissive);
    assert_eq!(batch[0], batch[2]);
    assert!(!batch[1].valid);
}

#[test]
fn test_classification_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|n| std::thread::spawn(move || classify(&format!("{0}p-q{0}-", hyphens(n)))))
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_theorem);
    }
}
