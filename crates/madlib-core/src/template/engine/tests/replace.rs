//! Single-placeholder replacement tests

use super::*;

#[test]
fn test_replace_single_occurrence() {
    let result = replace("a <verb> here", "run", "<verb>");
    assert_eq!(result, "a run here");
}

#[test]
fn test_replace_every_occurrence() {
    let result = replace("<verb>, <verb> and <verb>", "go", "<verb>");
    assert_eq!(result, "go, go and go");
}

#[test]
fn test_replace_adjacent_occurrences() {
    let result = replace("<noun1><noun1>", "x", "<noun1>");
    assert_eq!(result, "xx");
}

#[test]
fn test_replace_no_occurrence() {
    let line = "nothing to see";
    assert_eq!(replace(line, "word", "<verb>"), line);
}

#[test]
fn test_replace_growing_keeps_trailing_text() {
    let result = replace("<verb> end", "extraordinarily", "<verb>");
    assert_eq!(result, "extraordinarily end");
}

#[test]
fn test_replace_shrinking_keeps_trailing_text() {
    let result = replace("x <adjective> y <adjective> z", "ok", "<adjective>");
    assert_eq!(result, "x ok y ok z");
}

#[test]
fn test_replace_is_not_recursive() {
    // The inserted word contains the placeholder itself.
    let result = replace("<verb>", "<verb><verb>", "<verb>");
    assert_eq!(result, "<verb><verb>");
}

#[test]
fn test_replace_partial_token_untouched() {
    let result = replace("<ver> <verb", "run", "<verb>");
    assert_eq!(result, "<ver> <verb");
}

#[test]
fn test_replace_empty_placeholder() {
    assert_eq!(replace("abc", "x", ""), "abc");
}

#[test]
fn test_replace_empty_line() {
    assert_eq!(replace("", "x", "<verb>"), "");
}
