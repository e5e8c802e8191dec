use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use alint_diagnostic::{DiagnosticQueue, Where};

use super::CommentSplitter;
use crate::error::ReadError;

fn loc(raw: &str) -> Where {
    Where::new(Rc::from("test.conf"), 1, raw.as_bytes().to_vec())
}

fn split(text: &str) -> ((String, String), Rc<RefCell<DiagnosticQueue>>) {
    let (queue, sink) = DiagnosticQueue::shared();
    let input = vec![Ok::<_, ReadError>((loc(text), text.to_owned()))].into_iter();
    let mut splitter = CommentSplitter::new(input, sink);
    let record = splitter.next().unwrap().unwrap();
    assert!(splitter.next().is_none());
    ((record.code, record.comment), queue)
}

fn parts(text: &str) -> (String, String) {
    split(text).0
}

#[test]
fn line_without_delimiter_is_all_code() {
    assert_eq!(
        parts("exten => s,1,Dial(SIP/100)"),
        ("exten => s,1,Dial(SIP/100)".to_owned(), String::new())
    );
}

#[test]
fn comment_keeps_its_delimiter() {
    assert_eq!(
        parts("foo=1;bar"),
        ("foo=1".to_owned(), ";bar".to_owned())
    );
}

#[test]
fn whitespace_before_the_delimiter_belongs_to_the_comment() {
    assert_eq!(
        parts("foo=1 \t; bar"),
        ("foo=1".to_owned(), " \t; bar".to_owned())
    );
}

#[test]
fn leading_delimiter_is_a_full_line_comment() {
    assert_eq!(
        parts("; just a comment"),
        (String::new(), "; just a comment".to_owned())
    );
}

#[test]
fn escaped_delimiter_becomes_literal() {
    assert_eq!(parts("a\\;b"), ("a;b".to_owned(), String::new()));
}

#[test]
fn escape_fidelity() {
    // The escaped delimiter stays in the code; the first unescaped one
    // starts the comment.
    assert_eq!(
        parts("foo\\; bar; baz"),
        ("foo; bar".to_owned(), "; baz".to_owned())
    );
}

#[test]
fn lookback_sees_only_one_character() {
    // Even a doubled backslash escapes: only the single preceding
    // character is inspected.
    assert_eq!(parts("a\\\\;b"), ("a\\;b".to_owned(), String::new()));
}

#[test]
fn escaped_delimiter_at_start_of_line() {
    assert_eq!(parts("\\;x"), (";x".to_owned(), String::new()));
}

#[test]
fn comment_body_is_not_rescanned() {
    assert_eq!(
        parts("a;b\\;c"),
        ("a".to_owned(), ";b\\;c".to_owned())
    );
}

#[test]
fn whitespace_exposed_by_escape_migrates_to_comment() {
    let ((code, comment), queue) = split("cmd \\; ;tail");
    assert_eq!(code, "cmd ;");
    assert_eq!(comment, " ;tail");
    // Migration never emits a whitespace warning.
    assert!(queue.borrow().is_empty());
}

#[test]
fn trailing_whitespace_scenario() {
    let ((code, comment), queue) = split("exten => 1,1,NoOp()   ");
    assert_eq!(code, "exten => 1,1,NoOp()");
    assert_eq!(comment, "");
    assert_eq!(queue.borrow().warning_count(), 1);
}

#[test]
fn trailing_tab_is_flagged_too() {
    let ((code, _comment), queue) = split("foo=1\t");
    assert_eq!(code, "foo=1");
    assert_eq!(queue.borrow().warning_count(), 1);
}

#[test]
fn at_most_one_whitespace_warning_per_line() {
    let ((code, comment), queue) = split("a \\; b ;c  \t ");
    assert_eq!(code, "a ; b");
    assert_eq!(comment, " ;c");
    assert_eq!(queue.borrow().warning_count(), 1);
}

#[test]
fn multibyte_text_splits_cleanly() {
    assert_eq!(
        parts("label=caf\u{e9} ; se\u{f1}al"),
        ("label=caf\u{e9}".to_owned(), " ; se\u{f1}al".to_owned())
    );
}

mod proptests {
    use proptest::prelude::*;

    use super::parts;

    proptest! {
        // For escape-free, already-trimmed lines the split is lossless:
        // code + comment reconstructs the input.
        #[test]
        fn split_is_lossless_without_escapes(
            text in "[ -~]{0,60}".prop_filter(
                "no backslash, no trailing blank",
                |t| !t.contains('\\') && !t.ends_with(' ') && !t.ends_with('\t'),
            )
        ) {
            let (code, comment) = parts(&text);
            prop_assert_eq!(code + &comment, text);
        }

        // The comment, when present, always starts at an unescaped `;`.
        #[test]
        fn comment_is_empty_or_reaches_end_of_line(text in "[ -~\\\\;]{0,40}") {
            let (_code, comment) = parts(&text);
            prop_assert!(comment.is_empty() || comment.contains(';'));
        }
    }
}
