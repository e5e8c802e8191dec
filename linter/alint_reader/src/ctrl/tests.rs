use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use alint_diagnostic::{DiagnosticCode, DiagnosticQueue, Where};

use super::{is_illegal, CtrlGuard};
use crate::error::ReadError;

fn loc(lineno: u32) -> Where {
    Where::new(Rc::from("test.conf"), lineno, b"raw\n".to_vec())
}

fn guard_lines(lines: Vec<&str>) -> (Vec<String>, Rc<RefCell<DiagnosticQueue>>) {
    let (queue, sink) = DiagnosticQueue::shared();
    let input = lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let lineno = u32::try_from(i).unwrap() + 1;
            Ok::<_, ReadError>((loc(lineno), text.to_owned()))
        })
        .collect::<Vec<_>>()
        .into_iter();
    let texts = CtrlGuard::new(input, sink)
        .map(|item| item.unwrap().1)
        .collect();
    (texts, queue)
}

#[test]
fn tab_cr_lf_are_legal() {
    let (texts, queue) = guard_lines(vec!["foo\tbar\r\n"]);
    assert_eq!(texts, vec!["foo\tbar\r\n".to_owned()]);
    assert!(queue.borrow().is_empty());
}

#[test]
fn one_warning_per_line_regardless_of_count() {
    let (texts, queue) = guard_lines(vec!["a\x00b\x1bc\x07d\n"]);
    // Text passes through unchanged.
    assert_eq!(texts, vec!["a\x00b\x1bc\x07d\n".to_owned()]);

    let queue = queue.borrow();
    assert_eq!(queue.warning_count(), 1);
    let diag = queue.peek().next().unwrap();
    assert_eq!(diag.code, DiagnosticCode::FileCtrlChar);
    assert_eq!(diag.at.lineno(), 1);
}

#[test]
fn each_offending_line_warns_separately() {
    let (_texts, queue) = guard_lines(vec!["ok\n", "\x01\n", "ok\n", "\x1f\n"]);
    let lines: Vec<_> = queue.borrow().peek().map(|d| d.at.lineno()).collect();
    assert_eq!(lines, vec![2, 4]);
}

#[test]
fn del_and_c1_are_not_flagged() {
    // Mirrors the fixed illegal set: only C0 minus tab/CR/LF.
    let (_texts, queue) = guard_lines(vec!["\u{7f}\u{85}\u{9b}\n"]);
    assert!(queue.borrow().is_empty());
}

#[test]
fn illegal_set_boundaries() {
    assert!(is_illegal('\0'));
    assert!(is_illegal('\x08'));
    assert!(is_illegal('\x0b'));
    assert!(is_illegal('\x1f'));
    assert!(!is_illegal('\t'));
    assert!(!is_illegal('\n'));
    assert!(!is_illegal('\r'));
    assert!(!is_illegal(' '));
    assert!(!is_illegal('\u{7f}'));
}
