// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end button scenarios through the public engine API: press
//! sequences in, display lines out.

use rstest::rstest;

use naiad::model::{Calculator, Operator};
use naiad::ops::{apply_input, Input};
use naiad::render::{display_lines, DisplayLines};

/// Presses a script of buttons: digits and `.` enter, `+ - * ÷` choose an
/// operator, `=` computes, `<` deletes, `C` clears.
fn press_script(script: &str) -> Calculator {
    let mut calc = Calculator::new();
    for ch in script.chars() {
        let input = match ch {
            '0'..='9' | '.' => Input::Digit(ch),
            '=' => Input::Equals,
            '<' => Input::Delete,
            'C' => Input::Clear,
            symbol => Input::Operator(
                Operator::try_from(symbol).expect("script operator symbol"),
            ),
        };
        apply_input(&mut calc, input);
    }
    calc
}

fn display(script: &str) -> DisplayLines {
    display_lines(&press_script(script))
}

#[rstest]
#[case("", "", "")]
#[case("1234", "", "1,234")]
#[case("1234.5", "", "1,234.5")]
#[case("2+3+4=", "", "9")]
#[case("99*2=", "", "198")]
#[case("10÷0=", "", "inf")]
#[case("2+3*4=", "", "20")]
#[case("0.5+0.5=", "", "1")]
#[case("1-1.5=", "", "-0.5")]
#[case("1000÷4=", "", "250")]
#[case("5+", "5 +", "")]
#[case("5++", "5 +", "")]
#[case("1234*", "1,234 *", "")]
#[case("123<<", "", "1")]
#[case("<<<", "", "")]
#[case("2+3=C", "", "")]
#[case("=", "", "")]
#[case("12.3.4", "", "12.34")]
fn scenario(#[case] script: &str, #[case] previous: &str, #[case] current: &str) {
    let lines = display(script);
    assert_eq!(lines.previous(), previous, "previous line for {script:?}");
    assert_eq!(lines.current(), current, "current line for {script:?}");
}

#[test]
fn chained_operators_collapse_left_to_right() {
    let calc = press_script("2+3+");
    let lines = display_lines(&calc);
    assert_eq!(lines.previous(), "5 +");
    assert_eq!(lines.current(), "");
}

#[test]
fn division_by_zero_clears_the_pending_pair() {
    let calc = press_script("10÷0=");
    assert!(calc.pending().is_none());
    assert_eq!(display_lines(&calc).current(), "inf");
}

#[test]
fn typing_continues_from_a_computed_result() {
    let lines = display("2+3=4");
    assert_eq!(lines.current(), "54");
}

#[test]
fn clear_recovers_from_any_history() {
    let calc = press_script("9÷0=+5=C");
    assert_eq!(calc, Calculator::new());
    assert_eq!(display_lines(&calc), display_lines(&Calculator::new()));
}

#[test]
fn delete_edits_a_result_before_the_next_compute() {
    // 99 * 2 = 198, delete → "19", + 1 = 20.
    let lines = display("99*2=<+1=");
    assert_eq!(lines.current(), "20");
    assert_eq!(lines.previous(), "");
}
