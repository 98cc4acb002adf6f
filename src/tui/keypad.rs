// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Operator;
use crate::ops::Input;

/// One on-screen button: the event it fires, its label, and its relative
/// width in grid cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Button {
    pub(crate) input: Input,
    pub(crate) label: &'static str,
    pub(crate) span: u16,
}

impl Button {
    const fn new(input: Input, label: &'static str, span: u16) -> Self {
        Self { input, label, span }
    }
}

/// Grid width every row's spans add up to.
pub(crate) const GRID_COLS: u16 = 4;

/// The keypad, top row first. Spans per row always sum to [`GRID_COLS`].
pub(crate) const ROWS: [&[Button]; 5] = [
    &[
        Button::new(Input::Clear, "AC", 2),
        Button::new(Input::Delete, "DEL", 1),
        Button::new(Input::Operator(Operator::Divide), "÷", 1),
    ],
    &[
        Button::new(Input::Digit('7'), "7", 1),
        Button::new(Input::Digit('8'), "8", 1),
        Button::new(Input::Digit('9'), "9", 1),
        Button::new(Input::Operator(Operator::Multiply), "*", 1),
    ],
    &[
        Button::new(Input::Digit('4'), "4", 1),
        Button::new(Input::Digit('5'), "5", 1),
        Button::new(Input::Digit('6'), "6", 1),
        Button::new(Input::Operator(Operator::Subtract), "-", 1),
    ],
    &[
        Button::new(Input::Digit('1'), "1", 1),
        Button::new(Input::Digit('2'), "2", 1),
        Button::new(Input::Digit('3'), "3", 1),
        Button::new(Input::Operator(Operator::Add), "+", 1),
    ],
    &[
        Button::new(Input::Digit('0'), "0", 1),
        Button::new(Input::Digit('.'), ".", 1),
        Button::new(Input::Equals, "=", 2),
    ],
];

pub(crate) fn button(row: usize, col: usize) -> Option<&'static Button> {
    ROWS.get(row).and_then(|buttons| buttons.get(col))
}

#[cfg(test)]
mod tests {
    use super::{button, Button, GRID_COLS, ROWS};
    use crate::model::Operator;
    use crate::ops::Input;

    #[test]
    fn row_spans_fill_the_grid() {
        for (idx, row) in ROWS.iter().enumerate() {
            let total: u16 = row.iter().map(|button| button.span).sum();
            assert_eq!(total, GRID_COLS, "row {idx}");
        }
    }

    #[test]
    fn every_digit_and_operator_has_a_button() {
        let buttons: Vec<&Button> = ROWS.iter().flat_map(|row| row.iter()).collect();

        for ch in "0123456789.".chars() {
            assert!(
                buttons.iter().any(|button| button.input == Input::Digit(ch)),
                "missing digit button {ch}"
            );
        }
        for operator in Operator::ALL {
            assert!(buttons.iter().any(|button| button.input == Input::Operator(operator)));
        }
        for action in [Input::Equals, Input::Delete, Input::Clear] {
            assert!(buttons.iter().any(|button| button.input == action));
        }
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<&str> =
            ROWS.iter().flat_map(|row| row.iter().map(|button| button.label)).collect();
        labels.sort_unstable();
        let len = labels.len();
        labels.dedup();
        assert_eq!(labels.len(), len);
    }

    #[test]
    fn button_lookup_bounds_check() {
        assert_eq!(button(0, 0).map(|b| b.label), Some("AC"));
        assert_eq!(button(4, 2).map(|b| b.label), Some("="));
        assert!(button(0, 3).is_none());
        assert!(button(5, 0).is_none());
    }
}
