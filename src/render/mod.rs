// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Derived display state.
//!
//! The adapter pulls both lines after every state-mutating call; the engine
//! never pushes to a presentation surface.

use crate::format::format_operand;
use crate::model::Calculator;

/// The two display lines: the pending operand with its operator on top, the
/// current entry below.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayLines {
    previous: String,
    current: String,
}

impl DisplayLines {
    pub fn previous(&self) -> &str {
        &self.previous
    }

    pub fn current(&self) -> &str {
        &self.current
    }
}

/// Computes both display lines from the calculator state.
pub fn display_lines(calc: &Calculator) -> DisplayLines {
    let current = format_operand(calc.current());
    let previous = match calc.pending() {
        Some(pending) => {
            format!("{} {}", format_operand(pending.operand()), pending.operator().symbol())
        }
        None => String::new(),
    };

    DisplayLines { previous, current }
}

#[cfg(test)]
mod tests {
    use super::display_lines;
    use crate::model::{Calculator, Operand, Operator, PendingOperation};

    #[test]
    fn empty_state_renders_two_empty_lines() {
        let lines = display_lines(&Calculator::new());
        assert_eq!(lines.previous(), "");
        assert_eq!(lines.current(), "");
    }

    #[test]
    fn current_line_groups_the_entry() {
        let mut calc = Calculator::new();
        calc.set_current(Operand::Digits("1234.5".to_owned()));

        let lines = display_lines(&calc);
        assert_eq!(lines.current(), "1,234.5");
        assert_eq!(lines.previous(), "");
    }

    #[test]
    fn previous_line_shows_operand_and_operator_symbol() {
        let mut calc = Calculator::new();
        calc.set_pending(PendingOperation::new(
            Operator::Divide,
            Operand::Digits("1000".to_owned()),
        ));
        calc.set_current(Operand::Digits("3".to_owned()));

        let lines = display_lines(&calc);
        assert_eq!(lines.previous(), "1,000 ÷");
        assert_eq!(lines.current(), "3");
    }

    #[test]
    fn infinity_renders_natively() {
        let mut calc = Calculator::new();
        calc.set_current(Operand::Value(f64::INFINITY));

        assert_eq!(display_lines(&calc).current(), "inf");
    }
}
