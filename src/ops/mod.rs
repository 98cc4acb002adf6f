// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations for the calculator.
//!
//! Every guard condition degrades to a no-op: operations never fail and never
//! surface an error. Division by zero follows IEEE-754 float semantics and
//! the resulting infinity/NaN flows into display formatting.

use crate::model::{Calculator, Operand, Operator, PendingOperation};

/// One discrete button event from the input adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// A digit `0`-`9` or the decimal point `.`.
    Digit(char),
    Operator(Operator),
    Equals,
    Delete,
    Clear,
}

/// Applies one button event to the calculator.
pub fn apply_input(calc: &mut Calculator, input: Input) {
    match input {
        Input::Digit(ch) => append_digit(calc, ch),
        Input::Operator(operator) => choose_operator(calc, operator),
        Input::Equals => compute(calc),
        Input::Delete => remove_last_digit(calc),
        Input::Clear => reset(calc),
    }
}

/// Clears the entry and any pending operation.
pub fn reset(calc: &mut Calculator) {
    calc.reset();
}

/// Appends one character to the current entry.
///
/// A second decimal point is silently ignored. Appending onto a computed
/// result stringifies the result and continues the entry from there.
pub fn append_digit(calc: &mut Calculator, digit: char) {
    if digit == '.' && calc.current().contains_point() {
        return;
    }

    let mut digits = calc.take_current().into_digits();
    digits.push(digit);
    calc.set_current(Operand::from_digits(digits));
}

/// Drops the last character of the current entry; no-op when empty.
pub fn remove_last_digit(calc: &mut Calculator) {
    let mut digits = calc.take_current().into_digits();
    digits.pop();
    calc.set_current(Operand::from_digits(digits));
}

/// Records `operator` as pending and captures the current entry as its first
/// operand.
///
/// No-op when nothing has been entered. When an operation is already pending
/// the pair is collapsed first, which is what makes `2 + 3 + 4 =` evaluate
/// `2 + 3` before recording the second `+`. The chain compute may itself
/// no-op (a pending `.` never parsed); the stale pending operand is simply
/// overwritten.
pub fn choose_operator(calc: &mut Calculator, operator: Operator) {
    if calc.current().is_empty() {
        return;
    }

    if calc.pending().is_some() {
        compute(calc);
    }

    let operand = calc.take_current();
    calc.set_pending(PendingOperation::new(operator, operand));
}

/// Applies the pending operator to the captured and current operands.
///
/// No-op when no operation is pending or when either operand does not coerce
/// to a number. On success the result becomes the current operand and the
/// pending pair is cleared in one step.
pub fn compute(calc: &mut Calculator) {
    let Some(pending) = calc.pending() else {
        return;
    };
    let Some(lhs) = pending.operand().to_number() else {
        return;
    };
    let Some(rhs) = calc.current().to_number() else {
        return;
    };
    let operator = pending.operator();

    calc.set_current(Operand::Value(operator.apply(lhs, rhs)));
    calc.clear_pending();
}
