// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Operand, Operator};

/// An operator waiting for its second operand, together with the operand
/// captured when the operator was chosen.
///
/// Modeling the pair as one value makes "set together, cleared together"
/// structural: there is no way to hold an operator without its operand.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOperation {
    operator: Operator,
    operand: Operand,
}

impl PendingOperation {
    pub fn new(operator: Operator, operand: Operand) -> Self {
        Self { operator, operand }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operand(&self) -> &Operand {
        &self.operand
    }
}

/// The whole calculator state: the entry in progress and at most one pending
/// operation. Created empty, mutated in place by `ops`, reset on clear.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Calculator {
    current: Operand,
    pending: Option<PendingOperation>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Operand {
        &self.current
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    pub fn set_current(&mut self, operand: Operand) {
        self.current = operand;
    }

    /// Moves the current operand out, leaving `Empty` behind.
    pub fn take_current(&mut self) -> Operand {
        std::mem::take(&mut self.current)
    }

    pub fn set_pending(&mut self, pending: PendingOperation) {
        self.pending = Some(pending);
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Returns to the initial all-empty configuration.
    pub fn reset(&mut self) {
        self.current = Operand::Empty;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{Calculator, PendingOperation};
    use crate::model::{Operand, Operator};

    #[test]
    fn starts_empty() {
        let calc = Calculator::new();
        assert!(calc.current().is_empty());
        assert!(calc.pending().is_none());
    }

    #[test]
    fn take_current_leaves_empty() {
        let mut calc = Calculator::new();
        calc.set_current(Operand::Digits("42".to_owned()));

        let taken = calc.take_current();
        assert_eq!(taken, Operand::Digits("42".to_owned()));
        assert!(calc.current().is_empty());
    }

    #[test]
    fn reset_matches_fresh_state() {
        let mut calc = Calculator::new();
        calc.set_current(Operand::Digits("7".to_owned()));
        calc.set_pending(PendingOperation::new(
            Operator::Add,
            Operand::Digits("1".to_owned()),
        ));

        calc.reset();
        assert_eq!(calc, Calculator::new());
    }
}
