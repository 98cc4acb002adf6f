// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::format::value_to_digits;

/// A single operand slot: nothing entered yet, in-progress digit entry, or a
/// computed result.
///
/// Entry stays text until computation time; a result stays numeric until the
/// next edit stringifies it again. `Digits` is never empty — an entry emptied
/// by deletion collapses back to `Empty` via [`Operand::from_digits`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Operand {
    #[default]
    Empty,
    Digits(String),
    Value(f64),
}

impl Operand {
    /// Normalizing constructor: an empty digit string is no entry at all.
    pub fn from_digits(digits: String) -> Self {
        if digits.is_empty() {
            Self::Empty
        } else {
            Self::Digits(digits)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The operand as editable entry text. A computed result re-enters the
    /// entry path through its shortest stringification.
    pub fn into_digits(self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Digits(digits) => digits,
            Self::Value(value) => value_to_digits(value),
        }
    }

    /// Entry text for display formatting, without consuming the operand.
    pub fn digits(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Digits(digits) => digits.clone(),
            Self::Value(value) => value_to_digits(*value),
        }
    }

    /// Whether the entry text already carries a decimal point.
    pub fn contains_point(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Digits(digits) => digits.contains('.'),
            Self::Value(value) => value_to_digits(*value).contains('.'),
        }
    }

    /// Coerces the operand to a number for computation.
    ///
    /// `None` means the operand cannot participate in a computation: nothing
    /// entered, an entry that is not a number (a bare `.`), or a NaN result.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Empty => None,
            Self::Digits(digits) => digits.parse::<f64>().ok().filter(|value| !value.is_nan()),
            Self::Value(value) => (!value.is_nan()).then_some(*value),
        }
    }
}
