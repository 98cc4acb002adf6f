// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core calculator data model.
//!
//! Operands are held as entered text until a computation coerces them to a
//! number; the pending operator and its captured operand travel together as
//! one value so they can never get out of sync.

pub mod calculator;
pub mod operand;
pub mod operator;

pub use calculator::{Calculator, PendingOperation};
pub use operand::Operand;
pub use operator::{Operator, UnknownOperatorError};
