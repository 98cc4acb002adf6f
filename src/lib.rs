// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Naiad — Rust Calculator TUI (button keypad + two-line display).
//!
//! The engine (`model` + `ops` + `format` + `render`) is pure and holds no
//! reference to any presentation surface; the `tui` module owns the widgets,
//! feeds button presses into `ops`, and pulls the display lines back out.

pub mod format;
pub mod model;
pub mod ops;
pub mod render;
pub mod tui;
