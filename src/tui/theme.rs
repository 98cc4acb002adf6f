// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

/// TUI colors, optionally overridden via `NAIAD_TUI_PALETTE`.
///
/// The override is `fg,bg,accent` as `#RRGGBB` hex colors; absent or empty
/// means terminal defaults with a yellow accent.
#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let value = match env::var("NAIAD_TUI_PALETTE") {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => return Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv { value: "<non-unicode>".to_owned() });
            }
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let palette = TuiPalette::parse_csv(trimmed)
            .map_err(|error| ThemeError::InvalidEnv { value: format!("{trimmed} ({error})") })?;
        Ok(Self { palette: Some(palette) })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn accent(&self) -> Color {
        match &self.palette {
            Some(palette) => palette.accent,
            None => Color::Yellow,
        }
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().fg(self.accent())
        } else {
            self.base_style()
        }
    }

    /// The current-entry display line.
    pub(crate) fn entry_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::BOLD)
    }

    /// The pending-operand display line.
    pub(crate) fn pending_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.accent).bg(palette.bg),
            None => Style::default().fg(Color::DarkGray),
        }
    }

    pub(crate) fn button_label_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().fg(self.accent()).add_modifier(Modifier::BOLD)
        } else {
            self.base_style()
        }
    }
}

#[derive(Debug, Clone)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    accent: Color,
}

impl TuiPalette {
    const CSV_LEN: usize = 3;

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(|part| part.trim()).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (fg,bg,accent), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        Ok(Self {
            fg: parse_palette_color(parts[0])?,
            bg: parse_palette_color(parts[1])?,
            accent: parse_palette_color(parts[2])?,
        })
    }
}

fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_owned());
    }

    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    Ok(Color::Rgb(((rgb >> 16) & 0xFF) as u8, ((rgb >> 8) & 0xFF) as u8, (rgb & 0xFF) as u8))
}

#[derive(Debug, Clone)]
pub(crate) enum ThemeError {
    InvalidEnv { value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { value } => write!(f, "invalid env NAIAD_TUI_PALETTE={value}"),
        }
    }
}

impl Error for ThemeError {}
