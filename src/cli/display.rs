// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the wex CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `WEX_THEME` first, then `COLORFGBG`, then defaults to dark. Colors are off
//! when `NO_COLOR` is set or stdout is not a TTY, so piping into another tool
//! gets plain text.

use std::sync::OnceLock;

use wex::{MatchTier, Record, ScoredMatch};

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("WEX_THEME") {
        if let Some(theme) = parse_theme(&theme) {
            return theme;
        }
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// True color escape sequence helper
fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Palette slots used by the result listing.
#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
    Cyan,
    Gray,
}

impl Color {
    fn escape(self, theme: Theme) -> String {
        let onedark = match self {
            Color::Green => (152, 195, 121),  // #98c379
            Color::Yellow => (229, 192, 123), // #e5c07b
            Color::Blue => (97, 175, 239),    // #61afef
            Color::Cyan => (86, 182, 194),    // #56b6c2
            Color::Gray => (92, 99, 112),     // #5c6370
        };
        let onelight = match self {
            Color::Green => (80, 161, 79),   // #50a14f
            Color::Yellow => (193, 132, 1),  // #c18401
            Color::Blue => (64, 120, 242),   // #4078f2
            Color::Cyan => (1, 132, 188),    // #0184bc
            Color::Gray => (160, 161, 167),  // #a0a1a7
        };
        match theme {
            Theme::Dark => rgb(onedark),
            Theme::Light => rgb(onelight),
        }
    }
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Output style: whether to emit escapes, and in which theme.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub colored: bool,
    pub theme: Theme,
}

impl Style {
    /// Style for stdout as detected from the environment.
    pub fn detect() -> Self {
        if !use_colors() {
            return Self::plain();
        }
        Self {
            colored: true,
            theme: theme(),
        }
    }

    pub fn plain() -> Self {
        Self {
            colored: false,
            theme: Theme::Dark,
        }
    }

    /// Apply theme color with optional modifiers
    pub fn paint(&self, color: Color, modifiers: &[&str], text: &str) -> String {
        if self.colored {
            format!(
                "{}{}{}{}",
                modifiers.join(""),
                color.escape(self.theme),
                text,
                RESET
            )
        } else {
            text.to_string()
        }
    }
}

/// Fixed-width badge naming the tier a record matched in.
pub fn tier_badge(tier: MatchTier, style: &Style) -> String {
    let color = match tier {
        MatchTier::Name => Color::Green,
        MatchTier::Description => Color::Yellow,
        MatchTier::Url => Color::Blue,
    };
    style.paint(color, &[BOLD], &format!("{:<11}", tier.as_str()))
}

/// Multi-line listing of one record, indented under its heading line.
pub fn render_record(record: &Record, style: &Style) -> String {
    let mut out = style.paint(Color::Cyan, &[BOLD], &record.name.join(", "));
    out.push('\n');
    if !record.url.is_empty() {
        out.push_str("    ");
        out.push_str(&style.paint(Color::Blue, &[], &record.url));
        out.push('\n');
    }
    out.push_str("    ");
    out.push_str(&style.paint(Color::Gray, &[], &record.description.join(", ")));
    out.push('\n');
    out
}

/// One ranked search hit: position, tier badge, score, then the record.
pub fn render_match(position: usize, hit: &ScoredMatch<'_>, style: &Style) -> String {
    let rank = style.paint(Color::Gray, &[DIM], &format!("{:>3}.", position));
    let score = style.paint(Color::Gray, &[DIM], &format!("{:>2}", hit.score));
    format!(
        "{} {} {} {}",
        rank,
        tier_badge(hit.tier, style),
        score,
        render_record(hit.record, style)
    )
}

/// Footer line summarizing a listing.
pub fn render_summary(shown: usize, total: usize, style: &Style) -> String {
    let text = if shown == total {
        format!("{} result{}", total, if total == 1 { "" } else { "s" })
    } else {
        format!("{} of {} results", shown, total)
    };
    style.paint(Color::Gray, &[DIM], &text)
}
