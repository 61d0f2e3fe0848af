//! Central UI style constants and helpers.
pub const EMOJI_PREV: &str = "◀";
pub const EMOJI_NEXT: &str = "▶";
pub const EMOJI_CLOCK: &str = "🕐";

pub const NO_PLAYERS_PLACEHOLDER: &str = "_No players yet_";

// Standard target widths for padded button labels (approx char counts before Discord trimming)
pub const BTN_W_NARROW: usize = 12; // indicators
pub const BTN_W_STD: usize = 16; // secondary nav buttons
pub const BTN_W_PRIMARY: usize = 22;

/// Pads a label to a target visible width using spaces so nav rows align better.
/// Discord collapses long runs of trailing spaces, so at most two are added.
pub fn pad_label(label: &str, target_min: usize) -> String {
    let len = label.chars().count();
    if len >= target_min {
        return label.to_string();
    }
    format!("{label}{pad}", pad = " ".repeat((target_min - len).min(2)))
}

pub fn pad_primary(label: &str) -> String {
    pad_label(label, BTN_W_PRIMARY)
}
pub fn pad_std(label: &str) -> String {
    pad_label(label, BTN_W_STD)
}
pub fn pad_narrow(label: &str) -> String {
    pad_label(label, BTN_W_NARROW)
}

/// `## <emoji> <name>` heading for a tribe block.
pub fn tribe_heading(emoji: Option<&str>, name: &str) -> String {
    match emoji {
        Some(e) => format!("## {e} {name}"),
        None => format!("## {name}"),
    }
}

/// Small grey subtitle line.
pub fn subtext(text: &str) -> String {
    format!("-# {text}")
}

pub fn player_count(n: usize) -> String {
    if n == 1 {
        "1 player".to_string()
    } else {
        format!("{n} players")
    }
}
