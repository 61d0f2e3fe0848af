//! Central button construction helpers ensuring consistent padding and style.
use super::style::{pad_narrow, pad_primary, pad_std};
use super::tree::{Button, ButtonStyle};

pub struct Btn;
impl Btn {
    pub fn primary(id: &str, label: &str) -> Button {
        button(id, pad_primary(label), ButtonStyle::Primary)
    }
    pub fn secondary(id: &str, label: &str) -> Button {
        button(id, pad_std(label), ButtonStyle::Secondary)
    }
    /// Greyed-out status/boundary button; never dispatches work.
    pub fn inert(id: &str, label: &str) -> Button {
        button(id, pad_narrow(label), ButtonStyle::Secondary).disabled(true)
    }
}

fn button(id: &str, label: String, style: ButtonStyle) -> Button {
    Button {
        custom_id: id.to_string(),
        label,
        style,
        disabled: false,
    }
}
