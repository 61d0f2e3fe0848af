//! Maps the generic component tree onto Discord's Components V2 JSON.
use super::tree::{Accessory, Button, ButtonStyle, Component, Spacing};
use crate::constants::IS_COMPONENTS_V2;
use serde_json::{Value, json};

// Discord component type ids.
const TYPE_ACTION_ROW: u8 = 1;
const TYPE_BUTTON: u8 = 2;
const TYPE_SECTION: u8 = 9;
const TYPE_TEXT_DISPLAY: u8 = 10;
const TYPE_THUMBNAIL: u8 = 11;
const TYPE_SEPARATOR: u8 = 14;
const TYPE_CONTAINER: u8 = 17;

// Deferred interaction callback types.
const CALLBACK_DEFERRED_CHANNEL_MESSAGE: u8 = 5;
const CALLBACK_DEFERRED_UPDATE_MESSAGE: u8 = 6;

/// Where a rendered castlist goes. Either way the interaction is deferred first and
/// the view lands by editing the original response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// A new message ("thinking…" until the edit arrives).
    NewMessage,
    /// The message whose button was clicked, edited in place.
    UpdateMessage,
}

pub fn component_json(c: &Component) -> Value {
    match c {
        Component::Container {
            accent_color,
            children,
        } => {
            let mut v = json!({
                "type": TYPE_CONTAINER,
                "components": children.iter().map(component_json).collect::<Vec<_>>(),
            });
            if let Some(color) = accent_color {
                v["accent_color"] = json!(color);
            }
            v
        }
        Component::Text(content) => json!({ "type": TYPE_TEXT_DISPLAY, "content": content }),
        Component::Separator { divider, spacing } => json!({
            "type": TYPE_SEPARATOR,
            "divider": divider,
            "spacing": match spacing {
                Spacing::Small => 1,
                Spacing::Large => 2,
            },
        }),
        Component::Section { text, accessory } => json!({
            "type": TYPE_SECTION,
            "components": [{ "type": TYPE_TEXT_DISPLAY, "content": text }],
            "accessory": accessory_json(accessory),
        }),
        Component::ActionRow(buttons) => json!({
            "type": TYPE_ACTION_ROW,
            "components": buttons.iter().map(button_json).collect::<Vec<_>>(),
        }),
    }
}

fn accessory_json(a: &Accessory) -> Value {
    match a {
        Accessory::Thumbnail(url) => json!({ "type": TYPE_THUMBNAIL, "media": { "url": url } }),
    }
}

fn button_json(b: &Button) -> Value {
    let style = match b.style {
        ButtonStyle::Primary => 1,
        ButtonStyle::Secondary => 2,
    };
    json!({
        "type": TYPE_BUTTON,
        "style": style,
        "label": b.label,
        "custom_id": b.custom_id,
        "disabled": b.disabled,
    })
}

/// Message body with the Components V2 flag set.
pub fn message_json(components: &[Component]) -> Value {
    json!({
        "flags": IS_COMPONENTS_V2,
        "components": components.iter().map(component_json).collect::<Vec<_>>(),
    })
}

/// Deferred callback body acknowledging an interaction for `target`.
pub fn deferred_response_json(target: RenderTarget) -> Value {
    let kind = match target {
        RenderTarget::NewMessage => CALLBACK_DEFERRED_CHANNEL_MESSAGE,
        RenderTarget::UpdateMessage => CALLBACK_DEFERRED_UPDATE_MESSAGE,
    };
    json!({ "type": kind })
}
