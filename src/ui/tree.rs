//! Generic component tree produced by the castlist renderer.
//!
//! Nodes mirror Discord's Components V2 building blocks without their wire numbers;
//! `ui::components_v2` owns that mapping.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub custom_id: String,
    pub label: String,
    pub style: ButtonStyle,
    pub disabled: bool,
}

impl Button {
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    Small,
    Large,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessory {
    Thumbnail(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Container {
        accent_color: Option<u32>,
        children: Vec<Component>,
    },
    Text(String),
    Separator {
        divider: bool,
        spacing: Spacing,
    },
    /// Text with an accessory on the right (a member card).
    Section {
        text: String,
        accessory: Accessory,
    },
    ActionRow(Vec<Button>),
}

impl Component {
    pub fn divider() -> Self {
        Component::Separator {
            divider: true,
            spacing: Spacing::Small,
        }
    }

    pub fn spacer() -> Self {
        Component::Separator {
            divider: false,
            spacing: Spacing::Large,
        }
    }

    /// How many components Discord counts for this node, nested ones included.
    pub fn count(&self) -> usize {
        match self {
            Component::Container { children, .. } => 1 + count_all(children),
            Component::Text(_) | Component::Separator { .. } => 1,
            // section + its text display + the accessory
            Component::Section { .. } => 3,
            Component::ActionRow(buttons) => 1 + buttons.len(),
        }
    }
}

pub fn count_all(components: &[Component]) -> usize {
    components.iter().map(Component::count).sum()
}
