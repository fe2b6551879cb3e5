//! Keyboard navigation between the search input and rendered results.
//!
//! Two locations: the input, or the n-th result item. Movement is one
//! sibling at a time and never wraps.

/// Keys the navigator reacts to. Everything else keeps default behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Escape,
    Space,
}

impl NavKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key_value(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "Down" => Some(Self::ArrowDown),
            "ArrowUp" | "Up" => Some(Self::ArrowUp),
            "Escape" | "Esc" => Some(Self::Escape),
            " " | "Spacebar" => Some(Self::Space),
            _ => None,
        }
    }
}

/// Where the key event originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    /// Zero-based position among the rendered result items.
    Result(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    FocusResult(usize),
    /// Simulate a click on the result item.
    Activate(usize),
    /// Set `expanded=false` and clear the results container.
    Collapse {
        clear_input: bool,
        refocus_input: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    pub prevent_default: bool,
    pub action: Option<KeyAction>,
}

impl KeyOutcome {
    pub fn ignored() -> Self {
        Self {
            prevent_default: false,
            action: None,
        }
    }

    fn handled(action: Option<KeyAction>) -> Self {
        Self {
            prevent_default: true,
            action,
        }
    }

    pub fn is_ignored(&self) -> bool {
        !self.prevent_default && self.action.is_none()
    }
}

pub fn navigate(focus: Focus, key: NavKey, result_count: usize) -> KeyOutcome {
    match (focus, key) {
        (Focus::Input, NavKey::ArrowDown) => {
            KeyOutcome::handled((result_count > 0).then_some(KeyAction::FocusResult(0)))
        }
        (Focus::Input, NavKey::Escape) => KeyOutcome::handled(Some(KeyAction::Collapse {
            clear_input: true,
            refocus_input: false,
        })),
        (Focus::Result(i), NavKey::ArrowDown) => {
            let next = i + 1;
            KeyOutcome::handled((next < result_count).then_some(KeyAction::FocusResult(next)))
        }
        (Focus::Result(i), NavKey::ArrowUp) => {
            KeyOutcome::handled(i.checked_sub(1).map(KeyAction::FocusResult))
        }
        (Focus::Result(_), NavKey::Escape) => KeyOutcome::handled(Some(KeyAction::Collapse {
            clear_input: false,
            refocus_input: true,
        })),
        (Focus::Result(i), NavKey::Space) => KeyOutcome::handled(Some(KeyAction::Activate(i))),
        (Focus::Input, NavKey::ArrowUp | NavKey::Space) => KeyOutcome::ignored(),
    }
}
