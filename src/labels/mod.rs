//! Display labels for ZMK key codes, modifiers and layers.
//!
//! [`LabelTables`] is built once at startup and shared by reference with the
//! binding parser and the renderer. Lookups never fail: an unknown code is
//! returned unchanged so it still shows up on the rendered key.

mod tables;

use std::collections::HashMap;

/// Which half of the keyboard a modifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    /// Left-hand modifier (`LCTRL`, `LC(...)`)
    Left,
    /// Right-hand modifier (`RCTRL`, `RC(...)`)
    Right,
}

/// The four modifier kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModifierKind {
    /// Control
    Ctrl,
    /// Shift
    Shift,
    /// Alt / Option
    Alt,
    /// Super / Command / Windows
    Gui,
}

impl ModifierKind {
    /// Short tag used when joining modifier combinations (`Ctrl+Shf+X`).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Ctrl => "Ctrl",
            Self::Shift => "Shf",
            Self::Alt => "Alt",
            Self::Gui => "Gui",
        }
    }
}

/// A modifier identified by kind and hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifier {
    /// Which modifier
    pub kind: ModifierKind,
    /// Which side
    pub hand: Hand,
}

impl Modifier {
    /// Resolves a modifier function name such as `LC` or `RS`.
    #[must_use]
    pub fn from_function(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let hand = match chars.next()? {
            'L' => Hand::Left,
            'R' => Hand::Right,
            _ => return None,
        };
        let kind = match chars.next()? {
            'C' => ModifierKind::Ctrl,
            'S' => ModifierKind::Shift,
            'A' => ModifierKind::Alt,
            'G' => ModifierKind::Gui,
            _ => return None,
        };
        if chars.next().is_some() {
            return None;
        }
        Some(Self { kind, hand })
    }

    /// Resolves a modifier key code such as `LCTRL` or `RGUI`.
    #[must_use]
    pub fn from_key_code(code: &str) -> Option<Self> {
        let (hand, kind) = match code {
            "LCTRL" | "LEFT_CONTROL" => (Hand::Left, ModifierKind::Ctrl),
            "RCTRL" | "RIGHT_CONTROL" => (Hand::Right, ModifierKind::Ctrl),
            "LSHFT" | "LEFT_SHIFT" => (Hand::Left, ModifierKind::Shift),
            "RSHFT" | "RIGHT_SHIFT" => (Hand::Right, ModifierKind::Shift),
            "LALT" | "LEFT_ALT" => (Hand::Left, ModifierKind::Alt),
            "RALT" | "RIGHT_ALT" => (Hand::Right, ModifierKind::Alt),
            "LGUI" | "LEFT_GUI" => (Hand::Left, ModifierKind::Gui),
            "RGUI" | "RIGHT_GUI" => (Hand::Right, ModifierKind::Gui),
            _ => return None,
        };
        Some(Self { kind, hand })
    }
}

/// Immutable key, modifier and layer label tables.
#[derive(Debug, Clone)]
pub struct LabelTables {
    keys: HashMap<String, String>,
    modifiers: HashMap<String, String>,
    layers: HashMap<String, String>,
    mouse_move: HashMap<String, String>,
    mouse_scroll: HashMap<String, String>,
    mouse_click: HashMap<String, String>,
}

impl Default for LabelTables {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelTables {
    /// Builds the tables from the static data in [`tables`].
    #[must_use]
    pub fn new() -> Self {
        let mut keys = HashMap::new();

        for letter in 'A'..='Z' {
            keys.insert(letter.to_string(), letter.to_string());
        }
        for n in 1..=12 {
            keys.insert(format!("F{n}"), format!("F{n}"));
        }
        for group in [
            tables::DIGITS,
            tables::NAVIGATION,
            tables::MODIFIER_KEYS,
            tables::SYSTEM,
            tables::SYMBOLS,
            tables::MEDIA,
            tables::EDITING,
            tables::KEYPAD,
        ] {
            keys.extend(to_map(group));
        }

        Self {
            keys,
            modifiers: to_map(tables::MODIFIERS),
            layers: to_map(tables::LAYERS),
            mouse_move: to_map(tables::MOUSE_MOVE),
            mouse_scroll: to_map(tables::MOUSE_SCROLL),
            mouse_click: to_map(tables::MOUSE_CLICK),
        }
    }

    /// Returns the label only when the key code is in the table.
    #[must_use]
    pub fn known_key(&self, code: &str) -> Option<&str> {
        self.keys.get(code).map(String::as_str)
    }

    /// Returns the hold label only when the modifier code is in the table.
    #[must_use]
    pub fn known_modifier(&self, code: &str) -> Option<&str> {
        self.modifiers.get(code).map(String::as_str)
    }

    /// Short name for a layer identifier (name or index).
    #[must_use]
    pub fn layer(&self, id: &str) -> String {
        lookup(&self.layers, id)
    }

    /// Returns the short layer name only when the identifier is in the table.
    #[must_use]
    pub fn known_layer(&self, id: &str) -> Option<&str> {
        self.layers.get(id).map(String::as_str)
    }

    /// Arrow (or raw code) for a mouse-move direction.
    #[must_use]
    pub fn mouse_move(&self, code: &str) -> String {
        lookup(&self.mouse_move, code)
    }

    /// Arrow (or raw code) for a mouse-scroll direction.
    #[must_use]
    pub fn mouse_scroll(&self, code: &str) -> String {
        lookup(&self.mouse_scroll, code)
    }

    /// Button name (or raw code) for a mouse click.
    #[must_use]
    pub fn mouse_click(&self, code: &str) -> String {
        lookup(&self.mouse_click, code)
    }
}

fn to_map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(code, label)| ((*code).to_string(), (*label).to_string()))
        .collect()
}

fn lookup(table: &HashMap<String, String>, code: &str) -> String {
    table
        .get(code)
        .cloned()
        .unwrap_or_else(|| code.to_string())
}
