//! Bindings as written in the keymap and as resolved for display.

use serde::Serialize;

/// One key's behavior as written in the keymap, without the leading `&`.
///
/// Arguments keep nested modifier functions intact, so `&hml LS(LC(LA(LGUI))) W`
/// has behavior `hml` and arguments `["LS(LC(LA(LGUI)))", "W"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    /// Behavior name (`kp`, `mt`, `trans`, ...)
    pub behavior: String,
    /// Behavior arguments in source order
    pub args: Vec<String>,
}

impl Binding {
    /// Creates a binding from a behavior name and its arguments.
    pub fn new<S: Into<String>>(
        behavior: impl Into<String>,
        args: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            behavior: behavior.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the argument at `idx`, if present.
    #[must_use]
    pub fn arg(&self, idx: usize) -> Option<&str> {
        self.args.get(idx).map(String::as_str)
    }
}

/// Display labels resolved from a [`Binding`].
///
/// A transparent binding never carries a hold label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedBinding {
    /// Label shown when the key is tapped (always present, may be empty)
    pub tap: String,
    /// Label shown for the hold action, if the key has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold: Option<String>,
    /// Key inherits its meaning from the layer below
    pub is_transparent: bool,
}

impl ParsedBinding {
    /// A key with only a tap action.
    pub fn tap(label: impl Into<String>) -> Self {
        Self {
            tap: label.into(),
            hold: None,
            is_transparent: false,
        }
    }

    /// A key with separate tap and hold actions.
    pub fn tap_hold(tap: impl Into<String>, hold: impl Into<String>) -> Self {
        Self {
            tap: tap.into(),
            hold: Some(hold.into()),
            is_transparent: false,
        }
    }

    /// A transparent key shown with the given glyph.
    pub fn transparent(glyph: impl Into<String>) -> Self {
        Self {
            tap: glyph.into(),
            hold: None,
            is_transparent: true,
        }
    }
}
