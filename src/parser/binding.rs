//! Resolution of ZMK bindings into short key labels.
//!
//! Each behavior name maps to a [`Behavior`] variant that knows how many
//! arguments it expects and how to label them. Resolution never fails:
//! missing arguments render as `?` and unknown behaviors render as their
//! own name.

use crate::labels::{LabelTables, Modifier};
use crate::models::{Binding, ParsedBinding};
use crate::parser::tokenizer::split_words;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Glyph drawn on transparent keys.
pub const TRANSPARENT_GLYPH: &str = "▽";

/// Label for a left- or right-hand Ctrl+Shift+Alt+Gui combination.
pub const HYPER_LABEL: &str = "Hyper";

/// Placeholder for an argument the behavior needs but the binding omits.
const MISSING_ARG: &str = "?";

/// Behaviors the renderer knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// `&trans`
    Transparent,
    /// `&kp KEY`
    KeyPress,
    /// `&hml MOD KEY` / `&hmr MOD KEY` home-row mods
    HoldMod,
    /// `&mt MOD KEY`
    ModTap,
    /// `&lt_th LAYER KEY` / `&lt LAYER KEY`
    LayerTap,
    /// `&comma_morph`
    CommaMorph,
    /// `&dot_morph`
    DotMorph,
    /// `&caps_word`
    CapsWord,
    /// `&fat_arrow` macro
    FatArrow,
    /// `&studio_unlock`
    StudioUnlock,
    /// `&bt BT_SEL n`, `&bt BT_CLR`
    Bluetooth,
    /// `&out OUT_TOG`
    Output,
    /// `&mmv MOVE_*`
    MouseMove,
    /// `&msc SCRL_*`
    MouseScroll,
    /// `&mkp LCLK`
    MouseClick,
    /// `&tog LAYER`, `&mo LAYER`, `&to LAYER`
    LayerToggle,
    /// Anything else
    Unknown,
}

impl Behavior {
    /// Looks up a behavior by its keymap name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "trans" => Self::Transparent,
            "kp" => Self::KeyPress,
            "hml" | "hmr" => Self::HoldMod,
            "mt" => Self::ModTap,
            "lt_th" | "lt" => Self::LayerTap,
            "comma_morph" => Self::CommaMorph,
            "dot_morph" => Self::DotMorph,
            "caps_word" => Self::CapsWord,
            "fat_arrow" => Self::FatArrow,
            "studio_unlock" => Self::StudioUnlock,
            "bt" => Self::Bluetooth,
            "out" => Self::Output,
            "mmv" => Self::MouseMove,
            "msc" => Self::MouseScroll,
            "mkp" => Self::MouseClick,
            "tog" | "mo" | "to" => Self::LayerToggle,
            _ => Self::Unknown,
        }
    }

    /// Number of arguments the behavior reads.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::HoldMod | Self::ModTap | Self::LayerTap => 2,
            Self::KeyPress
            | Self::Bluetooth
            | Self::Output
            | Self::MouseMove
            | Self::MouseScroll
            | Self::MouseClick
            | Self::LayerToggle => 1,
            Self::Transparent
            | Self::CommaMorph
            | Self::DotMorph
            | Self::CapsWord
            | Self::FatArrow
            | Self::StudioUnlock
            | Self::Unknown => 0,
        }
    }

    /// Fixed tap label for behaviors that take no arguments.
    #[must_use]
    pub const fn fixed_label(self) -> Option<&'static str> {
        match self {
            Self::CommaMorph => Some(", ;"),
            Self::DotMorph => Some(". :"),
            Self::CapsWord => Some("CapsWd"),
            Self::FatArrow => Some("=>"),
            Self::StudioUnlock => Some("Studio"),
            _ => None,
        }
    }
}

/// Splits one binding (with or without its leading `&`) into behavior and
/// arguments. Returns `None` for blank input.
#[must_use]
pub fn tokenize_binding(text: &str) -> Option<Binding> {
    let text = text.trim();
    let text = text.strip_prefix('&').unwrap_or(text);
    let words = split_words(text);
    let (behavior, args) = words.split_first()?;
    Some(Binding::new(*behavior, args.iter().copied()))
}

/// Turns bindings into display labels using shared [`LabelTables`].
#[derive(Debug, Clone)]
pub struct BindingParser<'a> {
    labels: &'a LabelTables,
    /// `#define NAME index` layer aliases from the keymap
    layer_defines: HashMap<String, usize>,
}

impl<'a> BindingParser<'a> {
    /// Creates a parser backed by `labels`.
    #[must_use]
    pub fn new(labels: &'a LabelTables) -> Self {
        Self {
            labels,
            layer_defines: HashMap::new(),
        }
    }

    /// Adds layer aliases so `&lt_th MY_LAYER X` resolves like its index.
    #[must_use]
    pub fn with_layer_defines(mut self, defines: HashMap<String, usize>) -> Self {
        self.layer_defines = defines;
        self
    }

    /// Parses and resolves one binding.
    ///
    /// # Examples
    ///
    /// ```
    /// use keymap_svg::labels::LabelTables;
    /// use keymap_svg::parser::BindingParser;
    ///
    /// let labels = LabelTables::new();
    /// let parser = BindingParser::new(&labels);
    ///
    /// let parsed = parser.parse("mt LSHFT SPACE");
    /// assert_eq!(parsed.tap, "Spc");
    /// assert_eq!(parsed.hold.as_deref(), Some("Shf"));
    /// ```
    #[must_use]
    pub fn parse(&self, text: &str) -> ParsedBinding {
        match tokenize_binding(text) {
            Some(binding) => self.resolve(&binding),
            None => ParsedBinding::tap(""),
        }
    }

    /// Resolves an already tokenized binding.
    #[must_use]
    pub fn resolve(&self, binding: &Binding) -> ParsedBinding {
        let behavior = Behavior::from_name(&binding.behavior);

        if binding.args.len() < behavior.arity() {
            debug!(
                "Binding '{}' has {} argument(s), expected {}",
                binding.behavior,
                binding.args.len(),
                behavior.arity()
            );
        }

        match behavior {
            Behavior::Transparent => ParsedBinding::transparent(TRANSPARENT_GLYPH),
            Behavior::KeyPress => ParsedBinding::tap(self.arg_label(binding, 0, Self::key_label)),
            Behavior::HoldMod | Behavior::ModTap => ParsedBinding::tap_hold(
                self.arg_label(binding, 1, Self::key_label),
                self.arg_label(binding, 0, Self::modifier_label),
            ),
            Behavior::LayerTap => ParsedBinding::tap_hold(
                self.arg_label(binding, 1, Self::key_label),
                self.arg_label(binding, 0, Self::layer_label),
            ),
            Behavior::Bluetooth => ParsedBinding::tap(bluetooth_label(binding)),
            Behavior::Output => ParsedBinding::tap(output_label(binding)),
            Behavior::MouseMove => {
                let direction = binding
                    .arg(0)
                    .map_or_else(|| "Mouse".to_string(), |code| self.labels.mouse_move(code));
                ParsedBinding::tap(format!("Ms{direction}"))
            }
            Behavior::MouseScroll => {
                let direction = binding
                    .arg(0)
                    .map_or_else(|| "Scrl".to_string(), |code| self.labels.mouse_scroll(code));
                ParsedBinding::tap(format!("Sc{direction}"))
            }
            Behavior::MouseClick => ParsedBinding::tap(
                binding
                    .arg(0)
                    .map_or_else(|| "Click".to_string(), |code| self.labels.mouse_click(code)),
            ),
            Behavior::LayerToggle => ParsedBinding::tap(
                binding
                    .arg(0)
                    .map_or_else(|| "Tog".to_string(), |id| self.layer_label(id)),
            ),
            Behavior::Unknown => {
                debug!("Unrecognized behavior '{}'", binding.behavior);
                ParsedBinding::tap(binding.behavior.clone())
            }
            Behavior::CommaMorph
            | Behavior::DotMorph
            | Behavior::CapsWord
            | Behavior::FatArrow
            | Behavior::StudioUnlock => {
                ParsedBinding::tap(behavior.fixed_label().unwrap_or_default())
            }
        }
    }

    fn arg_label(
        &self,
        binding: &Binding,
        idx: usize,
        label: fn(&Self, &str) -> String,
    ) -> String {
        binding
            .arg(idx)
            .map_or_else(|| MISSING_ARG.to_string(), |code| label(self, code))
    }

    /// Label for a key code, unwrapping modifier functions like `LC(X)`.
    ///
    /// `LC(LA(LS(X)))` becomes `Ctrl+Alt+Shf+X`; a full same-hand
    /// Ctrl+Shift+Alt+Gui wrap becomes [`HYPER_LABEL`].
    #[must_use]
    pub fn key_label(&self, code: &str) -> String {
        if let Some(label) = self.labels.known_key(code) {
            return label.to_string();
        }
        if is_hyper(code) {
            return HYPER_LABEL.to_string();
        }
        if let Some((modifier, inner)) = unwrap_modifier(code) {
            return format!("{}+{}", modifier.kind.tag(), self.key_label(inner));
        }
        code.to_string()
    }

    /// Hold label for a modifier argument of a hold-tap behavior.
    #[must_use]
    pub fn modifier_label(&self, code: &str) -> String {
        if let Some(label) = self.labels.known_modifier(code) {
            return label.to_string();
        }
        if is_hyper(code) {
            return HYPER_LABEL.to_string();
        }
        if let Some((modifier, inner)) = unwrap_modifier(code) {
            return format!("{}+{}", modifier.kind.tag(), self.modifier_label(inner));
        }
        code.to_string()
    }

    /// Short name for a layer given by name, `#define` alias or index.
    #[must_use]
    pub fn layer_label(&self, id: &str) -> String {
        if let Some(label) = self.labels.known_layer(id) {
            return label.to_string();
        }
        if let Some(index) = self.layer_defines.get(id) {
            return self.labels.layer(&index.to_string());
        }
        id.to_string()
    }
}

fn bluetooth_label(binding: &Binding) -> String {
    match binding.arg(0) {
        Some("BT_SEL") => match binding
            .arg(1)
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(|profile| profile.checked_add(1))
        {
            Some(number) => format!("BT{number}"),
            None => format!("BT{MISSING_ARG}"),
        },
        Some("BT_CLR") => "BTClr".to_string(),
        _ => "BT".to_string(),
    }
}

fn output_label(binding: &Binding) -> String {
    match binding.arg(0) {
        Some("OUT_TOG") => "USB/BT",
        Some("OUT_USB") => "USB",
        Some("OUT_BLE") => "BLE",
        _ => "Out",
    }
    .to_string()
}

/// Splits `LC(inner)` into its modifier and inner argument.
fn unwrap_modifier(code: &str) -> Option<(Modifier, &str)> {
    let open = code.find('(')?;
    let modifier = Modifier::from_function(&code[..open])?;
    let inner = code[open + 1..].strip_suffix(')')?;
    is_balanced(inner).then_some((modifier, inner.trim()))
}

fn is_balanced(text: &str) -> bool {
    let mut depth: usize = 0;
    for ch in text.chars() {
        match ch {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

/// True for Ctrl, Shift, Alt and Gui all wrapped around each other on one
/// hand, e.g. `LS(LC(LA(LGUI)))` or `RS(RC(RA(RGUI)))`.
fn is_hyper(code: &str) -> bool {
    let mut chain = Vec::new();
    let mut current = code;
    while let Some((modifier, inner)) = unwrap_modifier(current) {
        chain.push(modifier);
        current = inner;
    }

    let Some(terminal) = Modifier::from_key_code(current) else {
        return false;
    };
    chain.push(terminal);

    let kinds: BTreeSet<_> = chain.iter().map(|m| m.kind).collect();
    chain.len() == 4 && kinds.len() == 4 && chain.iter().all(|m| m.hand == terminal.hand)
}
