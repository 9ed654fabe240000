//! Static label data for ZMK key codes, modifiers and layers.
//!
//! Letters (`A`-`Z`) and function keys (`F1`-`F12`) map to themselves and are
//! generated in [`super::LabelTables::new`] rather than listed here.

/// Digits.
pub const DIGITS: &[(&str, &str)] = &[
    ("N0", "0"),
    ("N1", "1"),
    ("N2", "2"),
    ("N3", "3"),
    ("N4", "4"),
    ("N5", "5"),
    ("N6", "6"),
    ("N7", "7"),
    ("N8", "8"),
    ("N9", "9"),
];

/// Arrows and page navigation.
pub const NAVIGATION: &[(&str, &str)] = &[
    ("LEFT", "←"),
    ("RIGHT", "→"),
    ("UP", "↑"),
    ("DOWN", "↓"),
    ("LEFT_ARROW", "←"),
    ("RIGHT_ARROW", "→"),
    ("UP_ARROW", "↑"),
    ("DOWN_ARROW", "↓"),
    ("HOME", "Home"),
    ("END", "End"),
    ("PG_UP", "PgUp"),
    ("PG_DN", "PgDn"),
    ("INS", "Ins"),
];

/// Modifier keys pressed as ordinary keys (`&kp LSHFT`).
pub const MODIFIER_KEYS: &[(&str, &str)] = &[
    ("LSHFT", "LShf"),
    ("RSHFT", "RShf"),
    ("LEFT_SHIFT", "LShf"),
    ("LCTRL", "LCtl"),
    ("RCTRL", "RCtl"),
    ("LALT", "LAlt"),
    ("RALT", "RAlt"),
    ("LGUI", "LGui"),
    ("RGUI", "RGui"),
];

/// Editing and system keys.
pub const SYSTEM: &[(&str, &str)] = &[
    ("SPACE", "Spc"),
    ("BSPC", "Bksp"),
    ("DEL", "Del"),
    ("TAB", "Tab"),
    ("RET", "Ent"),
    ("ESC", "Esc"),
    ("ESCAPE", "Esc"),
    ("PSCRN", "PrtSc"),
    ("SLCK", "ScrLk"),
    ("PAUSE_BREAK", "Pause"),
];

/// Punctuation and symbols.
pub const SYMBOLS: &[(&str, &str)] = &[
    ("COMMA", ","),
    ("DOT", "."),
    ("SEMI", ";"),
    ("SQT", "'"),
    ("DQT", "\""),
    ("EXCL", "!"),
    ("AT", "@"),
    ("HASH", "#"),
    ("DLLR", "$"),
    ("PRCNT", "%"),
    ("CARET", "^"),
    ("AMPS", "&"),
    ("STAR", "*"),
    ("LPAR", "("),
    ("RPAR", ")"),
    ("MINUS", "-"),
    ("UNDER", "_"),
    ("EQUAL", "="),
    ("PLUS", "+"),
    ("LBKT", "["),
    ("RBKT", "]"),
    ("LBRC", "{"),
    ("RBRC", "}"),
    ("BSLH", "\\"),
    ("FSLH", "/"),
    ("PIPE", "|"),
    ("TILDE", "~"),
    ("GRAVE", "`"),
    ("LT", "<"),
    ("GT", ">"),
    ("QMARK", "?"),
    ("COLON", ":"),
];

/// Consumer (media) controls.
pub const MEDIA: &[(&str, &str)] = &[
    ("C_VOL_UP", "Vol+"),
    ("C_VOL_DN", "Vol−"),
    ("C_MUTE", "Mute"),
    ("C_BRI_UP", "Bri+"),
    ("C_BRI_DN", "Bri−"),
    ("C_PP", "Play"),
    ("C_PREV", "Prev"),
    ("C_NEXT", "Next"),
    ("C_PLAY_PAUSE", "Play"),
];

/// Clipboard and application commands.
pub const EDITING: &[(&str, &str)] = &[
    ("K_UNDO", "Undo"),
    ("K_CUT", "Cut"),
    ("K_COPY", "Copy"),
    ("K_PASTE", "Paste"),
    ("K_REDO", "Redo"),
    ("K_BACK", "Back"),
    ("K_FORWARD", "Fwd"),
    ("K_APP", "App"),
    ("K_MUTE", "Mute"),
];

/// Keypad operators.
pub const KEYPAD: &[(&str, &str)] = &[("KP_PLUS", "+"), ("KP_MULTIPLY", "*")];

/// Hold labels for modifier arguments of hold-tap behaviors.
pub const MODIFIERS: &[(&str, &str)] = &[
    ("LGUI", "Gui"),
    ("RGUI", "Gui"),
    ("LALT", "Alt"),
    ("RALT", "Alt"),
    ("LCTRL", "Ctrl"),
    ("RCTRL", "Ctrl"),
    ("LSHFT", "Shf"),
    ("RSHFT", "Shf"),
];

/// Layer identifiers, by name and by index.
pub const LAYERS: &[(&str, &str)] = &[
    ("BASE", "Base"),
    ("NAV", "Nav"),
    ("NUM", "Num"),
    ("FUN", "Fun"),
    ("UTIL", "Util"),
    ("GAME", "Game"),
    ("0", "Base"),
    ("1", "Nav"),
    ("2", "Num"),
    ("3", "Fun"),
    ("4", "Util"),
    ("5", "Game"),
];

/// Directions for `&mmv`.
pub const MOUSE_MOVE: &[(&str, &str)] = &[
    ("MOVE_LEFT", "←"),
    ("MOVE_RIGHT", "→"),
    ("MOVE_UP", "↑"),
    ("MOVE_DOWN", "↓"),
];

/// Directions for `&msc`.
pub const MOUSE_SCROLL: &[(&str, &str)] = &[
    ("SCRL_UP", "↑"),
    ("SCRL_DOWN", "↓"),
    ("SCRL_LEFT", "←"),
    ("SCRL_RIGHT", "→"),
];

/// Buttons for `&mkp`.
pub const MOUSE_CLICK: &[(&str, &str)] = &[
    ("LCLK", "LClk"),
    ("RCLK", "RClk"),
    ("MCLK", "MClk"),
    ("MB4", "MB4"),
    ("MB5", "MB5"),
];
