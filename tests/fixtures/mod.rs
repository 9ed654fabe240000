//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Base layer: Gallium letters, home-row mods and layer-tap thumbs.
const BASE_LAYER: &str = r"
            &kp B  &kp L  &kp D  &kp C  &kp V      &kp J  &kp Y  &kp O  &kp U  &kp COMMA
            &hml LS(LC(LA(LGUI))) N  &hml LALT R  &hml LCTRL T  &hml LSHFT S  &kp G
            &kp P  &hmr RSHFT H  &hmr RCTRL A  &hmr RALT E  &hmr RGUI I
    &kp ESC &kp X  &kp Q  &kp M  &kp W  &kp Z      &kp K  &kp F  &comma_morph  &dot_morph  &kp SLASH &kp DEL
                   &lt_th UTIL TAB  &lt_th NAV SPACE  &kp LSHFT
                   &kp ENTER  &lt_th NUM BSPC  &lt_th FUN DEL
";

/// Builds a layer of 38 bindings: `leading` followed by `&trans` fill.
pub fn layer_of(leading: &[&str]) -> String {
    let mut bindings: Vec<&str> = leading.to_vec();
    bindings.resize(38, "&trans");
    bindings.join(" ")
}

/// A Totem keymap with `layer_count` layers (at most six named ones,
/// further layers are generic).
pub fn totem_keymap(layer_count: usize) -> String {
    let named: [(&str, Option<&str>, String); 6] = [
        ("base", Some("Base"), BASE_LAYER.to_string()),
        (
            "nav",
            Some("Nav"),
            layer_of(&["&kp HOME", "&kp UP", "&kp END", "&kp LC(X)", "&kp LC(C)"]),
        ),
        (
            "num",
            None,
            layer_of(&["&kp N1", "&kp N2", "&kp N3", "&kp PLUS", "&fat_arrow"]),
        ),
        (
            "fun",
            Some("Fun"),
            layer_of(&["&kp F1", "&kp F2", "&bt BT_SEL 0", "&bt BT_CLR", "&out OUT_TOG"]),
        ),
        (
            "util",
            Some("Util"),
            layer_of(&["&mmv MOVE_UP", "&msc SCRL_DOWN", "&mkp LCLK", "&caps_word"]),
        ),
        (
            "game",
            Some("Game"),
            layer_of(&["&kp W", "&kp A", "&kp S", "&kp D", "&tog GAME"]),
        ),
    ];

    let mut source = String::from(
        "#include <behaviors.dtsi>\n\
         #include <dt-bindings/zmk/keys.h>\n\
         #include <dt-bindings/zmk/bt.h>\n\n\
         #define BASE 0\n#define NAV 1\n#define NUM 2\n#define FUN 3\n#define UTIL 4\n#define GAME 5\n\n\
         / {\n    keymap {\n        compatible = \"zmk,keymap\";\n\n",
    );

    for idx in 0..layer_count {
        let (name, display, bindings) = match named.get(idx) {
            Some((name, display, bindings)) => (name.to_string(), *display, bindings.clone()),
            None => (format!("extra{idx}"), None, layer_of(&["&kp A"])),
        };
        source.push_str(&format!("        // {name} layer\n        {name}_layer {{\n"));
        if let Some(display) = display {
            source.push_str(&format!("            display-name = \"{display}\";\n"));
        }
        source.push_str(&format!("            bindings = <\n{bindings}\n            >;\n"));
        source.push_str("        };\n\n");
    }

    source.push_str("    };\n};\n");
    source
}

/// Writes `content` to `<tempdir>/totem.keymap`.
///
/// The returned `TempDir` must be kept alive for the file to exist.
pub fn create_temp_keymap_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("totem.keymap");
    fs::write(&path, content).expect("Failed to write keymap file");
    (path, temp_dir)
}

/// Writes a config file into `dir` and returns its path.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).expect("Failed to write config file");
    path
}

/// Writes an empty config file so tests never read the user's config.
pub fn default_config(dir: &Path) -> PathBuf {
    write_config(dir, "")
}

/// Number of key rectangles in a rendered layer.
pub fn rect_count(svg: &str) -> usize {
    svg.matches("<rect ").count()
}
