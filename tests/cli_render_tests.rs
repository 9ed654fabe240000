//! End-to-end tests for `keymap-svg render` command.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::fs;
use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the keymap-svg binary
fn keymap_svg_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keymap-svg")
}

const LAYER_FILES: [&str; 6] = ["base", "nav", "num", "fun", "util", "game"];

#[test]
fn test_render_writes_one_file_per_layer() {
    let (keymap_path, temp) = create_temp_keymap_file(&totem_keymap(6));
    let config_path = default_config(temp.path());
    let out_dir = temp.path().join("svg");

    let output = Command::new(keymap_svg_bin())
        .args(["render", "--keymap"])
        .arg(&keymap_path)
        .arg("--output")
        .arg(&out_dir)
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Render should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    for stem in LAYER_FILES {
        let path = out_dir.join(format!("{stem}.svg"));
        let svg = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Missing output: {}", path.display()));
        assert_eq!(rect_count(&svg), 38, "{stem}.svg should draw 38 keys");
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("✓ Wrote").count(), 6);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Wrote layer"), "Writes are reported once. stderr: {stderr}");
}

#[test]
fn test_render_labels() {
    let (keymap_path, temp) = create_temp_keymap_file(&totem_keymap(6));
    let config_path = default_config(temp.path());
    let out_dir = temp.path().join("svg");

    let status = Command::new(keymap_svg_bin())
        .args(["render", "--keymap"])
        .arg(&keymap_path)
        .arg("--output")
        .arg(&out_dir)
        .arg("--config")
        .arg(&config_path)
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let base = fs::read_to_string(out_dir.join("base.svg")).unwrap();
    assert!(base.contains(">Base (Gallium)</text>"));
    assert!(base.contains(r#"<text x="0" y="0" class="key hold small">Hyper</text>"#));
    assert!(base.contains(r#"<text x="0" y="-6" class="key tap">Spc</text>"#));
    assert!(base.contains(">, ;</text>"));
    assert!(!base.contains("key held"));

    let fun = fs::read_to_string(out_dir.join("fun.svg")).unwrap();
    assert!(fun.contains(">BT1</text>"));
    assert!(fun.contains(">BTClr</text>"));
    assert!(fun.contains(">USB/BT</text>"));

    let util = fs::read_to_string(out_dir.join("util.svg")).unwrap();
    assert!(util.contains(">Ms↑</text>"));
    assert!(util.contains(">LClk</text>"));
}

#[test]
fn test_render_held_key_shows_layer_name() {
    let (keymap_path, temp) = create_temp_keymap_file(&totem_keymap(6));
    let config_path = default_config(temp.path());
    let out_dir = temp.path().join("svg");

    let status = Command::new(keymap_svg_bin())
        .args(["render", "--keymap"])
        .arg(&keymap_path)
        .arg("--output")
        .arg(&out_dir)
        .arg("--config")
        .arg(&config_path)
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let nav = fs::read_to_string(out_dir.join("nav.svg")).unwrap();
    assert_eq!(nav.matches(r#"class="key held""#).count(), 1);
    assert!(nav.contains(r#"class="key keypos-33""#));
    assert!(nav.contains(r#"<text x="0" y="0" class="key tap">Nav</text>"#));
    assert_eq!(nav.matches("key tap trans").count(), 32);
}

#[test]
fn test_render_is_byte_identical_on_rerun() {
    let (keymap_path, temp) = create_temp_keymap_file(&totem_keymap(6));
    let config_path = default_config(temp.path());
    let first = temp.path().join("first");
    let second = temp.path().join("second");

    for out_dir in [&first, &second] {
        let status = Command::new(keymap_svg_bin())
            .args(["render", "--keymap"])
            .arg(&keymap_path)
            .arg("--output")
            .arg(out_dir)
            .arg("--config")
            .arg(&config_path)
            .status()
            .expect("Failed to execute command");
        assert!(status.success());
    }

    for stem in LAYER_FILES {
        let a = fs::read(first.join(format!("{stem}.svg"))).unwrap();
        let b = fs::read(second.join(format!("{stem}.svg"))).unwrap();
        assert_eq!(a, b, "{stem}.svg differs between runs");
    }
}

#[test]
fn test_render_layer_count_mismatch_is_not_fatal() {
    let (keymap_path, temp) = create_temp_keymap_file(&totem_keymap(4));
    let config_path = default_config(temp.path());
    let out_dir = temp.path().join("svg");

    let output = Command::new(keymap_svg_bin())
        .args(["render", "--keymap"])
        .arg(&keymap_path)
        .arg("--output")
        .arg(&out_dir)
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Expected 6 layers, found 4"),
        "Should warn about layer count. stderr: {stderr}"
    );
    assert!(out_dir.join("fun.svg").exists());
    assert!(!out_dir.join("util.svg").exists());
}

#[test]
fn test_render_extra_layers_use_fallback_names() {
    let (keymap_path, temp) = create_temp_keymap_file(&totem_keymap(7));
    let config_path = default_config(temp.path());
    let out_dir = temp.path().join("svg");

    let status = Command::new(keymap_svg_bin())
        .args(["render", "--keymap"])
        .arg(&keymap_path)
        .arg("--output")
        .arg(&out_dir)
        .arg("--config")
        .arg(&config_path)
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let extra = fs::read_to_string(out_dir.join("layer6.svg")).unwrap();
    assert!(extra.contains(">Layer 6</text>"));
    assert_eq!(rect_count(&extra), 38);
}

#[test]
fn test_render_uses_config_profiles_and_paths() {
    let (keymap_path, temp) = create_temp_keymap_file(&totem_keymap(2));
    let out_dir = temp.path().join("from-config");
    let config_path = write_config(
        temp.path(),
        &format!(
            r#"
[paths]
keymap = "{}"
output_dir = "{}"

[layers]
expected_count = 2

[[layers.profiles]]
file_stem = "main"
display_name = "Main"
short_name = "Main"

[[layers.profiles]]
file_stem = "arrows"
display_name = "Arrows"
short_name = "Arr"
held_position = 32
"#,
            keymap_path.display().to_string().replace('\\', "/"),
            out_dir.display().to_string().replace('\\', "/"),
        ),
    );

    let output = Command::new(keymap_svg_bin())
        .args(["render", "--config"])
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Expected"));

    let arrows = fs::read_to_string(out_dir.join("arrows.svg")).unwrap();
    assert!(arrows.contains(">Arrows</text>"));
    assert!(arrows.contains(r#"<text x="0" y="0" class="key tap">Arr</text>"#));
    assert!(out_dir.join("main.svg").exists());
}

#[test]
fn test_render_custom_template() {
    let (keymap_path, temp) = create_temp_keymap_file(&totem_keymap(6));
    let config_path = default_config(temp.path());
    let out_dir = temp.path().join("svg");
    let template_path = temp.path().join("template.svg");
    fs::write(
        &template_path,
        "<svg id=\"custom\">\n  <g>\n    <g transform=\"translate(0, 56)\">\n    </g>\n  </g>\n</svg>",
    )
    .unwrap();

    let status = Command::new(keymap_svg_bin())
        .args(["render", "--keymap"])
        .arg(&keymap_path)
        .arg("--template")
        .arg(&template_path)
        .arg("--output")
        .arg(&out_dir)
        .arg("--config")
        .arg(&config_path)
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let base = fs::read_to_string(out_dir.join("base.svg")).unwrap();
    assert!(base.starts_with("<svg id=\"custom\">\n  <g>\n    <g transform=\"translate(0, 56)\">\n"));
}

#[test]
fn test_render_template_without_marker_fails() {
    let (keymap_path, temp) = create_temp_keymap_file(&totem_keymap(6));
    let config_path = default_config(temp.path());
    let template_path = temp.path().join("template.svg");
    fs::write(&template_path, "<svg></svg>").unwrap();

    let output = Command::new(keymap_svg_bin())
        .args(["render", "--keymap"])
        .arg(&keymap_path)
        .arg("--template")
        .arg(&template_path)
        .arg("--output")
        .arg(temp.path().join("svg"))
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("marker"));
}

#[test]
fn test_render_missing_keymap_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let config_path = default_config(temp.path());

    let output = Command::new(keymap_svg_bin())
        .args(["render", "--keymap"])
        .arg(temp.path().join("missing.keymap"))
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load keymap"));
}

#[test]
fn test_render_without_keymap_is_validation_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let config_path = default_config(temp.path());

    let output = Command::new(keymap_svg_bin())
        .args(["render", "--config"])
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No keymap given"));
}

#[test]
fn test_render_reports_failed_layer_and_writes_others() {
    let (keymap_path, temp) = create_temp_keymap_file(&totem_keymap(6));
    let config_path = default_config(temp.path());
    let out_dir = temp.path().join("svg");
    fs::create_dir_all(out_dir.join("num.svg")).unwrap();

    let output = Command::new(keymap_svg_bin())
        .args(["render", "--keymap"])
        .arg(&keymap_path)
        .arg("--output")
        .arg(&out_dir)
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to write 1 of 6 layers"));
    for stem in ["base", "nav", "fun", "util", "game"] {
        assert!(out_dir.join(format!("{stem}.svg")).is_file(), "{stem}.svg missing");
    }
    assert!(!out_dir.join("num.svg.tmp").exists());
}
