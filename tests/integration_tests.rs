//! Integration tests for trackpad2key
//!
//! These tests verify the settings file format and the timing conventions
//! the monitoring loop relies on. Tests that require hardware live in
//! hardware_tests.rs and are marked #[ignore].

// Note: We can't directly import from the crate in integration tests
// without making modules public or using a lib.rs

/// Test that a full settings file round-trips through TOML
#[test]
fn test_settings_round_trip() {
    let settings_toml = r#"
debounce_ms = 1000
threshold = 10
left_click = "enter"
right_click = "esc"
middle_click = "tab"
up = "up"
down = "down"
left = "left"
right = "right"
device = "/dev/input/event0"
"#;

    let parsed: toml::Value = toml::from_str(settings_toml).expect("Should parse TOML");
    let reserialized = toml::to_string_pretty(&parsed).expect("Should serialize");

    assert!(reserialized.contains("threshold = 10"));
    assert!(reserialized.contains("left_click = \"enter\""));
    assert!(reserialized.contains("device = \"/dev/input/event0\""));
}

/// Test that a partial settings file still parses (missing fields default)
#[test]
fn test_partial_settings_parse() {
    let settings_toml = r#"
threshold = 25
device = "/dev/input/event7"
"#;

    let parsed: toml::Value = toml::from_str(settings_toml).expect("Should parse TOML");
    assert_eq!(parsed.get("threshold").and_then(|v| v.as_integer()), Some(25));
    assert!(parsed.get("debounce_ms").is_none());
}

/// Test the evdev code ranges the event conversion relies on
#[test]
fn test_pointer_event_code_ranges() {
    // Mouse buttons start at BTN_MOUSE (0x110)
    let btn_left = 0x110;
    let btn_right = 0x111;
    let btn_middle = 0x112;

    assert_eq!(btn_left, 272, "BTN_LEFT should be 272");
    assert_eq!(btn_right, 273, "BTN_RIGHT should be 273");
    assert_eq!(btn_middle, 274, "BTN_MIDDLE should be 274");

    // Relative axes used for movement accumulation
    let rel_x = 0x00;
    let rel_y = 0x01;
    assert!(rel_x < rel_y);
}

/// Test that debounce windows are measurable with ms precision
#[test]
fn test_debounce_timing_precision() {
    use std::time::{Duration, Instant};

    let start = Instant::now();
    std::thread::sleep(Duration::from_millis(10));
    let elapsed = start.elapsed();

    // Should be at least 10ms, allowing for some variance
    assert!(elapsed.as_millis() >= 10);
    assert!(elapsed.as_millis() < 50); // Shouldn't be too much longer
}

/// Test the device table formatting used by --list-devices
#[test]
fn test_device_list_format() {
    let devices = vec![
        ("/dev/input/event0", "AT Translated Set 2 keyboard", false, false),
        ("/dev/input/event5", "SynPS/2 Synaptics TouchPad", true, true),
    ];

    let lines: Vec<String> = devices
        .iter()
        .map(|(path, name, buttons, rel)| {
            format!("{:<24} {:<40} buttons={} rel={}", path, name, buttons, rel)
        })
        .collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("TouchPad"));
    assert!(lines[1].contains("buttons=true"));
}
