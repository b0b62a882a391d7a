use retrotap::profile::LayoutProfile;
use retrotap::{Driver, Registry};

const PROFILE: &str = r#"
[[devices]]
[devices.layout]
id = "vintage-pad"
name = "Vintage Pad"
button_bits = [0, 1, 2, 3]
axis_frames = [{ offset = 8, width = 8 }, { offset = 16, width = 8, invert = true }]

[devices.policy]
buttons = "frame-authoritative"
axes = "frame-authoritative"
"#;

fn main() {
    // Third-party adapters are plain data: parse a profile, register it, and
    // the shared table-driven driver does the rest.
    let profile = LayoutProfile::from_toml(PROFILE).expect("parse profile");

    let mut registry = Registry::new();
    profile.register_into(&mut registry);

    let mut driver = registry.create("vintage-pad").expect("registered driver");
    println!("{}", driver.describe());

    driver.read("1001");
    let snap = driver.snapshot();
    for (idx, button) in snap.buttons.iter().enumerate() {
        println!("button {idx}: {}", button.pressed);
    }

    // Under the frame-authoritative policy the next frame releases them.
    driver.read("0000");
    println!("after clear frame: {:?}", driver.snapshot().buttons);
}
