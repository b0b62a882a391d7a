use retrotap::devices::builtin_registry;
use retrotap::Driver;

fn main() {
    let registry = builtin_registry();
    println!("Built-in adapters: {:?}", registry.device_ids());

    let mut driver = registry.create("retrospy-gc").expect("builtin gc driver");
    println!("{}", driver.describe());

    // A frame covering just the button region, with button 0's bit set.
    driver.read("001000000000000");

    // A frame pushing the first stick axis to its positive stop.
    let mut stick = vec!['0'; 23];
    for c in &mut stick[15..23] {
        *c = '1';
    }
    driver.read(&stick.iter().collect::<String>());

    let snapshot = driver.snapshot();
    println!(
        "snapshot: {}",
        serde_json::to_string_pretty(&snapshot).expect("serialize snapshot")
    );
}
