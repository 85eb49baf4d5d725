//! Serde Serialization Example
//!
//! Demonstrates serializing and deserializing viewports to/from JSON, e.g.
//! for shipping a captured viewport in a bug report or a layout config file.
//!
//! Run with: cargo run --example serde_example --features serde

#[cfg(feature = "serde")]
fn main() {
    use scale_specs::devices::PIXEL_7;
    use scale_specs::Viewport;

    // Serialize to JSON
    let json = serde_json::to_string_pretty(&PIXEL_7).unwrap();
    println!("Serialized Viewport:");
    println!("{}", json);
    println!();

    // Round-trip back into a Viewport
    let restored: Viewport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, PIXEL_7);
    println!("Round-trip succeeded: {:?}", restored);
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_example --features serde");
}
