//! Viewport Information Example
//!
//! Demonstrates accessing device viewport presets and computing derived
//! properties.
//!
//! Run with: cargo run --example viewport_info

use scale_specs::devices::*;
use scale_specs::{ReferenceFrame, Viewport};

fn print_viewport_info(name: &str, vp: &Viewport) {
    println!("\n{}", "=".repeat(60));
    println!("Device: {}", name);
    println!("{}", "=".repeat(60));

    println!("  Logical size: {}×{} px", vp.width, vp.height);
    println!("  Pixel density: {}x", vp.pixel_density);
    println!("  Platform: {:?}", vp.platform);
    println!("  Aspect ratio: {:.3}", vp.aspect_ratio());
    println!(
        "  Orientation: {}",
        if vp.is_portrait() { "portrait" } else { "landscape" }
    );

    let frame = ReferenceFrame::for_platform(vp.platform);
    println!("  Reference frame: {}×{}", frame.width, frame.height);
    println!(
        "  10.1px snapped to pixel grid: {:.4}",
        vp.round_to_nearest_pixel(10.1)
    );
}

fn main() {
    println!("Device Viewport Presets");
    println!("=======================\n");

    println!("Apple devices:");
    print_viewport_info("iPhone X", &IPHONE_X);
    print_viewport_info("iPhone SE 2", &IPHONE_SE_2);
    print_viewport_info("iPhone 15 Pro Max", &IPHONE_15_PRO_MAX);
    print_viewport_info("iPad Air 11\"", &IPAD_AIR_11);
    print_viewport_info("iPad Pro 12.9\"", &IPAD_PRO_12_9);

    println!("\n\nAndroid devices:");
    print_viewport_info("Nexus 5", &NEXUS_5);
    print_viewport_info("Galaxy S8", &GALAXY_S8);
    print_viewport_info("Pixel 7", &PIXEL_7);

    println!("\n\nDesktop:");
    print_viewport_info("1080p window", &DESKTOP_FHD);
}
