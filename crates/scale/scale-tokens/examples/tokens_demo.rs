//! Design Token Demo
//!
//! Computes and prints the full token table for a couple of devices, with
//! engine debug logging surfaced through tracing-subscriber.
//!
//! Run with: RUST_LOG=debug cargo run --example tokens_demo

use scale_engine::Scaler;
use scale_specs::devices::{IPHONE_X, PIXEL_7};
use scale_specs::Viewport;
use scale_tokens::DesignTokens;

fn print_tokens(name: &str, vp: Viewport) {
    let scaler = Scaler::new(vp);
    let tokens = DesignTokens::compute(&scaler);

    println!("\n{}", "=".repeat(60));
    println!("Tokens for {} ({}×{} @{}x)", name, vp.width, vp.height, vp.pixel_density);
    println!("{}", "=".repeat(60));

    println!("\nSpacing:");
    println!("  xs {:>7.3}  sm {:>7.3}  md {:>7.3}", tokens.spacing.xs, tokens.spacing.sm, tokens.spacing.md);
    println!("  lg {:>7.3}  xl {:>7.3}  xxl {:>6.3}", tokens.spacing.lg, tokens.spacing.xl, tokens.spacing.xxl);

    println!("\nFont sizes:");
    println!(
        "  xs {}  sm {}  md {}  lg {}  xl {}  xxl {}  display {}",
        tokens.font_sizes.xs,
        tokens.font_sizes.sm,
        tokens.font_sizes.md,
        tokens.font_sizes.lg,
        tokens.font_sizes.xl,
        tokens.font_sizes.xxl,
        tokens.font_sizes.display,
    );

    println!("\nComponents:");
    println!(
        "  button md height {:.3}, min width {:.3}",
        tokens.button_dimensions.height_md, tokens.button_dimensions.min_width
    );
    println!(
        "  product card {:.3}×{:.3}",
        tokens.card_dimensions.product.width, tokens.card_dimensions.product.height
    );
    println!(
        "  modal {:.3} wide, radius {:.3}",
        tokens.modal_dimensions.width, tokens.modal_dimensions.corner_radius
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    print_tokens("iPhone X", IPHONE_X);
    print_tokens("Pixel 7", PIXEL_7);
    print_tokens("iPhone X landscape", IPHONE_X.rotated());
}
