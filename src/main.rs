//! Mini-Reader CLI (for testing purposes only)
//! The main interface is through WASM bindings.

use mini_reader::{Reader, ReaderSettings, ViewMode};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mini_reader=debug,info")),
        )
        .init();

    println!("Mini-Reader Layout Core");
    println!("=======================");

    let ratios = [0.7, 0.7, 1.4, 0.7, 0.5];
    for mode in [ViewMode::HorizontalScroll, ViewMode::VerticalScroll, ViewMode::SinglePage] {
        let settings = ReaderSettings {
            view_mode: mode,
            ..ReaderSettings::default()
        };
        let mut reader = Reader::from_aspect_ratios(&ratios, settings);
        reader.set_viewport_size(400.0, 600.0);
        reader.go_to_page(2);

        println!();
        println!("{mode:?}: current page {}", reader.current_page());
        for page in reader.read().pages() {
            let b = page.reference_bounds();
            println!(
                "  page {:>2}: ({:>7.1}, {:>7.1}) - ({:>7.1}, {:>7.1})",
                page.index.view_index, b.left, b.top, b.right, b.bottom
            );
        }
        let limits = reader.scroll_limits();
        println!(
            "  scroll limits: x {}..={}, y {}..={}",
            limits.left, limits.right, limits.top, limits.bottom
        );
        println!("  commands: {:?}", reader.drain_commands());
    }
}
