//! Tessera Stack Demo
//!
//! Builds a small widget stack, reorders it and prints the stack after each
//! step.
//!
//! Run with: cargo run -p tessera --example stack_demo

use tessera::logging::{StackDebug, StackFormatOptions};
use tessera::{ServiceConfig, StoreBackend, WidgetDescription, WidgetService};

fn rect(x: i32, y: i32, width: i32, height: i32) -> WidgetDescription {
    WidgetDescription::new()
        .with_x(x)
        .with_y(y)
        .with_width(width)
        .with_height(height)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let config = ServiceConfig {
        backend: StoreBackend::Snapshot,
        ..ServiceConfig::default()
    };
    let service = WidgetService::from_config(&config);
    let debug = StackDebug::with_options(StackFormatOptions::detailed());

    let window = service.create(&rect(0, 0, 800, 600))?;
    let panel = service.create(&rect(20, 20, 200, 560))?;
    let tooltip = service.create(&rect(40, 40, 120, 24))?;
    println!("{}", debug.format(service.snapshot().widgets()));

    // Slide a backdrop underneath everything.
    service.create(&rect(-10, -10, 820, 620).with_z(0))?;
    // Raise the panel above the tooltip.
    service.edit(panel.id(), &WidgetDescription::new().with_z(3))?;
    println!("{}", debug.format(service.snapshot().widgets()));

    service.delete_existing(window.id())?;
    println!("{}", debug.format(service.snapshot().widgets()));

    let page = service.list_page(Some(0), Some(2));
    println!(
        "page {} of {}: z = {:?}, tooltip on this page: {}",
        page.current_page + 1,
        page.total_pages,
        page.widgets.iter().map(|w| w.z).collect::<Vec<_>>(),
        page.widgets.iter().any(|w| w.id() == tooltip.id())
    );

    println!("{}", config.to_toml_string()?);
    Ok(())
}
