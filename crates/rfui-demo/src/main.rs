//! Headless walkthrough of the tile lifecycle: mount, first layout, resize,
//! interaction, unmount. Prints the path expressions a host renderer would
//! feed to its clip-mask and stroke primitives.

use anyhow::Result;

use rfui_shape::logging::{LoggingConfig, init_logging};
use rfui_tiles::prelude::*;

fn print_frame(label: &str, frame: &TileFrame) {
    println!("  [{label}] rev {}", frame.revision);
    println!("    clip    {}", frame.paths.clip.to_clip_path());
    println!("    stroke  {}", frame.paths.stroke.to_svg_points());
    if let Some(crease) = &frame.paths.crease {
        println!("    crease  {}", crease.to_svg_points());
    }
    println!(
        "    insets  l{} r{} t{} b{}   opacity {}",
        frame.content_insets.left,
        frame.content_insets.right,
        frame.content_insets.top,
        frame.content_insets.bottom,
        frame.style.opacity,
    );
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let observer = DimensionObserver::new();
    let folder_surface = SurfaceId::new(1);
    let document_surface = SurfaceId::new(2);

    let mut folder = FolderTile::new("SECTOR_16")
        .subtitle("Special Project")
        .count(5)
        .on_click(|| println!("  >> folder opened"));
    let mut document = DocumentTile::new("MISSION BRIEF")
        .meta("2026-02-25")
        .badge("PDF")
        .on_click(|| println!("  >> document opened"));

    folder.mount(&observer, folder_surface)?;
    document.mount(&observer, document_surface)?;

    println!("mounted (fallback geometry, unmeasured):");
    print_frame("folder", &folder.frame());
    print_frame("document", &document.frame());

    // First layout pass: the host measures both panels in a 240px column.
    let folder_size = folder.preferred_size(240.0);
    let document_size = document.preferred_size(240.0);
    observer.record(folder_surface, folder_size);
    observer.record(document_surface, document_size);
    observer.flush();

    println!("\nafter first layout:");
    print_frame("folder", &folder.frame());
    print_frame("document", &document.frame());

    // Interaction: hover the folder, select the document.
    folder.on_event(&TileEvent::HoverEnter);
    document.set_selected(true);
    folder.on_event(&TileEvent::Click);

    println!("\nafter interaction:");
    print_frame("folder", &folder.frame());
    print_frame("document", &document.frame());

    // Container resize, coalesced: only the last record per surface lands.
    observer.record(folder_surface, folder.preferred_size(200.0));
    observer.record(folder_surface, folder.preferred_size(320.0));
    observer.flush();

    println!("\nafter resize to a 320px column:");
    print_frame("folder", &folder.frame());

    folder.unmount();
    document.unmount();
    log::info!("demo finished");
    Ok(())
}
