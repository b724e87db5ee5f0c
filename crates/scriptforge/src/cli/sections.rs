//! Section catalog listing.

use scriptforge::SectionCatalog;

/// Print the fixed section catalog.
pub fn show_sections() {
    let catalog = SectionCatalog::screenplay();

    println!("Screenplay sections:");
    println!("{:-<80}", "");
    for spec in catalog.sections() {
        println!(
            "{}. {} (pages {})",
            spec.ordinal(),
            spec.title(),
            spec.page_range()
        );
        println!("   {}", spec.focus());
    }
    println!("{:-<80}", "");
    println!("Total: {} sections", catalog.len());
}
