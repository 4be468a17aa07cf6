//! `validate`: check the catalog file without touching the store.

use std::path::Path;

/// # Errors
///
/// Returns the first catalog read, parse, or validation error.
pub(crate) fn run_validate(path: &Path) -> anyhow::Result<()> {
    let catalog = shopseed_core::load_catalog(path)
        .map_err(|e| anyhow::anyhow!("catalog {} is invalid: {e}", path.display()))?;

    let discounted = catalog.products.iter().filter(|p| p.has_discount()).count();
    println!("catalog {} is valid", path.display());
    println!(
        "  {} products ({discounted} discounted), {} variants, {} collections",
        catalog.products.len(),
        catalog.variant_count(),
        catalog.collections.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/catalog.yaml");
        run_validate(&path).expect("bundled catalog should validate");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = run_validate(Path::new("/nonexistent/catalog.yaml"))
            .expect_err("missing file is an error");
        assert!(err.to_string().contains("/nonexistent/catalog.yaml"));
    }
}
