//! Target stock levels applied by the inventory correction pass.

/// Product title held at zero stock unless `SHOPSEED_OUT_OF_STOCK_TITLES` says otherwise.
pub const DEFAULT_OUT_OF_STOCK_TITLE: &str = "Limited Edition Art Print";

/// Decides the available quantity every variant of a product should end at.
///
/// Products whose title is on the out-of-stock list resolve to `0`; every
/// other product resolves to the default quantity. Matching is exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryPolicy {
    default_quantity: i64,
    out_of_stock_titles: Vec<String>,
}

impl InventoryPolicy {
    #[must_use]
    pub fn new(default_quantity: i64, out_of_stock_titles: Vec<String>) -> Self {
        Self {
            default_quantity,
            out_of_stock_titles,
        }
    }

    #[must_use]
    pub fn default_quantity(&self) -> i64 {
        self.default_quantity
    }

    #[must_use]
    pub fn out_of_stock_titles(&self) -> &[String] {
        &self.out_of_stock_titles
    }

    #[must_use]
    pub fn is_out_of_stock(&self, product_title: &str) -> bool {
        self.out_of_stock_titles.iter().any(|t| t == product_title)
    }

    /// Quantity every variant of `product_title` should be set to.
    #[must_use]
    pub fn target_for(&self, product_title: &str) -> i64 {
        if self.is_out_of_stock(product_title) {
            0
        } else {
            self.default_quantity
        }
    }
}

impl Default for InventoryPolicy {
    fn default() -> Self {
        Self::new(50, vec![DEFAULT_OUT_OF_STOCK_TITLE.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_stock_title_targets_zero() {
        let policy = InventoryPolicy::default();
        assert_eq!(policy.target_for("Limited Edition Art Print"), 0);
    }

    #[test]
    fn other_titles_target_default() {
        let policy = InventoryPolicy::default();
        assert_eq!(policy.target_for("Canvas Tote Bag"), 50);
        assert_eq!(policy.target_for("Smart Watch Pro"), 50);
    }

    #[test]
    fn matching_is_exact() {
        let policy = InventoryPolicy::default();
        assert_eq!(policy.target_for("limited edition art print"), 50);
        assert_eq!(policy.target_for("Limited Edition Art Print 2"), 50);
    }

    #[test]
    fn empty_list_never_zeroes() {
        let policy = InventoryPolicy::new(7, vec![]);
        assert_eq!(policy.target_for("Limited Edition Art Print"), 7);
        assert!(!policy.is_out_of_stock(""));
    }
}
