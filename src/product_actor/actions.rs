//! Custom actions for the Product actor.
//!
//! Stock changes go through actions rather than updates so the check and the write
//! happen inside one actor turn.

/// Custom actions for Product entities.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the current stock level.
    CheckStock,
    /// Removes stock. Fails without changing anything if not enough is available.
    DecrementStock(u32),
    /// Returns stock, e.g. when a partially applied decrement is rolled back.
    Restock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction.
/// Every variant carries the stock level after the action.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    CheckStock(u32),
    DecrementStock(u32),
    Restock(u32),
}
