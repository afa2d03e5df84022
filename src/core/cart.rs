use crate::core::{CartLine, CatalogEntry, ProductId};
use bigdecimal::{BigDecimal, RoundingMode};
use serde::Serialize;

/// Ordered cart contents. Lines keep their insertion position for their whole life;
/// every operation returns a new state and leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// One more of `entry`: appended with quantity 1 when new, otherwise bumped in place
    /// with the line's fields refreshed from `entry`.
    pub fn add(&self, entry: &CatalogEntry) -> CartState {
        let mut lines = self.lines.clone();

        match lines.iter().position(|line| line.id() == entry.id) {
            Some(index) => {
                let quantity = lines[index].quantity() + 1;
                lines[index] = CartLine::with_quantity(entry.clone(), quantity);
            }
            None => lines.push(CartLine::first(entry.clone())),
        }

        CartState { lines }
    }

    /// One fewer of `id`. A line at quantity 1 is dropped; an unknown id is a no-op.
    pub fn remove_one(&self, id: ProductId) -> CartState {
        let lines = self
            .lines
            .iter()
            .filter_map(|line| {
                if line.id() != id {
                    return Some(line.clone());
                }
                match line.quantity() {
                    1 => None,
                    n => Some(CartLine::with_quantity(line.entry.clone(), n - 1)),
                }
            })
            .collect();

        CartState { lines }
    }

    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(CartLine::quantity).sum()
    }

    /// Exact sum of every line subtotal.
    pub fn total_price(&self) -> BigDecimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// `total_price` rounded half-up to cents, for display.
    pub fn display_total(&self) -> String {
        format_for_display(&self.total_price())
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    pub fn quantity_of(&self, id: ProductId) -> u64 {
        self.get(id).map(CartLine::quantity).unwrap_or(0)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> IntoIterator for &'a CartState {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Half-up to cents, always printed with two decimals (`0.00`, not `0`).
pub fn format_for_display(amount: &BigDecimal) -> String {
    let rounded = amount.with_scale_round(2, RoundingMode::HalfUp);
    format!("{:.2}", rounded)
}
