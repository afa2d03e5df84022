//! Plain-text views of the shop: product grid, cart panel and item badge.
//!
//! Every view is a pure function of the catalog status or the cart state; nothing here
//! keeps state of its own.

use crate::core::cart::{format_for_display, CartState};
use crate::core::catalog::LoadStatus;
use crate::core::{CartLine, CatalogEntry, ConfigProvider};
use crate::utils::error::LOAD_FAILURE_MESSAGE;
use bigdecimal::BigDecimal;
use std::fmt::Write;

pub const LOADING_MESSAGE: &str = "Loading catalog...";
pub const CART_HEADER: &str = "Your shopping cart";
pub const EMPTY_CART_MESSAGE: &str = "No item in cart.";

pub struct Renderer<'a, C: ConfigProvider + ?Sized> {
    config: &'a C,
}

impl<'a, C: ConfigProvider + ?Sized> Renderer<'a, C> {
    pub fn new(config: &'a C) -> Self {
        Self { config }
    }

    /// Unit price without trailing zeros: `5.00` prints as `5`, `22.30` as `22.3`.
    fn price(&self, amount: &BigDecimal) -> String {
        let mut plain = amount.normalized();
        if plain.as_bigint_and_exponent().1 < 0 {
            plain = plain.with_scale(0);
        }
        format!("{}{}", self.config.currency_symbol(), plain)
    }

    /// Amount rounded to cents.
    fn money(&self, amount: &BigDecimal) -> String {
        format!("{}{}", self.config.currency_symbol(), format_for_display(amount))
    }

    pub fn catalog(&self, status: &LoadStatus) -> String {
        match status {
            LoadStatus::Pending => LOADING_MESSAGE.to_string(),
            LoadStatus::Failed(_) => LOAD_FAILURE_MESSAGE.to_string(),
            LoadStatus::Loaded(entries) => self.grid(entries),
        }
    }

    pub fn grid(&self, entries: &[CatalogEntry]) -> String {
        if entries.is_empty() {
            return "The catalog is empty.".to_string();
        }

        let mut out = String::new();
        for entry in entries {
            let _ = writeln!(
                out,
                "[{}] {} - {}",
                entry.id,
                entry.title,
                self.price(&entry.price)
            );
            if self.config.show_descriptions() && !entry.description.is_empty() {
                let _ = writeln!(out, "    {}", entry.description);
            }
            if !entry.image.is_empty() {
                let _ = writeln!(out, "    image: {}", entry.image);
            }
            let _ = writeln!(out, "    add {} to put it in the cart", entry.id);
        }
        out.trim_end().to_string()
    }

    pub fn cart_line(&self, line: &CartLine) -> String {
        let mut out = format!(
            "{}\n    Price: {}  Total: {}\n    [-] {} [+]   (remove {id} / add {id})",
            line.entry.title,
            self.price(&line.entry.price),
            self.money(&line.subtotal()),
            line.quantity(),
            id = line.id(),
        );
        if !line.entry.image.is_empty() {
            let _ = write!(out, "\n    image: {}", line.entry.image);
        }
        out
    }

    pub fn cart_panel(&self, state: &CartState) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", CART_HEADER);

        if state.is_empty() {
            let _ = writeln!(out, "{}", EMPTY_CART_MESSAGE);
        }
        for line in state {
            let _ = writeln!(out, "{}", self.cart_line(line));
        }

        let _ = write!(out, "Total: {}", self.money(&state.total_price()));
        out
    }

    pub fn badge(&self, state: &CartState) -> String {
        format!("Cart ({})", state.total_item_count())
    }
}
