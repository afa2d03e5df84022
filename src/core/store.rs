use crate::core::cart::CartState;
use crate::core::{CatalogEntry, ProductId};

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    Add(CatalogEntry),
    RemoveOne(ProductId),
}

/// Called with the new state after every dispatch that changed the cart.
pub trait CartObserver {
    fn on_change(&self, state: &CartState);
}

impl<F> CartObserver for F
where
    F: Fn(&CartState),
{
    fn on_change(&self, state: &CartState) {
        self(state)
    }
}

/// Single writer over the session's cart. Actions apply strictly in dispatch order.
#[derive(Default)]
pub struct CartStore {
    state: CartState,
    observers: Vec<Box<dyn CartObserver>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: CartObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn dispatch(&mut self, action: CartAction) -> &CartState {
        let next = match &action {
            CartAction::Add(entry) => self.state.add(entry),
            CartAction::RemoveOne(id) => self.state.remove_one(*id),
        };

        if next == self.state {
            tracing::debug!("Cart unchanged by {:?}", action);
            return &self.state;
        }

        self.state = next;
        tracing::debug!(
            "Cart now holds {} lines, {} items",
            self.state.len(),
            self.state.total_item_count()
        );

        for observer in &self.observers {
            observer.on_change(&self.state);
        }

        &self.state
    }

    pub fn add(&mut self, entry: CatalogEntry) -> &CartState {
        self.dispatch(CartAction::Add(entry))
    }

    pub fn remove_one(&mut self, id: ProductId) -> &CartState {
        self.dispatch(CartAction::RemoveOne(id))
    }
}
