use bigdecimal::BigDecimal;
use std::str::FromStr;
use storefront_cart::{CartAction, CartState, CartStore, CatalogEntry, ProductId};

fn entry(id: u64, price: &str) -> CatalogEntry {
    CatalogEntry {
        id: ProductId(id),
        title: format!("Product {}", id),
        price: BigDecimal::from_str(price).unwrap(),
        description: format!("Description of product {}", id),
        category: "misc".to_string(),
        image: format!("https://img.example.com/{}.png", id),
    }
}

/// A handful of carts reached through different action histories.
fn sample_states() -> Vec<CartState> {
    let histories: Vec<Vec<CartAction>> = vec![
        vec![],
        vec![CartAction::Add(entry(1, "9.99"))],
        vec![
            CartAction::Add(entry(3, "1.50")),
            CartAction::Add(entry(1, "9.99")),
            CartAction::Add(entry(3, "1.50")),
        ],
        vec![
            CartAction::Add(entry(5, "0.10")),
            CartAction::Add(entry(6, "0.20")),
            CartAction::Add(entry(7, "0.30")),
            CartAction::RemoveOne(ProductId(6)),
            CartAction::Add(entry(5, "0.10")),
            CartAction::Add(entry(5, "0.10")),
        ],
    ];

    histories
        .into_iter()
        .map(|actions| {
            let mut store = CartStore::new();
            for action in actions {
                store.dispatch(action);
            }
            store.state().clone()
        })
        .collect()
}

fn ids(state: &CartState) -> Vec<ProductId> {
    state.iter().map(|line| line.id()).collect()
}

#[test]
fn test_adding_absent_entry_appends_one_line() {
    let fresh = entry(100, "4.20");

    for state in sample_states() {
        let next = state.add(&fresh);

        assert_eq!(next.len(), state.len() + 1);
        assert_eq!(&next.lines()[..state.len()], state.lines());
        let last = next.lines().last().unwrap();
        assert_eq!(last.id(), ProductId(100));
        assert_eq!(last.quantity(), 1);
    }
}

#[test]
fn test_add_then_remove_restores_quantities() {
    for state in sample_states() {
        for line in state.iter() {
            let n = line.quantity();
            let added = state.add(&line.entry);
            assert_eq!(added.quantity_of(line.id()), n + 1);
            assert_eq!(ids(&added), ids(&state));

            let removed = state.remove_one(line.id());
            if n > 1 {
                assert_eq!(removed.quantity_of(line.id()), n - 1);
                assert_eq!(ids(&removed), ids(&state));
            } else {
                assert!(removed.get(line.id()).is_none());
                let expected: Vec<ProductId> =
                    ids(&state).into_iter().filter(|id| *id != line.id()).collect();
                assert_eq!(ids(&removed), expected);
            }

            assert_eq!(added.remove_one(line.id()), state);
        }
    }
}

#[test]
fn test_remove_absent_id_is_identity() {
    for state in sample_states() {
        assert_eq!(state.remove_one(ProductId(9_999)), state);
    }
}

#[test]
fn test_no_line_ever_has_zero_quantity() {
    for state in sample_states() {
        let mut current = state;
        while let Some(first) = current.lines().first().map(|line| line.id()) {
            current = current.remove_one(first);
            assert!(current.iter().all(|line| line.quantity() >= 1));
        }
        assert_eq!(current.total_item_count(), 0);
        assert_eq!(current.total_price(), BigDecimal::from(0));
    }
}

#[test]
fn test_totals_match_line_sums() {
    for state in sample_states() {
        let count: u64 = state.iter().map(|line| line.quantity()).sum();
        let price: BigDecimal = state.iter().map(|line| line.subtotal()).sum();

        assert_eq!(state.total_item_count(), count);
        assert_eq!(state.total_price(), price);
    }

    let last = sample_states().pop().unwrap();
    assert_eq!(ids(&last), vec![ProductId(5), ProductId(7)]);
    assert_eq!(last.total_price(), BigDecimal::from_str("0.60").unwrap());
    assert_eq!(last.display_total(), "0.60");
}
