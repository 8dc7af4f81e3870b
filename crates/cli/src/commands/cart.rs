//! Cart commands.
//!
//! Every mutating command saves the cart before returning.

use toyland_core::{CartEntry, CartTotals, ShopSession, ToyId};

use super::CommandError;

fn line(entry: &CartEntry) -> String {
    format!(
        "{:>3} x {:<32} {:>9}  {:>9}",
        entry.quantity,
        entry.toy.name,
        entry.toy.price,
        entry.line_total()
    )
}

fn total_line(totals: &CartTotals) -> String {
    format!(
        "Total: ${} ({} item(s))",
        totals.total.fixed(),
        totals.item_count
    )
}

/// Print the cart.
pub fn show(session: &ShopSession) -> String {
    if session.cart().is_empty() {
        return "Your cart is empty.".to_string();
    }

    let mut lines: Vec<String> = session.cart().entries().map(line).collect();
    lines.push(total_line(&session.totals()));
    lines.join("\n")
}

/// Add one of a toy. An ID that is not in the catalog leaves the cart alone.
///
/// # Errors
///
/// Returns `CommandError::Session` if the cart could not be saved.
pub fn add(session: &mut ShopSession, id: ToyId) -> Result<String, CommandError> {
    let Some(totals) = session.add_to_cart(id)? else {
        tracing::debug!(%id, "Ignoring add for unknown toy");
        return Ok(format!("No toy with id {id}. No change."));
    };

    let name = session
        .cart()
        .get(id)
        .map_or_else(|| id.to_string(), |entry| entry.toy.name.clone());
    Ok(format!("Added {name}. {}", total_line(&totals)))
}

/// Remove a toy entirely. Removing a toy that is not in the cart changes
/// nothing.
///
/// # Errors
///
/// Returns `CommandError::Session` if the cart could not be saved.
pub fn remove(session: &mut ShopSession, id: ToyId) -> Result<String, CommandError> {
    let present = session.cart().get(id).is_some();
    let totals = session.remove_from_cart(id)?;

    if present {
        Ok(format!("Removed toy {id}. {}", total_line(&totals)))
    } else {
        Ok(format!("Toy {id} was not in the cart. No change. {}", total_line(&totals)))
    }
}

/// Set a toy's quantity; anything below one removes it.
///
/// Unlike `add` and `remove`, naming a toy that is not in the cart is an
/// error.
///
/// # Errors
///
/// Returns `CommandError::NotInCart` if the toy is not in the cart, or
/// `CommandError::Session` if the cart could not be saved.
pub fn set(session: &mut ShopSession, id: ToyId, quantity: i64) -> Result<String, CommandError> {
    if session.cart().get(id).is_none() {
        return Err(CommandError::NotInCart(id));
    }

    let totals = session.set_quantity(id, quantity)?;
    let status = session.cart().get(id).map_or_else(
        || format!("Removed toy {id}."),
        |entry| format!("{} x {}.", entry.quantity, entry.toy.name),
    );
    Ok(format!("{status} {}", total_line(&totals)))
}

/// Print the order confirmation. The cart is left as it is.
///
/// # Errors
///
/// Returns `CommandError::Checkout` if the cart is empty.
pub fn checkout(session: &ShopSession) -> Result<String, CommandError> {
    let summary = session.checkout()?;

    let mut lines = vec!["Thank you for your order!".to_string()];
    lines.extend(summary.lines.iter().map(line));
    lines.push(total_line(&summary.totals));
    Ok(lines.join("\n"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use toyland_core::CheckoutError;

    use super::*;
    use crate::commands::tests::session;

    #[test]
    fn test_show_empty() {
        assert_eq!(show(&session()), "Your cart is empty.");
    }

    #[test]
    fn test_add_and_show() {
        let mut session = session();
        add(&mut session, ToyId::new(1)).unwrap();
        let output = add(&mut session, ToyId::new(1)).unwrap();
        assert_eq!(output, "Added Rainbow Blocks. Total: $20.00 (2 item(s))");

        let output = show(&session);
        assert!(output.contains("Rainbow Blocks"));
        assert!(output.ends_with("Total: $20.00 (2 item(s))"));
    }

    #[test]
    fn test_add_unknown_is_noop() {
        let mut session = session();
        let output = add(&mut session, ToyId::new(42)).unwrap();
        assert_eq!(output, "No toy with id 42. No change.");
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_set_and_remove() {
        let mut session = session();
        add(&mut session, ToyId::new(2)).unwrap();

        let output = set(&mut session, ToyId::new(2), 3).unwrap();
        assert_eq!(output, "3 x Robot Kit. Total: $75.00 (3 item(s))");

        let output = set(&mut session, ToyId::new(2), -1).unwrap();
        assert!(output.starts_with("Removed toy 2."));
        assert!(session.cart().is_empty());

        let output = remove(&mut session, ToyId::new(2)).unwrap();
        assert_eq!(
            output,
            "Toy 2 was not in the cart. No change. Total: $0.00 (0 item(s))"
        );
        assert!(matches!(
            set(&mut session, ToyId::new(2), 1),
            Err(CommandError::NotInCart(_))
        ));
    }

    #[test]
    fn test_remove_absent_keeps_other_lines() {
        let mut session = session();
        add(&mut session, ToyId::new(1)).unwrap();

        let output = remove(&mut session, ToyId::new(2)).unwrap();
        assert!(output.contains("No change."));
        assert_eq!(session.cart().get(ToyId::new(1)).map(|e| e.quantity), Some(1));
        assert_eq!(session.totals().item_count, 1);
    }

    #[test]
    fn test_checkout() {
        let mut session = session();
        assert!(matches!(
            checkout(&session),
            Err(CommandError::Checkout(CheckoutError::EmptyCart))
        ));

        add(&mut session, ToyId::new(1)).unwrap();
        add(&mut session, ToyId::new(2)).unwrap();
        let output = checkout(&session).unwrap();
        assert!(output.starts_with("Thank you for your order!"));
        assert!(output.ends_with("Total: $35.00 (2 item(s))"));
        assert_eq!(session.totals().item_count, 2);
    }
}
