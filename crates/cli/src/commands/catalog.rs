//! Catalog commands.

use toyland_core::{FilterParams, ShopSession, Toy, ToyId};

use super::CommandError;

/// One catalog row: id, name, price, age range and category.
fn row(toy: &Toy) -> String {
    format!(
        "{:>4}  {:<32} {:>9}  {:<6} {}",
        toy.id, toy.name, toy.price, toy.age_range, toy.category
    )
}

/// List the toys that pass `params`.
///
/// With no filter flags the whole catalog is listed.
pub fn list(session: &mut ShopSession, params: FilterParams) -> String {
    session.apply_filter(params);

    let rows: Vec<String> = session.filtered().map(row).collect();
    if rows.is_empty() {
        return "No toys found matching your criteria.".to_string();
    }

    let count = rows.len();
    let mut lines = rows;
    lines.push(format!("{count} toy(s)"));
    lines.join("\n")
}

/// Show everything known about one toy.
///
/// # Errors
///
/// Returns `CommandError::UnknownToy` if the ID is not in the catalog.
pub fn show(session: &ShopSession, id: ToyId) -> Result<String, CommandError> {
    let toy = session.toy(id).ok_or(CommandError::UnknownToy(id))?;

    let mut lines = vec![
        format!("{} (#{})", toy.name, toy.id),
        format!("Price: {}", toy.price),
        format!("Age Suitability: {}", toy.age_range),
    ];
    if !toy.category.is_empty() {
        lines.push(format!("Category: {}", toy.category));
    }
    if !toy.interests.is_empty() {
        lines.push(format!("Interests: {}", toy.interests.join(", ")));
    }
    if !toy.description.is_empty() {
        lines.push(String::new());
        lines.push(toy.description.clone());
    }
    if !toy.skills.is_empty() {
        lines.push(String::new());
        lines.push("Skills Developed:".to_string());
        lines.extend(toy.skills.iter().map(|skill| format!("  - {skill}")));
    }
    if let Some(notes) = toy.safety_notes() {
        lines.push(String::new());
        lines.push(format!("Safety Notes: {notes}"));
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::tests::session;

    #[test]
    fn test_list_all() {
        let mut session = session();
        let output = list(&mut session, FilterParams::default());

        assert!(output.contains("Rainbow Blocks"));
        assert!(output.contains("Robot Kit"));
        assert!(output.ends_with("2 toy(s)"));
    }

    #[test]
    fn test_list_filtered_by_price() {
        let mut session = session();
        let params = FilterParams {
            max_price: Some("15".to_string()),
            ..FilterParams::default()
        };

        let output = list(&mut session, params);
        assert!(output.contains("Rainbow Blocks"));
        assert!(!output.contains("Robot Kit"));
        assert!(output.contains("$10.00"));
    }

    #[test]
    fn test_list_no_matches() {
        let mut session = session();
        let params = FilterParams {
            name: Some("teapot".to_string()),
            ..FilterParams::default()
        };

        assert_eq!(
            list(&mut session, params),
            "No toys found matching your criteria."
        );
    }

    #[test]
    fn test_show_details() {
        let session = session();

        let blocks = show(&session, ToyId::new(1)).unwrap();
        assert!(blocks.contains("Skills Developed:\n  - Fine motor"));
        assert!(!blocks.contains("Safety Notes"));

        let kit = show(&session, ToyId::new(2)).unwrap();
        assert!(kit.contains("Safety Notes: Small parts"));
    }

    #[test]
    fn test_show_unknown() {
        let session = session();
        assert!(matches!(
            show(&session, ToyId::new(9)),
            Err(CommandError::UnknownToy(_))
        ));
    }
}
