//! Pretty output formatting.

use lostfound_core::item::Item;

/// Format an item for display.
pub fn format_item(item: &Item) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Found: {} at {}\n  Reported by: {} <{}>",
        item.item_name,
        item.status,
        item.id,
        item.date_found,
        item.location_found,
        item.student_name,
        item.student_email
    );
    if !item.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", item.description));
    }
    output
}

/// Format items for display.
pub fn format_items(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use lostfound_core::item::ItemStatus;

    fn wallet() -> Item {
        Item {
            id: 3,
            student_name: "A".to_string(),
            student_email: "a@x.com".to_string(),
            item_name: "Wallet".to_string(),
            description: String::new(),
            location_found: "Library".to_string(),
            date_found: "2024-01-01".to_string(),
            status: ItemStatus::Unclaimed,
        }
    }

    #[test]
    fn test_format_item() {
        let output = format_item(&wallet());

        assert!(output.starts_with("Wallet [unclaimed]"));
        assert!(output.contains("ID: 3"));
        assert!(output.contains("Found: 2024-01-01 at Library"));
        assert!(output.contains("Reported by: A <a@x.com>"));
        assert!(!output.contains("Description"));
    }

    #[test]
    fn test_format_item_with_description() {
        let item = Item {
            description: "Brown leather".to_string(),
            ..wallet()
        };

        assert!(format_item(&item).contains("Description: Brown leather"));
    }

    #[test]
    fn test_format_items_empty() {
        assert_eq!(format_items(&[]), "No items found.");
    }

    #[test]
    fn test_format_items_header() {
        let output = format_items(&[wallet(), wallet()]);

        assert!(output.starts_with("ITEMS (2)\n"));
        assert_eq!(output.matches("Wallet [unclaimed]").count(), 2);
    }
}
