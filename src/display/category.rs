//! Category display formatting

use crate::models::{CategoryRegistry, TransactionType};

/// Format the numbered category list for one transaction type
pub fn format_category_list(
    registry: &CategoryRegistry,
    transaction_type: TransactionType,
) -> String {
    let mut output = format!("{} categories:\n", transaction_type.label());

    for (i, name) in registry.categories(transaction_type).iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, name));
    }

    output
}

/// Format both category lists
pub fn format_all_categories(registry: &CategoryRegistry) -> String {
    format!(
        "{}\n{}",
        format_category_list(registry, TransactionType::Income),
        format_category_list(registry, TransactionType::Expense)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_category_list() {
        let text = format_category_list(&CategoryRegistry, TransactionType::Income);
        assert!(text.starts_with("Income categories:\n"));
        assert!(text.contains("  1. Зарплата\n"));
        assert!(text.contains("  5. Прочие доходы\n"));
    }

    #[test]
    fn test_format_all_categories() {
        let text = format_all_categories(&CategoryRegistry);
        assert!(text.contains("Expense categories:"));
        assert!(text.contains("  8. Прочие расходы\n"));
    }
}
