use crate::catalog::Catalog;

/// The system prompt constraining the assistant to the catalog.
///
/// Loaded from `prompt.txt` at compile time so it can be edited without
/// dealing with Rust string syntax.
pub const SHOPPING_ASSISTANT_PROMPT: &str = include_str!("prompt.txt");

/// Build the user message: the whole catalog followed by the preference.
pub fn build_user_prompt(preference: &str, catalog: &Catalog) -> String {
    let entries: Vec<String> = catalog
        .products()
        .iter()
        .map(|p| {
            format!(
                "{} (${}, {}): {}",
                p.name, p.price, p.category, p.description
            )
        })
        .collect();

    format!(
        "Catalog: {}. User preference: {}. Respond with a short list of products.",
        entries.join("; "),
        preference
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    #[test]
    fn test_prompt_is_embedded() {
        assert!(!SHOPPING_ASSISTANT_PROMPT.is_empty());
        assert!(SHOPPING_ASSISTANT_PROMPT.contains("shopping assistant"));
        assert!(SHOPPING_ASSISTANT_PROMPT.contains("Only mention product names from the catalog"));
    }

    #[test]
    fn test_user_prompt_embeds_catalog_and_preference() {
        let catalog = Catalog::new(vec![
            Product {
                id: 1,
                name: "Desk Lamp".to_string(),
                category: "home".to_string(),
                price: 25.0,
                description: "Warm LED light".to_string(),
                image: String::new(),
            },
            Product {
                id: 2,
                name: "Earbuds".to_string(),
                category: "audio".to_string(),
                price: 79.5,
                description: "Wireless".to_string(),
                image: String::new(),
            },
        ])
        .unwrap();

        let prompt = build_user_prompt("something cozy", &catalog);
        assert_eq!(
            prompt,
            "Catalog: Desk Lamp ($25, home): Warm LED light; Earbuds ($79.5, audio): Wireless. \
             User preference: something cozy. Respond with a short list of products."
        );
    }
}
