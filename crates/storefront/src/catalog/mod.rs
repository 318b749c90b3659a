//! Static product catalog.
//!
//! Pure lookup functions over build-time data. There are no error paths:
//! a missing product is `None`, an unknown category is an empty slice.
//! Variants are generated deterministically from the product definition
//! and are never persisted.

mod data;

use serde::Serialize;

use printforge_core::{Price, ProductId, VariantId};

pub use data::{CATEGORIES, COLOR_CODES};

/// Product classification, used to select a design-placement template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProductKind {
    #[serde(rename = "T-SHIRT")]
    TShirt,
    #[serde(rename = "HOODIE")]
    Hoodie,
    #[serde(rename = "MUG")]
    Mug,
    #[serde(rename = "HAT")]
    Hat,
}

impl ProductKind {
    /// The catalog label for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TShirt => "T-SHIRT",
            Self::Hoodie => "HOODIE",
            Self::Mug => "MUG",
            Self::Hat => "HAT",
        }
    }

    /// Parse a catalog label. Unrecognized labels return `None`; callers
    /// that need a template fall back to [`ProductKind::TShirt`].
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "T-SHIRT" => Some(Self::TShirt),
            "HOODIE" => Some(Self::Hoodie),
            "MUG" => Some(Self::Mug),
            "HAT" => Some(Self::Hat),
            _ => None,
        }
    }
}

/// A catalog product.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: ProductKind,
    pub brand: &'static str,
    pub image: &'static str,
    /// Product photo per color, falling back to `image` for missing colors.
    #[serde(serialize_with = "serialize_color_images")]
    pub color_images: &'static [(&'static str, &'static str)],
    pub base_price: Price,
    pub colors: &'static [&'static str],
    pub sizes: &'static [&'static str],
}

/// Serialize the color-image pairs as a JSON object keyed by color name.
fn serialize_color_images<S>(
    images: &&'static [(&'static str, &'static str)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_map(images.iter().copied())
}

impl Product {
    /// The product photo for a color, or the base image.
    #[must_use]
    pub fn image_for_color(&self, color: &str) -> &'static str {
        self.color_images
            .iter()
            .find(|(name, _)| *name == color)
            .map_or(self.image, |(_, url)| *url)
    }
}

/// A product category.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub id: i32,
    /// URL slug, e.g. `t-shirts`.
    pub key: &'static str,
    pub name: &'static str,
    pub products: &'static [Product],
}

/// Category summary for listings.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub slug: &'static str,
    pub name: &'static str,
    pub product_count: usize,
}

/// A purchasable (color, size) combination of a product.
#[derive(Debug, Clone, Serialize)]
pub struct Variant {
    pub id: VariantId,
    pub product_id: ProductId,
    pub name: String,
    pub color: &'static str,
    pub size: &'static str,
    pub color_code: &'static str,
    pub price: Price,
    pub in_stock: bool,
}

/// Every product across all categories.
pub fn all_products() -> impl Iterator<Item = &'static Product> {
    CATEGORIES.iter().flat_map(|cat| cat.products.iter())
}

/// Look up a product and its category by ID.
#[must_use]
pub fn product_by_id(id: ProductId) -> Option<(&'static Product, &'static Category)> {
    CATEGORIES.iter().find_map(|cat| {
        cat.products
            .iter()
            .find(|p| p.id == id)
            .map(|p| (p, cat))
    })
}

/// Products in a category, matched case-insensitively against the slug
/// with non `[a-z-]` characters stripped. Unknown categories are empty.
#[must_use]
pub fn products_by_category(category: &str) -> &'static [Product] {
    category_by_key(category).map_or(&[], |cat| cat.products)
}

/// Resolve a category from a loosely formatted key.
#[must_use]
pub fn category_by_key(category: &str) -> Option<&'static Category> {
    let normalized: String = category
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || *c == '-')
        .collect();
    let dehyphenated = normalized.replace('-', "");

    CATEGORIES
        .iter()
        .find(|cat| cat.key == normalized || cat.key.contains(&dehyphenated))
}

/// Case-insensitive substring search over title, description, and type.
#[must_use]
pub fn search_products(query: &str) -> Vec<&'static Product> {
    let needle = query.to_lowercase();
    all_products()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.kind.as_str().to_lowercase().contains(&needle)
        })
        .collect()
}

/// All categories with product counts.
#[must_use]
pub fn categories() -> Vec<CategorySummary> {
    CATEGORIES
        .iter()
        .map(|cat| CategorySummary {
            slug: cat.key,
            name: cat.name,
            product_count: cat.products.len(),
        })
        .collect()
}

/// Generate the variant set for a product: the color x size cross-product,
/// uniformly priced at the base price and in stock.
#[must_use]
pub fn generate_variants(product: &Product) -> Vec<Variant> {
    let mut variants = Vec::with_capacity(product.colors.len() * product.sizes.len());
    let mut sequence = 0;

    for &color in product.colors {
        for &size in product.sizes {
            variants.push(Variant {
                id: VariantId::derived(product.id, sequence),
                product_id: product.id,
                name: format!("{color} / {size}"),
                color,
                size,
                color_code: color_code(color),
                price: product.base_price,
                in_stock: true,
            });
            sequence += 1;
        }
    }

    variants
}

/// Swatch hex code for a color name, defaulting to black.
#[must_use]
pub fn color_code(color: &str) -> &'static str {
    COLOR_CODES
        .iter()
        .find(|(name, _)| *name == color)
        .map_or("#000000", |(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_by_id() {
        let (product, category) = product_by_id(ProductId::new(71)).expect("product 71");
        assert_eq!(product.kind, ProductKind::TShirt);
        assert_eq!(product.base_price, Price::new(799));
        assert_eq!(category.name, "T-Shirts");

        assert!(product_by_id(ProductId::new(9999)).is_none());
    }

    #[test]
    fn test_category_matching_is_case_insensitive() {
        assert_eq!(products_by_category("T-Shirts").len(), 3);
        assert_eq!(products_by_category("hoodies").len(), 3);
        assert_eq!(products_by_category("CAPS").len(), 3);
        assert!(products_by_category("posters").is_empty());
    }

    #[test]
    fn test_search_matches_title_description_and_type() {
        let by_title = search_products("trucker");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, ProductId::new(439));

        let by_kind = search_products("mug");
        assert!(by_kind.len() >= 3);

        assert!(search_products("submarine").is_empty());
    }

    #[test]
    fn test_categories_have_counts() {
        let summaries = categories();
        assert_eq!(summaries.len(), 4);
        assert!(summaries.iter().all(|c| c.product_count == 3));
    }

    #[test]
    fn test_variant_generation_is_deterministic() {
        let (product, _) = product_by_id(ProductId::new(71)).expect("product 71");
        let variants = generate_variants(product);

        // 6 colors x 6 sizes
        assert_eq!(variants.len(), 36);
        assert_eq!(variants[0].id, VariantId::derived(product.id, 0));
        assert_eq!(variants[0].name, "White / S");
        assert_eq!(variants[35].id, VariantId::derived(product.id, 35));
        assert!(variants.iter().all(|v| v.price == product.base_price));
        assert!(variants.iter().all(|v| v.in_stock));

        // Same input, same output
        let again = generate_variants(product);
        assert_eq!(
            variants.iter().map(|v| v.id).collect::<Vec<_>>(),
            again.iter().map(|v| v.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_color_code_fallback() {
        assert_eq!(color_code("White"), "#FFFFFF");
        assert_eq!(color_code("Ultraviolet"), "#000000");
    }

    #[test]
    fn test_image_for_color() {
        let (product, _) = product_by_id(ProductId::new(19)).expect("mug");
        assert_eq!(
            product.image_for_color("White"),
            "/white-glossy-mug-11oz-front-view.jpg"
        );
        assert_eq!(product.image_for_color("Chartreuse"), product.image);
    }
}
