//! # Product Catalog
//!
//! The read-only catalog collaborator: a pre-loaded list of products and the
//! linear query helpers the storefront views run over it.
//!
//! ## Read-Only by Construction
//! The store never mutates the catalog, and nothing the store hands out
//! aliases it: cart lines and wishlist entries carry frozen product copies.
//! (Admin screens edit a local copy of their own; that is view furniture,
//! not this type.)
//!
//! ## Query Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Home page        featured(), best_sellers(), on_sale()               │
//! │  Search page      search("head")  - name/description/category match   │
//! │  Category page    in_category("electronics", price cap, sort)         │
//! │  Product page     product_by_slug("nimbus-headphones")                 │
//! │                                                                         │
//! │  All linear scans over a small in-memory array; no index.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use lumina_core::{Category, Money, Product};

// =============================================================================
// Sorting
// =============================================================================

/// Sort orders offered by the category page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogSort {
    /// Catalog order (the seed is newest-first).
    #[default]
    Newest,
    /// Effective price, ascending.
    PriceLowToHigh,
    /// Effective price, descending.
    PriceHighToLow,
    /// Rating, descending.
    Rating,
}

// =============================================================================
// Catalog
// =============================================================================

/// The read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from pre-loaded data.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Catalog {
            categories,
            products,
        }
    }

    /// All categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All products, catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a product by its URL slug.
    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Looks up a category by slug.
    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Case-insensitive substring search over name, description, and
    /// category. An empty query returns nothing (the search page shows a
    /// prompt instead of the whole catalog).
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
                    || p.category.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Products in a category, optionally capped at a maximum effective
    /// price, in the requested sort order.
    pub fn in_category(
        &self,
        slug: &str,
        max_price: Option<Money>,
        sort: CatalogSort,
    ) -> Vec<&Product> {
        let mut results: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.category == slug)
            .filter(|p| match max_price {
                Some(cap) => p.effective_price() <= cap,
                None => true,
            })
            .collect();

        match sort {
            CatalogSort::Newest => {}
            CatalogSort::PriceLowToHigh => {
                results.sort_by_key(|p| p.effective_price());
            }
            CatalogSort::PriceHighToLow => {
                results.sort_by_key(|p| std::cmp::Reverse(p.effective_price()));
            }
            CatalogSort::Rating => {
                results.sort_by(|a, b| {
                    b.rating
                        .partial_cmp(&a.rating)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            }
        }

        results
    }

    /// Products flagged for the home-page featured rail.
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_featured).collect()
    }

    /// Best sellers: anything with more than 1000 reviews.
    pub fn best_sellers(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.reviews_count > 1000)
            .collect()
    }

    /// Products currently on sale.
    pub fn on_sale(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_on_sale()).collect()
    }
}

// =============================================================================
// Demo Seed Data
// =============================================================================

/// Seed row: (id, name, category, price cents, sale cents, stock, rating,
/// reviews, featured).
type SeedRow = (
    &'static str,
    &'static str,
    &'static str,
    i64,
    Option<i64>,
    i64,
    f64,
    i64,
    bool,
);

/// Demo categories, matching the storefront's fixed set.
const DEMO_CATEGORIES: &[(&str, &str, &str)] = &[
    ("1", "Electronics", "electronics"),
    ("2", "Fashion", "fashion"),
    ("3", "Home & Living", "home"),
    ("4", "Accessories", "accessories"),
    ("5", "Food", "food"),
];

/// A representative slice of the storefront catalog.
const DEMO_PRODUCTS: &[SeedRow] = &[
    ("1", "Nimbus Wireless Headphones", "electronics", 24_900, Some(19_900), 34, 4.7, 2841, true),
    ("2", "Volt USB-C Power Bank", "electronics", 5_900, None, 120, 4.4, 1532, false),
    ("3", "Pixelframe 4K Monitor", "electronics", 42_900, None, 12, 4.6, 389, true),
    ("4", "Drift Mechanical Keyboard", "electronics", 13_900, Some(10_900), 45, 4.5, 974, false),
    ("5", "Meridian Wool Overcoat", "fashion", 28_900, None, 18, 4.8, 412, true),
    ("6", "Coastline Linen Shirt", "fashion", 6_900, Some(4_900), 80, 4.2, 1287, false),
    ("7", "Atlas Canvas Sneakers", "fashion", 9_900, None, 64, 4.3, 2210, false),
    ("8", "Aurora Desk Lamp", "home", 7_900, Some(5_900), 40, 4.6, 655, true),
    ("9", "Ember Ceramic Vase", "home", 4_500, None, 52, 4.1, 231, false),
    ("10", "Cumulus Down Duvet", "home", 18_900, None, 22, 4.9, 1704, true),
    ("11", "Orbit Leather Watch Strap", "accessories", 3_900, None, 95, 4.0, 508, false),
    ("12", "Summit Daypack", "accessories", 11_900, Some(8_900), 37, 4.5, 1923, true),
    ("13", "Single-Origin Espresso Beans", "food", 2_400, None, 200, 4.8, 3312, true),
    ("14", "Wildflower Honey Jar", "food", 1_800, Some(1_400), 150, 4.7, 1108, false),
    ("15", "Dark Chocolate Trio", "food", 2_900, None, 90, 4.6, 764, false),
];

fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

impl Catalog {
    /// Builds the demo catalog the storefront ships with.
    pub fn demo() -> Self {
        let categories = DEMO_CATEGORIES
            .iter()
            .map(|(id, name, slug)| Category {
                id: (*id).to_string(),
                name: (*name).to_string(),
                slug: (*slug).to_string(),
                image: format!("https://images.lumina.example/categories/{}.jpg", slug),
            })
            .collect();

        let products = DEMO_PRODUCTS
            .iter()
            .map(
                |(id, name, category, price, sale, stock, rating, reviews, featured)| {
                    let slug = slugify(name);
                    Product {
                        id: (*id).to_string(),
                        name: (*name).to_string(),
                        slug: slug.clone(),
                        description: format!("{} from the Lumina {} collection.", name, category),
                        price: Money::from_cents(*price),
                        sale_price: sale.map(Money::from_cents),
                        category: (*category).to_string(),
                        images: vec![format!(
                            "https://images.lumina.example/products/{}.jpg",
                            slug
                        )],
                        stock: *stock,
                        rating: *rating,
                        reviews_count: *reviews,
                        is_featured: *featured,
                    }
                },
            )
            .collect();

        Catalog::new(categories, products)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_shape() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.categories().len(), 5);
        assert!(!catalog.products().is_empty());

        // Ids and slugs are unique
        for p in catalog.products() {
            assert_eq!(catalog.product(&p.id).unwrap().id, p.id);
            assert_eq!(catalog.product_by_slug(&p.slug).unwrap().slug, p.slug);
        }

        // Every product references a real category
        for p in catalog.products() {
            assert!(catalog.category_by_slug(&p.category).is_some());
        }
    }

    #[test]
    fn test_lookup_misses() {
        let catalog = Catalog::demo();
        assert!(catalog.product("nope").is_none());
        assert!(catalog.product_by_slug("nope").is_none());
        assert!(catalog.category_by_slug("nope").is_none());
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let catalog = Catalog::demo();
        let results = catalog.search("HEADPHONES");
        assert!(results.iter().any(|p| p.id == "1"));
    }

    #[test]
    fn test_search_matches_category() {
        let catalog = Catalog::demo();
        let results = catalog.search("food");
        assert!(!results.is_empty());
        assert!(results.iter().all(|p| p.category == "food"
            || p.name.to_lowercase().contains("food")
            || p.description.to_lowercase().contains("food")));
    }

    #[test]
    fn test_empty_search_returns_nothing() {
        let catalog = Catalog::demo();
        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn test_in_category_price_cap_uses_effective_price() {
        let catalog = Catalog::demo();
        // Coastline Linen Shirt lists at $69.00 but sells at $49.00;
        // a $50.00 cap must still include it.
        let results = catalog.in_category(
            "fashion",
            Some(Money::from_cents(5_000)),
            CatalogSort::Newest,
        );
        assert!(results.iter().any(|p| p.id == "6"));
        assert!(results.iter().all(|p| p.effective_price().cents() <= 5_000));
    }

    #[test]
    fn test_in_category_sort_price_ascending() {
        let catalog = Catalog::demo();
        let results = catalog.in_category("electronics", None, CatalogSort::PriceLowToHigh);

        let prices: Vec<i64> = results.iter().map(|p| p.effective_price().cents()).collect();
        let mut sorted = prices.clone();
        sorted.sort();
        assert_eq!(prices, sorted);
    }

    #[test]
    fn test_in_category_sort_rating_descending() {
        let catalog = Catalog::demo();
        let results = catalog.in_category("home", None, CatalogSort::Rating);

        let ratings: Vec<f64> = results.iter().map(|p| p.rating).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_home_page_rails() {
        let catalog = Catalog::demo();

        assert!(catalog.featured().iter().all(|p| p.is_featured));
        assert!(catalog.best_sellers().iter().all(|p| p.reviews_count > 1000));
        assert!(catalog.on_sale().iter().all(|p| p.is_on_sale()));

        assert!(!catalog.featured().is_empty());
        assert!(!catalog.best_sellers().is_empty());
        assert!(!catalog.on_sale().is_empty());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Nimbus Wireless Headphones"), "nimbus-wireless-headphones");
        assert_eq!(slugify("Dark Chocolate Trio"), "dark-chocolate-trio");
        assert_eq!(slugify("Single-Origin Espresso Beans"), "single-origin-espresso-beans");
    }
}
