// src/product.rs
//
// The display record. Built once by the normalizer (or the sample set below),
// then only read. A refresh produces a new Vec; nothing is patched in place.

use crate::data::Facet;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Product {
    id: i64,
    category: String,
    gender: String,
    size: String,
    url: String,
    status: String,
    notes: String,
}

impl Product {
    pub fn new(
        id: i64,
        category: impl Into<String>,
        gender: impl Into<String>,
        size: impl Into<String>,
        url: impl Into<String>,
        status: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category: category.into(),
            gender: gender.into(),
            size: size.into(),
            url: url.into(),
            status: status.into(),
            notes: notes.into(),
        }
    }

    pub fn id(&self) -> i64 { self.id }
    pub fn category(&self) -> &str { &self.category }
    pub fn gender(&self) -> &str { &self.gender }
    pub fn size(&self) -> &str { &self.size }
    pub fn url(&self) -> &str { &self.url }
    pub fn status(&self) -> &str { &self.status }
    pub fn notes(&self) -> &str { &self.notes }

    /// Value of a filterable field.
    pub fn field(&self, facet: Facet) -> &str {
        match facet {
            Facet::Gender => &self.gender,
            Facet::Category => &self.category,
            Facet::Size => &self.size,
            Facet::Status => &self.status,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status.eq_ignore_ascii_case("AVAILABLE")
    }
}

/// Built-in records shown when the feed cannot be fetched or read.
/// Not a cache: the content never changes.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(1, "QUẦN", "MALE", "XS", "https://www.instagram.com/p/DUVF5iiEmtI/", "SOLD", "hàng tặng"),
        Product::new(2, "ÁO", "FEMALE", "S", "https://www.instagram.com/p/DUVFTo5krJA/", "AVAILABLE", "độ mới 98%"),
        Product::new(3, "QUẦN", "MALE", "M", "https://www.instagram.com/p/DUVFK4skhKx/", "SOLD", "độ mới 99%"),
        Product::new(4, "ÁO", "FEMALE", "L", "https://www.instagram.com/p/DUVFCemkiCZ/", "AVAILABLE", "độ mới 98%"),
        Product::new(5, "QUẦN", "MALE", "XL", "https://www.instagram.com/p/DUVE3F_ErZr/", "SOLD", "độ mới 98%"),
        Product::new(6, "ÁO", "FEMALE", "XXL", "https://www.instagram.com/p/DUVEwgWEtib/", "AVAILABLE", "độ mới 98%"),
    ]
}
