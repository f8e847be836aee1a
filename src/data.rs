// src/data.rs
//
// Canonical product data and the filtered view over it.
//
// - Catalog: owns the last loaded product sequence (replaced wholesale on
//            refresh), the active filters, and the row indices currently shown.
// - Filters: one accepted-value set per facet; an empty set means "all".
//
// Front-ends hold a Catalog and pass it around explicitly; nothing here is global.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::product::Product;

/// Filterable product fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    Gender,
    Category,
    Size,
    Status,
}

impl Facet {
    pub const ALL: [Facet; 4] = [Facet::Gender, Facet::Category, Facet::Size, Facet::Status];

    pub fn label(self) -> &'static str {
        match self {
            Facet::Gender => "Gender",
            Facet::Category => "Category",
            Facet::Size => "Size",
            Facet::Status => "Status",
        }
    }

    fn slot(self) -> usize { self as usize }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Exact-match predicates per facet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    sets: [BTreeSet<String>; 4],
}

impl Filters {
    /// Flip one value on or off. Returns whether it is now selected.
    pub fn toggle(&mut self, facet: Facet, value: &str) -> bool {
        let set = &mut self.sets[facet.slot()];
        if set.remove(value) {
            false
        } else {
            set.insert(s!(value));
            true
        }
    }

    /// Add a value; already-selected values stay selected.
    pub fn select(&mut self, facet: Facet, value: impl Into<String>) {
        self.sets[facet.slot()].insert(value.into());
    }

    pub fn set<I, S>(&mut self, facet: Facet, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sets[facet.slot()] = values.into_iter().map(Into::into).collect();
    }

    /// Back to "all" for one facet.
    pub fn clear(&mut self, facet: Facet) {
        self.sets[facet.slot()].clear();
    }

    pub fn reset(&mut self) {
        for set in &mut self.sets { set.clear(); }
    }

    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        &self.sets[facet.slot()]
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.sets[facet.slot()].contains(value)
    }

    pub fn is_active(&self) -> bool {
        self.sets.iter().any(|s| !s.is_empty())
    }

    pub fn accepts(&self, p: &Product) -> bool {
        Facet::ALL.iter().all(|&f| {
            let set = &self.sets[f.slot()];
            set.is_empty() || set.contains(p.field(f))
        })
    }
}

/// Where the current product sequence came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    Live,
    Fallback { reason: String },
}

impl Origin {
    pub fn is_fallback(&self) -> bool { matches!(self, Origin::Fallback { .. }) }
}

#[derive(Clone, Debug)]
pub struct Catalog {
    products: Vec<Product>,
    origin: Origin,
    filters: Filters,
    /// Positions of shown products in `products`
    view: Vec<usize>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, origin: Origin) -> Self {
        let mut c = Self { products, origin, filters: Filters::default(), view: Vec::new() };
        c.rebuild_view();
        c
    }

    /// Swap in a freshly loaded sequence. Filters survive; the view is rebuilt.
    pub fn replace(&mut self, products: Vec<Product>, origin: Origin) {
        logd!("Catalog: replace {} → {} product(s), origin={:?}", self.products.len(), products.len(), origin);
        self.products = products;
        self.origin = origin;
        self.rebuild_view();
    }

    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = filters;
        self.rebuild_view();
    }

    /// Mutate filters in place, then refresh the view once.
    pub fn update_filters<F: FnOnce(&mut Filters)>(&mut self, f: F) {
        f(&mut self.filters);
        self.rebuild_view();
    }

    pub fn reset_filters(&mut self) {
        self.update_filters(Filters::reset);
    }

    pub fn filters(&self) -> &Filters { &self.filters }
    pub fn origin(&self) -> &Origin { &self.origin }
    pub fn products(&self) -> &[Product] { &self.products }

    pub fn total_count(&self) -> usize { self.products.len() }
    pub fn visible_count(&self) -> usize { self.view.len() }

    /// Shown products, in source order.
    pub fn visible(&self) -> impl Iterator<Item = &Product> + '_ {
        self.view.iter().map(|&ix| &self.products[ix])
    }

    /// Borrow a single shown product by view index.
    pub fn visible_at(&self, i: usize) -> Option<&Product> {
        self.view.get(i).and_then(|&ix| self.products.get(ix))
    }

    /// Distinct values of a facet across all products, first-seen order.
    pub fn facet_values(&self, facet: Facet) -> Vec<String> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.field(facet))
            .filter(|v| seen.insert(*v))
            .map(|v| s!(v))
            .collect()
    }

    fn rebuild_view(&mut self) {
        self.view = self
            .products
            .iter()
            .enumerate()
            .filter(|(_, p)| self.filters.accepts(p))
            .map(|(i, _)| i)
            .collect();
    }
}
