//! Row kinds and the rule tables that select them.
//!
//! Each section is a fixed table of `(row kind, predicate)` pairs. A row
//! appears when its predicate accepts the product type and feature flag;
//! selection order is table order. Adding a row to a section means adding
//! one table entry.

use crate::models::{ProductSettings, ProductType};

/// Kind of row on the product settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRowKind {
    Status,
    Visibility,
    CatalogVisibility,
    VirtualProduct,
    DownloadableProduct,
    ReviewsAllowed,
    Slug,
    PurchaseNote,
    MenuOrder,
}

impl SettingsRowKind {
    /// Label shown in the left column of the row.
    pub fn title(&self) -> &'static str {
        match self {
            SettingsRowKind::Status => "Status",
            SettingsRowKind::Visibility => "Visibility",
            SettingsRowKind::CatalogVisibility => "Catalog Visibility",
            SettingsRowKind::VirtualProduct => "Virtual Product",
            SettingsRowKind::DownloadableProduct => "Downloadable Product",
            SettingsRowKind::ReviewsAllowed => "Enable Reviews",
            SettingsRowKind::Slug => "Slug",
            SettingsRowKind::PurchaseNote => "Purchase Note",
            SettingsRowKind::MenuOrder => "Menu Order",
        }
    }
}

/// A row materialized for display: its kind plus the current value.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsRow {
    /// Which setting the row shows
    pub kind: SettingsRowKind,
    /// Display value pulled from the settings snapshot
    pub value: String,
}

impl SettingsRow {
    /// Pull the display value for `kind` out of the settings snapshot.
    pub(super) fn materialize(kind: SettingsRowKind, settings: &ProductSettings) -> Self {
        let value = match kind {
            SettingsRowKind::Status => settings.status.to_string(),
            SettingsRowKind::Visibility => settings.visibility.to_string(),
            SettingsRowKind::CatalogVisibility => settings.catalog_visibility.to_string(),
            SettingsRowKind::VirtualProduct => yes_no(settings.virtual_product),
            SettingsRowKind::DownloadableProduct => yes_no(settings.downloadable),
            SettingsRowKind::ReviewsAllowed => yes_no(settings.reviews_allowed),
            SettingsRowKind::Slug => settings.slug.clone(),
            SettingsRowKind::PurchaseNote => settings.purchase_note.clone(),
            SettingsRowKind::MenuOrder => settings.menu_order.to_string(),
        };
        Self { kind, value }
    }
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// Predicate deciding whether a row appears for the given product shape.
///
/// Arguments are the product type and whether downloadable products are
/// enabled.
pub type RowPredicate = fn(ProductType, bool) -> bool;

fn always(_: ProductType, _: bool) -> bool {
    true
}

fn simple_only(product_type: ProductType, _: bool) -> bool {
    product_type == ProductType::Simple
}

fn simple_with_downloads(product_type: ProductType, downloadable_enabled: bool) -> bool {
    product_type == ProductType::Simple && downloadable_enabled
}

/// Row rules for the Publish Settings section, in display order.
pub(super) const PUBLISH_ROW_RULES: &[(SettingsRowKind, RowPredicate)] = &[
    (SettingsRowKind::Status, always),
    (SettingsRowKind::Visibility, always),
    (SettingsRowKind::CatalogVisibility, always),
    (SettingsRowKind::VirtualProduct, simple_only),
    (SettingsRowKind::DownloadableProduct, simple_with_downloads),
];

/// Row rules for the More Options section, in display order.
pub(super) const MORE_OPTIONS_ROW_RULES: &[(SettingsRowKind, RowPredicate)] = &[
    (SettingsRowKind::ReviewsAllowed, always),
    (SettingsRowKind::Slug, always),
    (SettingsRowKind::PurchaseNote, always),
    (SettingsRowKind::MenuOrder, always),
];

/// Evaluate a rule table against the product shape and materialize the
/// surviving rows.
pub(super) fn select_rows(
    rules: &[(SettingsRowKind, RowPredicate)],
    settings: &ProductSettings,
    product_type: ProductType,
    downloadable_products_enabled: bool,
) -> Vec<SettingsRow> {
    rules
        .iter()
        .filter(|(_, predicate)| predicate(product_type, downloadable_products_enabled))
        .map(|(kind, _)| SettingsRow::materialize(*kind, settings))
        .collect()
}
