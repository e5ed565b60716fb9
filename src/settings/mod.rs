//! Sections for the product settings screen.
//!
//! Pure selection: given a settings snapshot, the product type, and the
//! downloadable-products feature flag, [`build_sections`] returns the
//! ordered sections and rows to display. Same inputs, same output; rows
//! whose predicate rejects the product shape are simply absent.

mod rows;

pub use rows::{RowPredicate, SettingsRow, SettingsRowKind};

use crate::models::{ProductSettings, ProductType};
use rows::{select_rows, MORE_OPTIONS_ROW_RULES, PUBLISH_ROW_RULES};

/// Title of the publish settings section.
pub const PUBLISH_SETTINGS_TITLE: &str = "Publish Settings";

/// Title of the more options section.
pub const MORE_OPTIONS_TITLE: &str = "More Options";

/// One titled section of the product settings screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSettingsSection {
    /// Section header title
    pub title: &'static str,
    /// Rows in display order
    pub rows: Vec<SettingsRow>,
}

/// Build the Publish Settings section.
///
/// Simple products get the virtual-product row, and the downloadable
/// row on top of that when the feature flag is on. Every other product
/// type gets the base rows regardless of the flag.
pub fn publish_settings(
    settings: &ProductSettings,
    product_type: ProductType,
    downloadable_products_enabled: bool,
) -> ProductSettingsSection {
    ProductSettingsSection {
        title: PUBLISH_SETTINGS_TITLE,
        rows: select_rows(
            PUBLISH_ROW_RULES,
            settings,
            product_type,
            downloadable_products_enabled,
        ),
    }
}

/// Build the More Options section. Its rows never vary; every predicate
/// in its rule table accepts every product shape.
pub fn more_options(
    settings: &ProductSettings,
    product_type: ProductType,
    downloadable_products_enabled: bool,
) -> ProductSettingsSection {
    ProductSettingsSection {
        title: MORE_OPTIONS_TITLE,
        rows: select_rows(
            MORE_OPTIONS_ROW_RULES,
            settings,
            product_type,
            downloadable_products_enabled,
        ),
    }
}

/// Build all sections for the settings screen, in display order.
pub fn build_sections(
    settings: &ProductSettings,
    product_type: ProductType,
    downloadable_products_enabled: bool,
) -> Vec<ProductSettingsSection> {
    vec![
        publish_settings(settings, product_type, downloadable_products_enabled),
        more_options(settings, product_type, downloadable_products_enabled),
    ]
}
