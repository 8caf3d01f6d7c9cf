//! Derived views over the export collection.
//!
//! Pure read paths: denormalization, conjunctive filtering, stable sorting,
//! saved views, and global search suggestions. Nothing here mutates the
//! store; identical inputs always produce identical ordered output.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Export, ExportStatus, ProductType, SlaStatus};
use crate::nav::Screen;
use crate::store::RecordStore;

/// Filter set applied conjunctively to the export collection.
///
/// `sla_status` is an optional dimension with no dedicated panel control;
/// it backs the "SLA Overdue" saved view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFilters {
    pub status: Option<ExportStatus>,
    pub customer_id: Option<String>,
    pub product_type: Option<ProductType>,
    pub sla_status: Option<SlaStatus>,
}

impl ExportFilters {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.customer_id.is_none()
            && self.product_type.is_none()
            && self.sla_status.is_none()
    }
}

/// Sortable columns of the exports list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Name,
    Status,
    Eta,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Complete view-state of the exports list: search term, filters, and sort.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportViewQuery {
    pub search: String,
    pub filters: ExportFilters,
    pub sort: SortSpec,
}

impl ExportViewQuery {
    /// Sort-header toggle: selecting the active ascending column flips it
    /// to descending; anything else selects the column ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.direction =
            if self.sort.key == key && self.sort.direction == SortDirection::Ascending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
        self.sort.key = key;
    }
}

/// An export denormalized for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(flatten)]
    pub export: Export,
    pub customer_name: String,
    pub product_name: String,
    pub product_type: Option<ProductType>,
}

/// Computes the ordered, filtered projection of the export collection.
///
/// Filtering is conjunctive: the search term (case-insensitive over name,
/// customer name, and product id) AND every set filter must match. Sorting
/// is stable, so equal keys keep their stored relative order.
pub fn derive_view(store: &RecordStore, query: &ExportViewQuery) -> Vec<ExportRow> {
    let needle = query.search.to_lowercase();

    let mut rows: Vec<ExportRow> = store
        .exports()
        .iter()
        .map(|export| ExportRow {
            customer_name: store.customer_name(&export.customer_id),
            product_name: store.product_name(&export.product_id),
            product_type: store
                .find_product(&export.product_id)
                .map(|product| product.product_type),
            export: export.clone(),
        })
        .filter(|row| {
            let search_match = needle.is_empty()
                || row.export.name.to_lowercase().contains(&needle)
                || row.customer_name.to_lowercase().contains(&needle)
                || row.export.product_id.to_lowercase().contains(&needle);

            let filters = &query.filters;
            let status_match = filters.status.map_or(true, |s| row.export.status == s);
            let customer_match = filters
                .customer_id
                .as_ref()
                .map_or(true, |id| &row.export.customer_id == id);
            let product_type_match = filters
                .product_type
                .map_or(true, |t| row.product_type == Some(t));
            let sla_match = filters
                .sla_status
                .map_or(true, |s| row.export.sla_status == s);

            search_match && status_match && customer_match && product_type_match && sla_match
        })
        .collect();

    rows.sort_by(|a, b| {
        let ordering = match query.sort.key {
            SortKey::Name => a.export.name.cmp(&b.export.name),
            // statuses order by their wire constants, like the list header
            SortKey::Status => a.export.status.to_string().cmp(&b.export.status.to_string()),
            SortKey::Eta => a.export.eta.cmp(&b.export.eta),
        };
        match query.sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    debug!(
        total = store.exports().len(),
        matched = rows.len(),
        "derived exports view"
    );
    rows
}

/// A named preset filter set for the exports list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedView {
    pub name: String,
    pub filters: ExportFilters,
}

/// The built-in saved views, in display order.
///
/// "My Exports" ships without a filter until per-owner tracking exists.
pub fn saved_views() -> Vec<SavedView> {
    vec![
        SavedView {
            name: "All".to_string(),
            filters: ExportFilters::default(),
        },
        SavedView {
            name: "Pending Approval".to_string(),
            filters: ExportFilters {
                status: Some(ExportStatus::Pending),
                ..ExportFilters::default()
            },
        },
        SavedView {
            name: "SLA Overdue".to_string(),
            filters: ExportFilters {
                sla_status: Some(SlaStatus::Overdue),
                ..ExportFilters::default()
            },
        },
        SavedView {
            name: "My Exports".to_string(),
            filters: ExportFilters::default(),
        },
    ]
}

/// Entity kind of a global-search suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionKind {
    Export,
    Customer,
    Product,
}

/// One global-search suggestion row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub id: String,
    pub name: String,
    pub status: String,
}

impl Suggestion {
    /// Screen a suggestion leads to when picked. Only exports navigate;
    /// the other kinds have no detail screens yet.
    pub fn target(&self) -> Option<Screen> {
        match self.kind {
            SuggestionKind::Export => Some(Screen::ExportDetail {
                id: self.id.clone(),
            }),
            SuggestionKind::Customer | SuggestionKind::Product => None,
        }
    }
}

/// Scans exports, customers, and products for the global search box.
///
/// Terms shorter than `min_chars` yield nothing; matches are
/// case-insensitive on name or id, capped at `limit` in collection order.
pub fn search_suggestions(
    store: &RecordStore,
    term: &str,
    min_chars: usize,
    limit: usize,
) -> Vec<Suggestion> {
    let trimmed = term.trim();
    if trimmed.len() < min_chars {
        return Vec::new();
    }
    let needle = trimmed.to_lowercase();
    let matches = |name: &str, id: &str| {
        name.to_lowercase().contains(&needle) || id.to_lowercase().contains(&needle)
    };

    let exports = store.exports().iter().map(|export| Suggestion {
        kind: SuggestionKind::Export,
        id: export.id.to_string(),
        name: export.name.clone(),
        status: export.status.to_string(),
    });
    let customers = store.customers().iter().map(|customer| Suggestion {
        kind: SuggestionKind::Customer,
        id: customer.id.clone(),
        name: customer.name.clone(),
        status: customer.status.to_string(),
    });
    let products = store.products().iter().map(|product| Suggestion {
        kind: SuggestionKind::Product,
        id: product.id.clone(),
        name: product.name.clone(),
        status: product.status.to_string(),
    });

    exports
        .chain(customers)
        .chain(products)
        .filter(|suggestion| matches(&suggestion.name, &suggestion.id))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn seeded() -> RecordStore {
        seed::sample_store()
    }

    #[test]
    fn search_matches_name_customer_and_product_id() {
        let store = seeded();
        let mut query = ExportViewQuery {
            search: "C1002".to_string(),
            ..ExportViewQuery::default()
        };
        let rows = derive_view(&store, &query);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].export.name, "Shipment #C1002");

        // customer name is searchable after denormalization
        query.search = "asia imports".to_string();
        let rows = derive_view(&store, &query);
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| r.customer_name == "Asia Imports Ltd."));

        query.search = "PROD003".to_string();
        let rows = derive_view(&store, &query);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].export.product_id, "PROD003");
    }

    #[test]
    fn filters_apply_conjunctively() {
        let store = seeded();
        let query = ExportViewQuery {
            filters: ExportFilters {
                status: Some(ExportStatus::Approved),
                customer_id: Some("CUST001".to_string()),
                ..ExportFilters::default()
            },
            ..ExportViewQuery::default()
        };
        let rows = derive_view(&store, &query);
        assert!(rows.iter().all(|r| {
            r.export.status == ExportStatus::Approved && r.export.customer_id == "CUST001"
        }));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn product_type_filter_resolves_through_the_catalog() {
        let store = seeded();
        let query = ExportViewQuery {
            filters: ExportFilters {
                product_type: Some(ProductType::Oil),
                ..ExportFilters::default()
            },
            ..ExportViewQuery::default()
        };
        let rows = derive_view(&store, &query);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].export.product_id, "PROD003");
    }

    #[test]
    fn sla_filter_backs_the_overdue_saved_view() {
        let store = seeded();
        let overdue = saved_views()
            .into_iter()
            .find(|view| view.name == "SLA Overdue")
            .unwrap();
        let query = ExportViewQuery {
            filters: overdue.filters,
            ..ExportViewQuery::default()
        };
        let rows = derive_view(&store, &query);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].export.sla_status, SlaStatus::Overdue);
    }

    #[test]
    fn eta_sort_descending_orders_latest_first() {
        let store = seeded();
        let query = ExportViewQuery {
            sort: SortSpec {
                key: SortKey::Eta,
                direction: SortDirection::Descending,
            },
            ..ExportViewQuery::default()
        };
        let rows = derive_view(&store, &query);
        for pair in rows.windows(2) {
            assert!(pair[0].export.eta >= pair[1].export.eta);
        }
    }

    #[test]
    fn toggle_sort_flips_direction_on_the_active_column() {
        let mut query = ExportViewQuery::default();
        assert_eq!(query.sort.direction, SortDirection::Ascending);
        query.toggle_sort(SortKey::Name);
        assert_eq!(query.sort.direction, SortDirection::Descending);
        query.toggle_sort(SortKey::Eta);
        assert_eq!(query.sort.key, SortKey::Eta);
        assert_eq!(query.sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn short_terms_produce_no_suggestions() {
        let store = seeded();
        assert!(search_suggestions(&store, "C1", 3, 5).is_empty());
    }

    #[test]
    fn suggestions_span_entity_kinds_and_cap_at_limit() {
        let store = seeded();
        let suggestions = search_suggestions(&store, "coconut", 3, 5);
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= 5);
        assert!(suggestions
            .iter()
            .all(|s| s.kind == SuggestionKind::Product));

        let shipment = search_suggestions(&store, "Shipment #C1001", 3, 5);
        assert_eq!(shipment.len(), 1);
        assert!(shipment[0].target().is_some());
    }
}
