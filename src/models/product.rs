use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Enum representing the product categories offered for export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ProductType {
    Food,
    Beverage,
    Oil,
}

/// Enum representing the availability of a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Available,
    OutOfStock,
}

/// A product available for export shipments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Business code identifying the product, e.g. "PROD001".
    pub id: String,
    pub name: String,
    pub product_type: ProductType,
    /// Unit price in the ledger currency.
    pub price_per_unit: Decimal,
    /// Units currently in stock.
    pub stock: i64,
    pub status: ProductStatus,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        product_type: ProductType,
        price_per_unit: Decimal,
        stock: i64,
        status: ProductStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            product_type,
            price_per_unit,
            stock,
            status,
        }
    }
}
