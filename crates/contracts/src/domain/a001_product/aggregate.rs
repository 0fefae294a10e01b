use crate::shared::numeric::{coerce_decimal, coerce_integer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара, назначенный сервером.
///
/// The API does not promise a shape for ids: integers and strings are the
/// usual case, anything else (floats, integers past `i64`) is kept as raw
/// JSON. Every id is sent back exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
    Other(Value),
}

impl ProductId {
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
            ProductId::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId::Number(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId::Text(value.to_string())
    }
}

// ============================================================================
// Wire record
// ============================================================================

/// Product exactly as `GET /products` returns it.
///
/// Text fields may be missing or null, price and quantity may be numbers or
/// strings. Unknown fields are preserved in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub quantity: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Normalized product
// ============================================================================

/// Товар в кэше клиента: цена и количество уже приведены к числам.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<ProductRecord> for Product {
    fn from(r: ProductRecord) -> Self {
        Self {
            price: coerce_decimal(&r.price),
            quantity: coerce_integer(&r.quantity),
            id: r.id,
            name: r.name.unwrap_or_default(),
            description: r.description.unwrap_or_default(),
            category: r.category.unwrap_or_default(),
            extra: r.extra,
        }
    }
}

impl Product {
    /// Same product with every editable field replaced by `fields`.
    pub fn with_fields(&self, fields: NewProduct) -> Self {
        Self {
            id: self.id.clone(),
            name: fields.name,
            description: fields.description,
            category: fields.category,
            price: fields.price,
            quantity: fields.quantity,
            extra: self.extra.clone(),
        }
    }

    /// Same product with a new stock level.
    pub fn with_quantity(&self, quantity: i64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

// ============================================================================
// Create payload
// ============================================================================

/// Body of `POST /products`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(value: Value) -> Vec<Product> {
        let records: Vec<ProductRecord> = serde_json::from_value(value).unwrap();
        records.into_iter().map(Product::from).collect()
    }

    #[test]
    fn test_normalizes_string_price_and_quantity() {
        let products = normalize(json!([
            { "id": 1, "name": "Widget", "price": "10.5", "quantity": "3" }
        ]));

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, ProductId::Number(1));
        assert_eq!(products[0].price, 10.5);
        assert_eq!(products[0].quantity, 3);
        assert_eq!(products[0].description, "");
    }

    #[test]
    fn test_unparseable_values_default_to_zero() {
        let products = normalize(json!([
            { "id": "a1", "name": null, "price": "free", "quantity": null },
            { "id": "a2" }
        ]));

        assert_eq!(products[0].id, ProductId::Text("a1".to_string()));
        assert_eq!(products[0].name, "");
        assert_eq!(products[0].price, 0.0);
        assert_eq!(products[0].quantity, 0);
        assert_eq!(products[1].price, 0.0);
        assert_eq!(products[1].quantity, 0);
    }

    #[test]
    fn test_unknown_fields_survive_serialization() {
        let products = normalize(json!([
            { "id": 7, "name": "Bolt", "price": 2, "quantity": 5, "sku": "B-7" }
        ]));

        let body = serde_json::to_value(products[0].with_quantity(4)).unwrap();
        assert_eq!(
            body,
            json!({
                "id": 7,
                "name": "Bolt",
                "description": "",
                "category": "",
                "price": 2.0,
                "quantity": 4,
                "sku": "B-7"
            })
        );
    }

    #[test]
    fn test_with_fields_keeps_identity() {
        let product = normalize(json!([{ "id": 3, "name": "Old", "price": 1, "quantity": 1 }]))
            .remove(0);
        let updated = product.with_fields(NewProduct {
            name: "New".to_string(),
            description: "d".to_string(),
            category: "c".to_string(),
            price: 9.99,
            quantity: 12,
        });

        assert_eq!(updated.id, ProductId::Number(3));
        assert_eq!(updated.name, "New");
        assert_eq!(updated.price, 9.99);
        assert_eq!(updated.quantity, 12);
    }

    #[test]
    fn test_ids_of_any_json_shape_decode() {
        let products = normalize(json!([
            { "id": 1, "name": "Pen", "price": 1, "quantity": 1 },
            { "id": 2.5, "name": "Pad", "price": 2, "quantity": 2 },
            { "id": 18446744073709551615u64, "name": "Ink", "price": 3, "quantity": 3 }
        ]));

        assert_eq!(products.len(), 3);
        assert_eq!(products[0].id, ProductId::Number(1));
        assert_eq!(products[1].id, ProductId::Other(json!(2.5)));
        assert_eq!(products[1].id.as_string(), "2.5");
        assert_eq!(products[2].id.as_string(), "18446744073709551615");

        let body = serde_json::to_value(products[2].with_quantity(0)).unwrap();
        assert_eq!(body["id"], json!(18446744073709551615u64));
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::from(12).as_string(), "12");
        assert_eq!(ProductId::from("sku-9").to_string(), "sku-9");
    }
}
