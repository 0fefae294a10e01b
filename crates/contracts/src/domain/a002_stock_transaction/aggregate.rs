use crate::domain::a001_product::aggregate::{Product, ProductId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Вид складской операции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Sale,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Sale => "Sale",
        }
    }
}

/// Stock movement recorded on the client.
///
/// Product id and name are copied at the moment of the sale, so the record
/// stays readable after the product is renamed or deleted. Transactions live
/// only in memory and are never sent to the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Local key for rendering, not a server id.
    pub id: Uuid,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i64,
    /// Unit price at the time of sale.
    pub price: f64,
    pub total: f64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn sale(product: &Product, quantity: i64, date: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            price: product.price,
            total: product.price * quantity as f64,
            date,
            kind: TransactionKind::Sale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn product(price: f64, quantity: i64) -> Product {
        Product {
            id: ProductId::Number(4),
            name: "Lamp".to_string(),
            description: String::new(),
            category: "Lighting".to_string(),
            price,
            quantity,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_sale_computes_total() {
        let tx = Transaction::sale(&product(5.0, 10), 2, "01.02.2026, 10:00:00".to_string());

        assert_eq!(tx.product_id, ProductId::Number(4));
        assert_eq!(tx.product_name, "Lamp");
        assert_eq!(tx.quantity, 2);
        assert_eq!(tx.price, 5.0);
        assert_eq!(tx.total, 10.0);
        assert_eq!(tx.kind, TransactionKind::Sale);
    }

    #[test]
    fn test_sale_serializes_type_field() {
        let tx = Transaction::sale(&product(1.5, 3), 1, "now".to_string());
        let value = serde_json::to_value(&tx).unwrap();

        assert_eq!(value["type"], "Sale");
        assert_eq!(value["productName"], "Lamp");
        assert_eq!(value["productId"], 4);
    }
}
