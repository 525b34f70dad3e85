//! 商品、订单、支付模型
//!
//! 状态字段的取值由服务端决定，客户端只负责请求状态迁移，从不在本地推算下一个状态。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

use crate::Extra;

// =========================================================
// 商品 (Product)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// 创建/更新商品时提交的数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
    pub stock: i64,
}

/// `GET /products` 的可选过滤参数，未设置的字段不会出现在查询串中
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ProductFilter {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Default::default()
        }
    }

    /// 转换为查询参数对 (保持字段声明顺序)
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category".to_string(), category.clone()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice".to_string(), min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice".to_string(), max.to_string()));
        }
        if let Some(in_stock) = self.in_stock {
            pairs.push(("inStock".to_string(), in_stock.to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_string(), sort.clone()));
        }
        pairs
    }
}

// =========================================================
// 订单 (Order)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// 商品引用：可能是 id 字符串，也可能是服务端展开后的商品对象
    #[serde(default)]
    pub product: Value,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(flatten)]
    pub extra: Extra,
}

impl OrderItem {
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        price: f64,
    ) -> Self {
        Self {
            product: Value::String(product_id.into()),
            name: name.into(),
            quantity,
            price,
            extra: Extra::new(),
        }
    }

    /// 商品 id：`product` 字符串、展开对象的 `_id`，或旧格式的 `productId`
    pub fn product_id(&self) -> Option<&str> {
        match &self.product {
            Value::String(id) => Some(id.as_str()),
            Value::Object(product) => product.get("_id").and_then(Value::as_str),
            _ => self.extra.get("productId").and_then(Value::as_str),
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// 下单时提交的数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
}

impl OrderDraft {
    /// 以行项目小计之和作为总额
    pub fn new(
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Self {
        let total_amount = items.iter().map(OrderItem::subtotal).sum();
        Self {
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            items,
            total_amount,
            shipping_address: None,
        }
    }
}

// =========================================================
// 支付 (Payment)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Failed => "Failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        [
            PaymentStatus::Pending,
            PaymentStatus::Completed,
            PaymentStatus::Failed,
        ]
        .into_iter()
        .find(|status| status.as_str().eq_ignore_ascii_case(s))
    }

    /// 只有待处理的支付可以发起处理
    pub fn is_processable(&self) -> bool {
        matches!(self, PaymentStatus::Pending)
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    pub order_id: String,
    pub customer_name: String,
    pub amount: f64,
    pub payment_method: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_decodes_backend_shape() {
        let body = json!({
            "_id": "o1",
            "orderNumber": "ORD-1001",
            "customerName": "Ada",
            "customerEmail": "ada@example.com",
            "items": [{ "productId": "p1", "name": "Lamp", "quantity": 2, "price": 12.5 }],
            "totalAmount": 25.0,
            "status": "Shipped",
            "createdAt": "2024-03-01T10:00:00.000Z",
            "__v": 0
        });

        let order: Order = serde_json::from_value(body).unwrap();
        assert_eq!(order.id, "o1");
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.items[0].subtotal(), 25.0);
        assert_eq!(order.items[0].product_id(), Some("p1"));
        assert!(order.created_at.is_some());
        // 未知字段原样保留
        assert_eq!(order.extra.get("__v"), Some(&json!(0)));
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(OrderStatus::Cancelled).unwrap(),
            json!("Cancelled")
        );
        assert_eq!(OrderStatus::parse("shipped"), Some(OrderStatus::Shipped));
        assert_eq!(OrderStatus::parse("lost"), None);
        assert_eq!(PaymentStatus::parse("FAILED"), Some(PaymentStatus::Failed));
        assert!(PaymentStatus::Pending.is_processable());
        assert!(!PaymentStatus::Completed.is_processable());
    }

    #[test]
    fn test_product_filter_skips_unset_fields() {
        let filter = ProductFilter {
            category: Some("Lighting".to_string()),
            max_price: Some(50.0),
            ..Default::default()
        };

        assert_eq!(
            filter.to_query(),
            vec![
                ("category".to_string(), "Lighting".to_string()),
                ("maxPrice".to_string(), "50".to_string()),
            ]
        );
        assert!(ProductFilter::default().to_query().is_empty());
    }

    #[test]
    fn test_order_draft_totals_items() {
        let draft = OrderDraft::new(
            "Ada",
            "ada@example.com",
            vec![
                OrderItem::new("p1", "Lamp", 2, 10.0),
                OrderItem::new("p2", "Bulb", 3, 1.5),
            ],
        );
        assert_eq!(draft.total_amount, 24.5);
    }

    #[test]
    fn test_product_tolerates_sparse_and_virtual_fields() {
        let products: Vec<Product> = serde_json::from_value(json!([
            { "_id": "p1", "price": 5 },
            { "_id": "p2", "id": "p2", "name": "Lamp", "category": "Lighting", "stock": 3 }
        ]))
        .unwrap();

        assert_eq!(products[0].name, "");
        assert!(!products[0].in_stock());
        assert_eq!(products[1].id, "p2");
        // Mongoose 的 `id` 虚拟字段进入透传字段
        assert_eq!(products[1].extra.get("id"), Some(&json!("p2")));
    }

    #[test]
    fn test_order_item_with_populated_product() {
        let order: Order = serde_json::from_value(json!({
            "_id": "o1",
            "id": "o1",
            "items": [
                { "product": { "_id": "p1", "name": "Lamp" }, "quantity": 1, "price": 12.5 },
                { "product": "p2", "quantity": 2, "price": 1.0 }
            ],
            "status": "Pending"
        }))
        .unwrap();

        assert_eq!(order.items[0].product_id(), Some("p1"));
        assert_eq!(order.items[0].product["name"], json!("Lamp"));
        assert_eq!(order.items[1].product_id(), Some("p2"));
    }

    #[test]
    fn test_new_order_item_posts_product_reference() {
        let body = serde_json::to_value(OrderItem::new("p1", "Lamp", 2, 10.0)).unwrap();
        assert_eq!(
            body,
            json!({ "product": "p1", "name": "Lamp", "quantity": 2, "price": 10.0 })
        );
    }
}
