//! 聚合统计 (只读，由服务端计算)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Extra;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    #[serde(default)]
    pub total_products: u64,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSuccessRate {
    /// 百分比 (0-100)
    #[serde(default)]
    pub success_rate: f64,
    #[serde(flatten)]
    pub extra: Extra,
}

/// 分组计数 (`{ "_id": <key>, "count": n }`)
///
/// 分组键可能是字符串、数字，也可能是 `null` (字段缺失的记录)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupCount {
    #[serde(rename = "_id", default)]
    pub key: Value,
    #[serde(default)]
    pub count: u64,
    #[serde(flatten)]
    pub extra: Extra,
}

impl GroupCount {
    /// 用于展示的分组名
    pub fn label(&self) -> String {
        match &self.key {
            Value::String(key) => key.clone(),
            Value::Null => "Unknown".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_counters_default_to_zero() {
        let stats: OrderStats = serde_json::from_value(json!({})).unwrap();
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.total_revenue, 0.0);
    }

    #[test]
    fn test_group_count_keeps_extra_aggregates() {
        let group: GroupCount =
            serde_json::from_value(json!({ "_id": "Card", "count": 4, "totalAmount": 99.5 }))
                .unwrap();
        assert_eq!(group.label(), "Card");
        assert_eq!(group.count, 4);
        assert_eq!(group.extra.get("totalAmount"), Some(&json!(99.5)));
    }

    #[test]
    fn test_group_count_with_null_key() {
        let groups: Vec<GroupCount> = serde_json::from_value(json!([
            { "_id": null, "count": 2 },
            { "_id": "Lighting", "count": 5 },
            { "_id": true, "count": 1 }
        ]))
        .unwrap();

        assert_eq!(groups[0].label(), "Unknown");
        assert_eq!(groups[1].label(), "Lighting");
        assert_eq!(groups[2].label(), "true");
    }
}
