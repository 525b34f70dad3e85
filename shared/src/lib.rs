//! 前后端共享的领域模型
//!
//! 后端是外部协作方，这里只描述它在 JSON 中交换的形状：
//! - `auth`: 注册/登录请求与响应、用户角色
//! - `commerce`: 商品、订单、支付
//! - `analytics`: 只读的聚合统计

pub mod analytics;
pub mod auth;
pub mod commerce;

pub use analytics::{GroupCount, OrderStats, PaymentSuccessRate, ProductStats};
pub use auth::{AuthResponse, Credentials, RegisterRequest, Role, UserProfile};
pub use commerce::{
    Order, OrderDraft, OrderItem, OrderStatus, Payment, PaymentDraft, PaymentStatus, Product,
    ProductDraft, ProductFilter,
};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 本地存储中保存 bearer token 的键名
pub const STORAGE_TOKEN_KEY: &str = "token";
/// 本地存储中保存用户资料 (JSON) 的键名
pub const STORAGE_USER_KEY: &str = "user";
/// 默认后端地址
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// 未知字段的透传容器
pub type Extra = serde_json::Map<String, serde_json::Value>;
