//! shopfront 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `shopfront::route`: 路由定义与守卫（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod dashboard;
    pub mod login;
    pub mod navbar;
    pub mod orders;
    pub mod products;
    pub mod register;
}

use crate::auth::AuthContext;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::orders::MyOrdersPage;
use crate::components::products::ProductsPage;
use crate::components::register::RegisterPage;

use leptos::prelude::*;

// 原生 Web API 封装模块
pub(crate) mod web {
    pub mod console;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use shopfront::AppRoute;
use web::router::{Router, RouterOutlet};

pub use web::console::init_logging;

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Products => view! { <ProductsPage /> }.into_any(),
        AppRoute::MyOrders => view! { <MyOrdersPage /> }.into_any(),
        AppRoute::AdminDashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文（从 LocalStorage 恢复会话）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 获取会话信号，用于注入路由服务
    let session = auth_ctx.session_signal();

    view! {
        // 3. 路由器组件：注入会话信号实现守卫
        <Router session=session>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
