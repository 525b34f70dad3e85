//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 会话本身由 `shopfront::Session` 持有 (token 存在 LocalStorage)，
//! 这里只把它的快照镜像成一个信号，供路由服务与页面读取。

use std::sync::Arc;

use leptos::prelude::*;
use shopfront::session::{self, SessionSnapshot};
use shopfront::{ApiClient, ClientConfig, HttpResult, ReqwestHttpClient, Session};
use shopfront_shared::{Credentials, DEFAULT_API_BASE_URL, RegisterRequest};

use crate::web::LocalStorage;

/// 浏览器端使用的 API 客户端
pub type Api = ApiClient<ReqwestHttpClient>;

/// 认证上下文
///
/// 包含会话快照信号与 API 客户端，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话快照（只读）
    pub snapshot: ReadSignal<SessionSnapshot>,
    api: StoredValue<Api>,
}

impl AuthContext {
    /// 从 LocalStorage 恢复会话并创建上下文
    pub fn new() -> Self {
        let base_url = option_env!("SHOPFRONT_API_URL").unwrap_or(DEFAULT_API_BASE_URL);
        let session = Session::restore(Arc::new(LocalStorage));
        let (snapshot, set_snapshot) = signal(session.snapshot());

        // 登录、注销以及 401 清除会话都会经过这里
        session.subscribe(move |s| set_snapshot.set(s.clone()));

        let api = ApiClient::new(ClientConfig::new(base_url), ReqwestHttpClient::new(), session);
        Self {
            snapshot,
            api: StoredValue::new(api),
        }
    }

    /// 获取 API 客户端的副本 (内部共享同一个会话)
    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    /// 获取会话快照信号（用于路由服务注入）
    pub fn session_signal(&self) -> Signal<SessionSnapshot> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.get())
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 登录
///
/// 成功后会话监听器会更新快照信号，路由服务随之重定向。
pub async fn login(ctx: &AuthContext, email: String, password: String) -> HttpResult<SessionSnapshot> {
    session::login(&ctx.api(), &Credentials { email, password }).await
}

/// 注册；后端没有返回 token 时仍为匿名，需要再登录
pub async fn register(
    ctx: &AuthContext,
    name: String,
    email: String,
    password: String,
) -> HttpResult<SessionSnapshot> {
    session::register(&ctx.api(), &RegisterRequest { name, email, password }).await
}

/// 注销并清除状态
///
/// 导航将由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    ctx.api().session().logout();
}
