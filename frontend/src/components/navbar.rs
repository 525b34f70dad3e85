use leptos::prelude::*;
use shopfront::AppRoute;

use crate::auth::{logout, use_auth};
use crate::web::router::Link;

/// 已登录页面共用的顶部导航栏
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let snapshot = auth.snapshot;

    let on_logout = move |_| logout(&auth);

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <Link to=AppRoute::Products class="btn btn-ghost text-xl">"Shopfront"</Link>
                <Link to=AppRoute::Products class="btn btn-ghost btn-sm">"Products"</Link>
                <Link to=AppRoute::MyOrders class="btn btn-ghost btn-sm">"My Orders"</Link>
                <Show when=move || snapshot.get().is_admin()>
                    <Link to=AppRoute::AdminDashboard class="btn btn-ghost btn-sm">"Admin"</Link>
                </Show>
            </div>
            <div class="flex-none gap-2">
                <span class="badge badge-neutral hidden md:inline-flex">
                    {move || snapshot.get().display_name().to_string()}
                </span>
                <button on:click=on_logout class="btn btn-outline btn-error btn-sm">
                    "Log out"
                </button>
            </div>
        </div>
    }
}

/// 页面顶部的提示条，3 秒后自动清除
#[component]
pub fn Banner(notification: RwSignal<Option<(String, bool)>>) -> impl IntoView {
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || notification.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || notification.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let is_err = notification.get().map(|(_, e)| e).unwrap_or_default();
                    if is_err { "alert alert-error shadow-lg" } else { "alert alert-success shadow-lg" }
                }>
                    <span>{move || notification.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
