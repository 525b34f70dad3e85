use leptos::prelude::*;
use leptos::task::spawn_local;
use shopfront::dashboard::{AdminDashboard, DashboardState};
use shopfront_shared::{OrderStatus, PaymentStatus};

use crate::auth::use_auth;
use crate::components::navbar::{Banner, NavBar};

/// 变更操作
#[derive(Clone)]
enum Action {
    Refresh,
    UpdateStatus(String, OrderStatus),
    ProcessPayment(String),
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    let state = RwSignal::new(DashboardState::default());
    let notification = RwSignal::new(Option::<(String, bool)>::None);

    // 每次操作都在当前状态的副本上执行，完成后整体写回
    let run = move |action: Action| {
        // 同一时间只执行一个操作，避免两个操作各自写回时互相覆盖
        if !state.try_update(|s| s.begin()).unwrap_or(false) {
            tracing::debug!("dashboard action ignored, another one is in flight");
            return;
        }
        let api = auth.api();
        spawn_local(async move {
            let dashboard = AdminDashboard::new(&api);
            let mut next = state.get_untracked();
            match action {
                Action::Refresh => dashboard.refresh(&mut next).await,
                Action::UpdateStatus(id, status) => {
                    dashboard.update_order_status(&mut next, &id, status).await;
                    if next.error.is_none() {
                        notification.set(Some(("Order status updated".to_string(), false)));
                    }
                }
                Action::ProcessPayment(id) => {
                    dashboard.process_payment(&mut next, &id).await;
                    if next.error.is_none() {
                        notification.set(Some(("Payment processed".to_string(), false)));
                    }
                }
            }
            if let Some(banner) = next.error.take() {
                notification.set(Some((banner, true)));
            }
            next.loading = false;
            state.set(next);
        });
    };

    // 守卫放行后才会挂载，创建时即拉取
    run(Action::Refresh);
    let busy = move || state.with(|s| s.loading);

    let data = move || state.with(|s| s.data.clone());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Banner notification=notification />
                <NavBar />

                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold">"Admin Dashboard"</h2>
                    <button
                        on:click=move |_| run(Action::Refresh)
                        disabled=busy
                        class="btn btn-ghost btn-sm"
                    >
                        {move || if busy() { "Loading..." } else { "Refresh" }}
                    </button>
                </div>

                <Show
                    when=move || data().is_some()
                    fallback=move || view! {
                        <div class="text-center py-8 text-base-content/50">
                            {move || if busy() { "Loading..." } else { "No data available." }}
                        </div>
                    }
                >
                    <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                        <div class="stat">
                            <div class="stat-title">"Products"</div>
                            <div class="stat-value text-primary">
                                {move || data().map(|d| d.product_stats.total_products).unwrap_or_default()}
                            </div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">"Orders"</div>
                            <div class="stat-value">
                                {move || data().map(|d| d.order_stats.total_orders).unwrap_or_default()}
                            </div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">"Revenue"</div>
                            <div class="stat-value text-success">
                                {move || format!("${:.2}", data().map(|d| d.order_stats.total_revenue).unwrap_or_default())}
                            </div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">"Payment success"</div>
                            <div class="stat-value text-secondary">
                                {move || format!("{:.1}%", data().map(|d| d.payment_stats.success_rate).unwrap_or_default())}
                            </div>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body p-0">
                            <h3 class="card-title p-6 pb-2">"Recent Orders"</h3>
                            <div class="overflow-x-auto w-full">
                                <table class="table table-zebra w-full">
                                    <thead>
                                        <tr>
                                            <th>"Order"</th>
                                            <th>"Customer"</th>
                                            <th>"Total"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=move || data().map(|d| d.recent_orders().to_vec()).unwrap_or_default()
                                            key=|o| (o.id.clone(), o.status)
                                            children=move |order| {
                                                let id = order.id.clone();
                                                let current = order.status;
                                                view! {
                                                    <tr>
                                                        <td class="font-mono text-sm">{order.order_number.clone()}</td>
                                                        <td>{order.customer_name.clone()}</td>
                                                        <td>{format!("${:.2}", order.total_amount)}</td>
                                                        <td>
                                                            <select
                                                                class="select select-bordered select-sm"
                                                                disabled=busy
                                                                on:change=move |ev| {
                                                                    if let Some(status) = OrderStatus::parse(&event_target_value(&ev)) {
                                                                        run(Action::UpdateStatus(id.clone(), status));
                                                                    }
                                                                }
                                                            >
                                                                {OrderStatus::ALL
                                                                    .into_iter()
                                                                    .map(|s| view! {
                                                                        <option value=s.as_str() selected=s == current>{s.as_str()}</option>
                                                                    })
                                                                    .collect_view()}
                                                            </select>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body p-0">
                            <h3 class="card-title p-6 pb-2">"Recent Payments"</h3>
                            <div class="overflow-x-auto w-full">
                                <table class="table table-zebra w-full">
                                    <thead>
                                        <tr>
                                            <th>"Customer"</th>
                                            <th>"Amount"</th>
                                            <th>"Method"</th>
                                            <th>"Status"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=move || data().map(|d| d.recent_payments().to_vec()).unwrap_or_default()
                                            key=|p| (p.id.clone(), p.status)
                                            children=move |payment| {
                                                let id = payment.id.clone();
                                                let badge = match payment.status {
                                                    PaymentStatus::Completed => "badge badge-success",
                                                    PaymentStatus::Failed => "badge badge-error",
                                                    PaymentStatus::Pending => "badge badge-warning",
                                                };
                                                view! {
                                                    <tr>
                                                        <td>{payment.customer_name.clone()}</td>
                                                        <td>{format!("${:.2}", payment.amount)}</td>
                                                        <td>{payment.payment_method.clone()}</td>
                                                        <td><div class=badge>{payment.status.as_str()}</div></td>
                                                        <td>
                                                            {payment.status.is_processable().then(|| view! {
                                                                <button
                                                                    class="btn btn-primary btn-sm"
                                                                    disabled=busy
                                                                    on:click=move |_| run(Action::ProcessPayment(id.clone()))
                                                                >
                                                                    "Process"
                                                                </button>
                                                            })}
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
