use leptos::prelude::*;
use leptos::task::spawn_local;
use shopfront_shared::{Order, OrderStatus};

use crate::auth::use_auth;
use crate::components::navbar::{Banner, NavBar};

/// 当前用户自己的订单
#[component]
pub fn MyOrdersPage() -> impl IntoView {
    let auth = use_auth();

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);
    let notification = RwSignal::new(Option::<(String, bool)>::None);

    let load_orders = move || {
        let api = auth.api();
        let Some(email) = auth.snapshot.get_untracked().email().map(str::to_string) else {
            set_loading.set(false);
            notification.set(Some(("Your session has no email, sign in again".to_string(), true)));
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api.orders().get_by_customer_email(&email).await {
                Ok(data) => set_orders.set(data),
                Err(e) => {
                    tracing::error!(error = %e, "failed to load orders");
                    notification.set(Some(("Failed to load orders".to_string(), true)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_orders());

    let cancel_order = move |id: String| {
        let api = auth.api();
        spawn_local(async move {
            match api.orders().cancel(&id).await {
                Ok(()) => notification.set(Some(("Order cancelled".to_string(), false))),
                Err(e) => {
                    tracing::error!(error = %e, order = %id, "failed to cancel order");
                    notification.set(Some(("Failed to cancel order".to_string(), true)));
                    if !e.may_have_applied() {
                        return;
                    }
                }
            }
            load_orders();
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Banner notification=notification />
                <NavBar />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="p-6 pb-2">
                            <h3 class="card-title">"My Orders"</h3>
                        </div>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Order"</th>
                                        <th>"Items"</th>
                                        <th>"Total"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || !loading.get() && orders.with(|o| o.is_empty())>
                                        <tr>
                                            <td colspan="5" class="text-center py-8 text-base-content/50">
                                                "You have not placed any orders yet."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || orders.get()
                                        key=|o| (o.id.clone(), o.status)
                                        children=move |order| {
                                            let id = order.id.clone();
                                            let cancellable = order.status == OrderStatus::Pending;
                                            let items = order
                                                .items
                                                .iter()
                                                .map(|i| format!("{} x{}", i.name, i.quantity))
                                                .collect::<Vec<_>>()
                                                .join(", ");
                                            view! {
                                                <tr>
                                                    <td class="font-mono text-sm">{order.order_number.clone()}</td>
                                                    <td class="text-sm">{items}</td>
                                                    <td>{format!("${:.2}", order.total_amount)}</td>
                                                    <td>
                                                        <div class="badge badge-accent badge-outline">
                                                            {order.status.as_str()}
                                                        </div>
                                                    </td>
                                                    <td>
                                                        {cancellable.then(|| view! {
                                                            <button
                                                                class="btn btn-ghost btn-sm text-error"
                                                                on:click=move |_| cancel_order(id.clone())
                                                            >
                                                                "Cancel"
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
            </div>
        </div>
    }
}
