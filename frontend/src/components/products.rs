use leptos::prelude::*;
use leptos::task::spawn_local;
use shopfront_shared::{OrderDraft, OrderItem, Product, ProductFilter};

use crate::auth::use_auth;
use crate::components::navbar::{Banner, NavBar};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let auth = use_auth();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let (category, set_category) = signal(String::new());
    let (query, set_query) = signal(String::new());
    let notification = RwSignal::new(Option::<(String, bool)>::None);

    // 搜索词优先于分类过滤
    let load_products = move || {
        let api = auth.api();
        let q = query.get_untracked();
        let filter = match category.get_untracked() {
            c if c.is_empty() => ProductFilter::default(),
            c => ProductFilter::category(c),
        };
        set_loading.set(true);
        spawn_local(async move {
            let result = if q.trim().is_empty() {
                api.products().get_all(&filter).await
            } else {
                api.products().search(q.trim()).await
            };
            match result {
                Ok(data) => set_products.set(data),
                Err(e) => {
                    tracing::error!(error = %e, "failed to load products");
                    notification.set(Some(("Failed to load products".to_string(), true)));
                }
            }
            set_loading.set(false);
        });
    };

    // 初始加载 (守卫放行后才会挂载本页面)
    Effect::new(move |_| load_products());

    let place_order = move |product: Product| {
        let api = auth.api();
        let snapshot = auth.snapshot.get_untracked();
        let Some(email) = snapshot.email().map(str::to_string) else {
            notification.set(Some(("Your session has no email, sign in again".to_string(), true)));
            return;
        };
        let item = OrderItem::new(product.id.clone(), product.name.clone(), 1, product.price);
        let draft = OrderDraft::new(snapshot.display_name(), email, vec![item]);
        spawn_local(async move {
            match api.orders().create(&draft).await {
                Ok(order) => {
                    notification.set(Some((format!("Order {} placed", order.order_number), false)));
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to place order");
                    notification.set(Some(("Failed to place order".to_string(), true)));
                    if !e.may_have_applied() {
                        return;
                    }
                }
            }
            // 库存可能已变化，整体重新拉取
            load_products();
        });
    };

    let categories = move || {
        let mut list: Vec<String> = products.with(|p| p.iter().map(|p| p.category.clone()).collect());
        list.sort();
        list.dedup();
        list
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Banner notification=notification />
                <NavBar />

                <div class="flex flex-col md:flex-row gap-2">
                    <input
                        type="search"
                        placeholder="Search products"
                        class="input input-bordered flex-1"
                        prop:value=query
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        on:change=move |_| load_products()
                    />
                    <select
                        class="select select-bordered"
                        on:change=move |ev| {
                            set_category.set(event_target_value(&ev));
                            load_products();
                        }
                    >
                        <option value="">"All categories"</option>
                        <For
                            each=categories
                            key=|c| c.clone()
                            children=move |c| {
                                let selected = c.clone();
                                view! {
                                    <option value=c.clone() selected=move || category.get() == selected>
                                        {c}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                <Show when=move || loading.get() && products.with(|p| p.is_empty())>
                    <div class="text-center py-8 text-base-content/50">
                        <span class="loading loading-spinner loading-md"></span> " Loading..."
                    </div>
                </Show>
                <Show when=move || !loading.get() && products.with(|p| p.is_empty())>
                    <div class="text-center py-8 text-base-content/50">"No products found."</div>
                </Show>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <For
                        each=move || products.get()
                        key=|p| p.id.clone()
                        children=move |product| {
                            let in_stock = product.in_stock();
                            let for_order = product.clone();
                            view! {
                                <div class="card bg-base-100 shadow-xl">
                                    <div class="card-body">
                                        <h2 class="card-title">{product.name.clone()}</h2>
                                        <div class="badge badge-outline">{product.category.clone()}</div>
                                        <p class="text-base-content/70">
                                            {product.description.clone().unwrap_or_default()}
                                        </p>
                                        <div class="flex items-center justify-between">
                                            <span class="text-lg font-bold">{format!("${:.2}", product.price)}</span>
                                            <span class="text-sm opacity-70">{format!("{} in stock", product.stock)}</span>
                                        </div>
                                        <div class="card-actions justify-end">
                                            <button
                                                class="btn btn-primary btn-sm"
                                                disabled=!in_stock
                                                on:click=move |_| place_order(for_order.clone())
                                            >
                                                "Order"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
