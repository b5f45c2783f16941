use leptos::prelude::*;
use leptos::task::spawn_local;
use store_admin::resource::ResourceController;
use store_admin_shared::{
    Category, CategoryResource, Product, ProductResource, ProductStatus, Resource, format_inr,
};

use crate::api::use_api;
use crate::components::panel::{Panel, dialog_frame, image_field, panel_header, row_actions, thumbnail};
use crate::components::toast::use_notices;
use crate::web::FetchClient;

#[component]
pub fn ProductsPanel() -> impl IntoView {
    let api = use_api();
    let notices = use_notices();
    let panel = Panel::<ProductResource>::new(api.clone(), notices);
    let categories = RwSignal::new(Vec::<Category>::new());

    // 首次挂载同时拉取商品与分类，任一失败不影响另一个
    spawn_local(async move {
        let (products, fetched) = api.list_products_with_categories().await;
        match products {
            Ok(list) => panel.replace(list),
            Err(e) => notices.show(
                ResourceController::<ProductResource, FetchClient>::failure_notice("load", &e),
            ),
        }
        match fetched {
            Ok(list) => {
                let _ = categories.try_set(list);
            }
            Err(e) => notices.show(
                ResourceController::<CategoryResource, FetchClient>::failure_notice("load", &e),
            ),
        }
    });

    let category_label = move |product: &Product| {
        if !product.category_name.is_empty() {
            return product.category_name.clone();
        }
        categories.with(|list| {
            list.iter()
                .find(|c| c.id == product.category_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "-".to_string())
        })
    };

    view! {
        <div class="space-y-6">
            {panel_header(panel, "Products", "Manage your product inventory")}

            <div class="card bg-base-100 shadow">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Image"</th>
                                <th>"Name"</th>
                                <th class="hidden md:table-cell">"Category"</th>
                                <th>"Price"</th>
                                <th class="hidden md:table-cell">"Stock"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || panel.state.with(|s| s.records.is_empty())>
                                <tr>
                                    <td colspan="7" class="text-center py-8 text-base-content/50">
                                        "No products yet."
                                    </td>
                                </tr>
                            </Show>
                            {move || {
                                let records = panel.state.with(|s| s.records.clone());
                                records
                                    .iter()
                                    .map(|product| product_row(panel, product, category_label(product)))
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>

            <Show when=move || panel.is_open()>
                {dialog_frame(panel, product_fields(panel, categories).into_any())}
            </Show>
        </div>
    }
}

fn product_row(
    panel: Panel<ProductResource>,
    product: &Product,
    category: String,
) -> impl IntoView + use<> {
    let badge = if product.status.is_active() {
        "badge badge-success"
    } else {
        "badge badge-ghost"
    };
    view! {
        <tr>
            <td>{thumbnail(ProductResource::image_of(product), product.name.clone())}</td>
            <td>
                <div class="font-medium">{product.name.clone()}</div>
                <div class="text-xs text-base-content/60 line-clamp-1">{product.description.clone()}</div>
            </td>
            <td class="hidden md:table-cell">{category}</td>
            <td>{format_inr(product.price)}</td>
            <td class="hidden md:table-cell">{product.stock}</td>
            <td><span class=badge>{product.status.as_str()}</span></td>
            <td>{row_actions(panel, product.clone())}</td>
        </tr>
    }
}

fn product_fields(
    panel: Panel<ProductResource>,
    categories: RwSignal<Vec<Category>>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for="product-name">
                <span class="label-text">"Product Name"</span>
            </label>
            <input
                id="product-name"
                type="text"
                class="input input-bordered w-full"
                prop:value=move || panel.field(|d| d.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    panel.edit(|d| d.name = value);
                }
                required
            />
        </div>

        <div class="form-control">
            <label class="label" for="product-desc">
                <span class="label-text">"Description"</span>
            </label>
            <textarea
                id="product-desc"
                class="textarea textarea-bordered w-full"
                prop:value=move || panel.field(|d| d.desc.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    panel.edit(|d| d.desc = value);
                }
            ></textarea>
        </div>

        <div class="grid grid-cols-2 gap-4">
            <div class="form-control">
                <label class="label" for="product-price">
                    <span class="label-text">"Price (₹)"</span>
                </label>
                <input
                    id="product-price"
                    type="number"
                    min="0"
                    step="0.01"
                    class="input input-bordered w-full"
                    prop:value=move || panel.field(|d| d.price.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        panel.edit(|d| d.price = value);
                    }
                    required
                />
            </div>
            <div class="form-control">
                <label class="label" for="product-stock">
                    <span class="label-text">"Stock"</span>
                </label>
                <input
                    id="product-stock"
                    type="number"
                    min="0"
                    class="input input-bordered w-full"
                    prop:value=move || panel.field(|d| d.stock.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        panel.edit(|d| d.stock = value);
                    }
                    required
                />
            </div>
        </div>

        <div class="grid grid-cols-2 gap-4">
            <div class="form-control">
                <label class="label" for="product-category">
                    <span class="label-text">"Category"</span>
                </label>
                <select
                    id="product-category"
                    class="select select-bordered w-full"
                    prop:value=move || panel.field(|d| d.category.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        panel.edit(|d| d.category = value);
                    }
                >
                    <option value="">"Select category"</option>
                    <For
                        each=move || categories.get()
                        key=|c: &Category| c.id.clone()
                        children=move |c: Category| {
                            let id = c.id.clone();
                            view! {
                                <option
                                    value=c.id
                                    selected=move || panel.field(|d| d.category == id)
                                >
                                    {c.name}
                                </option>
                            }
                        }
                    />
                </select>
            </div>
            <div class="form-control">
                <label class="label" for="product-status">
                    <span class="label-text">"Status"</span>
                </label>
                <select
                    id="product-status"
                    class="select select-bordered w-full"
                    on:change=move |ev| {
                        let status = ProductStatus::from_label(&event_target_value(&ev));
                        panel.edit(|d| d.status = status);
                    }
                >
                    {[ProductStatus::Active, ProductStatus::Inactive]
                        .into_iter()
                        .map(|status| view! {
                            <option
                                value=status.as_str()
                                selected=move || panel.field(|d| d.status == status)
                            >
                                {status.as_str()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
        </div>

        {image_field(panel)}
    }
}
