use leptos::prelude::*;
use store_admin_shared::{Category, CategoryResource, Resource};

use crate::api::use_api;
use crate::components::panel::{Panel, dialog_frame, image_field, panel_header, row_actions, thumbnail};
use crate::components::toast::use_notices;

#[component]
pub fn CategoriesPanel() -> impl IntoView {
    let panel = Panel::<CategoryResource>::new(use_api(), use_notices());
    panel.refresh();

    view! {
        <div class="space-y-6">
            {panel_header(panel, "Categories", "Organize your products into categories")}

            <div class="card bg-base-100 shadow">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Image"</th>
                                <th>"Name"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || panel.state.with(|s| s.records.is_empty())>
                                <tr>
                                    <td colspan="3" class="text-center py-8 text-base-content/50">
                                        "No categories yet."
                                    </td>
                                </tr>
                            </Show>
                            {move || {
                                let records = panel.state.with(|s| s.records.clone());
                                records
                                    .into_iter()
                                    .map(|category| category_row(panel, category))
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>

            <Show when=move || panel.is_open()>
                {dialog_frame(panel, category_fields(panel).into_any())}
            </Show>
        </div>
    }
}

fn category_row(panel: Panel<CategoryResource>, category: Category) -> impl IntoView {
    view! {
        <tr>
            <td>{thumbnail(CategoryResource::image_of(&category), category.name.clone())}</td>
            <td class="font-medium">{category.name.clone()}</td>
            <td>{row_actions(panel, category)}</td>
        </tr>
    }
}

fn category_fields(panel: Panel<CategoryResource>) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for="category-name">
                <span class="label-text">"Category Name"</span>
            </label>
            <input
                id="category-name"
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

        {image_field(panel)}
    }
}
