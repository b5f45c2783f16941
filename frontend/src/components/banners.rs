use leptos::prelude::*;
use store_admin_shared::{Banner, BannerResource, Resource};

use crate::api::use_api;
use crate::components::panel::{Panel, dialog_frame, image_field, panel_header, row_actions};
use crate::components::toast::use_notices;

/// Banner 只有一张图片，没有其它可编辑字段
#[component]
pub fn BannersPanel() -> impl IntoView {
    let panel = Panel::<BannerResource>::new(use_api(), use_notices());
    panel.refresh();

    view! {
        <div class="space-y-6">
            {panel_header(panel, "Banners", "Manage the promotional banners on your storefront")}

            <Show when=move || panel.state.with(|s| s.records.is_empty())>
                <div class="card bg-base-100 shadow">
                    <div class="card-body text-center text-base-content/50">"No banners yet."</div>
                </div>
            </Show>

            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                {move || {
                    let records = panel.state.with(|s| s.records.clone());
                    records
                        .into_iter()
                        .map(|banner| banner_card(panel, banner))
                        .collect_view()
                }}
            </div>

            <Show when=move || panel.is_open()>
                {dialog_frame(panel, image_field(panel).into_any())}
            </Show>
        </div>
    }
}

fn banner_card(panel: Panel<BannerResource>, banner: Banner) -> impl IntoView {
    let image = BannerResource::image_of(&banner).map(str::to_string);
    view! {
        <div class="card bg-base-100 shadow">
            <figure class="aspect-video bg-base-200">
                {match image {
                    Some(src) => view! { <img src=src alt="Banner" class="w-full h-full object-cover" /> }.into_any(),
                    None => view! { <span class="text-base-content/40">"No image"</span> }.into_any(),
                }}
            </figure>
            <div class="card-body p-3">
                <div class="flex items-center justify-between">
                    <span class="text-sm text-base-content/60">{format!("#{}", banner.id)}</span>
                    {row_actions(panel, banner.clone())}
                </div>
            </div>
        </div>
    }
}
