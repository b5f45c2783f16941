//! 管理后台外壳：侧边栏 + 顶栏 + 当前分区

use leptos::prelude::*;
use store_admin::section::{AdminSection, SIDEBAR_ITEMS};

use crate::auth::{logout, use_auth};
use crate::components::banners::BannersPanel;
use crate::components::categories::CategoriesPanel;
use crate::components::dashboard::DashboardPanel;
use crate::components::icons::{LogOut, Menu, SectionIcon};
use crate::components::products::ProductsPanel;
use crate::web::router::use_router;

fn section_view(section: AdminSection) -> AnyView {
    match section {
        AdminSection::Dashboard => view! { <DashboardPanel /> }.into_any(),
        AdminSection::Products => view! { <ProductsPanel /> }.into_any(),
        AdminSection::Categories => view! { <CategoriesPanel /> }.into_any(),
        AdminSection::Banners => view! { <BannersPanel /> }.into_any(),
    }
}

#[component]
pub fn AdminShell() -> impl IntoView {
    let active = RwSignal::new(AdminSection::default());

    view! {
        <div class="drawer lg:drawer-open">
            <input id="admin-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200">
                <Navbar />
                <main class="flex-1 p-4 md:p-8">
                    <div class="max-w-7xl mx-auto">{move || section_view(active.get())}</div>
                </main>
            </div>
            <div class="drawer-side z-40">
                <label for="admin-drawer" aria-label="close sidebar" class="drawer-overlay"></label>
                <Sidebar active=active />
            </div>
        </div>
    }
}

#[component]
fn Sidebar(active: RwSignal<AdminSection>) -> impl IntoView {
    view! {
        <aside class="w-64 min-h-full bg-base-100 border-r border-base-300">
            <div class="p-6 border-b border-base-300">
                <h2 class="text-xl font-bold text-primary">"Admin Panel"</h2>
            </div>
            <ul class="menu p-4 gap-1">
                {SIDEBAR_ITEMS
                    .iter()
                    .map(|item| {
                        let section = item.section;
                        view! {
                            <li>
                                <a
                                    class:active=move || active.get() == section
                                    on:click=move |_| active.set(section)
                                >
                                    <SectionIcon icon=item.icon class="h-5 w-5" />
                                    {item.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let profile = auth.profile();

    let on_logout = move |_| logout(&auth, &router);

    view! {
        <div class="navbar bg-base-100 shadow-sm px-4">
            <div class="flex-none lg:hidden">
                <label for="admin-drawer" aria-label="open sidebar" class="btn btn-square btn-ghost">
                    <Menu attr:class="h-5 w-5" />
                </label>
            </div>
            <div class="flex-1">
                <span class="text-lg font-semibold">"Store Admin"</span>
            </div>
            <div class="flex-none gap-3">
                {move || profile.get().map(|p| {
                    let initial = p.username.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
                    view! {
                        <div class="flex items-center gap-3">
                            <div class="avatar placeholder">
                                <div class="bg-primary text-primary-content rounded-full w-10">
                                    <span>{initial}</span>
                                </div>
                            </div>
                            <div class="hidden md:flex flex-col leading-tight">
                                <span class="font-medium">{p.username}</span>
                                <span class="text-xs text-base-content/60">{p.useremail}</span>
                            </div>
                            <span class="badge badge-outline hidden md:inline-flex">{p.role}</span>
                        </div>
                    }
                })}
                <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                    <LogOut attr:class="h-4 w-4" /> "Logout"
                </button>
            </div>
        </div>
    }
}
