use leptos::prelude::*;
use store_admin::dashboard::{BadgeVariant, RECENT_ORDERS, STATS, Trend};

use crate::components::icons::{SectionIcon, TrendingDown, TrendingUp};

fn badge_class(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Primary => "badge badge-primary",
        BadgeVariant::Secondary => "badge badge-secondary",
        BadgeVariant::Outline => "badge badge-outline",
    }
}

/// 概览页，数据为静态示例，不发请求
#[component]
pub fn DashboardPanel() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-base-content/70">"Overview of your store performance"</p>
            </div>

            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                {STATS
                    .iter()
                    .map(|stat| {
                        let (trend_class, trend_icon) = match stat.trend {
                            Trend::Up => ("text-success", view! { <TrendingUp attr:class="h-4 w-4" /> }.into_any()),
                            Trend::Down => ("text-error", view! { <TrendingDown attr:class="h-4 w-4" /> }.into_any()),
                        };
                        view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body p-5">
                                    <div class="flex items-center justify-between">
                                        <span class="text-sm font-medium text-base-content/70">{stat.title}</span>
                                        <SectionIcon icon=stat.icon class="h-4 w-4 text-base-content/50" />
                                    </div>
                                    <div class="text-2xl font-bold">{stat.value}</div>
                                    <div class=format!("flex items-center gap-1 text-xs {}", trend_class)>
                                        {trend_icon}
                                        <span>{stat.change} " from last month"</span>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body p-0">
                    <div class="p-6 pb-2">
                        <h3 class="card-title">"Recent Orders"</h3>
                        <p class="text-base-content/70 text-sm">"Latest orders from your store"</p>
                    </div>
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Order ID"</th>
                                    <th>"Customer"</th>
                                    <th class="hidden md:table-cell">"Product"</th>
                                    <th>"Amount"</th>
                                    <th>"Status"</th>
                                    <th class="hidden md:table-cell">"Date"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {RECENT_ORDERS
                                    .iter()
                                    .map(|order| view! {
                                        <tr>
                                            <td class="font-medium">{order.id}</td>
                                            <td>{order.customer}</td>
                                            <td class="hidden md:table-cell">{order.product}</td>
                                            <td>{order.amount}</td>
                                            <td>
                                                <span class=badge_class(order.status.badge())>{order.status.label()}</span>
                                            </td>
                                            <td class="hidden md:table-cell">{order.date}</td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}
