use leptos::prelude::*;
use leptos::task::spawn_local;
use store_admin::guard::{GuardState, GuardView, SessionGuard};

use crate::api::use_api;
use crate::web::router::use_router;

/// 受保护页面的包裹组件
///
/// 每次挂载都向服务端校验一次会话；校验完成前只显示加载占位，
/// 被拒绝时替换历史记录跳回登录页。
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let api = use_api();
    let router = use_router();
    let state = RwSignal::new(GuardState::Pending);

    spawn_local(async move {
        let result = SessionGuard::new(&api).check().await;
        let _ = state.try_set(result);
    });

    Effect::new(move |_| {
        if let GuardView::Redirect(route) = state.get().view() {
            router.redirect(route);
        }
    });

    move || match state.get().view() {
        GuardView::Loading => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <span class="loading loading-spinner loading-lg text-primary"></span>
                <span class="ml-3 text-base-content/70">"Loading..."</span>
            </div>
        }
        .into_any(),
        GuardView::Render => children().into_any(),
        GuardView::Redirect(_) => ().into_any(),
    }
}
