//! Store Admin 前端应用
//!
//! 采用 Context-Driven 架构：
//! - `web::router`: 路由服务（History API）
//! - `api` / `auth`: 远程接口实例与会话上下文
//! - `components`: UI 组件层，受保护页面由 `Protected` 包裹

mod api;
mod auth;
mod components {
    pub mod admin_shell;
    mod auth_layout;
    mod banners;
    mod categories;
    mod dashboard;
    mod icons;
    mod panel;
    mod products;
    pub mod protected;
    pub mod sign_in;
    pub mod sign_up;
    pub mod toast;
}

use crate::api::provide_api;
use crate::auth::{AuthContext, Session};
use crate::components::admin_shell::AdminShell;
use crate::components::protected::Protected;
use crate::components::sign_in::SignInPage;
use crate::components::sign_up::SignUpPage;
use crate::components::toast::{NoticeToast, provide_notices};

use leptos::prelude::*;
use store_admin::AppConfig;

pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;

    pub use http::FetchClient;
    pub use storage::BrowserStore;
}

use store_admin::route::AppRoute;
use web::BrowserStore;
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::SignIn => view! { <SignInPage /> }.into_any(),
        AppRoute::SignUp => view! { <SignUpPage /> }.into_any(),
        AppRoute::Home => view! {
            <Protected>
                <AdminShell />
            </Protected>
        }
        .into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link to=AppRoute::SignIn class="btn btn-primary mt-6">"Back to sign in"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 构建期配置 -> 远程接口
    provide_api(AppConfig::from_build_env());

    // 2. 会话上下文：启动时创建一次
    provide_context(AuthContext::new(Session::new(BrowserStore)));

    // 3. 全局提示
    provide_notices();

    view! {
        <Router>
            <RouterOutlet matcher=route_matcher />
        </Router>
        <NoticeToast />
    }
}
