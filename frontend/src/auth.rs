//! 认证模块
//!
//! 持有会话上下文与当前用户资料的信号。
//! 会话是否有效只由服务端决定，这里的资料仅用于展示与登录页的自动跳转。

use leptos::prelude::*;
use store_admin::SessionContext;
use store_admin::route::AppRoute;
use store_admin_shared::SessionProfile;

use crate::web::BrowserStore;
use crate::web::router::RouterService;

pub type Session = SessionContext<BrowserStore>;

/// 认证上下文，通过 Context 在组件间共享
#[derive(Clone, Copy)]
pub struct AuthContext {
    profile: RwSignal<Option<SessionProfile>>,
    session: StoredValue<Session>,
}

impl AuthContext {
    /// 从持久化存储恢复上次保存的资料
    pub fn new(session: Session) -> Self {
        let profile = RwSignal::new(session.profile());
        Self {
            profile,
            session: StoredValue::new(session),
        }
    }

    pub fn profile(&self) -> Signal<Option<SessionProfile>> {
        self.profile.into()
    }

    pub fn session(&self) -> Session {
        self.session.get_value()
    }

    pub fn has_local_profile(&self) -> bool {
        self.session.with_value(|s| s.profile().is_some())
    }

    /// 登录成功后同步界面上的资料（持久化已由 `Authenticator` 完成）
    pub fn signed_in(&self, profile: SessionProfile) {
        self.profile.set(Some(profile));
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 注销：清除本地资料并回到登录页
///
/// 服务端没有注销接口，Cookie 由其自行过期。
pub fn logout(ctx: &AuthContext, router: &RouterService) {
    if !ctx.session.with_value(|s| s.clear()) {
        log::warn!("failed to remove the stored session profile");
    }
    ctx.profile.set(None);
    router.redirect(AppRoute::auth_failure_redirect());
}
