//! 远程接口的应用级实例
//!
//! 启动时按构建期配置创建一次，通过 Context 共享给各页面。

use leptos::prelude::*;
use store_admin::{AppConfig, StoreApi};

use crate::web::FetchClient;

pub type Api = StoreApi<FetchClient>;

pub fn provide_api(config: AppConfig) -> Api {
    log::info!(
        "api origin {}, auth origin {}",
        config.api_base_url,
        config.auth_base_url
    );
    let api = StoreApi::new(FetchClient, config);
    provide_context(api.clone());
    api
}

pub fn use_api() -> Api {
    use_context::<Api>().expect("Api should be provided")
}
