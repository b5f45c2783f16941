//! 全局提示
//!
//! 同一时间只显示一条，3 秒后自动消失；新提示会顶替旧提示。

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use store_admin::notice::{Notice, NoticeLevel};

const DISMISS_AFTER_MS: u32 = 3_000;

#[derive(Clone, Copy)]
pub struct NoticeContext {
    /// (序号, 提示)，序号用于判断定时器到期时提示是否已被顶替
    current: RwSignal<Option<(u64, Notice)>>,
    counter: StoredValue<u64>,
}

impl NoticeContext {
    fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            counter: StoredValue::new(0),
        }
    }

    pub fn show(&self, notice: Notice) {
        if notice.is_error() {
            log::warn!("{}: {}", notice.title, notice.text);
        }

        self.counter.update_value(|n| *n += 1);
        let seq = self.counter.get_value();
        self.current.set(Some((seq, notice)));

        let current = self.current;
        Timeout::new(DISMISS_AFTER_MS, move || {
            if current.with_untracked(|c| c.as_ref().is_some_and(|(s, _)| *s == seq)) {
                current.set(None);
            }
        })
        .forget();
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

pub fn provide_notices() -> NoticeContext {
    let ctx = NoticeContext::new();
    provide_context(ctx);
    ctx
}

pub fn use_notices() -> NoticeContext {
    use_context::<NoticeContext>().expect("NoticeContext should be provided")
}

#[component]
pub fn NoticeToast() -> impl IntoView {
    let notices = use_notices();
    let current = notices.current;

    move || {
        current.get().map(|(_, notice)| {
            let class = match notice.level {
                NoticeLevel::Success => "alert alert-success shadow-lg",
                NoticeLevel::Error => "alert alert-error shadow-lg",
            };
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div role="alert" class=class>
                        <div>
                            <h3 class="font-bold">{notice.title}</h3>
                            <div class="text-sm">{notice.text}</div>
                        </div>
                        <button class="btn btn-sm btn-ghost" on:click=move |_| notices.dismiss()>
                            "✕"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
