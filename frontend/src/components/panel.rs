//! 资源面板的响应式外壳
//!
//! 把核心库的 `PanelState` 放进信号，把 `ResourceController` 的异步调用接到
//! `spawn_local` 上。待上传的文件不是 `Send`，单独存放在本地信号里。

use leptos::prelude::*;
use leptos::task::spawn_local;
use store_admin::resource::{PanelState, ResourceController};
use store_admin_shared::Resource;
use web_sys::{File, HtmlInputElement, Url};

use crate::api::Api;
use crate::components::icons::{Pencil, Plus, Trash};
use crate::components::toast::NoticeContext;
use crate::web::FetchClient;

type Controller<R> = ResourceController<R, FetchClient>;

pub struct Panel<R: Resource> {
    pub state: RwSignal<PanelState<R>>,
    file: RwSignal<Option<File>, LocalStorage>,
    /// 本地预览用的 object URL
    pub preview: RwSignal<Option<String>>,
    controller: StoredValue<Controller<R>>,
    notices: NoticeContext,
}

impl<R: Resource> Clone for Panel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for Panel<R> {}

impl<R: Resource> Panel<R> {
    pub fn new(api: Api, notices: NoticeContext) -> Self {
        Self {
            state: RwSignal::new(PanelState::new()),
            file: RwSignal::new_local(None),
            preview: RwSignal::new(None),
            controller: StoredValue::new(ResourceController::new(api)),
            notices,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }

    pub fn is_editing(&self) -> bool {
        self.state.with(|s| s.is_editing())
    }

    pub fn busy(&self) -> bool {
        self.state.with(|s| s.busy)
    }

    /// 读取草稿中的某个字段；对话框关闭时返回默认值
    pub fn field<T: Default>(&self, f: impl FnOnce(&R::Draft) -> T) -> T {
        self.state.with(|s| s.draft().map(f).unwrap_or_default())
    }

    pub fn edit(&self, f: impl FnOnce(&mut R::Draft)) {
        self.state.update(|s| s.edit_draft(f));
    }

    /// 用服务端列表整体替换
    pub fn replace(&self, records: Vec<R::Record>) {
        let _ = self.state.try_update(|s| s.replace(records));
    }

    pub fn refresh(self) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            match controller.list().await {
                Ok(records) => self.replace(records),
                Err(e) => self.notices.show(Controller::<R>::failure_notice("load", &e)),
            }
        });
    }

    pub fn open_create(self) {
        self.choose_file(None);
        self.state.update(|s| s.open_create());
    }

    pub fn open_edit(self, record: &R::Record) {
        self.choose_file(None);
        self.state.update(|s| s.open_edit(record));
    }

    pub fn close(self) {
        self.choose_file(None);
        self.state.update(|s| s.close_dialog());
    }

    /// 面板可能已随分区切换被销毁，这里只做 try_* 访问
    pub fn choose_file(self, file: Option<File>) {
        if let Some(old) = self.preview.try_get_untracked().flatten() {
            let _ = Url::revoke_object_url(&old);
        }
        let preview = file
            .as_ref()
            .and_then(|f| Url::create_object_url_with_blob(f).ok());
        let _ = self.preview.try_set(preview);
        let _ = self.file.try_set(file);
    }

    /// 提交对话框；已有请求在途时忽略
    pub fn submit(self) {
        let Some(submission) = self.state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        let file = self.file.get_untracked();
        let done = Controller::<R>::submitted_notice(&submission);
        let controller = self.controller.get_value();

        spawn_local(async move {
            match controller.submit(submission, file).await {
                Ok(records) => {
                    let _ = self.state.try_update(|s| s.finish_submit(records));
                    self.choose_file(None);
                    self.notices.show(done);
                }
                Err(e) => {
                    let _ = self.state.try_update(|s| s.fail_submit());
                    self.notices.show(Controller::<R>::failure_notice("save", &e));
                }
            }
        });
    }

    /// 立即删除，不做确认
    pub fn delete(self, id: String) {
        if !self.state.try_update(|s| s.begin_delete()).unwrap_or(false) {
            return;
        }
        let controller = self.controller.get_value();

        spawn_local(async move {
            match controller.delete(&id).await {
                Ok(records) => {
                    let _ = self.state.try_update(|s| s.finish_delete(Some(records)));
                }
                Err(e) => {
                    let _ = self.state.try_update(|s| s.finish_delete(None));
                    self.notices.show(Controller::<R>::failure_notice("delete", &e));
                }
            }
        });
    }
}

// ============================================================================
// 共用的视图片段
// ============================================================================

pub fn panel_header<R: Resource>(
    panel: Panel<R>,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 md:flex-row md:items-center md:justify-between">
            <div>
                <h1 class="text-3xl font-bold">{title}</h1>
                <p class="text-base-content/70">{subtitle}</p>
            </div>
            <button class="btn btn-primary gap-2" on:click=move |_| panel.open_create()>
                <Plus attr:class="h-4 w-4" />
                {format!("Add {}", R::NAME)}
            </button>
        </div>
    }
}

pub fn thumbnail(url: Option<&str>, alt: String) -> impl IntoView + use<> {
    match url {
        Some(src) => view! {
            <div class="avatar">
                <div class="w-12 h-12 rounded">
                    <img src=src.to_string() alt=alt />
                </div>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="w-12 h-12 rounded bg-base-200 flex items-center justify-center text-xs text-base-content/40">
                "No image"
            </div>
        }
        .into_any(),
    }
}

pub fn row_actions<R: Resource>(panel: Panel<R>, record: R::Record) -> impl IntoView {
    let id = R::record_id(&record);
    view! {
        <div class="flex justify-end gap-1">
            <button
                class="btn btn-ghost btn-sm btn-square"
                aria-label="Edit"
                disabled=move || panel.busy()
                on:click=move |_| panel.open_edit(&record)
            >
                <Pencil attr:class="h-4 w-4" />
            </button>
            <button
                class="btn btn-ghost btn-sm btn-square text-error"
                aria-label="Delete"
                disabled=move || panel.busy()
                on:click=move |_| panel.delete(id.clone())
            >
                <Trash attr:class="h-4 w-4" />
            </button>
        </div>
    }
}

/// 图片选择与本地预览
pub fn image_field<R: Resource>(panel: Panel<R>) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|list| list.get(0));
        panel.choose_file(file);
    };

    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">"Image"</span>
            </label>
            <input
                type="file"
                accept="image/*"
                class="file-input file-input-bordered w-full"
                on:change=on_change
            />
            {move || panel.preview.get().map(|src| view! {
                <img src=src alt="Preview" class="mt-3 h-32 w-32 rounded object-cover" />
            })}
        </div>
    }
}

/// 对话框外框与底部按钮
pub fn dialog_frame<R: Resource>(panel: Panel<R>, body: AnyView) -> impl IntoView {
    let title = move || {
        if panel.is_editing() {
            format!("Edit {}", R::NAME)
        } else {
            format!("Add New {}", R::NAME)
        }
    };
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        panel.submit();
    };

    view! {
        <div class="modal modal-open" role="dialog">
            <div class="modal-box">
                <h3 class="font-bold text-lg mb-4">{title}</h3>
                <form class="space-y-4" on:submit=on_submit>
                    {body}
                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| panel.close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || panel.busy()>
                            {move || if panel.busy() {
                                view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                            } else if panel.is_editing() {
                                "Update".into_any()
                            } else {
                                "Create".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <div class="modal-backdrop" on:click=move |_| panel.close()></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::toast::provide_notices;
    use store_admin::{AppConfig, StoreApi};
    use store_admin_shared::CategoryResource;

    #[test]
    fn finishing_after_the_panel_is_disposed_does_not_panic() {
        let root = Owner::new();
        root.with(|| {
            let notices = provide_notices();
            let section = Owner::new();
            let panel = section.with(|| {
                Panel::<CategoryResource>::new(StoreApi::new(FetchClient, AppConfig::default()), notices)
            });

            // 切换分区会销毁面板的 owner，而在途的提交仍会回调
            section.cleanup();
            let _ = panel.state.try_update(|s| s.finish_submit(Vec::new()));
            panel.choose_file(None);
            panel.replace(Vec::new());

            assert!(panel.preview.try_get_untracked().is_none());
        });
    }
}
