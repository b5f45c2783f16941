//! 登录与注册页共用的布局和输入控件

use leptos::prelude::*;

use crate::components::icons::{Eye, EyeOff, ShoppingCart};

#[component]
pub fn AuthCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShoppingCart attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">{title}</h1>
                        <p class="text-base-content/70">{subtitle}</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <div class="card-body">{children()}</div>
                </div>
            </div>
        </div>
    }
}

/// 字段下方的校验信息，没有错误时不占位
#[component]
pub fn FieldError(message: Signal<Option<&'static str>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <label class="label">
                    <span class="label-text-alt text-error">{text}</span>
                </label>
            }
        })
    }
}

/// 带显示/隐藏切换的密码框
#[component]
pub fn PasswordInput(
    id: &'static str,
    value: RwSignal<String>,
    #[prop(into)] invalid: Signal<bool>,
    #[prop(default = "••••••••")] placeholder: &'static str,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="relative">
            <input
                id=id
                type=move || if visible.get() { "text" } else { "password" }
                placeholder=placeholder
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
                class="input input-bordered w-full pr-12"
                class:input-error=move || invalid.get()
            />
            <button
                type="button"
                class="btn btn-ghost btn-sm btn-circle absolute right-2 top-1/2 -translate-y-1/2"
                aria-label="Toggle password visibility"
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() {
                    view! { <EyeOff attr:class="h-4 w-4" /> }.into_any()
                } else {
                    view! { <Eye attr:class="h-4 w-4" /> }.into_any()
                }}
            </button>
        </div>
    }
}
