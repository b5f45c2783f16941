use leptos::prelude::*;
use leptos::task::spawn_local;
use store_admin::auth::{AuthFailure, Authenticator, SignInErrors, SignInForm};
use store_admin::guard::{GuardState, SessionGuard};
use store_admin::route::AppRoute;

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::auth_layout::{AuthCard, FieldError, PasswordInput};
use crate::components::toast::use_notices;
use crate::web::router::{Link, use_router};

#[component]
pub fn SignInPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let router = use_router();
    let notices = use_notices();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(SignInErrors::default());
    let (is_submitting, set_is_submitting) = signal(false);

    // 已有本地资料且服务端认可会话时直接进入后台
    if auth.has_local_profile() {
        let api = api.clone();
        spawn_local(async move {
            if SessionGuard::new(&api).check().await == GuardState::Granted {
                router.redirect(AppRoute::auth_success_redirect());
            }
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let form = SignInForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        errors.set(form.validate());

        set_is_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            let session = auth.session();
            match Authenticator::new(&api, &session).sign_in(&form).await {
                Ok(outcome) => {
                    if let Some(profile) = outcome.profile {
                        auth.signed_in(profile);
                    }
                    notices.show(outcome.notice);
                    router.navigate(outcome.redirect);
                }
                Err(AuthFailure::Invalid(found)) => errors.set(found),
                Err(AuthFailure::Rejected(notice)) => notices.show(notice),
            }
            let _ = set_is_submitting.try_set(false);
        });
    };

    view! {
        <AuthCard title="Sign In" subtitle="Welcome back! Sign in to manage your store">
            <form class="space-y-4" on:submit=on_submit novalidate>
                <div class="form-control">
                    <label class="label" for="email">
                        <span class="label-text">"Email"</span>
                    </label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        on:input=move |ev| email.set(event_target_value(&ev))
                        prop:value=email
                        class="input input-bordered w-full"
                        class:input-error=move || errors.with(|e| e.email.is_some())
                    />
                    <FieldError message=Signal::derive(move || errors.with(|e| e.email)) />
                </div>

                <div class="form-control">
                    <label class="label" for="password">
                        <span class="label-text">"Password"</span>
                    </label>
                    <PasswordInput
                        id="password"
                        value=password
                        invalid=Signal::derive(move || errors.with(|e| e.password.is_some()))
                    />
                    <FieldError message=Signal::derive(move || errors.with(|e| e.password)) />
                </div>

                <button class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() {
                        view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                    } else {
                        "Sign In".into_any()
                    }}
                </button>
            </form>

            <p class="text-center text-sm mt-4">
                "Don't have an account? "
                <Link to=AppRoute::SignUp class="link link-primary">"Sign up"</Link>
            </p>
        </AuthCard>
    }
}
