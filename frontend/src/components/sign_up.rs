use leptos::prelude::*;
use leptos::task::spawn_local;
use store_admin::auth::{AuthFailure, Authenticator, SignUpErrors, SignUpForm};
use store_admin::route::AppRoute;

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::auth_layout::{AuthCard, FieldError, PasswordInput};
use crate::components::toast::use_notices;
use crate::web::router::{Link, use_router};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let router = use_router();
    let notices = use_notices();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let agreed = RwSignal::new(false);
    let errors = RwSignal::new(SignUpErrors::default());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let form = SignUpForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            agreed: agreed.get_untracked(),
        };
        errors.set(form.validate());

        set_is_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            let session = auth.session();
            match Authenticator::new(&api, &session).sign_up(&form).await {
                Ok(outcome) => {
                    for field in [name, email, password, confirm_password] {
                        let _ = field.try_set(String::new());
                    }
                    let _ = agreed.try_set(false);
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
        <AuthCard title="Create Account" subtitle="Sign up to start managing your store">
            <form class="space-y-4" on:submit=on_submit novalidate>
                <div class="form-control">
                    <label class="label" for="name">
                        <span class="label-text">"Name"</span>
                    </label>
                    <input
                        id="name"
                        type="text"
                        placeholder="Your name"
                        on:input=move |ev| name.set(event_target_value(&ev))
                        prop:value=name
                        class="input input-bordered w-full"
                        class:input-error=move || errors.with(|e| e.name.is_some())
                    />
                    <FieldError message=Signal::derive(move || errors.with(|e| e.name)) />
                </div>

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

                <div class="form-control">
                    <label class="label" for="confirm-password">
                        <span class="label-text">"Confirm Password"</span>
                    </label>
                    <PasswordInput
                        id="confirm-password"
                        value=confirm_password
                        invalid=Signal::derive(move || errors.with(|e| e.confirm_password.is_some()))
                    />
                    <FieldError message=Signal::derive(move || errors.with(|e| e.confirm_password)) />
                </div>

                <div class="form-control">
                    <label class="label cursor-pointer justify-start gap-3">
                        <input
                            type="checkbox"
                            class="checkbox checkbox-primary"
                            prop:checked=agreed
                            on:change=move |ev| agreed.set(event_target_checked(&ev))
                        />
                        <span class="label-text">"I agree to the Terms and Conditions"</span>
                    </label>
                    <FieldError message=Signal::derive(move || errors.with(|e| e.terms)) />
                </div>

                <button class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() {
                        view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                    } else {
                        "Create Account".into_any()
                    }}
                </button>
            </form>

            <p class="text-center text-sm mt-4">
                "Already have an account? "
                <Link to=AppRoute::SignIn class="link link-primary">"Sign in"</Link>
            </p>
        </AuthCard>
    }
}
