//! Login / sign-up page.

use booking::{AuthForm, AuthMode};
use leptos::prelude::*;

use crate::state::{actions, use_app};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let form = RwSignal::new(AuthForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        actions::login(&ctx, form);
    };

    view! {
        <div class="auth-container">
            <form class="auth-form" on:submit=on_submit>
                <h2>{move || form.with(AuthForm::title)}</h2>
                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                </Show>
                <Show when=move || form.with(|f| f.mode == AuthMode::Register)>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </Show>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <button type="submit" disabled=move || form.with(|f| f.busy)>
                    {move || form.with(AuthForm::title)}
                </button>
            </form>
            <button class="toggle-auth" on:click=move |_| form.update(AuthForm::toggle_mode)>
                {move || form.with(AuthForm::toggle_label)}
            </button>
        </div>
    }
}
