use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::auth_service;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    /// Recibe el token emitido por el backend; la validación de identidad
    /// ocurre después, en use_session
    pub on_token: Callback<String>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_token = props.on_token.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (email_input, password_input) = match (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                (Some(email), Some(password)) => (email, password),
                _ => return,
            };

            let email = email_input.value();
            let password = password_input.value();

            if email.is_empty() || password.is_empty() {
                error.set(Some("Please fill in both fields".to_string()));
                return;
            }

            let error = error.clone();
            let loading = loading.clone();
            let on_token = on_token.clone();
            loading.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login(&email, &password).await {
                    Ok(token) => {
                        log::info!("✅ Login exitoso: {}", email);
                        on_token.emit(token);
                    }
                    Err(e) => {
                        log::error!("❌ Login fallido: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <form class="login-form" onsubmit={on_submit}>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input
                    type="email"
                    id="email"
                    ref={email_ref}
                    placeholder="admin@base44.local"
                    required=true
                />
            </div>
            <div class="form-group">
                <label for="password">{"Password"}</label>
                <input
                    type="password"
                    id="password"
                    ref={password_ref}
                    required=true
                />
            </div>
            {
                if let Some(message) = (*error).clone() {
                    html! { <p class="login-error">{ message }</p> }
                } else {
                    html! {}
                }
            }
            <button type="submit" disabled={*loading}>
                { if *loading { "Signing in…" } else { "Sign in" } }
            </button>
            <p class="login-hint">{"Tip: the pre-seeded admin account is admin@base44.local / admin123"}</p>
        </form>
    }
}
