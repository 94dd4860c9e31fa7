//! Email/password login page.

use std::time::Duration;

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::icons::FaArrowLeft;
use ui::{use_auth, AuthState, Icon};

use crate::Route;

const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Failed(String),
    Succeeded,
}

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let mut outcome = use_signal(|| Option::<Outcome>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }

        spawn(async move {
            pending.set(true);
            outcome.set(None);

            match api::login(email(), password()).await {
                Ok(user) => {
                    tracing::info!(email = %user.email, "logged in");
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    outcome.set(Some(Outcome::Succeeded));
                    pending.set(false);

                    ui::navigation::delay(REDIRECT_DELAY).await;
                    nav.push(Route::Products {});
                }
                Err(e) => {
                    let message = ui::error_text(&e);
                    tracing::warn!("login failed: {message}");
                    outcome.set(Some(Outcome::Failed(message)));
                    pending.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "login",
            Button {
                variant: ButtonVariant::Ghost,
                class: "login__back",
                onclick: move |_| nav.go_back(),
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                "Retour"
            }

            form {
                class: "login__card",
                onsubmit: handle_submit,
                h1 { class: "login__title", "Connexion" }

                match outcome() {
                    Some(Outcome::Failed(message)) => rsx! { div { class: "alert alert--error", "{message}" } },
                    Some(Outcome::Succeeded) => rsx! {
                        div { class: "alert alert--success", "Connexion réussie ! Redirection..." }
                    },
                    None => rsx! {},
                }

                div {
                    class: "form-field",
                    Label { html_for: "login-email", "Email" }
                    Input {
                        id: "login-email",
                        name: "email",
                        r#type: "email",
                        placeholder: "vous@exemple.com",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "login-password", "Mot de passe" }
                    Input {
                        id: "login-password",
                        name: "password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "login__submit",
                    r#type: "submit",
                    disabled: pending(),
                    if pending() { "Connexion..." } else { "Se connecter" }
                }
            }
        }
    }
}
