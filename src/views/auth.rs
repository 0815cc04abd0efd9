use dioxus::prelude::*;

use crate::api;
use crate::types::{AuthMode, Credentials};

#[component]
pub fn AuthFormView(
    mode: AuthMode,
    on_success: EventHandler<String>,
    on_cancel: EventHandler<()>,
    on_toggle: EventHandler<()>,
) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut dob = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let loading = use_signal(|| false);

    let is_login = mode == AuthMode::Login;

    let submit = {
        let mut loading_signal = loading;
        move |_| {
            if loading_signal() {
                return;
            }
            let credentials = Credentials {
                email: email(),
                password: password(),
                username: username(),
                name: name(),
                dob: dob(),
            };
            // Missing required fields never reach the wire.
            if let Err(message) = credentials.validate(mode) {
                error.set(Some(message));
                return;
            }
            error.set(None);
            loading_signal.set(true);

            spawn(async move {
                match api::auth::authenticate(mode, &credentials).await {
                    // The parent commits the token to the session store and
                    // advances the router.
                    Ok(token) => on_success.call(token),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading_signal.set(false);
            });
        }
    };

    // Mode flip clears any in-progress error and field values.
    let toggle = move |_| {
        email.set(String::new());
        password.set(String::new());
        username.set(String::new());
        name.set(String::new());
        dob.set(String::new());
        error.set(None);
        on_toggle.call(());
    };

    let submit_label = match (is_login, loading()) {
        (true, true) => "Signing In…",
        (true, false) => "Sign In",
        (false, true) => "Registering…",
        (false, false) => "Sign Up",
    };

    rsx! {
        div { class: "auth-overlay",
            div { class: "auth-card",
                button {
                    class: "auth-close",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "×"
                }
                h2 { class: "auth-title",
                    if is_login { "Sign In" } else { "Create Account" }
                }
                if let Some(message) = error() {
                    p { class: "auth-error", "{message}" }
                }
                form { class: "auth-form",
                    input {
                        class: "auth-input",
                        r#type: "email",
                        placeholder: "Email Address",
                        value: "{email}",
                        oninput: move |ev| email.set(ev.value()),
                    }
                    input {
                        class: "auth-input",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |ev| password.set(ev.value()),
                    }
                    if !is_login {
                        input {
                            class: "auth-input",
                            r#type: "text",
                            placeholder: "Username",
                            value: "{username}",
                            oninput: move |ev| username.set(ev.value()),
                        }
                        input {
                            class: "auth-input",
                            r#type: "text",
                            placeholder: "Full Name (Optional)",
                            value: "{name}",
                            oninput: move |ev| name.set(ev.value()),
                        }
                        input {
                            class: "auth-input",
                            r#type: "date",
                            placeholder: "Date of Birth",
                            value: "{dob}",
                            oninput: move |ev| dob.set(ev.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary auth-submit",
                        r#type: "button",
                        disabled: loading(),
                        onclick: submit,
                        "{submit_label}"
                    }
                }
                p { class: "auth-footer",
                    if is_login { "Don't have an account?" } else { "Already have an account?" }
                    button {
                        class: "auth-toggle",
                        r#type: "button",
                        disabled: loading(),
                        onclick: toggle,
                        if is_login { "Sign Up" } else { "Sign In" }
                    }
                }
            }
        }
    }
}
