use dioxus::prelude::*;

use crate::router::{Router, View};
use crate::session::Session;
use crate::theme;
use crate::transcript::Transcript;
use crate::types::AuthMode;
use crate::views::{AuthFormView, ChatView, ProfileView, Sidebar};

const APP_CSS: Asset = asset!("/assets/agnet.css");

#[component]
pub fn App() -> Element {
    // Restoration happens in the initializer, before the first frame: a
    // returning user never sees a flash of the logged-out layout.
    let session = use_signal(Session::restore);
    let mut router = use_signal(|| Router::new(session.peek().is_authenticated()));
    let transcript = use_signal(Transcript::new);

    let mut commit_login = {
        let mut session = session;
        let mut router = router;
        let mut transcript = transcript;
        move |token: String| {
            // The transcript belongs to the old identity; reset it in the
            // same turn the token changes, before anything new can land.
            transcript.write().reset();
            session.write().set(token);
            router.write().auth_succeeded();
        }
    };

    let mut logout = {
        let mut session = session;
        let mut router = router;
        let mut transcript = transcript;
        move || {
            transcript.write().reset();
            session.write().clear();
            router.write().logout();
        }
    };

    let current = router.read().current();
    let body = match current {
        View::Anonymous => rsx! {
            div { class: "app-shell anonymous",
                AnonymousHeader { router }
                ChatView { session, transcript }
            }
        },
        View::AuthModal(mode) => rsx! {
            AuthFormView {
                mode,
                on_success: move |token| commit_login(token),
                on_cancel: move |_| router.write().cancel_auth(),
                on_toggle: move |_| router.write().toggle_auth_mode(),
            }
        },
        View::Chat | View::Profile => rsx! {
            div { class: "app-shell authenticated",
                Sidebar {
                    session,
                    active: current,
                    on_navigate: move |view| match view {
                        View::Profile => router.write().show_profile(),
                        _ => router.write().show_chat(),
                    },
                    on_logout: move |_| logout(),
                }
                if current == View::Chat {
                    ChatView { session, transcript }
                } else {
                    ProfileView { session, on_logout: move |_| logout() }
                }
            }
        },
    };

    let theme_css = theme::APP_THEME;
    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        style { dangerous_inner_html: "{theme_css}" }
        {body}
    }
}

#[component]
fn AnonymousHeader(router: Signal<Router>) -> Element {
    let mut router = router;
    rsx! {
        header { class: "top-bar",
            div { class: "top-bar-actions",
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| router.write().open_auth(AuthMode::Login),
                    "Login"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| router.write().open_auth(AuthMode::Signup),
                    "Sign Up"
                }
            }
        }
    }
}
