use dioxus::prelude::*;

use crate::api::{self, Profile};
use crate::session::Session;

#[component]
pub fn ProfileView(session: Signal<Session>, on_logout: EventHandler<()>) -> Element {
    let mut state = use_signal(|| Option::<Result<Profile, String>>::None);

    // Fetched fresh on every entry; nothing is cached across views.
    use_effect(move || {
        let token = session.read().token().map(str::to_string);
        state.set(None);
        let Some(token) = token else {
            return;
        };
        spawn(async move {
            let result = api::profile::fetch_profile(token.clone()).await;
            // A late result for a since-changed session is discarded, not
            // applied to whoever is logged in now.
            if session.peek().token() == Some(token.as_str()) {
                state.set(Some(result.map_err(|err| err.to_string())));
            }
        });
    });

    match state() {
        None => rsx! {
            div { class: "profile-pane",
                p { class: "profile-loading", "Loading Profile…" }
            }
        },
        Some(Err(message)) => rsx! {
            div { class: "profile-pane",
                p { class: "profile-error", "Error: {message}" }
            }
        },
        Some(Ok(profile)) => rsx! {
            div { class: "profile-pane",
                div { class: "profile-header",
                    h2 { "User Profile" }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| on_logout.call(()),
                        "Logout"
                    }
                }
                div { class: "profile-grid",
                    section { class: "profile-section",
                        h3 { "Account Information" }
                        ProfileDetail { label: "Username", value: profile.username.clone() }
                        ProfileDetail { label: "Email Address", value: profile.email.clone() }
                        ProfileDetail { label: "Full Name", value: profile.name.clone() }
                    }
                    ProfileDetail { label: "Date of Birth", value: profile.dob.clone() }
                    ProfileDetail { label: "Member Since", value: profile.member_since.clone() }
                }
            }
        },
    }
}

#[component]
fn ProfileDetail(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "profile-detail",
            p { class: "detail-label", "{label}" }
            p { class: "detail-value", "{value}" }
        }
    }
}
