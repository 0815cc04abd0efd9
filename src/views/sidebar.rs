use dioxus::prelude::*;

use crate::api::{self, HistoryItem};
use crate::router::View;
use crate::session::Session;

const TITLE_LIMIT: usize = 32;

/// Sidebar label for a stored conversation.
fn history_title(item: &HistoryItem) -> String {
    let text = item.user_input_text.trim();
    if text.is_empty() {
        return if item.image_url.is_some() {
            "Image conversation".to_string()
        } else {
            "Untitled chat".to_string()
        };
    }
    let mut title: String = text.chars().take(TITLE_LIMIT).collect();
    if text.chars().count() > TITLE_LIMIT {
        title.push('…');
    }
    title
}

fn nav_link_class(view: View, active: View) -> &'static str {
    if view == active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

#[component]
pub fn Sidebar(
    session: Signal<Session>,
    active: View,
    on_navigate: EventHandler<View>,
    on_logout: EventHandler<()>,
) -> Element {
    let mut history = use_signal(|| Option::<Result<Vec<HistoryItem>, String>>::None);

    use_effect(move || {
        let token = session.read().token().map(str::to_string);
        let Some(token) = token else {
            history.set(Some(Ok(Vec::new())));
            return;
        };
        spawn(async move {
            let result = api::profile::fetch_history(token.clone()).await;
            if session.peek().token() == Some(token.as_str()) {
                history.set(Some(result.map_err(|err| err.to_string())));
            }
        });
    });

    let history_list = match history() {
        None => rsx! {
            p { class: "history-note", "Loading…" }
        },
        Some(Err(message)) => rsx! {
            p { class: "history-note", "{message}" }
        },
        Some(Ok(items)) => rsx! {
            if items.is_empty() {
                p { class: "history-note", "No saved conversations yet." }
            }
            for (i, item) in items.iter().enumerate() {
                button {
                    key: "{i}",
                    class: "nav-link",
                    r#type: "button",
                    onclick: move |_| on_navigate.call(View::Chat),
                    "{history_title(item)}"
                }
            }
        },
    };

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-top",
                h1 { class: "sidebar-brand", "AI Agent" }
                button {
                    class: "btn btn-primary new-chat",
                    r#type: "button",
                    onclick: move |_| on_navigate.call(View::Chat),
                    "New Chat"
                }
                nav { class: "sidebar-history",
                    p { class: "history-heading", "History" }
                    {history_list}
                }
            }
            div { class: "sidebar-bottom",
                button {
                    class: nav_link_class(View::Profile, active),
                    r#type: "button",
                    onclick: move |_| on_navigate.call(View::Profile),
                    "Profile"
                }
                button {
                    class: "nav-link logout",
                    r#type: "button",
                    onclick: move |_| on_logout.call(()),
                    "Logout"
                }
            }
        }
    }
}
