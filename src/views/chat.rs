use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use dioxus::events::{FormEvent, Key};
use dioxus::prelude::*;

use crate::api;
use crate::session::Session;
use crate::transcript::Transcript;
use crate::types::{ChatMessage, ImageAttachment, Role};
use crate::views::markdown_to_html;

fn role_class(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
        Role::Error => "error",
    }
}

fn image_data_url(image: &ImageAttachment) -> String {
    format!(
        "data:{};base64,{}",
        image.mime,
        BASE64_STANDARD.encode(&image.bytes)
    )
}

/// Best-effort content type from the file name; the backend falls back to
/// image/jpeg for anything it cannot place, so we do the same.
fn mime_for_name(name: &str) -> String {
    let ext = name.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "image/jpeg",
    };
    mime.to_string()
}

#[component]
pub fn ChatView(session: Signal<Session>, transcript: Signal<Transcript>) -> Element {
    let mut input = use_signal(String::new);
    let pending_image = use_signal(|| Option::<ImageAttachment>::None);
    let sending = use_signal(|| false);

    let is_anonymous = !session.read().is_authenticated();

    let mut send_message = {
        let mut transcript = transcript;
        let mut sending_signal = sending;
        let mut input_signal = input;
        let mut image_signal = pending_image;
        move |text: String| {
            let trimmed = text.trim().to_string();
            let image = image_signal();
            // One in-flight send at a time; nothing to send without text or
            // an image.
            if sending_signal() || (trimmed.is_empty() && image.is_none()) {
                return;
            }

            let epoch = transcript.write().push_user(trimmed.clone(), image.clone());
            input_signal.set(String::new());
            image_signal.set(None);
            sending_signal.set(true);

            let token = session.peek().token().map(str::to_string);
            spawn(async move {
                let reply = api::chat::send_chat(trimmed, image, token).await;
                transcript
                    .write()
                    .settle(epoch, reply.map_err(|err| err.to_string()));
                sending_signal.set(false);
            });
        }
    };

    let on_file_change = {
        let mut image_signal = pending_image;
        move |ev: FormEvent| {
            if let Some(files) = ev.files() {
                let names = files.files();
                if let Some(name) = names.first().cloned() {
                    let engine = files.clone();
                    spawn(async move {
                        if let Some(bytes) = engine.read_file(&name).await {
                            image_signal.set(Some(ImageAttachment {
                                mime: mime_for_name(&name),
                                name,
                                bytes,
                            }));
                        }
                    });
                }
            }
        }
    };

    let entries = transcript.read().entries().to_vec();
    let attached = pending_image();
    let placeholder = match &attached {
        Some(image) => format!("Image selected: {}. Add a prompt...", image.name),
        None => "Message AI Agent...".to_string(),
    };

    rsx! {
        div { class: "chat-pane",
            div { class: "chat-list",
                if entries.is_empty() {
                    div { class: "chat-hero",
                        h3 { "Hello! How can I assist you?" }
                        p { "I am ready to process your text and analyze your images." }
                        if is_anonymous {
                            p { class: "hero-warning", "Your search history will NOT be saved." }
                        }
                    }
                }
                for msg in entries.iter() {
                    MessageRow { message: msg.clone() }
                }
                if sending() {
                    div { class: "message-row assistant",
                        div { class: "bubble assistant pending",
                            span { class: "pending-text", "Thinking…" }
                        }
                    }
                }
            }

            form { class: "composer",
                div { class: "composer-inner",
                    input {
                        id: "image-input",
                        class: "file-input",
                        r#type: "file",
                        accept: "image/*",
                        onchange: on_file_change,
                    }
                    label {
                        class: format_args!(
                            "attach-btn {}",
                            if attached.is_some() { "armed" } else { "" }
                        ),
                        r#for: "image-input",
                        "Attach"
                    }
                    textarea {
                        class: "composer-text",
                        rows: "1",
                        placeholder: "{placeholder}",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                let text = input();
                                send_message(text);
                            }
                        },
                        disabled: sending(),
                    }
                    button {
                        class: "btn btn-primary send-btn",
                        r#type: "button",
                        disabled: sending()
                            || (input().trim().is_empty() && attached.is_none()),
                        onclick: move |_| {
                            let text = input();
                            send_message(text);
                        },
                        "Send"
                    }
                }
                p { class: "composer-note",
                    if let Some(image) = &attached {
                        span { class: "file-ready", "File Ready: {image.name} " }
                    }
                    "AI Agent can make mistakes. Consider checking important information."
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> Element {
    rsx! {
        div { class: format_args!("message-row {}", role_class(message.role)),
            div { class: format_args!("bubble {}", role_class(message.role)),
                if let Some(image) = &message.image {
                    img {
                        class: "bubble-image",
                        src: image_data_url(image),
                        alt: "User upload",
                    }
                }
                if matches!(message.role, Role::Assistant) {
                    AssistantBubble { content: message.text.clone() }
                } else {
                    p { "{message.text}" }
                }
            }
        }
    }
}

#[component]
fn AssistantBubble(content: String) -> Element {
    let content_html = markdown_to_html(&content);
    let copy_payload = content.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut cb) = arboard::Clipboard::new() {
                    let _ = cb.set_text(raw);
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            let _ = raw;
        });
    };

    rsx! {
        div { class: "bubble-controls",
            button { class: "action-btn", title: "Copy reply", onclick: on_copy, "Copy" }
        }
        div { class: "md", dangerous_inner_html: "{content_html}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_name() {
        assert_eq!(mime_for_name("cat.png"), "image/png");
        assert_eq!(mime_for_name("CAT.PNG"), "image/png");
        assert_eq!(mime_for_name("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for_name("no_extension"), "image/jpeg");
    }

    #[test]
    fn test_image_data_url_shape() {
        let image = ImageAttachment {
            name: "dot.png".to_string(),
            mime: "image/png".to_string(),
            bytes: vec![0xff],
        };
        assert_eq!(image_data_url(&image), "data:image/png;base64,/w==");
    }
}
