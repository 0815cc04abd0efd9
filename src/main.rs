/// Defaults compiled into the binary; targets without a `.env` file on disk
/// (web, mobile) get their configuration from here.
const BUNDLED_DEFAULTS: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_config() {
    // A developer .env wins over the bundled defaults.
    if dotenvy::dotenv().is_err() {
        apply_bundled_defaults();
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() {
    apply_bundled_defaults();
}

fn apply_bundled_defaults() {
    for line in BUNDLED_DEFAULTS.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        // The real environment still overrides a bundled value.
        if std::env::var(key).is_err() {
            // SAFETY: runs at startup, before any other thread exists
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

fn main() {
    load_config();
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt::init();
    dioxus::launch(agnet::ui::App);
}
