#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docchat=info")),
        )
        .init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing() {}

fn main() {
    // .env is optional; the only knob today is DOCCHAT_REPLY_DELAY_MS.
    #[cfg(not(target_arch = "wasm32"))]
    let _ = dotenvy::dotenv();

    init_tracing();
    dioxus::launch(docchat::ui::App);
}
