//! Walks the full theme lifecycle against a file-backed preference store:
//! restore on startup, cycle through every mode, and show each palette.
//!
//! Run with `cargo run -p baboons_theme --example theme_switcher`.

use std::sync::Arc;

use baboons_storage::FileStorage;
use baboons_theme::{
    OsColorScheme, StaticAppearance, SystemThemeDetector, ThemeMode, ThemePreferenceStore,
    ThemeStore,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let prefs_path = std::env::temp_dir().join("discbaboons_prefs.json");
    println!("preferences file: {}", prefs_path.display());

    let prefs = ThemePreferenceStore::new(Arc::new(FileStorage::new(&prefs_path)));
    let detector = SystemThemeDetector::new(Arc::new(StaticAppearance::new(OsColorScheme::Dark)));
    let store = ThemeStore::new(prefs, detector);

    store.set_change_callback(|| println!("  (change notification fired)"));
    store.init().await;
    println!(
        "restored: mode={:?} resolved={:?}",
        store.mode(),
        store.resolved()
    );

    for &mode in ThemeMode::all() {
        // Awaiting the handle is optional; here it keeps the output ordered.
        let outcome = store.set_mode(mode).await.unwrap();
        let palette = store.palette();
        println!(
            "{:<8} -> {:?}: bg {} text {} primary {} (persisted: {})",
            mode.id(),
            store.resolved(),
            palette.background.to_hex_string(),
            palette.text.to_hex_string(),
            palette.primary.to_hex_string(),
            outcome.message
        );
    }

    store.dispose();
    println!("re-run to see the last mode ({}) restored", store.mode().id());
}
