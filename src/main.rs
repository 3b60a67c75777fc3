//! Salary Predictor - Main Entry Point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod logic;
pub mod constants;

use api::commands;
use logic::ArtifactStore;

fn main() {
    #[cfg(debug_assertions)]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
    }

    log::info!(
        "Starting {} v{}...",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    let store = ArtifactStore::new();
    match store.load_from_dir(&constants::artifact_dir()) {
        Ok(()) => log::info!("Model artifacts loaded successfully"),
        // Not fatal: the UI shows the banner and the predict command
        // answers with a warning until a reload succeeds.
        Err(e) => log::warn!("Artifact load: {}", e),
    }

    tauri::Builder::default()
        .manage(store)
        .invoke_handler(tauri::generate_handler![
            // Form Commands
            commands::get_form_options,

            // Artifact Commands
            commands::get_artifact_status,
            commands::reload_artifacts,

            // Prediction Command
            commands::predict_salary,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
