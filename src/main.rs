use ai_glasses_agent::api::ApiClient;
use ai_glasses_agent::config::Config;
use ai_glasses_agent::controller::{CalorieController, NavigationController, TranslationController};
use ai_glasses_agent::i18n::LanguageStore;
use ai_glasses_agent::media::FileSelection;
use ai_glasses_agent::pages;
use ai_glasses_agent::routes::Route;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when variables come from the environment)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ai_glasses_agent=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let language = LanguageStore::new(config.default_language);
    let client = ApiClient::new(&config);

    info!("Starting AI Glasses Agent against {}", client.base_url());

    // Health is informational only
    match client.health_check().await {
        Ok(status) => info!("Backend health: {}", status),
        Err(e) => warn!("Backend health check failed: {}", e),
    }

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "/".to_string());
    let route =
        Route::from_path(&path).with_context(|| format!("Unknown route: '{}'", path))?;
    let selection = args
        .next()
        .map(FileSelection::single)
        .unwrap_or_else(FileSelection::cancelled);

    print_json(&pages::header(&language))?;

    match route {
        Route::Home => print_json(&pages::home(&language))?,
        Route::About => print_json(&pages::about(&language))?,
        Route::Translate => {
            let controller = TranslationController::new(client, language);
            if controller.capture(&selection).await.unwrap_or(false) {
                if let Err(e) = controller.submit().await {
                    warn!("Translation failed: {}", e);
                }
            }
            print_json(&controller.view())?;
            controller.unmount();
        }
        Route::Health => {
            let controller = CalorieController::new(client, language, &config.user_id);
            if let Err(e) = controller.sync_history().await {
                warn!("Could not load meal history: {}", e);
            }
            if let Err(e) = controller.capture(&selection).await {
                warn!("Meal analysis failed: {}", e);
            }
            print_json(&controller.view())?;
            controller.unmount();
        }
        Route::Navigation => {
            let controller = NavigationController::new(client, language, &config.user_id);
            if let Err(e) = controller.sync_history().await {
                warn!("Could not load alert history: {}", e);
            }
            if let Err(e) = controller.capture(&selection).await {
                warn!("Navigation alert failed: {}", e);
            }
            print_json(&controller.view())?;
            controller.unmount();
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(view: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(view).context("Failed to render page")?;
    println!("{}", rendered);
    Ok(())
}
