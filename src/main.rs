use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use scriptgen_studio::controllers::{options::OptionsController, script::ScriptController};
use scriptgen_studio::domain::{options::FormOptionsService, script::ScriptService};
use scriptgen_studio::infrastructure::config::{Config, LlmProvider, LogFormat};
use scriptgen_studio::infrastructure::http::{create_router, start_http_server};
use scriptgen_studio::infrastructure::repositories::{
    GeminiTextRepository, HardcodedFormOptionsRepository, OpenAiTextRepository,
    TextGenerationRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting ScriptGen Studio on {}:{}",
        config.host,
        config.port
    );

    // Text generation provider
    let text_repo: Arc<dyn TextGenerationRepository> = match config.llm_provider {
        LlmProvider::Gemini => Arc::new(GeminiTextRepository::new(
            config.gemini_base_url.clone(),
            config.gemini_model.clone(),
            config.llm_timeout(),
        )),
        LlmProvider::OpenAi => Arc::new(OpenAiTextRepository::new(
            config.openai_model.clone(),
            config.openai_base_url.clone(),
            config.llm_timeout(),
        )),
    };

    let has_server_key = config.provider_api_key().is_some();
    tracing::info!(
        provider = text_repo.provider(),
        has_server_key = has_server_key,
        max_extension_attempts = config.max_extension_attempts,
        development = config.is_development(),
        "Text generation provider configured"
    );
    if !has_server_key {
        tracing::warn!("No provider API key configured. Every request must supply its own api_key.");
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Services
    let script_service = Arc::new(ScriptService::new(
        text_repo,
        config.provider_api_key(),
        config.max_extension_attempts,
        config.script_cache_capacity,
        config.script_cache_ttl(),
    ));
    let options_service = Arc::new(FormOptionsService::new(Arc::new(
        HardcodedFormOptionsRepository::new(),
    )));

    // 2. Controllers
    let options_controller = Arc::new(OptionsController::new(options_service));
    let script_controller = Arc::new(ScriptController::new(script_service.clone()));

    let app = create_router(script_service, options_controller, script_controller);

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "scriptgen_studio=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
