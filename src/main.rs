use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicebox_backend::controllers::language::LanguageController;
use voicebox_backend::controllers::tts::TtsController;
use voicebox_backend::domain::language::LanguageDetectionService;
use voicebox_backend::domain::tts::TtsService;
use voicebox_backend::infrastructure::config::{Config, LogFormat};
use voicebox_backend::infrastructure::http::start_http_server;
use voicebox_backend::infrastructure::repositories::PollyTtsRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting VoiceBox Backend on {}:{}",
        config.host,
        config.port
    );

    // Create AWS Polly client
    tracing::info!(
        "Initializing AWS Polly client with region: {}",
        config.aws_region
    );

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;

    let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
    tracing::info!("AWS Polly client initialized");

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject provider clients)
    let tts_repo = Arc::new(PollyTtsRepository::new(polly_client));

    // 2. Instantiate services
    tracing::info!("Instantiating services...");
    let language_service = Arc::new(LanguageDetectionService::new());
    let tts_service = Arc::new(TtsService::new(tts_repo, config.voice_cache_enabled));

    // 3. Instantiate controllers (inject services)
    let language_controller = Arc::new(LanguageController::new(language_service.clone()));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    // Start HTTP server with all routes
    start_http_server(
        config,
        language_service,
        language_controller,
        tts_controller,
    )
    .await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicebox_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicebox_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
