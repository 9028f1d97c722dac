use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

use voicebox_backend::controllers::{language::LanguageController, tts::TtsController};
use voicebox_backend::domain::language::LanguageDetectionService;
use voicebox_backend::domain::tts::TtsService;
use voicebox_backend::infrastructure::config::{Config, Environment, LogFormat};
use voicebox_backend::infrastructure::http::{build_cors_layer, build_router};
use voicebox_backend::infrastructure::repositories::TtsRepository;

pub mod api_client;
pub mod mock_tts;

use api_client::TestClient;
use mock_tts::MockTtsRepository;

pub struct TestContext {
    pub client: TestClient,
    #[allow(dead_code)]
    pub config: Config,
}

impl TestContext {
    /// Context with a working mock TTS provider
    pub async fn new() -> Result<Self> {
        Self::with_tts_repo(Arc::new(MockTtsRepository::new())).await
    }

    /// Context whose TTS provider fails every synthesis call
    pub async fn with_failing_tts() -> Result<Self> {
        Self::with_tts_repo(Arc::new(MockTtsRepository::failing())).await
    }

    async fn with_tts_repo(tts_repo: Arc<dyn TtsRepository>) -> Result<Self> {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0, // Will be assigned by the OS
            aws_region: "us-east-1".to_string(),
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
            cors_allowed_origin: "*".to_string(),
            voice_cache_enabled: false, // Disable cache in tests to avoid test pollution
        };

        let app = build_app(&config, tts_repo);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            client: TestClient::new(&base_url),
            config,
        })
    }
}

fn build_app(config: &Config, tts_repo: Arc<dyn TtsRepository>) -> Router {
    let cors = build_cors_layer(config).expect("CORS configuration is valid");

    let language_service = Arc::new(LanguageDetectionService::new());
    let tts_service = Arc::new(TtsService::new(tts_repo, config.voice_cache_enabled));

    let language_controller = Arc::new(LanguageController::new(language_service.clone()));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    build_router(cors, language_service, language_controller, tts_controller)
}
