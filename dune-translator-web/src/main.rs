use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use dune_translator::{
    Direction, Phrase, PhraseBank, Suggestion, Translate, Translator, builtin_lexicon,
    builtin_phrase_bank, load_lexicon_from_file, load_phrases_from_file,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_CHARS: usize = 10_000;

#[derive(Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default)]
    pub from_dune: bool,
}

#[derive(Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated: String,
    pub source: String,
    pub direction: Direction,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Server settings, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: String,
    pub lexicon: Option<PathBuf>,
    pub phrases: Option<PathBuf>,
    pub max_chars: usize,
}

impl Config {
    /// - `DUNE_TRANSLATOR_ADDR` (default `127.0.0.1:3000`)
    /// - `DUNE_TRANSLATOR_LEXICON`, `DUNE_TRANSLATOR_PHRASES`: optional JSON overrides
    /// - `DUNE_TRANSLATOR_MAX_CHARS` (default 10000)
    pub fn from_env() -> Result<Self, String> {
        let max_chars = match env::var("DUNE_TRANSLATOR_MAX_CHARS") {
            Ok(value) => value
                .parse()
                .map_err(|e| format!("Invalid DUNE_TRANSLATOR_MAX_CHARS '{}': {}", value, e))?,
            Err(_) => DEFAULT_MAX_CHARS,
        };

        Ok(Self {
            addr: env::var("DUNE_TRANSLATOR_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
            lexicon: env::var_os("DUNE_TRANSLATOR_LEXICON").map(PathBuf::from),
            phrases: env::var_os("DUNE_TRANSLATOR_PHRASES").map(PathBuf::from),
            max_chars,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            lexicon: None,
            phrases: None,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
    pub phrases: Arc<PhraseBank>,
    pub max_chars: usize,
}

impl AppState {
    /// Build the lexicon and phrase bank, failing on invalid data
    pub fn load(config: &Config) -> Result<Self, dune_translator::ConfigError> {
        let lexicon = match &config.lexicon {
            Some(path) => load_lexicon_from_file(path)?,
            None => builtin_lexicon()?,
        };
        let phrases = match &config.phrases {
            Some(path) => load_phrases_from_file(path)?,
            None => builtin_phrase_bank()?,
        };

        Ok(Self {
            translator: Arc::new(Translator::new(lexicon)),
            phrases: Arc::new(phrases),
            max_chars: config.max_chars,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState::load(&config)
        .map_err(|e| format!("Failed to load translator data: {}", e))?;

    info!(
        "🏜️ Starting Dune translator ({} words, {} phrases)",
        state.translator.lexicon().len(),
        state.phrases.len()
    );

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!("🚀 Server running at http://{}", config.addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/translate", post(translate_text))
        .route("/api/phrase", get(random_phrase))
        .route("/api/phrases", get(all_phrases))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let chars = request.text.chars().count();
    if chars > state.max_chars {
        return Err((
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ErrorResponse {
                error: format!(
                    "Text is {} characters long; the limit is {}",
                    chars, state.max_chars
                ),
            }),
        ));
    }

    let direction = Direction::from_dune(request.from_dune);
    let translated = state.translator.translate(&request.text, direction);

    info!("Translated {} characters ({})", chars, direction);

    Ok(Json(TranslateResponse {
        translated,
        source: request.text,
        direction,
    }))
}

async fn random_phrase(State(state): State<AppState>) -> Json<Suggestion> {
    Json(Suggestion::from(state.phrases.random_phrase()))
}

async fn all_phrases(State(state): State<AppState>) -> Json<Vec<Phrase>> {
    Json(state.phrases.all_phrases().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    fn test_app(max_chars: usize) -> Router {
        let config = Config {
            max_chars,
            ..Config::default()
        };
        app(AppState::load(&config).unwrap())
    }

    async fn post_json(
        app: Router,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_translate_to_dune() {
        let (status, body) = post_json(
            test_app(DEFAULT_MAX_CHARS),
            "/api/translate",
            serde_json::json!({ "text": "The spice must flow." }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["translated"], "El melange wajib tadfuq.");
        assert_eq!(body["source"], "The spice must flow.");
        assert_eq!(body["direction"], "english_to_dune");
    }

    #[tokio::test]
    async fn test_translate_from_dune() {
        let (status, body) = post_json(
            test_app(DEFAULT_MAX_CHARS),
            "/api/translate",
            serde_json::json!({ "text": "Marhaba, Muad'Dib!", "from_dune": true }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["translated"], "Hello, Paul!");
        assert_eq!(body["direction"], "dune_to_english");
    }

    #[tokio::test]
    async fn test_translate_rejects_oversized_text() {
        let (status, body) = post_json(
            test_app(5),
            "/api/translate",
            serde_json::json!({ "text": "spice spice" }),
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(body["error"].as_str().unwrap().contains("limit is 5"));
    }

    #[tokio::test]
    async fn test_translate_accepts_text_at_the_limit() {
        let (status, body) = post_json(
            test_app(6),
            "/api/translate",
            serde_json::json!({ "text": "Spice!" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["translated"], "Melange!");
    }

    #[tokio::test]
    async fn test_random_phrase() {
        let (status, body) = get_json(test_app(DEFAULT_MAX_CHARS), "/api/phrase").await;
        assert_eq!(status, StatusCode::OK);
        let primary = body["primary"].as_str().unwrap();
        let phrases = builtin_phrase_bank().unwrap();
        let phrase = phrases
            .all_phrases()
            .iter()
            .find(|p| p.english == primary)
            .expect("suggestion comes from the phrase bank");
        assert_eq!(body["secondary"], phrase.dune.as_str());
    }

    #[tokio::test]
    async fn test_all_phrases() {
        let (status, body) = get_json(test_app(DEFAULT_MAX_CHARS), "/api/phrases").await;
        assert_eq!(status, StatusCode::OK);
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), builtin_phrase_bank().unwrap().len());
        assert_eq!(list[0]["english"], "The spice must flow.");
    }

    #[test]
    fn test_missing_lexicon_file_fails_to_load() {
        let config = Config {
            lexicon: Some(PathBuf::from("/nonexistent/lexicon.json")),
            ..Config::default()
        };
        assert!(AppState::load(&config).is_err());
    }
}
