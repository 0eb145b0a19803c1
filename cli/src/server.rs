use std::io::Cursor;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use morsewave_core::{
    morse_to_text, text_to_morse, translate, translate_image, Decoder, MorseError, TextExtractor,
    Translation,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::error::CliError;
use crate::ocr::TesseractExtractor;
use crate::wav::read_wav;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Speed assumed for audio that does not name one
    pub default_wpm: f64,
    pub tesseract: PathBuf,
}

pub struct AppState {
    config: ServerConfig,
    extractor: Arc<dyn TextExtractor + Send + Sync>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let extractor = Arc::new(TesseractExtractor::new(config.tesseract.clone()));
        Self::with_extractor(config, extractor)
    }

    pub fn with_extractor(config: ServerConfig, extractor: Arc<dyn TextExtractor + Send + Sync>) -> Self {
        Self { config, extractor }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MorseBody {
    pub morse: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TextBody {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub input: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationBody {
    pub direction: String,
    pub input: String,
    pub output: String,
}

impl From<Translation> for TranslationBody {
    fn from(t: Translation) -> Self {
        Self {
            direction: t.direction.as_str().to_string(),
            input: t.input,
            output: t.output,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DecodeAudioRequest {
    pub wav_base64: String,
    pub wpm: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DecodeAudioResponse {
    pub request_id: Uuid,
    pub morse: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct OcrRequest {
    pub image_base64: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl ApiError {
    fn bad_request(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            kind: "internal",
            message: message.into(),
        }
    }
}

impl From<MorseError> for ApiError {
    fn from(err: MorseError) -> Self {
        let status = match err {
            MorseError::EmptySignal
            | MorseError::UnrecognizedSymbol { .. }
            | MorseError::UnencodableCharacter(_) => StatusCode::UNPROCESSABLE_ENTITY,
            MorseError::OcrFailure(_) => StatusCode::BAD_GATEWAY,
            MorseError::InvalidConfig(_) => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<CliError> for ApiError {
    fn from(err: CliError) -> Self {
        match err {
            CliError::Morse(e) => e.into(),
            CliError::Io(e) => Self::internal(e.to_string()),
            other => Self::bad_request("invalid_audio", other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            kind: self.kind.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}

fn decode_base64(field: &'static str, data: &str) -> Result<Vec<u8>, ApiError> {
    STANDARD
        .decode(data.trim())
        .map_err(|e| ApiError::bad_request("invalid_base64", format!("{}: {}", field, e)))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn text_to_morse_handler(Json(req): Json<TextRequest>) -> Result<Json<MorseBody>, ApiError> {
    let morse = text_to_morse(&req.text)?;
    Ok(Json(MorseBody { morse }))
}

async fn morse_to_text_handler(Json(req): Json<MorseBody>) -> Result<Json<TextBody>, ApiError> {
    let text = morse_to_text(&req.morse)?;
    Ok(Json(TextBody { text }))
}

async fn translate_handler(Json(req): Json<TranslateRequest>) -> Result<Json<TranslationBody>, ApiError> {
    Ok(Json(translate(&req.input)?.into()))
}

async fn decode_audio_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DecodeAudioRequest>,
) -> Result<Json<DecodeAudioResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let wpm = req.wpm.unwrap_or(state.config.default_wpm);
    let bytes = decode_base64("wav_base64", &req.wav_base64)?;
    tracing::info!(%request_id, bytes = bytes.len(), wpm, "decoding audio");

    let decoded = tokio::task::spawn_blocking(move || -> Result<_, CliError> {
        let decoder = Decoder::new(wpm)?;
        let waveform = read_wav(Cursor::new(bytes))?;
        Ok(decoder.decode(&waveform)?)
    })
    .await
    .map_err(|e| ApiError::internal(format!("decode task failed: {}", e)))?;

    match decoded {
        Ok(decoded) => {
            tracing::info!(%request_id, morse = %decoded.morse, "decoded audio");
            Ok(Json(DecodeAudioResponse {
                request_id,
                morse: decoded.morse,
                text: decoded.text,
            }))
        }
        Err(e) => {
            tracing::warn!(%request_id, error = %e, "audio decode failed");
            Err(e.into())
        }
    }
}

async fn ocr_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OcrRequest>,
) -> Result<Json<TranslationBody>, ApiError> {
    let image = decode_base64("image_base64", &req.image_base64)?;
    let extractor = Arc::clone(&state.extractor);

    let translation = tokio::task::spawn_blocking(move || translate_image(extractor.as_ref(), &image))
        .await
        .map_err(|e| ApiError::internal(format!("ocr task failed: {}", e)))?
        .inspect_err(|e| tracing::warn!(error = %e, "image translation failed"))?;

    Ok(Json(translation.into()))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/text-to-morse", post(text_to_morse_handler))
        .route("/api/morse-to-text", post(morse_to_text_handler))
        .route("/api/translate", post(translate_handler))
        .route("/api/decode-audio", post(decode_audio_handler))
        .route("/api/ocr", post(ocr_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(bind: SocketAddr, config: ServerConfig) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}
