//! Clients for the external ReadApt backend services.
//!
//! The prediction, summary, and TTS backends are request/response
//! collaborators: the core sends typed JSON and treats every failure as a
//! recoverable [`ServiceError`] the caller degrades on.

pub mod adaptation;
pub mod shared;
pub mod summary;
pub mod tts;

pub use adaptation::{AdaptPreferences, AdaptTextRequest, AdaptTextResponse, AdaptationClient};
pub use shared::{
    DEFAULT_BASE_URL, ServiceConfig, ServiceError, ServiceErrorKind, ServiceResult, USER_AGENT,
    resolve_base_url,
};
pub use summary::{SummaryClient, SummaryRequest, SummaryResponse, SummaryType};
pub use tts::{TtsClient, TtsRequest, TtsResponse};
