mod client;
mod language;

pub use client::{
    DEFAULT_ENDPOINT, DEFAULT_TARGET_LANG, Translation, TranslationClient, TranslationRequest,
    TranslationResponse,
};
pub use language::{SUPPORTED_LANGUAGES, is_known_target, print_languages};
