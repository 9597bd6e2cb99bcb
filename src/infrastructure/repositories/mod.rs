pub mod form_options_repository;
pub mod gemini_text_repository;
pub mod openai_text_repository;
pub mod text_generation_repository;

pub use form_options_repository::HardcodedFormOptionsRepository;
pub use gemini_text_repository::{GeminiTextRepository, DEFAULT_GEMINI_BASE_URL};
pub use openai_text_repository::OpenAiTextRepository;
pub use text_generation_repository::TextGenerationRepository;
