//! "Nur", the chat assistant, backed by the Gemini API with two local tools.

pub mod client;
pub mod tools;

pub use client::GeminiClient;
