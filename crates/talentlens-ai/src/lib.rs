//! TalentLens AI - Pluggable LLM provider clients for resume analysis.
//!
//! This crate provides async clients for scoring resume text against a job
//! profile through one of three providers (OpenAI, Gemini, Groq), plus the
//! shared prompt construction and the interpreter that maps free-form model
//! output into a typed [`talentlens_core::AnalysisResult`].

mod error;
mod gemini;
mod groq;
mod interpret;
mod openai;
mod prompt;
mod provider;
mod types;

pub use error::{AiError, AiResult};
pub use gemini::GeminiClient;
pub use groq::GroqClient;
pub use interpret::interpret;
pub use openai::OpenAiClient;
pub use prompt::build_analysis_prompt;
pub use provider::{ProviderClient, ProviderKind, ProviderRegistry, ResumeAnalyzer};
