//! Oracle Adapters - 生成式 AI 网关实现

mod fixed_oracle;
mod gemini_client;
mod prompts;
mod wire;

pub use fixed_oracle::FixedOracle;
pub use gemini_client::{GeminiClient, GeminiClientConfig};
