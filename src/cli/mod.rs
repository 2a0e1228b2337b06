use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Host interface the HTTP server binds to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the HTTP server listens on.
    #[arg(long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Runtime environment. "development" enables debug logging.
    #[arg(long, env = "APP_ENV", default_value = "production")]
    pub app_env: String,

    /// Maximum accepted request body size in bytes (pasted documents can be large).
    #[arg(long, env = "MAX_BODY_BYTES", default_value = "2097152")]
    pub max_body_bytes: usize,

    // --- Chat LLM Provider Args ---
    /// API key for the Groq chat completion API.
    #[arg(long, env = "GROQ_API_KEY", default_value = "", hide_env_values = true)]
    pub groq_api_key: String,

    /// Model name for chat completion.
    #[arg(long, env = "CHAT_MODEL", default_value = "llama-3.3-70b-versatile")]
    pub chat_model: String,

    /// Base URL of the OpenAI-compatible chat API.
    #[arg(long, env = "CHAT_BASE_URL", default_value = "https://api.groq.com/openai/v1")]
    pub chat_base_url: String,

    /// Sampling temperature for completions.
    #[arg(long, env = "CHAT_TEMPERATURE", default_value = "0.7")]
    pub temperature: f32,

    /// Ceiling on generated tokens per completion.
    #[arg(long, env = "CHAT_MAX_TOKENS", default_value = "2000")]
    pub max_tokens: u32,

    /// Optional file replacing the built-in system prompt.
    #[arg(long, env = "SYSTEM_PROMPT_PATH")]
    pub system_prompt_path: Option<String>,

    // --- TLS Args ---
    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,

    /// Path to the TLS certificate file (PEM format). Requires --tls-key-path.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Path to the TLS private key file (PEM format). Requires --tls-cert-path.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,
}

impl Args {
    pub fn is_development(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("development")
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn default_log_filter(&self) -> &'static str {
        if self.is_development() { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["horse-health-interpreter"]).unwrap();
        assert_eq!(args.chat_model, "llama-3.3-70b-versatile");
        assert_eq!(args.temperature, 0.7);
        assert_eq!(args.max_tokens, 2000);
        assert_eq!(args.chat_base_url, "https://api.groq.com/openai/v1");
        assert!(!args.enable_tls);
        assert!(args.system_prompt_path.is_none());
    }

    #[test]
    fn development_switches_log_level() {
        let args = Args::try_parse_from([
            "horse-health-interpreter",
            "--app-env",
            "Development",
            "--host",
            "127.0.0.1",
            "--port",
            "5000",
        ]).unwrap();
        assert!(args.is_development());
        assert_eq!(args.default_log_filter(), "debug");
        assert_eq!(args.bind_addr(), "127.0.0.1:5000");
    }
}
