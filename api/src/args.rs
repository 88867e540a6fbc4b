use clap::Parser;
use wayfarer_core::domain::common::{LlmConfig, ServerConfig, WayfarerConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "wayfarer-api", about = "Travel-guide relay API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    /// Port the HTTP server listens on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Origins allowed by the CORS layer, comma separated.
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// API key for the generative model provider.
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    /// Model identifier sent with every generation call.
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,
}

impl From<Args> for WayfarerConfig {
    fn from(args: Args) -> Self {
        Self {
            server: ServerConfig {
                port: args.server.port,
                allowed_origins: args.server.allowed_origins,
            },
            llm: LlmConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
        }
    }
}
