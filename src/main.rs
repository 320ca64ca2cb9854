mod commands;
mod constants;
mod history;
mod models;
mod render;
mod services;
mod utils;

use std::path::PathBuf;

use poise::serenity_prelude as serenity;
use tracing::{error, info};

use crate::{
    commands::{history, today},
    constants::{DEFAULT_BACKGROUND_PATH, DEFAULT_CACHE_DIR, DEFAULT_FONT_PATH, LOG_DIRECTIVE},
    history::{EventSource, alapi::AlapiClient, baike::BaikeClient},
    models::Data,
    render::cache::ImageCache,
    render::image::ImageRenderer,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    initialize_logging();

    // Load configuration from environment
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Load render assets and open the image cache
    let renderer = match ImageRenderer::load(&config.font_path, &config.background_path) {
        Ok(renderer) => renderer,
        Err(e) => {
            error!("Failed to load render assets: {}", e);
            std::process::exit(1);
        }
    };
    let cache = match ImageCache::new(&config.cache_dir) {
        Ok(cache) => cache,
        Err(e) => {
            error!("Failed to open image cache at {:?}: {}", config.cache_dir, e);
            std::process::exit(1);
        }
    };

    // Compose the data sources
    let alapi = AlapiClient::new(config.alapi_token.clone());
    let source = match config.history_source.as_str() {
        "alapi" => {
            info!("History command will use the commercial API source");
            EventSource::Alapi(alapi.clone())
        }
        _ => {
            info!("History command will use the scraping source");
            EventSource::Baike(BaikeClient::new())
        }
    };

    let data = Data {
        source,
        alapi,
        renderer,
        cache,
    };

    // Create and start the bot
    if let Err(e) = start_bot(config.discord_token, data, config.dev_guild_id).await {
        error!("Bot error: {}", e);
        std::process::exit(1);
    }
}

/// Configuration loaded from environment variables
struct Config {
    discord_token: String,
    alapi_token: String,
    history_source: String,
    font_path: PathBuf,
    background_path: PathBuf,
    cache_dir: PathBuf,
    dev_guild_id: Option<u64>,
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Load configuration from environment variables
fn load_configuration() -> Result<Config, Box<dyn std::error::Error>> {
    let discord_token = std::env::var("DISCORD_TOKEN")
        .map_err(|_| "DISCORD_TOKEN environment variable not set. Set it with: export DISCORD_TOKEN=your_bot_token")?;

    let alapi_token = std::env::var("ALAPI_TOKEN")
        .map_err(|_| "ALAPI_TOKEN environment variable not set. Set it with: export ALAPI_TOKEN=your_api_token")?;

    // Data source for the history command: "baike" (default) or "alapi"
    let history_source =
        std::env::var("HISTORY_SOURCE").unwrap_or_else(|_| "baike".to_string());

    let font_path = std::env::var("HISTORY_FONT_PATH")
        .unwrap_or_else(|_| DEFAULT_FONT_PATH.to_string())
        .into();
    let background_path = std::env::var("HISTORY_BACKGROUND_PATH")
        .unwrap_or_else(|_| DEFAULT_BACKGROUND_PATH.to_string())
        .into();
    let cache_dir = std::env::var("HISTORY_CACHE_DIR")
        .unwrap_or_else(|_| DEFAULT_CACHE_DIR.to_string())
        .into();

    // Optional: development guild ID for faster command registration
    let dev_guild_id = std::env::var("DEV_GUILD_ID")
        .ok()
        .and_then(|id| id.parse::<u64>().ok());

    if dev_guild_id.is_some() {
        info!("Development mode: Commands will be registered to guild only");
    }

    Ok(Config {
        discord_token,
        alapi_token,
        history_source,
        font_path,
        background_path,
        cache_dir,
        dev_guild_id,
    })
}

/// Create and start the Discord bot
async fn start_bot(
    token: String,
    data: Data,
    dev_guild_id: Option<u64>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Create framework
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![history(), today()],
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                // Register commands based on dev_guild_id
                if let Some(guild_id) = dev_guild_id {
                    let guild = serenity::GuildId::new(guild_id);
                    info!("Registering commands in development guild: {}", guild_id);
                    poise::builtins::register_in_guild(ctx, &framework.options().commands, guild)
                        .await?;
                    info!(
                        "Commands registered in guild {} (instant updates)",
                        guild_id
                    );
                } else {
                    info!("Registering commands globally (may take up to 1 hour)");
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    info!("Commands registered globally");
                }

                info!("Bot is ready!");

                Ok(data)
            })
        })
        .build();

    // Create client with required intents
    let intents = serenity::GatewayIntents::non_privileged();

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    // Start the bot
    info!("Starting bot...");
    client.start().await?;

    Ok(())
}
