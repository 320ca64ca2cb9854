use poise::CreateReply;
use poise::serenity_prelude::CreateAttachment;
use tracing::{error, info};

use crate::{
    constants::GENERIC_APOLOGY,
    models::{Context, Error},
    services::history_service::day_reply,
    utils::date::resolve_date,
    utils::messages::format_error,
};

/// Look up what happened on a date in history, rendered as an image
#[poise::command(slash_command)]
pub async fn history(
    ctx: Context<'_>,
    #[description = "日期：今天/昨天/明天、M月D日 或 M.D（默认今天）"] date: Option<String>,
) -> Result<(), Error> {
    let expression = date.unwrap_or_default();

    // Format and calendar errors go to the user without logging
    let date = match resolve_date(&expression) {
        Ok(date) => date,
        Err(e) => {
            ctx.say(format_error(&e.to_string())).await?;
            return Ok(());
        }
    };

    // Rendering can take a moment on a cache miss
    ctx.defer().await?;

    let data = ctx.data();
    match day_reply(&data.source, &data.renderer, &data.cache, &date).await {
        Ok(png) => {
            let attachment = CreateAttachment::bytes(png, date.image_file_name());
            ctx.send(CreateReply::default().attachment(attachment))
                .await?;
            info!("Replied with history image for {}", date.display());
        }
        Err(e) => {
            error!("History request for {} failed: {}", date.display(), e);
            ctx.say(GENERIC_APOLOGY).await?;
        }
    }

    Ok(())
}
