use tracing::error;

use crate::{
    constants::{GENERIC_APOLOGY, NO_EVENTS_TODAY_MESSAGE},
    history::FetchError,
    models::{Context, Error},
    utils::messages::{format_error, format_event_block},
};

/// Today's major historical events from the commercial API, as text
#[poise::command(slash_command)]
pub async fn today(ctx: Context<'_>) -> Result<(), Error> {
    match ctx.data().alapi.today_events().await {
        Ok(events) if events.is_empty() => {
            ctx.say(NO_EVENTS_TODAY_MESSAGE).await?;
        }
        Ok(events) => {
            let mut reply = String::from("【历史上的今天】\n");
            for event in &events {
                reply.push_str(&format_event_block(&event.title, &event.content));
            }
            ctx.say(reply).await?;
        }
        Err(FetchError::Upstream(msg)) => {
            ctx.say(format_error(&format!("API 返回错误：{}", msg)))
                .await?;
        }
        Err(e) => {
            error!("Today-in-history API call failed: {}", e);
            ctx.say(GENERIC_APOLOGY).await?;
        }
    }

    Ok(())
}
