use crate::app::{AppContext, Result};
use crate::relay::{self, RunOptions};

pub async fn run(ctx: &AppContext, dry_run: bool) -> Result<()> {
    println!("=== newsrelay ===");
    println!("Time: {}", chrono::Local::now().to_rfc3339());

    let options = RunOptions { persist: !dry_run };
    let report = relay::run_once(ctx, options).await?;

    if !report.failed.is_empty() {
        eprintln!("  {} articles failed and will be retried", report.failed.len());
    }
    println!("=== Done: {} articles posted ===", report.posted.len());
    Ok(())
}

pub async fn preview(ctx: &AppContext) -> Result<()> {
    let state = relay::load_state(ctx.store.as_ref()).await;
    let articles = relay::fetch_articles(ctx).await?;

    if articles.is_empty() {
        println!("No articles");
        return Ok(());
    }

    for article in articles {
        let marker = if state.contains(&article.id) { " " } else { "*" };
        println!("{} {}\n    {}", marker, article.display_title(), article.id);
    }

    Ok(())
}

pub async fn show_state(ctx: &AppContext) -> Result<()> {
    let state = relay::load_state(ctx.store.as_ref()).await;

    if state.is_empty() {
        println!("No posted articles");
        return Ok(());
    }

    println!("{} posted articles (oldest first):", state.len());
    for id in &state.last_posted_ids {
        println!("  {}", id);
    }

    Ok(())
}
