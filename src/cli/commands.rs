use crate::app::{AppContext, HeadlineError, Result};
use crate::domain::{Article, FetchState, ImageRendition};

pub async fn list_articles(ctx: &AppContext) -> Result<()> {
    let state = ctx.controller.load().await;
    let articles = loaded_articles(&state)?;

    if articles.is_empty() {
        println!("No articles");
        return Ok(());
    }

    for article in articles {
        let date = article
            .published_on()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "          ".to_string());

        println!("{:>16} {} {}", article.id, date, article.title);
    }

    Ok(())
}

pub async fn show_article(ctx: &AppContext, id: i64) -> Result<()> {
    let state = ctx.controller.load().await;
    let article = find_article(&state, id)?;

    println!("{}", article.title);
    if let Some(date) = article.published_date.as_deref() {
        println!("Published: {}", date);
    }
    println!();
    println!("{}", article.summary);
    println!();
    println!("Link:  {}", article.url);
    println!(
        "Image: {}",
        article.image_url_or(ImageRendition::Large, ctx.default_image())
    );

    for media in article.media.iter().filter(|m| !m.caption.is_empty()) {
        println!("  - {}", media.caption);
    }

    Ok(())
}

pub async fn open_article(ctx: &AppContext, id: i64) -> Result<()> {
    let state = ctx.controller.load().await;
    let article = find_article(&state, id)?;

    open::that(&article.url)?;
    println!("Opened {}", article.url);
    Ok(())
}

fn loaded_articles(state: &FetchState) -> Result<&[Article]> {
    if let Some(error) = &state.error {
        return Err(HeadlineError::Other(format!("Failed to load articles: {}", error)));
    }
    Ok(state.articles())
}

fn find_article(state: &FetchState, id: i64) -> Result<&Article> {
    loaded_articles(state)?;
    state.find(id).ok_or(HeadlineError::ArticleNotFound(id))
}
