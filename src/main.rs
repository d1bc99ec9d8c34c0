use std::env;

use cocktail_finder::{render_html, render_text, FinderConfig, RecipeLookupView, RenderMode};
use log::debug;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const PROMPT: &str = "cocktail> ";

fn draw(view: &RecipeLookupView, mode: RenderMode) {
    let state = view.snapshot();
    let output = match mode {
        RenderMode::Text => render_text(&state),
        RenderMode::Html => render_html(&state),
    };
    println!("{}", output);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = FinderConfig::load()?;
    debug!("{:#?}", config);
    let view = cocktail_finder::view_from_config(&config)?;

    // With a name argument, search once and exit
    if let Some(name) = env::args().nth(1) {
        view.set_search_text(name);
        view.handle_search_submit().await;
        draw(&view, config.render);
        return Ok(());
    }

    view.mount().await;
    draw(&view, config.render);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.as_str() {
            "/quit" => break,
            "/random" => view.lookup_random().await,
            text => {
                view.set_search_text(text);
                if !view.handle_search_submit().await {
                    continue;
                }
            }
        }
        draw(&view, config.render);
    }

    Ok(())
}
