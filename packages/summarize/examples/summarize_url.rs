//! Summarize a URL or a piece of text from the command line.
//!
//! Requires `GEMINI_API_KEY` to be set.
//!
//! ```sh
//! cargo run --example summarize_url -- video https://www.youtube.com/watch?v=dQw4w9WgXcQ
//! cargo run --example summarize_url -- article https://example.com/some-story
//! cargo run --example summarize_url -- text "Paste any text here."
//! ```

use summarize::{Pipeline, PipelineConfig, SourceType};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let (kind, input) = match (args.next(), args.next()) {
        (Some(kind), Some(input)) => (kind, input),
        _ => {
            eprintln!("usage: summarize_url <video|article|text> <url-or-text>");
            std::process::exit(2);
        }
    };

    let source_type = match kind.as_str() {
        "video" => SourceType::Video,
        "article" => SourceType::Article,
        "text" => SourceType::RawText,
        other => {
            eprintln!("unknown source type {:?}, expected video, article or text", other);
            std::process::exit(2);
        }
    };

    let config = PipelineConfig::from_env()?;
    let pipeline = Pipeline::from_config(&config);

    let result = pipeline.process(source_type, &input, None).await?;

    println!("# {}", result.original_title);
    println!();
    println!("TL;DR: {}", result.tldr);
    println!();
    for point in &result.bullet_points {
        println!("- {}", point);
    }
    println!();
    println!("{}", result.summary);
    if !result.tags.is_empty() {
        let tags: Vec<&str> = result.tags.iter().map(|t| t.as_str()).collect();
        println!();
        println!("tags: {}", tags.join(", "));
    }

    Ok(())
}
