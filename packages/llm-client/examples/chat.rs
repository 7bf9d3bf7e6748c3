//! Chat completion against a live endpoint.
//!
//! Requires `GEMINI_API_KEY` to be set.

use llm_client::{ChatClient, ChatRequest, Message, ResponseFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = ChatClient::from_env()?;

    let response = client
        .chat_completion(
            ChatRequest::new("gemini-2.5-flash")
                .message(Message::system(
                    "You are a helpful assistant that generates structured JSON output.",
                ))
                .message(Message::user(
                    "Return a JSON object with a single field `greeting`.",
                ))
                .temperature(0.5)
                .max_tokens(200)
                .response_format(ResponseFormat::json_object()),
        )
        .await?;

    println!("{}", response.content);

    if let Some(usage) = response.usage {
        println!(
            "tokens: {} prompt / {} completion",
            usage.prompt_tokens, usage.completion_tokens
        );
    }

    Ok(())
}
