use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use weekwise::llm::gateways::AnthropicGateway;
use weekwise::llm::tools::current_date_tool::CurrentDateTool;
use weekwise::llm::tools::day_of_week_tool::DayOfWeekTool;
use weekwise::llm::tools::monday_of_week_tool::MondayOfWeekTool;
use weekwise::llm::tools::week_info_tool::WeekInfoTool;
use weekwise::llm::tools::{LlmTool, ToolRegistry};
use weekwise::llm::{ChatSession, LlmBroker};
use weekwise::repl::Repl;

const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

const SYSTEM_PROMPT: &str = "You are a helpful AI assistant with access to date-related tools.

You should:
- Answer general questions normally and conversationally
- Use the available date tools when users ask about dates, weekdays, or week information
- Be friendly and helpful with all types of questions

The tools available to you are for date calculations, but you can discuss any topic the user wants to talk about.";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let api_key = std::env::var("ANTHROPIC_API_KEY")
        .context("ANTHROPIC_API_KEY is not set; export it or add it to a .env file")?;
    let model = std::env::var("WEEKWISE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let gateway = Arc::new(AnthropicGateway::with_api_key(api_key));
    let broker = LlmBroker::new(model, gateway);

    let tools: Vec<Box<dyn LlmTool>> = vec![
        Box::new(CurrentDateTool),
        Box::new(MondayOfWeekTool),
        Box::new(WeekInfoTool),
        Box::new(DayOfWeekTool),
    ];
    let registry = ToolRegistry::new(tools)?;

    let session = ChatSession::builder(broker)
        .system_prompt(SYSTEM_PROMPT)
        .tools(registry)
        .build();

    Repl::new(session).run().await?;

    Ok(())
}
