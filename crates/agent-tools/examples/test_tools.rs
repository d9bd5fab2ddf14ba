//! Exercise the calculator and, when `SERPAPI_KEY` is set, a live search.
//!
//! Run with: cargo run -p agent-tools --example test_tools -- "rust release notes"

use agent_tools::{Calculator, SerpApiSearch};
use brain_core::SearchProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("agent_tools=debug".parse()?),
        )
        .init();

    println!("=== Calculator ===");
    let calc = Calculator::new();
    for expr in ["5*2+10", "2 ** 10", "7 % 4", "1/0", "Math.max(1, 2)"] {
        println!("  {:<16} -> {}", expr, calc.evaluate(expr));
    }

    println!("\n=== Web search ===");
    let search = SerpApiSearch::from_env()?;
    if !search.is_configured() {
        println!("  SERPAPI_KEY not set, showing the fallback text:");
    }

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "latest rust release".to_string());
    println!("{}", search.search(&query).await);

    Ok(())
}
