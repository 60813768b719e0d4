use dalil::{DalilConfig, Language, ServiceSearch};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::from_default_env().add_directive("dalil=info".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let query = args
        .next()
        .unwrap_or_else(|| "how to renew my emirates id in dubai".to_string());
    let language = Language::from(args.next().unwrap_or_else(|| "en".to_string()));

    let config = DalilConfig::from_env();
    let engine = ServiceSearch::from_config(&config)?;

    let result = engine.search(&query, language).await;

    println!("query:      {}", result.query.recognition.original_query);
    println!("normalized: {}", result.query.normalized_query);
    println!("expanded:   {}", result.query.recognition.expanded_query);
    println!(
        "category:   {} ({:.2})",
        result.query.classification.category, result.query.classification.confidence
    );

    println!("entities:");
    for entity in &result.query.recognition.entities {
        println!(
            "  {} '{}' -> '{}' ({:.2})",
            entity.entity_type, entity.text, entity.normalized_value, entity.confidence
        );
    }

    println!("intents:");
    for intent in result.query.recognition.intents.values() {
        println!("  {} ({:.2})", intent.label, intent.confidence);
    }

    if result.records.is_empty() {
        println!("no matching services found");
    } else {
        println!("services:");
        for record in &result.records {
            println!("  [{}] {} - {}", record.authority, record.title, record.url);
        }
    }

    Ok(())
}
