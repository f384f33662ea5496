use anyhow::Context;
use beverage_template::config::OutputFormat;
use beverage_template::utils::{logger, validation::Validate};
use beverage_template::{
    BrewEngine, BrewEvent, CliConfig, CoffeeWithHook, ConsoleSink, NotificationSink, TracingSink,
};
use clap::Parser;

/// Swallows notifications; the JSON receipts carry them instead.
struct Silent;

impl NotificationSink for Silent {
    fn notify(&mut self, _event: &BrewEvent) -> beverage_template::Result<()> {
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting beverage-template");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let sink: Box<dyn NotificationSink> = match config.output {
        OutputFormat::Log => Box::new(TracingSink),
        OutputFormat::Console => Box::new(ConsoleSink::stdout()),
        OutputFormat::Json => Box::new(Silent),
    };

    let coffee = CoffeeWithHook::with_decider(config.sugar.decider());
    let mut engine = BrewEngine::new(coffee, sink);

    let receipts = engine.serve(config.cups).context("brewing failed")?;

    if config.output == OutputFormat::Json {
        for receipt in &receipts {
            println!("{}", serde_json::to_string(receipt)?);
        }
    }

    let sweetened = receipts.iter().filter(|r| r.sugar_added).count();
    tracing::info!(
        "✅ Served {} cup(s), {} with sugar",
        receipts.len(),
        sweetened
    );

    Ok(())
}
