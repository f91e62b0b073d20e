use trendchain::config::{self, AnalysisConfig};
use trendchain::data::{CandleProvider, CsvMarketData, SignalProvider};
use trendchain::engine::PropagationEngine;
use trendchain::logging::init_logging;
use trendchain::models::{timestamp, AnalysisResult};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::load_dotenv();
    init_logging();

    let mut args = std::env::args().skip(1);
    let candles_path = args.next();
    let signals_path = args.next();
    let as_json = args.any(|a| a == "--json");
    let (Some(candles_path), Some(signals_path)) = (candles_path, signals_path) else {
        eprintln!("usage: trendchain <candles.csv> <signals.csv> [--json]");
        std::process::exit(2);
    };

    let source = CsvMarketData::new(&candles_path, &signals_path);
    let candles = source.candles()?;
    let signals = source.signals_by_timeframe()?;

    let result = PropagationEngine::analyze(&signals, &candles, &AnalysisConfig::new());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }
    Ok(())
}

fn print_report(result: &AnalysisResult) {
    println!("Initial indicators: {}", result.initial_indicators.len());
    for indicator in &result.initial_indicators {
        println!(
            "  {} {:+} on {} until {} (open {:.2}, change {:.2}%)",
            timestamp::format(&indicator.datetime),
            indicator.trend_type.value(),
            indicator.timeframe,
            timestamp::format(&indicator.end_datetime),
            indicator.open_price,
            indicator.directional_change_percent,
        );
    }
    println!("Propagations: {}", result.propagations.len());
    for prop in &result.propagations {
        println!(
            "  {} level {} ({} -> {}) {:+} at {} (open {:.2}, change {:.2}%)",
            prop.propagation_id,
            prop.propagation_level,
            prop.higher_freq,
            prop.lower_freq,
            prop.trend_type.value(),
            timestamp::format(&prop.datetime),
            prop.open_price,
            prop.directional_change_percent,
        );
    }
}
