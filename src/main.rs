//! pii-exposure entrypoint: report on an assessment, check its score locally, run a search or
//! extraction against the backend, or rotate privacy tips until Ctrl+C.

use pii_exposure::{
    client::ApiClient,
    config::AppConfig,
    logging::{LogEvent, StructuredLogger},
    pii::AssessmentResult,
    risk::RiskEngine,
    session::Session,
    tips::{TipCatalog, TipTicker},
};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const USAGE: &str = "usage: pii-exposure <command>
  report <assessment.json>       recommendations toward the next risk tier
  score <assessment.json>        recompute the risk score locally
  search <name>                  candidate pages for a person
  extract <name> <url>...        extract PII from pages and report
  tips                           rotate privacy tips until Ctrl+C";

fn read_assessment(path: &Path) -> Result<AssessmentResult, BoxError> {
    let data = std::fs::read_to_string(path)?;
    Ok(AssessmentResult::from_json(&data)?)
}

fn print_report(engine: &RiskEngine, result: &AssessmentResult) -> Result<(), BoxError> {
    let report = engine.report(result)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for rec in &report.recommendations {
        let mut ev = LogEvent::info("recommendation", "disclosing this may elevate your risk profile");
        ev.category = Some(rec.category.as_str());
        ev.contribution = Some(rec.score);
        ev.risk_level = Some(report.level.as_str());
        StructuredLogger::emit_json(&ev, &mut out)?;
    }
    StructuredLogger::emit_json(&report.projection, &mut out)?;
    out.flush()?;
    info!(
        level = %report.level,
        next = ?report.next_level,
        candidates = report.recommendations.len(),
        reachable = report.projection.reachable,
        "report complete"
    );
    Ok(())
}

fn print_score(engine: &RiskEngine, result: &AssessmentResult) -> Result<(), BoxError> {
    let score = engine.risk_score(&result.fields)?;
    let level = engine.tiers().classify(score);
    let mut ev = LogEvent::info("score", "local risk score");
    ev.risk_score = Some(score);
    ev.risk_level = Some(level.as_str());
    StructuredLogger::emit_json(&ev, &mut std::io::stdout())?;

    match result.level() {
        Ok(reported) if reported != level => warn!(
            reported = %reported,
            local = %level,
            "local tier differs from reported tier"
        ),
        Ok(_) => {}
        Err(e) => warn!(error = %e, "reported tier not recognised"),
    }
    Ok(())
}

fn run_tips(config: &AppConfig) -> Result<(), BoxError> {
    let catalog = TipCatalog::from_custom(config.tips.custom.clone());
    let period = Duration::from_secs(config.tips.interval_secs.max(1));
    let (stop_tx, mut stop_rx) = tokio::sync::watch::channel(false);
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(true);
    })?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .build()?;
    info!(interval_secs = period.as_secs(), tips = catalog.len(), "rotating tips (Ctrl+C to stop)");
    rt.block_on(async move {
        let ticker = TipTicker::start(catalog, period);
        let mut tips = ticker.subscribe();
        loop {
            tokio::select! {
                changed = tips.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    if let Some(tip) = tips.borrow_and_update().clone() {
                        println!("{tip}");
                    }
                }
                _ = stop_rx.changed() => break,
            }
        }
        ticker.stop();
    });
    info!("tip rotation stopped");
    Ok(())
}

fn main() -> Result<(), BoxError> {
    let config_path = AppConfig::default_path();
    let config = AppConfig::load(&config_path)?;

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(config = %config_path.display(), "pii-exposure starting");

    let engine = RiskEngine::new(config.scoring_table()?, config.risk.clone());
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["report", path] => print_report(&engine, &read_assessment(Path::new(path))?),
        ["score", path] => print_score(&engine, &read_assessment(Path::new(path))?),
        ["search", name] => {
            let client = ApiClient::new(&config.api)?;
            let mut out = std::io::stdout();
            for page in client.search(name)? {
                StructuredLogger::emit_json(&page, &mut out)?;
            }
            Ok(())
        }
        ["extract", name, urls @ ..] if !urls.is_empty() => {
            let client = ApiClient::new(&config.api)?;
            let urls: Vec<String> = urls.iter().map(|u| u.to_string()).collect();
            let mut session = Session::new();
            session.begin_search(*name);
            session.set_assessment(client.extract(name, &urls)?);
            match session.assessment() {
                Some(result) => print_report(&engine, result),
                None => Ok(()),
            }
        }
        ["tips"] => run_tips(&config),
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }
}
