mod input;
mod render;

use moodline_core::config::MoodCfg;
use moodline_core::leads::{MemorySink, RevenueSummary};
use moodline_core::perception::MoodDetector;
use moodline_core::pipeline::Pipeline;
use moodline_model::provider::ModelSource;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use input::{Command, Input, Prompter};

const LOG_FILE: &str = "/tmp/moodline.log";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Tracing: write to file when RUST_LOG is set so logs don't interleave with the prompt
    if std::env::var("RUST_LOG").is_ok() {
        let file = std::fs::File::create(LOG_FILE)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(fmt::layer().json().with_target(true).with_writer(file))
            .init();
    }

    let cfg = MoodCfg::from_env();
    let source = moodline_model::http::from_env();
    let detector =
        MoodDetector::initialize(source.as_ref().map(|s| s as &dyn ModelSource), &cfg).await;

    let pipeline = Pipeline::new(detector);
    let token = CancellationToken::new();
    spawn_sigint_canceler(token.clone());

    run_repl(&pipeline, &cfg, token).await
}

fn startup_notice(pipeline: &Pipeline) -> String {
    let detector = pipeline.detector();
    if detector.uses_model() {
        format!("Emotion model: {}", detector.strategy())
    } else {
        "No emotion model available, using keyword rules.".to_owned()
    }
}

async fn run_repl(pipeline: &Pipeline, cfg: &MoodCfg, token: CancellationToken) -> anyhow::Result<()> {
    println!("{}", startup_notice(pipeline));
    println!("Type a customer message. /stats for session revenue, /json to toggle JSON, /config for settings, /q to quit.");

    let sink = MemorySink::new();
    let mut json_output = false;

    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<Input>();
    let prompter = Prompter::spawn(input_tx);
    prompter.next();

    loop {
        let input = tokio::select! {
            _ = token.cancelled() => break,
            input = input_rx.recv() => input,
        };

        match input {
            None | Some(Input::Closed) => break,
            Some(Input::Interrupted) => {
                token.cancel();
                break;
            }
            Some(Input::Failed(err)) => {
                eprintln!("input error: {err}");
                break;
            }
            Some(Input::Command(Command::Quit)) => break,
            Some(Input::Command(Command::Stats)) => {
                let summary = RevenueSummary::from_warmths(sink.warmths(), &cfg.revenue);
                println!("{}", render::stats(&summary));
            }
            Some(Input::Command(Command::Json)) => {
                json_output = !json_output;
                println!("JSON output {}", if json_output { "on" } else { "off" });
            }
            Some(Input::Command(Command::Config)) => println!("{}", render::config(cfg)),
            Some(Input::Blank) => {}
            Some(Input::Message(text)) => {
                let record = pipeline.analyze_and_record(&text, &sink).await;
                if json_output {
                    println!("{}", serde_json::to_string_pretty(&record)?);
                } else {
                    println!("{}", render::record(&record));
                }
            }
        }
        prompter.next();
    }

    tracing::info!(records = sink.len(), "session ended");
    println!();
    Ok(())
}

fn spawn_sigint_canceler(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });
}
