//! Watch command - poll a template and revalidate after edits settle

use super::preview::print_preview;
use crate::context::Context;
use crate::output::{format_diagnostic, format_summary};
use anyhow::Result;
use colored::Colorize;
use std::future::Future;
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tronlab_core::config::consts::TEMPLATE_LANGUAGE_ID;
use tronlab_core::diagnostic::count_by_severity;
use tronlab_core::{Config, ValueMap};
use tronlab_host::{Document, Session, ValidationEvent};

/// Watch until Ctrl-C
pub fn run(ctx: &Context, file: &Path, preview: bool) -> Result<i32> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        };
        watch(file, ctx.config.clone(), preview, shutdown).await
    })?;

    Ok(0)
}

/// Poll `path`, feeding every change to a session, until `shutdown`
/// completes. Returns the number of validation passes reported.
pub(crate) async fn watch(
    path: &Path,
    config: Config,
    show_preview: bool,
    shutdown: impl Future<Output = ()>,
) -> Result<usize> {
    let poll_interval = Duration::from_millis(config.watch.poll_interval_ms);
    let show_preview = show_preview && config.preview.auto_refresh;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = Session::new(config).with_events(tx);

    let mut document = super::read_template(path)?;
    document.language_id = TEMPLATE_LANGUAGE_ID.to_string();
    let id = document.id.clone();
    let mut last_text = document.text.clone();

    println!("{} Watching {} (Ctrl-C to stop)", "→".cyan(), path.display());
    session.did_open(document);

    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);
    let mut passes = 0;

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            Some(event) = rx.recv() => {
                passes += 1;
                print_pass(&event);
                if show_preview {
                    if let Some(preview) = session.preview(&id, &ValueMap::new()) {
                        print_preview(&preview, &event.diagnostics);
                    }
                }
            }
            _ = ticker.tick() => {
                match std::fs::read(path) {
                    Ok(bytes) => {
                        let text = Document::from_bytes(id.as_str(), TEMPLATE_LANGUAGE_ID, &bytes).text;
                        if text != last_text {
                            last_text = text.clone();
                            session.did_change(&id, text);
                        }
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to read watched file");
                    }
                }
            }
        }
    }

    session.did_close(&id);
    println!("{} Stopped watching {}", "→".cyan(), path.display());
    Ok(passes)
}

fn print_pass(event: &ValidationEvent) {
    let (errors, warnings, information) = count_by_severity(&event.diagnostics);
    println!();
    println!(
        "{} version {}",
        "[validated]".dimmed(),
        event.version.to_string().bold()
    );
    for diagnostic in &event.diagnostics {
        println!("{}", format_diagnostic(diagnostic));
    }
    println!("{}", format_summary(errors, warnings, information));
}
