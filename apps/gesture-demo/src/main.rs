mod script;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tactile_core::{Clock, Millis, MonotonicClock};
use tactile_foundation::{GestureConfig, GestureEvent, GestureKind, GestureRecognizer};

use script::ScriptStep;

#[derive(Debug, Parser)]
#[command(name = "gesture-demo")]
#[command(about = "Replays a contact script through the Tactile gesture recognizer")]
struct Cli {
    /// Contact script with one `<phase> <x> <y> <t>` sample per line.
    /// The built-in script is used when omitted.
    script: Option<PathBuf>,
    /// Only print these gestures, e.g. `--only click,doubleClick`.
    #[arg(long, value_delimiter = ',')]
    only: Vec<GestureKind>,
}

impl Cli {
    fn kinds(&self) -> Vec<GestureKind> {
        if self.only.is_empty() {
            GestureKind::ALL.to_vec()
        } else {
            self.only.clone()
        }
    }
}

fn describe(event: &GestureEvent) -> String {
    match *event {
        GestureEvent::Scroll { position, dx, dy } => {
            format!("at ({}, {}) by ({:+}, {:+})", position.x, position.y, dx, dy)
        }
        GestureEvent::Fling { down, up, vx, vy } => format!(
            "from ({}, {}) to ({}, {}) in {}ms, velocity ({:.2}, {:.2})",
            down.x,
            down.y,
            up.x,
            up.y,
            up.t.saturating_sub(down.t),
            vx,
            vy
        ),
        _ => {
            let position = event.position();
            format!("at ({}, {})", position.x, position.y)
        }
    }
}

/// Sleeps until `target` on the script time line, firing timers as their
/// deadlines pass.
fn wait_until(clock: &MonotonicClock, recognizer: &mut GestureRecognizer, target: Millis) {
    while let Some(deadline) = recognizer.next_deadline() {
        if deadline > target {
            break;
        }
        sleep_until(clock, deadline);
        recognizer.advance_to(deadline);
    }
    sleep_until(clock, target);
}

fn sleep_until(clock: &MonotonicClock, target: Millis) {
    let remaining = target.saturating_sub(clock.now_millis());
    if remaining > 0 {
        std::thread::sleep(Duration::from_millis(remaining));
    }
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let source = match &cli.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading contact script {}", path.display()))?,
        None => script::BUILTIN.to_string(),
    };
    let steps: Vec<ScriptStep> = script::parse(&source)?;

    println!("=== Tactile gesture demo ===");
    println!(
        "Replaying {} contact samples from {}",
        steps.len(),
        cli.script
            .as_deref()
            .map_or_else(|| "the built-in script".into(), |path| path.display().to_string())
    );

    let clock = MonotonicClock::new();
    let mut recognizer = GestureRecognizer::new(GestureConfig::default());
    for kind in cli.kinds() {
        recognizer.on(kind, move |event| {
            println!("[{:>5}ms] {:<11} {}", clock.now_millis(), kind, describe(event));
        });
    }

    let mut rejected = 0usize;
    for step in &steps {
        wait_until(&clock, &mut recognizer, step.sample.t);
        if let Err(err) = recognizer.handle(step.phase, step.sample) {
            log::warn!("{} sample at {}ms rejected: {}", step.phase, step.sample.t, err);
            rejected += 1;
        }
    }
    while let Some(deadline) = recognizer.next_deadline() {
        wait_until(&clock, &mut recognizer, deadline);
    }

    log::info!(
        "done after {}ms, {} sample(s) rejected",
        clock.now_millis(),
        rejected
    );
    Ok(())
}
