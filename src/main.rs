use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context};
use mapruler::{init_logging, replay, RulerController, SettingsPersistence, BUILD_DATE, VERSION};

const USAGE: &str = "usage: mapruler [--settings <path>] [<events.jsonl>]";

struct Args {
    settings: Option<PathBuf>,
    script: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut args = Args {
        settings: None,
        script: None,
    };
    let mut iter = std::env::args_os().skip(1);

    while let Some(arg) = iter.next() {
        match arg.to_str() {
            Some("-h") | Some("--help") => {
                println!("{USAGE}");
                return Ok(None);
            }
            Some("-V") | Some("--version") => {
                println!("mapruler {VERSION} (built {BUILD_DATE})");
                return Ok(None);
            }
            Some("--settings") => {
                let path = iter.next().context("--settings needs a path")?;
                args.settings = Some(PathBuf::from(path));
            }
            _ if args.script.is_none() => args.script = Some(PathBuf::from(&arg)),
            _ => bail!("unexpected argument {:?}\n{USAGE}", arg),
        }
    }

    Ok(Some(args))
}

fn main() -> anyhow::Result<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    // Initialize logging
    init_logging()?;
    tracing::info!("MapRuler {} (built {})", VERSION, BUILD_DATE);

    let mut settings = match args.settings {
        Some(path) => SettingsPersistence::open(path),
        None => SettingsPersistence::open_default()?,
    };
    let mut controller = RulerController::from_saved(&settings.saved_state());

    let stdout = io::stdout();
    let result = match &args.script {
        Some(path) => File::open(path)
            .with_context(|| format!("cannot open event script {}", path.display()))
            .and_then(|file| replay(&mut controller, BufReader::new(file), stdout.lock())),
        None => replay(&mut controller, io::stdin().lock(), stdout.lock()),
    };

    // Whatever was applied before a read failure is still saved
    settings.store(&controller.saved_state());
    settings
        .save()
        .with_context(|| format!("cannot save settings to {}", settings.path().display()))?;

    let summary = result?;
    tracing::info!(
        events = summary.events,
        skipped = summary.skipped,
        calibrations = summary.calibrations,
        "Event script finished"
    );

    Ok(())
}
