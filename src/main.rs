use anyhow::{Context, Result};
use body_routine::{
    feedback, projection::Projector, replay::FrameReader, report, Geometric, Thresholds, Tracker,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
use structopt::StructOpt;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;

#[derive(structopt::StructOpt)]
struct Opt {
    /// Recorded skeleton frames, one JSON object per line. Reads stdin when
    /// omitted.
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    #[structopt(flatten)]
    thresholds: Thresholds,

    /// Attach depth-image pixel coordinates to every guide marker.
    #[structopt(short, long)]
    project: bool,

    /// Consecutive frames a body may be missing before its session is
    /// dropped.
    #[structopt(long, default_value = "30")]
    max_missed_frames: u32,

    #[structopt(short, long, default_value = "info", env = "RUST_LOG")]
    log_level: tracing_subscriber::filter::EnvFilter,

    #[structopt(short, long)]
    show_progress: bool,
}

fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn BufRead + Send>> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    })
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .with(opt.log_level),
    )?;

    let input = open_input(opt.input.as_ref())?;
    info!(
        message = "replaying frames",
        input = ?opt.input,
        thresholds = ?opt.thresholds
    );
    info!(feedback = feedback::constants::STARTING);

    let running = Arc::new(AtomicBool::new(true));
    let running_ctrl_c = running.clone();

    ctrlc::set_handler(move || {
        running_ctrl_c.store(false, Ordering::SeqCst);
    })
    .context("failed setting Ctrl-C handler")?;

    let mut tracker =
        Tracker::with_max_missed_frames(Geometric::new(opt.thresholds), opt.max_missed_frames);
    let projector = if opt.project {
        Some(Projector::default())
    } else {
        None
    };

    let pb_frames = if opt.show_progress {
        Some(
            ProgressBar::new_spinner().with_style(
                ProgressStyle::default_spinner()
                    .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
                    .template("{prefix:.bold.dim} {spinner} {wide_msg}"),
            ),
        )
    } else {
        None
    };

    let reader = FrameReader::spawn(input, running.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut frame_num = 0;

    while let Some(record) = reader.next_frame(&running) {
        let reports =
            match report::frame_reports(&mut tracker, frame_num, &record, projector.as_ref()) {
                Ok(reports) => reports,
                Err(e) => {
                    warn!(frame = frame_num, error = %e, "skipping frame");
                    frame_num += 1;
                    continue;
                }
            };

        for report in &reports {
            serde_json::to_writer(&mut out, report).context("failed writing report")?;
            writeln!(out).context("failed writing report")?;
        }

        if let Some(pb_frames) = pb_frames.as_ref() {
            let repetitions = reports
                .iter()
                .map(|report| report.repetitions)
                .max()
                .unwrap_or_default();
            pb_frames.set_message(format!(
                "frame: {}, bodies: {}, repetitions: {}",
                frame_num,
                tracker.len(),
                repetitions
            ));
            pb_frames.inc(1);
        }
        frame_num += 1;
    }

    if let Some(pb_frames) = pb_frames.as_ref() {
        pb_frames.finish_and_clear();
    }

    if running.load(Ordering::SeqCst) {
        reader.finish().context("failed reading frames")?;
    } else {
        // The reader may be parked on idle input; it ends with the process.
        info!(frames = frame_num, "interrupted");
    }

    for body in tracker.bodies() {
        if let Some(session) = tracker.session(body) {
            info!(body, repetitions = session.repetitions(), "session finished");
        }
    }

    Ok(())
}
