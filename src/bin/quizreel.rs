use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use quizreel::services::{
    DirectoryPublisher, JsonQuizSource, OpenAiClient, OpenAiQuizSource, OpenAiSpeech, Publisher,
    QuizSource,
};
use quizreel::{
    Automation, Config, CorePipeline, DurationProbe as _, FfprobeDurationProbe, FfmpegCompositor,
    FrameRenderer, Quiz, QuizError, Role, RunId, RunSlot, Workspace, segment_seconds,
};

#[derive(Parser, Debug)]
#[command(name = "quizreel", version, about = "Render narrated quiz shorts")]
struct Cli {
    /// JSON config file; defaults apply to anything it leaves out.
    #[arg(long, global = true, env = "QUIZREEL_CONFIG")]
    config: Option<PathBuf>,

    /// More log output (`-v` debug, `-vv` trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the question and answer frames of a quiz as PNGs.
    Frames(FramesArgs),
    /// Print the measured duration and display segment of audio files.
    Probe(ProbeArgs),
    /// Build a video from a quiz and existing narration audio (requires `ffmpeg`/`ffprobe`).
    Compose(ComposeArgs),
    /// Generate quizzes, narrate them and build videos end to end.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Quiz JSON.
    #[arg(long)]
    quiz: PathBuf,

    /// Directory receiving `question.png` and `answer.png`.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct ProbeArgs {
    #[arg(required = true)]
    audio: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Quiz JSON.
    #[arg(long)]
    quiz: PathBuf,

    #[arg(long)]
    question_audio: PathBuf,

    #[arg(long)]
    answer_audio: PathBuf,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Number of videos to produce, one after another.
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Use this quiz JSON instead of generating one.
    #[arg(long)]
    quiz: Option<PathBuf>,

    /// Generate quizzes about this topic instead of a random category.
    #[arg(long, conflicts_with = "quiz")]
    category: Option<String>,

    /// Skip publishing even if `publish_dir` is configured.
    #[arg(long)]
    no_publish: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = dispatch(cli);
    if let Err(e) = &result
        && let Some(diag) = e.downcast_ref::<QuizError>().and_then(QuizError::diagnostics)
        && !diag.trim().is_empty()
    {
        eprintln!("encoder output:\n{diag}");
    }
    result
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "quizreel=info",
        1 => "quizreel=debug",
        _ => "quizreel=trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Frames(args) => cmd_frames(&config, args),
        Command::Probe(args) => cmd_probe(&config, args),
        Command::Compose(args) => cmd_compose(&config, args),
        Command::Run(args) => cmd_run(&config, args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(p) => Ok(Config::from_path(p)?),
        None => {
            let cfg = Config::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }
}

fn cmd_frames(config: &Config, args: FramesArgs) -> anyhow::Result<()> {
    let quiz = Quiz::from_path(&args.quiz)?;
    let renderer = FrameRenderer::new(config.canvas, config.style.clone())?;
    let frames = renderer.render_pair(
        &quiz,
        &args.out_dir.join("question.png"),
        &args.out_dir.join("answer.png"),
    )?;
    for frame in &frames {
        eprintln!("wrote {}", frame.path.display());
    }
    Ok(())
}

fn cmd_probe(config: &Config, args: ProbeArgs) -> anyhow::Result<()> {
    let probe = FfprobeDurationProbe::new(&config.ffprobe_path);
    for path in &args.audio {
        let seconds = probe.probe_seconds(path)?;
        let segment = segment_seconds(seconds)?;
        println!("{}\t{seconds:.3}s\t{segment}s", path.display());
    }
    Ok(())
}

fn cmd_compose(config: &Config, args: ComposeArgs) -> anyhow::Result<()> {
    let quiz = Quiz::from_path(&args.quiz)?;
    let renderer = FrameRenderer::new(config.canvas, config.style.clone())?;
    let probe = FfprobeDurationProbe::new(&config.ffprobe_path);
    let compositor = FfmpegCompositor::new(config.encode.clone());

    let workspace = Workspace::create(&config.workspace_root, RunId::generate())?;
    let out = CorePipeline::new(&renderer, &probe, &compositor).run(
        &workspace,
        &quiz,
        &args.question_audio,
        &args.answer_audio,
        &args.out,
    )?;
    if !config.keep_workspace {
        workspace.cleanup();
    }

    let plan = out.plan;
    eprintln!(
        "wrote {} ({}s = {}s {} + {}s {})",
        out.video.display(),
        plan.total_seconds(),
        plan.question.seconds,
        Role::Question,
        plan.answer.seconds,
        Role::Answer,
    );
    Ok(())
}

fn cmd_run(config: &Config, args: RunArgs) -> anyhow::Result<()> {
    let client = OpenAiClient::from_env(&config.openai)?;
    let speech = OpenAiSpeech::new(client.clone(), config.openai.clone());
    let source: Box<dyn QuizSource> = match (&args.quiz, &args.category) {
        (Some(path), _) => Box::new(JsonQuizSource::new(path)),
        (None, Some(category)) => Box::new(
            OpenAiQuizSource::new(client, config.openai.clone()).with_category(category),
        ),
        (None, None) => Box::new(OpenAiQuizSource::new(client, config.openai.clone())),
    };
    let publisher = match &config.publish_dir {
        Some(dir) if !args.no_publish => Some(DirectoryPublisher::new(dir)),
        _ => None,
    };

    let renderer = FrameRenderer::new(config.canvas, config.style.clone())?;
    let probe = FfprobeDurationProbe::new(&config.ffprobe_path);
    let compositor = FfmpegCompositor::new(config.encode.clone());
    if !compositor.is_available() {
        anyhow::bail!(
            "'{}' is not runnable; install ffmpeg or set encode.ffmpeg_path",
            config.encode.ffmpeg_path.display()
        );
    }

    let slot = RunSlot::new();
    let automation = Automation::new(
        config,
        quizreel::pipeline::Services {
            source: source.as_ref(),
            speech: &speech,
            frames: &renderer,
            probe: &probe,
            compositor: &compositor,
            publisher: publisher.as_ref().map(|p| p as &dyn Publisher),
        },
        &slot,
    );

    let summaries = automation
        .run_many(args.count)
        .context("generation run failed")?;
    for s in &summaries {
        println!("{}\t{}\t{}", s.run_id, s.output.video.display(), s.quiz.title);
        if let Some(receipt) = &s.published {
            eprintln!("published {}", receipt.location.display());
        }
    }
    Ok(())
}
