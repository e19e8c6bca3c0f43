use clap::Parser;
use garita::{GateMatcher, SeetaEmbedder, WatchMode, monitor_config};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Base URL of the condominium backend API
    #[arg(long, env = "GARITA_API", default_value = "http://localhost:8000/api")]
    api: String,

    /// Glob pattern of JPEG frames acting as the entrance camera
    #[arg(long, env = "GARITA_FRAMES", default_value = "frames/*.jpg")]
    frames: String,

    /// Path to the SeetaFace frontal detection model
    #[arg(long, env = "GARITA_MODEL", default_value = "seeta_fd_frontal_v1.0.bin")]
    model: String,

    /// Which entrance screen to emulate
    #[arg(long, value_enum, default_value = "access")]
    mode: WatchMode,

    /// Confidence threshold for recognition mode
    #[arg(long, default_value_t = 0.7)]
    threshold: f32,

    /// Override the polling interval, in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Capture width
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Capture height
    #[arg(long, default_value_t = 480)]
    height: u32,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let extractor = vision::FaceExtractor::from_model_file(&cli.model)?;
    let source = camera::GlobCamera::open(
        &cli.frames,
        camera::CameraConfig {
            width: cli.width,
            height: cli.height,
        },
    )?;
    let client = gate::GateClient::new(cli.api.clone());

    let mut session = monitor::CaptureSession::new(
        monitor_config(cli.mode, cli.threshold, cli.interval_ms),
        Arc::new(SeetaEmbedder(extractor)),
        Arc::new(GateMatcher(client)),
    );
    let mut events = session.subscribe();
    session.start_camera(Box::new(source));
    session.start_monitoring();

    let printer = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match &event.identity {
                Some(identity) => info!(
                    kind = ?event.kind,
                    confidence = event.confidence,
                    "{}: {}",
                    identity.display_name,
                    event.message
                ),
                None => info!(
                    kind = ?event.kind,
                    confidence = event.confidence,
                    "{}",
                    event.message
                ),
            }
        }
    });

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    session.close().await;
    printer.abort();
    if let Some(stats) = session.stats() {
        info!(
            enrolled = stats.enrolled_faces,
            today = stats.accesses_today,
            total = stats.total_accesses,
            "final statistics"
        );
    }
    Ok(())
}
