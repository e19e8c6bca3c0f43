use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, Notify, broadcast};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use camera::FrameSource;

use crate::config::{MatchMode, MonitorConfig, NoFaceBehavior};
use crate::event::{AccessEvent, AccessKind, StatsSnapshot};
use crate::traits::{Embedder, Matcher};

/// Lifecycle state of a capture session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No camera attached.
    Idle,
    /// Camera attached, polling loop not scheduled.
    CameraActive,
    /// Camera attached and the polling loop scheduled.
    Monitoring,
}

/// Owns a camera and drives the capture, embed, match and publish cycle.
///
/// Monitoring cannot outlive the camera: releasing the device always stops
/// the loop first. A cycle that is already awaiting the matcher when the
/// loop stops is allowed to finish and may publish one final event, but it
/// never reschedules itself.
pub struct CaptureSession {
    config: MonitorConfig,
    embedder: Arc<dyn Embedder>,
    matcher: Arc<dyn Matcher>,
    camera: Option<Arc<AsyncMutex<Box<dyn FrameSource>>>>,
    monitoring: Arc<AtomicBool>,
    stop: Arc<Notify>,
    last_event: Arc<Mutex<Option<AccessEvent>>>,
    stats: Arc<Mutex<Option<StatsSnapshot>>>,
    events: broadcast::Sender<AccessEvent>,
    worker: Option<JoinHandle<()>>,
}

impl CaptureSession {
    /// Broadcast capacity for published events.
    pub const EVENT_CAPACITY: usize = 16;

    pub fn new(
        config: MonitorConfig,
        embedder: Arc<dyn Embedder>,
        matcher: Arc<dyn Matcher>,
    ) -> Self {
        let (events, _) = broadcast::channel(Self::EVENT_CAPACITY);
        Self {
            config,
            embedder,
            matcher,
            camera: None,
            monitoring: Arc::new(AtomicBool::new(false)),
            stop: Arc::new(Notify::new()),
            last_event: Arc::new(Mutex::new(None)),
            stats: Arc::new(Mutex::new(None)),
            events,
            worker: None,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.camera.is_none() {
            SessionState::Idle
        } else if self.monitoring.load(Ordering::SeqCst) {
            SessionState::Monitoring
        } else {
            SessionState::CameraActive
        }
    }

    /// Subscribe to every event future cycles publish.
    pub fn subscribe(&self) -> broadcast::Receiver<AccessEvent> {
        self.events.subscribe()
    }

    /// The most recent match outcome, if monitoring has produced one.
    pub fn last_event(&self) -> Option<AccessEvent> {
        self.last_event.lock().unwrap().clone()
    }

    /// Counters from the last statistics refresh.
    pub fn stats(&self) -> Option<StatsSnapshot> {
        *self.stats.lock().unwrap()
    }

    /// Attach an opened frame source. No-op when a camera is already
    /// attached; failures to open one stay with the caller.
    pub fn start_camera(&mut self, source: Box<dyn FrameSource>) {
        if self.camera.is_some() {
            debug!("camera already active");
            return;
        }
        info!(device = %source.describe(), "camera started");
        self.camera = Some(Arc::new(AsyncMutex::new(source)));
    }

    /// Release the device. Monitoring cannot continue without a camera, so
    /// the loop is stopped first. Safe to call repeatedly.
    pub fn stop_camera(&mut self) {
        self.stop_monitoring();
        if self.camera.take().is_some() {
            info!("camera stopped");
        }
    }

    /// Schedule the polling loop and run the first cycle immediately.
    /// No-op without a camera or when already monitoring.
    pub fn start_monitoring(&mut self) {
        let Some(camera) = self.camera.clone() else {
            debug!("start_monitoring ignored: no active camera");
            return;
        };
        if self.monitoring.load(Ordering::SeqCst) {
            debug!("start_monitoring ignored: already monitoring");
            return;
        }
        // fresh flag and signal per run, so a worker from a previous run
        // that is still winding down cannot observe this one's state
        self.monitoring = Arc::new(AtomicBool::new(true));
        self.stop = Arc::new(Notify::new());
        info!(interval = ?self.config.poll_interval, "monitoring started");
        let worker = Worker {
            config: self.config,
            embedder: self.embedder.clone(),
            matcher: self.matcher.clone(),
            camera,
            monitoring: self.monitoring.clone(),
            stop: self.stop.clone(),
            last_event: self.last_event.clone(),
            stats: self.stats.clone(),
            events: self.events.clone(),
        };
        self.worker = Some(tokio::spawn(worker.run()));
    }

    /// Stop scheduling cycles, cancel the pending delay and clear the last
    /// event. A cycle already in flight finishes on its own.
    pub fn stop_monitoring(&mut self) {
        if self.monitoring.swap(false, Ordering::SeqCst) {
            info!("monitoring stopped");
        }
        self.stop.notify_waiters();
        self.last_event.lock().unwrap().take();
        self.worker = None;
    }

    /// Stop everything, wait for the worker to wind down and release the
    /// camera.
    pub async fn close(&mut self) {
        self.monitoring.store(false, Ordering::SeqCst);
        self.stop.notify_waiters();
        if let Some(worker) = self.worker.take() {
            let _ = worker.await;
        }
        self.last_event.lock().unwrap().take();
        self.camera = None;
    }

    /// Capture a fresh frame and register a confirmed entry/exit for
    /// `usuario_id`, carrying the confidence of the last match.
    pub async fn confirm_access(&self, usuario_id: i64, kind: AccessKind) -> anyhow::Result<()> {
        let Some(camera) = self.camera.clone() else {
            anyhow::bail!("no active camera");
        };
        let frame = camera.lock().await.grab().await?;
        let confidence = self.last_event().map(|e| e.confidence).unwrap_or(0.0);
        self.matcher
            .register(usuario_id, kind, confidence, &frame.to_data_url())
            .await
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.monitoring.store(false, Ordering::SeqCst);
        self.stop.notify_waiters();
    }
}

struct Worker {
    config: MonitorConfig,
    embedder: Arc<dyn Embedder>,
    matcher: Arc<dyn Matcher>,
    camera: Arc<AsyncMutex<Box<dyn FrameSource>>>,
    monitoring: Arc<AtomicBool>,
    stop: Arc<Notify>,
    last_event: Arc<Mutex<Option<AccessEvent>>>,
    stats: Arc<Mutex<Option<StatsSnapshot>>>,
    events: broadcast::Sender<AccessEvent>,
}

impl Worker {
    /// The monitoring flag is checked before every cycle and again before
    /// the delay, and the delay races the stop signal. A stop request never
    /// waits out a full interval, and an in-flight matcher call is never
    /// torn down.
    async fn run(self) {
        loop {
            if !self.monitoring.load(Ordering::SeqCst) {
                break;
            }
            self.cycle().await;
            if !self.monitoring.load(Ordering::SeqCst) {
                break;
            }
            tokio::select! {
                _ = tokio::time::sleep(self.config.poll_interval) => {}
                _ = self.stop.notified() => break,
            }
        }
        debug!("capture loop exited");
    }

    async fn cycle(&self) {
        let frame = {
            let mut camera = self.camera.lock().await;
            match camera.grab().await {
                Ok(frame) => frame,
                Err(e) => {
                    warn!(error = %e, "frame capture failed");
                    return;
                }
            }
        };
        let embedding = match self.embedder.embed(&frame).await {
            Ok(embedding) => embedding,
            Err(e) => {
                debug!(error = %e, "embedding extraction failed");
                None
            }
        };
        let Some(embedding) = embedding else {
            if self.config.on_no_face == NoFaceBehavior::RecordUnrecognized {
                self.publish(AccessEvent::no_face());
            }
            return;
        };
        let imagen = frame.to_data_url();
        match self.config.mode {
            MatchMode::AccessControl => {
                match self.matcher.decide_access(&embedding, &imagen).await {
                    Ok(outcome) => {
                        self.publish(AccessEvent::from_outcome(outcome));
                        self.refresh_stats().await;
                    }
                    // indistinguishable from a non-match downstream; the
                    // next cycle retries
                    Err(e) => warn!(error = %e, "access decision failed"),
                }
            }
            MatchMode::Recognition { threshold } => {
                match self.matcher.recognize(&embedding, threshold).await {
                    Ok(outcome) => self.publish(AccessEvent::from_outcome(outcome)),
                    Err(e) => warn!(error = %e, "recognition failed"),
                }
            }
        }
    }

    async fn refresh_stats(&self) {
        match self.matcher.stats().await {
            Ok(snapshot) => {
                *self.stats.lock().unwrap() = Some(snapshot);
            }
            Err(e) => warn!(error = %e, "statistics refresh failed"),
        }
    }

    fn publish(&self, event: AccessEvent) {
        *self.last_event.lock().unwrap() = Some(event.clone());
        let _ = self.events.send(event);
    }
}
