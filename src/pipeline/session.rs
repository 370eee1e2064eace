//! Background session runner.
//!
//! Pumps frames from a [`FrameSource`] into a [`FrameProcessor`] on a
//! dedicated thread at a target rate. The render side reads results through
//! an [`OverlayHandle`] on its own schedule; if it cannot keep up, older
//! frames are simply overwritten (latest frame wins, no queue).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use thiserror::Error;

use crate::frame::{ColorEffect, FrameSource, SourceError};

use super::processor::{FrameProcessor, OverlayHandle};

/// Commands sent to the session thread.
pub enum SessionCommand {
    Stop,
}

/// Errors that can occur while starting or running a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The frame source failed; fatal, there is nothing to process
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The session thread ended before reporting its dimensions
    #[error("session thread terminated unexpectedly")]
    Terminated,
}

/// A running frame-processing session.
///
/// Owns the background thread that drives the pipeline. Dropping the
/// session stops the thread.
pub struct PipelineSession {
    overlay: OverlayHandle,
    thread: Option<JoinHandle<()>>,
    command_tx: Option<Sender<SessionCommand>>,
    stop_signal: Arc<AtomicBool>,
    dimensions: (u32, u32),
}

impl PipelineSession {
    /// Open the source and start pumping frames at `fps`.
    ///
    /// The source is opened inside the session thread; this call blocks
    /// until the source reports its negotiated dimensions or fails.
    pub fn start<S: FrameSource + 'static>(
        mut source: S,
        effect: ColorEffect,
        fps: u32,
    ) -> Result<Self, SessionError> {
        let stop_signal = Arc::new(AtomicBool::new(false));
        let (command_tx, command_rx) = mpsc::channel();
        let (info_tx, info_rx) = mpsc::channel::<Result<(u32, u32), SourceError>>();

        let processor = FrameProcessor::new(effect);
        let overlay = processor.handle();
        let stop = Arc::clone(&stop_signal);

        let thread = std::thread::spawn(move || {
            if let Err(e) = source.open(effect) {
                let _ = info_tx.send(Err(e));
                return;
            }
            let dims = match source.dimensions() {
                Some(d) => d,
                None => {
                    let _ = info_tx.send(Err(SourceError::OpenFailed(
                        "source reported no dimensions".to_string(),
                    )));
                    return;
                }
            };
            let _ = info_tx.send(Ok(dims));

            run_session_loop(source, processor, stop, command_rx, fps);
        });

        match info_rx.recv() {
            Ok(Ok(dimensions)) => {
                log::info!(
                    "session started: {}x{} at {} fps, effect {:?}",
                    dimensions.0,
                    dimensions.1,
                    fps,
                    effect
                );
                Ok(Self {
                    overlay,
                    thread: Some(thread),
                    command_tx: Some(command_tx),
                    stop_signal,
                    dimensions,
                })
            }
            Ok(Err(e)) => {
                let _ = thread.join();
                Err(SessionError::Source(e))
            }
            Err(_) => {
                let _ = thread.join();
                Err(SessionError::Terminated)
            }
        }
    }

    /// Reader handle for the render side.
    pub fn overlay(&self) -> OverlayHandle {
        self.overlay.clone()
    }

    /// Dimensions the source negotiated at startup.
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// Whether the session thread is still running.
    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the session thread and wait for it to finish.
    pub fn stop(&mut self) {
        self.stop_signal.store(true, Ordering::SeqCst);
        if let Some(tx) = self.command_tx.take() {
            let _ = tx.send(SessionCommand::Stop);
        }
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for PipelineSession {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Frame-delivery loop running on the session thread.
fn run_session_loop<S: FrameSource>(
    mut source: S,
    mut processor: FrameProcessor,
    stop: Arc<AtomicBool>,
    rx: Receiver<SessionCommand>,
    fps: u32,
) {
    let interval = Duration::from_secs_f64(1.0 / fps.max(1) as f64);

    while !stop.load(Ordering::Relaxed) {
        if let Ok(SessionCommand::Stop) = rx.try_recv() {
            break;
        }

        match source.next_frame() {
            Ok(frame) => {
                if let Err(e) = processor.process_frame(&frame.data, frame.width, frame.height) {
                    log::error!("dropping frame: {}", e);
                    break;
                }
            }
            Err(SourceError::StreamEnded) => {
                log::info!("frame source ended");
                break;
            }
            Err(e) => {
                log::error!("frame source failed: {}", e);
                break;
            }
        }

        // A slow frame just delays the next overlay update
        std::thread::sleep(interval);
    }

    processor.stop();
}
