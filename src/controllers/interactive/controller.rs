use crate::controllers::explorer::session::ExplorerSession;
use crate::controllers::interactive::commands::ExplorerCommand;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::failed_render::FailedRender;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use log::{debug, error, info, warn};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Commands waiting behind the one being rendered. Submissions beyond this are rejected.
pub const MAX_PENDING_COMMANDS: usize = 16;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    pending: Mutex<VecDeque<(u64, ExplorerCommand)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

impl SharedState {
    fn pending(&self) -> MutexGuard<'_, VecDeque<(u64, ExplorerCommand)>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Applies commands to a single [`ExplorerSession`] on a dedicated thread.
///
/// Commands are queued and processed strictly in submission order; each one
/// renders to completion before the next is taken, so the view range is never
/// touched by two renders at once. Every accepted generation yields exactly one
/// [`RenderEvent`].
///
/// A `Render` submitted directly behind a pending `Render` is merged into it,
/// and at most [`MAX_PENDING_COMMANDS`] commands wait at once.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(
        session: ExplorerSession,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    ) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            pending: Mutex::new(VecDeque::new()),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared, session);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `command` and returns the generation its event will carry.
    ///
    /// Returns `None` when the queue is full and the command was dropped.
    pub fn submit(&self, command: ExplorerCommand) -> Option<u64> {
        let generation = {
            let mut pending = self.shared.pending();

            if let (ExplorerCommand::Render, Some((queued, ExplorerCommand::Render))) =
                (command, pending.back())
            {
                debug!("merged render into pending generation {}", queued);
                return Some(*queued);
            }

            if pending.len() >= MAX_PENDING_COMMANDS {
                warn!(
                    "command queue full ({} pending), dropping {:?}",
                    pending.len(),
                    command
                );
                return None;
            }

            let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
            pending.push_back((generation, command));
            generation
        };

        debug!("queued {:?} as generation {}", command, generation);
        self.shared.wake.notify_one();

        Some(generation)
    }

    /// Stops the worker once its current command finishes. Queued commands are dropped.
    pub fn shutdown(&mut self) {
        {
            // must be set under the queue lock to pair with the worker's wait
            let _pending = self.shared.pending();
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                error!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>, mut session: ExplorerSession) {
        loop {
            let (job_generation, command) = {
                let mut pending = shared.pending();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = pending.pop_front() {
                        break job;
                    }

                    pending = shared
                        .wake
                        .wait(pending)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let event = Self::run_command(&mut session, job_generation, command);

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
            shared.presenter_port.present(event);
        }
    }

    fn run_command(
        session: &mut ExplorerSession,
        generation: u64,
        command: ExplorerCommand,
    ) -> RenderEvent {
        let failed = |message: String| {
            error!("generation {}: {}", generation, message);
            RenderEvent::Error(FailedRender {
                generation,
                message,
            })
        };

        match command {
            ExplorerCommand::Render => {}
            ExplorerCommand::Reset => {
                session.reset();
            }
            ExplorerCommand::ZoomAt(pixel) => {
                if let Err(err) = session.zoom_at_pixel(pixel) {
                    return failed(err.to_string());
                }
            }
        }

        let range = session.range();
        let start = Instant::now();

        match session.render() {
            Ok(pixel_buffer) => {
                let render_duration = start.elapsed();
                info!(
                    "generation {} rendered in {:?}",
                    generation, render_duration
                );

                RenderEvent::Frame(FrameData {
                    generation,
                    pixel_buffer,
                    range,
                    render_duration,
                })
            }
            Err(err) => failed(err.to_string()),
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
