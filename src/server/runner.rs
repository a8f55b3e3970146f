//! Worker-pool server loop
//!
//! One `tiny_http::Server` is shared by a fixed number of worker threads.
//! Each worker polls for requests with a short timeout so a shutdown flag is
//! noticed without needing to unblock the listener.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::Context as _;
use log::{debug, error, info, warn};
use tiny_http::Server;

use super::tiny_http::handle_api_request;
use crate::core::ports::TaskRepository;
use crate::core::services::TaskService;

/// How long a worker waits for a request before re-checking the shutdown flag
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// A bound HTTP server ready to run
pub struct ApiServer<R> {
    server: Arc<Server>,
    service: Arc<TaskService<R>>,
    workers: usize,
    stop: Arc<AtomicBool>,
}

impl<R> std::fmt::Debug for ApiServer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiServer")
            .field("addr", &self.server.server_addr().to_ip())
            .field("workers", &self.workers)
            .finish_non_exhaustive()
    }
}

/// Stops a running [`ApiServer`] from another thread
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    stop: Arc<AtomicBool>,
}

impl ShutdownHandle {
    /// Ask every worker to exit after its current request
    pub fn shutdown(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

impl<R: TaskRepository + 'static> ApiServer<R> {
    /// Bind to `addr` (e.g. `127.0.0.1:3000`; port 0 picks a free port)
    pub fn bind(addr: &str, service: TaskService<R>, workers: usize) -> anyhow::Result<Self> {
        let server = Server::http(addr)
            .map_err(|e| anyhow::anyhow!("Failed to start server on {addr}: {e}"))?;

        Ok(Self {
            server: Arc::new(server),
            service: Arc::new(service),
            workers: workers.max(1),
            stop: Arc::new(AtomicBool::new(false)),
        })
    }

    /// The socket address actually bound
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// A handle that can stop this server once it runs
    #[must_use]
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            stop: Arc::clone(&self.stop),
        }
    }

    /// Serve requests until shut down
    ///
    /// Blocks the calling thread until every worker has exited.
    pub fn run(self) -> anyhow::Result<()> {
        match self.local_addr() {
            Some(addr) => info!("Listening on http://{addr} with {} worker(s)", self.workers),
            None => info!("Listening with {} worker(s)", self.workers),
        }

        let mut handles = Vec::with_capacity(self.workers);
        for index in 0..self.workers {
            let server = Arc::clone(&self.server);
            let service = Arc::clone(&self.service);
            let stop = Arc::clone(&self.stop);

            let handle = thread::Builder::new()
                .name(format!("taskflow-worker-{index}"))
                .spawn(move || worker_loop(index, &server, &service, &stop))
                .with_context(|| format!("Failed to spawn worker {index}"))?;
            handles.push(handle);
        }

        for handle in handles {
            if handle.join().is_err() {
                error!("A worker thread panicked");
            }
        }

        info!("Server stopped");
        Ok(())
    }
}

fn worker_loop<R: TaskRepository>(
    index: usize,
    server: &Server,
    service: &TaskService<R>,
    stop: &AtomicBool,
) {
    debug!("Worker {index} started");

    while !stop.load(Ordering::SeqCst) {
        match server.recv_timeout(POLL_INTERVAL) {
            Ok(Some(mut request)) => {
                let response = handle_api_request(service, &mut request);
                if let Err(e) = request.respond(response) {
                    warn!("Failed to send response: {e}");
                }
            },
            Ok(None) => {},
            Err(e) => {
                error!("Worker {index} stopped accepting requests: {e}");
                break;
            },
        }
    }

    debug!("Worker {index} exiting");
}
