//! Decides when the remote inventory is asked for data and turns user
//! mutation triggers into requests.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::dashboard::bus::BusSink;
use crate::dashboard::request::Request;
use crate::dashboard::state::AppState;
use crate::shutdown::ShutdownHandle;

/// Heartbeat between two `sites` polls.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

pub type RequestStream = mpsc::UnboundedReceiver<Request>;

/// Emits request descriptions; never performs I/O.
#[derive(Clone)]
pub struct RequestScheduler {
    requests: mpsc::UnboundedSender<Request>,
    bus: BusSink,
}

impl RequestScheduler {
    /// `bus` is used to read the input field at trigger time.
    pub fn new(bus: BusSink) -> (Self, RequestStream) {
        let (requests, stream) = mpsc::unbounded_channel();
        (Self { requests, bus }, stream)
    }

    /// Poll `sites` now and then every [`POLL_INTERVAL`] until shutdown.
    pub fn spawn_polling(&self, shutdown: ShutdownHandle) -> JoinHandle<()> {
        let scheduler = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(POLL_INTERVAL);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = shutdown.wait() => break,
                    _ = interval.tick() => scheduler.refresh(),
                }
            }
            tracing::debug!("polling stopped");
        })
    }

    /// Out-of-band `sites` poll.
    pub fn refresh(&self) {
        send(&self.requests, Request::fetch_sites());
    }

    /// Post the input field's value as it stands once every event already on
    /// the bus has been applied. The value is sent verbatim, empty included.
    pub fn submit_add(&self) {
        let requests = self.requests.clone();
        self.bus.sample(move |state: &AppState| {
            send(&requests, Request::add_site(state.add_site_input.clone()));
        });
    }

    /// Delete the selected site, if the selection still names a listed site.
    pub fn submit_remove(&self) {
        let requests = self.requests.clone();
        self.bus.sample(move |state: &AppState| match state.selected_site() {
            Some(site) => send(&requests, Request::remove_site(site.key.clone())),
            None => tracing::debug!("remove trigger ignored, no site selected"),
        });
    }
}

fn send(requests: &mpsc::UnboundedSender<Request>, request: Request) {
    let category = request.category;
    if requests.send(request).is_err() {
        tracing::trace!(category = %category, "request stream closed");
    }
}
