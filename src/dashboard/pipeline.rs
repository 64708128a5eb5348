use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::dashboard::bus::{BusSink, ReducerBus};
use crate::dashboard::intent::{DashboardIntent, InputEdit};
use crate::dashboard::router::{ResponseRouter, RoutedStreams};
use crate::dashboard::scheduler::RequestScheduler;
use crate::dashboard::store::{StateObserver, StateStore};
use crate::shutdown::ShutdownHandle;
use crate::transport::{Transport, TransportWorker};

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Poll `sites` again as soon as a mutation answers.
    pub refresh_after_mutation: bool,
}

impl From<&Config> for PipelineOptions {
    fn from(config: &Config) -> Self {
        Self {
            refresh_after_mutation: config.behavior.refresh_after_mutation,
        }
    }
}

/// A running dashboard: scheduler, transport, router, bus and store wired
/// together on the current runtime.
pub struct Dashboard {
    store: StateStore,
    scheduler: RequestScheduler,
    bus: BusSink,
    shutdown: ShutdownHandle,
    tasks: Vec<JoinHandle<()>>,
}

impl Dashboard {
    /// Wire every component and start polling. Must be called from within a
    /// tokio runtime.
    pub fn start<T: Transport>(
        transport: T,
        options: PipelineOptions,
        shutdown: ShutdownHandle,
    ) -> Self {
        let bus = ReducerBus::new();
        let sink = bus.sink();
        let store = StateStore::new();
        let (scheduler, requests) = RequestScheduler::new(sink.clone());
        let (router, streams) = ResponseRouter::new();
        let (responses_tx, responses_rx) = mpsc::unbounded_channel();

        let mut tasks = vec![
            TransportWorker::new(transport, responses_tx).spawn(requests),
            tokio::spawn(router.run(responses_rx)),
        ];

        let RoutedStreams {
            sites,
            add_site,
            remove_site,
        } = streams;
        tasks.push(sink.forward(sites, |sites| DashboardIntent::SitesFetched { sites }));
        tasks.push(forward_mutation(
            &sink,
            &scheduler,
            add_site,
            options.refresh_after_mutation,
            |message| DashboardIntent::AddSiteCompleted { message },
        ));
        tasks.push(forward_mutation(
            &sink,
            &scheduler,
            remove_site,
            options.refresh_after_mutation,
            |message| DashboardIntent::RemoveSiteCompleted { message },
        ));

        let driver = store.clone();
        let stream = bus.into_stream();
        tasks.push(tokio::spawn(async move { driver.drive(stream).await }));
        tasks.push(scheduler.spawn_polling(shutdown.clone()));

        tracing::info!(?options, "dashboard pipeline started");

        Self {
            store,
            scheduler,
            bus: sink,
            shutdown,
            tasks,
        }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn subscribe(&self) -> StateObserver {
        self.store.subscribe()
    }

    pub fn input_changed(&self, text: impl Into<String>) {
        self.bus.emit(DashboardIntent::AddSiteInputChanged { text: text.into() });
    }

    pub fn edit_input(&self, edit: InputEdit) {
        self.bus.emit(DashboardIntent::AddSiteInputEdited { edit });
    }

    pub fn move_selection(&self, delta: isize) {
        self.bus.emit(DashboardIntent::MoveSelection { delta });
    }

    pub fn submit_add(&self) {
        self.scheduler.submit_add();
    }

    pub fn submit_remove(&self) {
        self.scheduler.submit_remove();
    }

    pub fn refresh(&self) {
        self.scheduler.refresh();
    }

    /// Signal shutdown and abort every pipeline task.
    pub fn stop(self) {
        self.shutdown.signal();
        for task in self.tasks {
            task.abort();
        }
        tracing::info!(version = self.store.version(), "dashboard pipeline stopped");
    }
}

fn forward_mutation<F>(
    sink: &BusSink,
    scheduler: &RequestScheduler,
    mut source: mpsc::UnboundedReceiver<String>,
    refresh_after: bool,
    to_intent: F,
) -> JoinHandle<()>
where
    F: Fn(String) -> DashboardIntent + Send + 'static,
{
    let sink = sink.clone();
    let scheduler = scheduler.clone();
    tokio::spawn(async move {
        while let Some(message) = source.recv().await {
            if !sink.emit(to_intent(message)) {
                break;
            }
            if refresh_after {
                scheduler.refresh();
            }
        }
    })
}
