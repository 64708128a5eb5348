use crate::dashboard::Dashboard;
use crate::shutdown::ShutdownHandle;

/// Follow the store without a terminal UI, logging every published state.
pub async fn run_headless(dashboard: &Dashboard, shutdown: &ShutdownHandle) {
    let mut observer = dashboard.subscribe();
    loop {
        tokio::select! {
            _ = shutdown.wait() => break,
            state = observer.next() => {
                let Some(state) = state else { break };
                tracing::info!(
                    sites = state.sites.len(),
                    add_site_status = %state.add_site_status,
                    remove_site_status = %state.remove_site_status,
                    "state updated"
                );
                for site in &state.sites {
                    tracing::debug!(
                        key = %site.key,
                        uptime = %site.uptime,
                        status = site.status,
                        status_text = %site.status_text,
                        "site"
                    );
                }
            }
        }
    }
}
