use std::collections::HashMap;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::state::{AppState, Delta, ProviderCommand};

/// UI-side handle for asking the provider thread to load data.
#[derive(Debug)]
pub struct LoadManager {
    tx: Option<Sender<ProviderCommand>>,
    last_sent: HashMap<ProviderCommand, Instant>,
}

impl LoadManager {
    pub fn new(tx: Option<Sender<ProviderCommand>>) -> Self {
        Self {
            tx,
            last_sent: HashMap::new(),
        }
    }

    /// Sends `cmd`, reporting into the console when `announce` is set.
    /// Returns whether the request went out.
    pub fn load(&mut self, state: &mut AppState, cmd: ProviderCommand, announce: bool) -> bool {
        let label = cmd.label();
        let Some(tx) = &self.tx else {
            if announce {
                state.push_log(format!("[INFO] {label} fetch unavailable"));
            }
            return false;
        };
        if tx.send(cmd.clone()).is_err() {
            tracing::warn!(command = ?cmd, "provider channel closed");
            if announce {
                state.push_log(format!("[WARN] {label} request failed"));
            }
            return false;
        }
        if announce {
            state.push_log(format!("[INFO] {label} request sent"));
        }
        self.last_sent.insert(cmd, Instant::now());
        true
    }

    /// Sends `cmd` unless the same request went out within `max_age`.
    pub fn load_if_stale(
        &mut self,
        state: &mut AppState,
        cmd: ProviderCommand,
        max_age: Duration,
    ) -> bool {
        let fresh = self
            .last_sent
            .get(&cmd)
            .is_some_and(|sent| sent.elapsed() < max_age);
        if fresh {
            return false;
        }
        self.load(state, cmd, false)
    }
}

/// Runs one unit of provider work. Failures become a console alert.
pub fn run_load<T>(tx: &Sender<Delta>, label: &str, work: impl FnOnce() -> Result<T>) -> Option<T> {
    match work() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(%label, error = %format!("{err:#}"), "load failed");
            let _ = tx.send(Delta::Log(format!("[WARN] {label} fetch error: {err:#}")));
            None
        }
    }
}
