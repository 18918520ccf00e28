//! Session controller: a reactive wrapper over [`SessionState`] plus the
//! async glue that talks to the backend.

pub mod state;

pub use state::SessionState;

use crate::api;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Health re-check interval, milliseconds.
pub const HEALTH_POLL_INTERVAL_MS: u32 = 30_000;

/// One instance owns the whole session. Views receive it by value (it is
/// `Copy`), read state through the signal and forward intents through the
/// action methods; nothing else mutates the state.
#[derive(Clone, Copy)]
pub struct SessionVm {
    pub state: RwSignal<SessionState>,
    alive: StoredValue<bool>,
}

impl SessionVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            alive: StoredValue::new(true),
        }
    }

    /// False once the owning scope has been cleaned up. The spawned futures
    /// can outlive the scope, and a disposed guard must also read as torn
    /// down rather than panic on the dead arena slot.
    fn is_alive(&self) -> bool {
        self.alive.try_get_value().unwrap_or(false)
    }

    /// Probe immediately, then re-check on a fixed interval. The loop stops
    /// when the owning scope is cleaned up; a probe that completes after
    /// teardown is dropped without touching state. Overlapping probes are
    /// not serialized: the last completed one wins, which is acceptable
    /// staleness for a liveness indicator.
    pub fn start_health_polling(self, interval_ms: u32) {
        let alive = self.alive;
        on_cleanup(move || {
            _ = alive.try_set_value(false);
        });

        spawn_local(async move {
            loop {
                let online = api::check_health().await;
                if !self.is_alive() {
                    break;
                }
                self.state.update(|s| s.record_health(online));

                gloo_timers::future::TimeoutFuture::new(interval_ms).await;
                if !self.is_alive() {
                    break;
                }
            }
        });
    }

    /// Send a question. No-op when the text is blank or an ask is already
    /// in flight. The in-flight flag is flipped synchronously inside the
    /// signal update, before the request future is spawned, so a double
    /// submit within the same tick is ignored.
    pub fn submit_question(self, text: String) {
        let mut question = None;
        self.state.update(|s| question = s.begin_ask(&text));
        let Some(question) = question else {
            return;
        };

        spawn_local(async move {
            let result = api::ask_question(&question).await;
            if self.is_alive() {
                self.state.update(|s| s.finish_ask(result));
            }
        });
    }

    /// Upload a picked file. No-op when an upload is already in flight.
    pub fn submit_file(self, file: web_sys::File) {
        let mut started = false;
        self.state.update(|s| started = s.begin_upload());
        if !started {
            return;
        }

        let name = file.name();
        let size = file.size() as u64;
        spawn_local(async move {
            let ok = api::upload_document(&file).await;
            if self.is_alive() {
                self.state.update(|s| s.finish_upload(&name, size, ok));
            }
        });
    }
}

impl Default for SessionVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_starts_alive() {
        let vm = SessionVm::new();
        assert!(vm.is_alive());
    }

    // A request can complete after the owning scope (and with it the guard
    // slot) is gone; the check must read as torn down, not panic.
    #[test]
    fn test_disposed_guard_reads_as_torn_down() {
        let vm = SessionVm::new();
        vm.alive.dispose();
        assert!(!vm.is_alive());
    }
}
