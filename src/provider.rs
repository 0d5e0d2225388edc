use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::load::run_load;
use crate::model::{
    CareerSummary, ContractDetails, MatchDetails, MatchHistory, MatchId, PlayerIdentity, User,
    UserId,
};
use crate::state::{Delta, ProviderCommand};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Source of game data behind the provider thread.
pub trait GameClient {
    fn user(&mut self, id: &UserId) -> Result<User>;
    fn identity(&mut self, id: &UserId) -> Result<PlayerIdentity>;
    fn career_summary(&mut self, id: &UserId) -> Result<CareerSummary>;
    fn match_history(&mut self, id: &UserId) -> Result<MatchHistory>;
    fn match_details(&mut self, id: &MatchId) -> Result<MatchDetails>;
    fn contract_details(&mut self, id: &UserId) -> Result<ContractDetails>;

    /// Unrequested updates, polled between commands.
    fn poll_updates(&mut self) -> Vec<Delta> {
        Vec::new()
    }
}

/// Runs `cmd` against `client`, forwarding the result (or an alert) to `tx`.
pub fn handle_command<C: GameClient + ?Sized>(client: &mut C, cmd: &ProviderCommand, tx: &Sender<Delta>) {
    let label = cmd.label();
    let delta = match cmd {
        ProviderCommand::FetchUser { user_id } => {
            run_load(tx, label, || client.user(user_id)).map(Delta::SetUser)
        }
        ProviderCommand::FetchIdentity { user_id } => {
            run_load(tx, label, || client.identity(user_id)).map(Delta::SetIdentity)
        }
        ProviderCommand::FetchCareerSummary { user_id } => {
            run_load(tx, label, || client.career_summary(user_id)).map(Delta::SetCareerSummary)
        }
        ProviderCommand::FetchMatchHistory { user_id } => {
            run_load(tx, label, || client.match_history(user_id)).map(Delta::SetMatchHistory)
        }
        ProviderCommand::FetchMatchDetails { match_id } => {
            run_load(tx, label, || client.match_details(match_id)).map(Delta::SetMatchDetails)
        }
        ProviderCommand::FetchContractDetails { user_id } => {
            run_load(tx, label, || client.contract_details(user_id)).map(Delta::SetContractDetails)
        }
    };
    if let Some(delta) = delta {
        let _ = tx.send(delta);
    }
}

pub fn spawn_provider<C>(mut client: C, tx: Sender<Delta>, cmd_rx: Receiver<ProviderCommand>)
where
    C: GameClient + Send + 'static,
{
    thread::spawn(move || {
        loop {
            match cmd_rx.recv_timeout(POLL_INTERVAL) {
                Ok(cmd) => {
                    tracing::debug!(command = ?cmd, "provider command");
                    handle_command(&mut client, &cmd, &tx);
                }
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                    tracing::info!("command channel closed, provider exiting");
                    return;
                }
            }
            for delta in client.poll_updates() {
                if tx.send(delta).is_err() {
                    return;
                }
            }
        }
    });
}
