use std::collections::{HashMap, VecDeque};

use crate::assets::AssetCatalog;
use crate::bookmarks::{BookmarkList, UserCell};
use crate::local_data::LocalStore;
use crate::match_list::{MatchListRow, build_match_list};
use crate::match_view::MatchViewData;
use crate::mission::{ContractEntry, contract_rows};
use crate::model::{
    CareerSummary, ContractDetails, MatchDetails, MatchHistory, MatchId, PlayerIdentity, User,
    UserId,
};
use crate::scoreboard;

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Career,
    Live,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CareerScreen {
    Bookmarks,
    MatchList { user_id: UserId },
    MatchDetails { match_id: MatchId },
}

static ROOT_FRAME: CareerFrame = CareerFrame {
    screen: CareerScreen::Bookmarks,
    selected: 0,
    view: None,
};

/// One entry of the career navigation stack.
///
/// Each frame owns its match view session and remembers the cursor so both
/// survive while another screen is pushed on top.
#[derive(Debug, Clone)]
pub struct CareerFrame {
    screen: CareerScreen,
    selected: usize,
    view: Option<MatchViewData>,
}

impl CareerFrame {
    fn new(screen: CareerScreen) -> Self {
        Self {
            screen,
            selected: 0,
            view: None,
        }
    }

    pub fn screen(&self) -> &CareerScreen {
        &self.screen
    }

    pub fn view(&self) -> Option<&MatchViewData> {
        self.view.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProviderCommand {
    FetchUser { user_id: UserId },
    FetchIdentity { user_id: UserId },
    FetchCareerSummary { user_id: UserId },
    FetchMatchHistory { user_id: UserId },
    FetchMatchDetails { match_id: MatchId },
    FetchContractDetails { user_id: UserId },
}

impl ProviderCommand {
    pub fn label(&self) -> &'static str {
        match self {
            ProviderCommand::FetchUser { .. } => "User",
            ProviderCommand::FetchIdentity { .. } => "Identity",
            ProviderCommand::FetchCareerSummary { .. } => "Career summary",
            ProviderCommand::FetchMatchHistory { .. } => "Match history",
            ProviderCommand::FetchMatchDetails { .. } => "Match details",
            ProviderCommand::FetchContractDetails { .. } => "Contract details",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Delta {
    SetUser(User),
    SetIdentity(PlayerIdentity),
    SetCareerSummary(CareerSummary),
    SetMatchHistory(MatchHistory),
    SetMatchDetails(MatchDetails),
    SetContractDetails(ContractDetails),
    Log(String),
}

#[derive(Debug)]
pub struct AppState {
    pub viewer: Option<UserId>,
    pub tab: Tab,
    career: Vec<CareerFrame>,
    pub selected: usize,
    pub bookmarks: BookmarkList,
    pub users: LocalStore<UserId, User>,
    pub identities: LocalStore<UserId, PlayerIdentity>,
    pub summaries: LocalStore<UserId, CareerSummary>,
    pub histories: HashMap<UserId, MatchHistory>,
    pub match_details: HashMap<MatchId, MatchDetails>,
    pub contract: Option<ContractDetails>,
    pub assets: AssetCatalog,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl AppState {
    pub fn new(viewer: Option<UserId>, assets: AssetCatalog) -> Self {
        Self {
            viewer,
            tab: Tab::Career,
            career: vec![CareerFrame::new(CareerScreen::Bookmarks)],
            selected: 0,
            bookmarks: BookmarkList::new(),
            users: LocalStore::new(),
            identities: LocalStore::new(),
            summaries: LocalStore::new(),
            histories: HashMap::with_capacity(16),
            match_details: HashMap::with_capacity(32),
            contract: None,
            assets,
            logs: VecDeque::with_capacity(MAX_LOGS),
            help_overlay: false,
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        if self.logs.len() >= MAX_LOGS {
            self.logs.pop_front();
        }
        self.logs.push_back(msg.into());
    }

    pub fn career_screen(&self) -> &CareerScreen {
        self.top_frame().screen()
    }

    pub fn career_depth(&self) -> usize {
        self.career.len()
    }

    fn top_frame(&self) -> &CareerFrame {
        self.career.last().unwrap_or(&ROOT_FRAME)
    }

    /// View session of the match on top of the career stack, once built.
    pub fn match_view(&self) -> Option<&MatchViewData> {
        self.top_frame().view()
    }

    fn match_view_mut(&mut self) -> Option<&mut MatchViewData> {
        self.career.last_mut().and_then(|frame| frame.view.as_mut())
    }

    pub fn is_signed_in(&self) -> bool {
        self.viewer.is_some()
    }

    pub fn listed_users(&self) -> Vec<UserId> {
        self.bookmarks.listed(self.viewer.as_ref())
    }

    pub fn user_cells(&self) -> Vec<UserCell> {
        self.listed_users()
            .iter()
            .map(|id| UserCell::build(id, &self.users, &self.identities, &self.summaries))
            .collect()
    }

    pub fn match_list_rows(&self, user: &UserId) -> Vec<MatchListRow> {
        self.histories
            .get(user)
            .map(|history| build_match_list(history, &self.match_details, user, &self.assets))
            .unwrap_or_default()
    }

    pub fn contract_entries(&self) -> Vec<ContractEntry> {
        self.contract
            .as_ref()
            .map(|details| contract_rows(details, &self.assets))
            .unwrap_or_default()
    }

    fn row_count(&self) -> usize {
        match self.career_screen() {
            CareerScreen::Bookmarks => self.listed_users().len(),
            CareerScreen::MatchList { user_id } => self
                .histories
                .get(user_id)
                .map(|h| h.entries.len())
                .unwrap_or(0),
            CareerScreen::MatchDetails { .. } => self
                .match_view()
                .map(|v| v.details().players.len())
                .unwrap_or(0),
        }
    }

    pub fn select_next(&mut self) {
        let total = self.row_count();
        if total == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.row_count();
        if total == 0 {
            self.selected = 0;
            return;
        }
        if self.selected == 0 {
            self.selected = total - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn clamp_selection(&mut self) {
        let total = self.row_count();
        if total == 0 {
            self.selected = 0;
        } else if self.selected >= total {
            self.selected = total - 1;
        }
    }

    pub fn selected_user(&self) -> Option<UserId> {
        self.listed_users().get(self.selected).cloned()
    }

    pub fn selected_match_id(&self) -> Option<MatchId> {
        let CareerScreen::MatchList { user_id } = self.career_screen() else {
            return None;
        };
        self.match_list_rows(user_id)
            .get(self.selected)
            .map(|row| row.match_id.clone())
    }

    /// Player under the scoreboard cursor, in ranked order.
    pub fn selected_player(&self) -> Option<UserId> {
        let view = self.match_view()?;
        scoreboard::rank(&view.details().players)
            .get(self.selected)
            .map(|p| p.id.clone())
    }

    fn push_screen(&mut self, screen: CareerScreen) {
        if let Some(top) = self.career.last_mut() {
            top.selected = self.selected;
        }
        self.career.push(CareerFrame::new(screen));
        self.selected = 0;
    }

    pub fn open_match_list(&mut self, user_id: UserId) {
        self.push_screen(CareerScreen::MatchList { user_id });
    }

    pub fn open_match(&mut self, match_id: MatchId) {
        self.push_screen(CareerScreen::MatchDetails { match_id });
        self.refresh_match_view();
    }

    /// Pops the top screen, ending its view session, and restores the
    /// cursor of the screen below.
    pub fn back(&mut self) {
        if self.career.len() > 1 {
            self.career.pop();
        }
        self.selected = self.top_frame().selected;
        self.refresh_match_view();
        self.clamp_selection();
    }

    /// Builds the view data for the match on top of the stack once its
    /// details are cached. An existing session is left untouched.
    fn refresh_match_view(&mut self) {
        let frame = self.top_frame();
        if frame.view.is_some() {
            return;
        }
        let CareerScreen::MatchDetails { match_id } = &frame.screen else {
            return;
        };
        let Some(details) = self.match_details.get(match_id).cloned() else {
            return;
        };
        match MatchViewData::new(details, self.viewer.as_ref()) {
            Ok(view) => {
                if let Some(frame) = self.career.last_mut() {
                    frame.view = Some(view);
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "refusing corrupt match snapshot");
                self.push_log(format!("[WARN] {err}"));
            }
        }
    }

    pub fn toggle_selected_highlight(&mut self) {
        let Some(player) = self.selected_player() else {
            return;
        };
        if let Some(view) = self.match_view_mut() {
            view.switch_highlight(&player);
        }
    }

    pub fn toggle_bookmark(&mut self, user: &UserId) {
        if Some(user) == self.viewer.as_ref() {
            return;
        }
        let added = self.bookmarks.toggle(user);
        let name = self
            .users
            .get(user)
            .map(|u| u.game_name.clone())
            .unwrap_or_else(|| user.to_string());
        if added {
            self.push_log(format!("[INFO] Bookmarked {name}"));
        } else {
            self.push_log(format!("[INFO] Removed bookmark {name}"));
        }
        self.clamp_selection();
    }
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::SetUser(user) => state.users.store(user.id.clone(), user),
        Delta::SetIdentity(identity) => state.identities.store(identity.id.clone(), identity),
        Delta::SetCareerSummary(summary) => state.summaries.store(summary.user_id.clone(), summary),
        Delta::SetMatchHistory(history) => {
            state.histories.insert(history.user_id.clone(), history);
            state.clamp_selection();
        }
        Delta::SetMatchDetails(details) => {
            for player in &details.players {
                if state.users.get(&player.id).is_none() {
                    state
                        .users
                        .store(player.id.clone(), User::from_player(player));
                }
            }
            let id = details.id.clone();
            state.match_details.insert(id.clone(), details);
            if matches!(state.career_screen(), CareerScreen::MatchDetails { match_id } if *match_id == id)
            {
                state.refresh_match_view();
            }
        }
        Delta::SetContractDetails(details) => {
            if state.viewer.as_ref() == Some(&details.user_id) {
                state.contract = Some(details);
            }
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}
