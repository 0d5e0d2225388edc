pub mod assets;
pub mod bookmarks;
pub mod config;
pub mod demo_feed;
pub mod error;
pub mod load;
pub mod local_data;
pub mod logging;
pub mod match_list;
pub mod match_view;
pub mod mission;
pub mod model;
pub mod provider;
pub mod scoreboard;
pub mod state;
