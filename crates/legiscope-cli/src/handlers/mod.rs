pub mod activity;
pub mod chat;
pub mod commission_list;
pub mod commission_sessions;
pub mod commission_transcript;
pub mod health;
pub mod news;
pub mod politician_list;
pub mod profile_edit;
pub mod profile_show;
pub mod upload;
