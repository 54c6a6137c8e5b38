pub mod formatters;
pub mod presenters;
pub mod view_models;
pub mod views;
