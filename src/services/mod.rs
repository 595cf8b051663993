// Service module exports

pub mod auth;
pub mod calendar;
pub mod config;
pub mod database;
pub mod event;
pub mod settings;
pub mod storage;
