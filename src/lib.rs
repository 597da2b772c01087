//! Client core for the AI Glasses Agent.
//!
//! Localized pages, image capture, and three assistants (translation,
//! calorie tracking, navigation) backed by a remote HTTP service.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod i18n;
pub mod media;
pub mod pages;
pub mod routes;
pub mod speech;
