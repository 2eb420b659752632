//! Salescope: terminal sales-research assistant
//!
//! Pick an industry, find a company through the AI-backed autocomplete, and
//! generate an industry trend / pain-point report plus a matched vendor
//! solution recommendation. All AI work is delegated to the Gemini API via a
//! background worker thread; the UI stays responsive throughout.

pub mod ai;
pub mod app;
pub mod autocomplete;
pub mod config;
pub mod industry;
pub mod layout;
pub mod lookup;
pub mod notification;
pub mod report;
pub mod solution;
pub mod widgets;
