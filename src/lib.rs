//! Data layer for the Prayas Foundation website.
//!
//! The site's list pages (alumni, events, gallery, team) render
//! collections fetched from a managed Supabase backend. This crate owns
//! everything between the HTTP response and the markup: decoding rows,
//! sanitizing them into total display models, extracting filter facets,
//! applying search and facet filters, and tracking per-page load state.
//!
//! A page mount creates a [`ListController`], issues one fetch through
//! [`SiteClient`], settles the controller with the outcome, and renders
//! from [`ListController::view`] after every user input.

pub use client::SiteClient;
pub use config::SiteConfig;
pub use controller::{FilterBehavior, ListController, ListView, RenderState};
pub use error::{Result, SiteError};

mod client;
mod config;
pub mod controller;
mod error;
pub mod model;
pub mod pipeline;
pub(crate) mod store;
