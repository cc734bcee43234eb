//! Reusable observers for hill-climbing root search.
//!
//! This crate provides [`Observer`] implementations and capability traits for
//! watching a search as it runs or inspecting its trajectory afterward.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasResidual`], [`CanStopEarly`], [`CanAssumeWorse`])
//! - [`LogObserver`] — Emits a `tracing` event for every solver event
//!
//! # Features
//!
//! - `plot` — Enables [`TrajectoryPlot`] for drawing a function and the paths
//!   searches took over it via egui. This feature adds dependencies on
//!   `eframe` and `egui_plot`.
//!
//! [`Observer`]: hillclimb_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod log;

pub use log::LogObserver;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{ShowConfig, TrajectoryPlot};
