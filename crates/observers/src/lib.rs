//! Reusable observers for the fixstep integrators.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with every fixed-step method.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for method-agnostic observers
//!   ([`HasState`], [`CanStopEarly`])
//! - [`narrate`]: [`Narrator`], a step-by-step textual trace of the first
//!   steps of an integration
//!
//! # Observers
//!
//! - [`Narrator`]: writes each stage of the first step(s) to a text sink
//! - [`StopOnNonFinite`]: ends a run at the first NaN or infinite value
//!
//! # Features
//!
//! - `plot`: Enables [`PlotObserver`] for visualizing trajectories via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: fixstep_core::Observer
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod narrate;
pub mod traits;

mod guard;

#[cfg(feature = "plot")]
mod plot;

pub use guard::StopOnNonFinite;
pub use narrate::Narrator;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
