#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

//! Simulated desktop runtime: window registry, file browser navigation, dock derivation and the
//! Leptos components that render them from CMS content.

pub mod components;
pub mod config;
pub mod dock;
mod effect_executor;
pub mod finder;
pub mod header;
pub mod icons;
pub mod modals;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod viewer;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{desktop_config, DesktopConfig};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
