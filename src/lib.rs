//! Inline terminal UI for the dual-track delivery simulation.
//!
//! The binary races two renditions of the same feature, a traditional
//! sequential SDLC and an agentic workflow, side by side in the terminal.
//! The state machine lives in the `workflow_sim` crate; this crate is the
//! presentation and runtime layer: raw-mode terminal handling, the tick
//! driver, inline repainting, and the widgets.

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod platform;
pub mod render;
pub mod runtime;
pub mod theme;
pub mod widgets;

pub use crate::app::App;
pub use crate::config::EnvConfig;
pub use crate::core::component::Component;
pub use crate::core::input::{parse_input_events, InputEvent};
pub use crate::logging::EventLog;
pub use crate::platform::ProcessTerminal;
pub use crate::render::InlineRenderer;
pub use crate::runtime::{RuntimeEvent, TickDriver};
pub use crate::theme::Theme;
