//! Runtime events and the periodic tick driver.

pub mod driver;

pub use driver::TickDriver;

/// Events delivered to the main loop over its channel.
///
/// Everything that mutates the app flows through here, so simulator
/// mutations are applied on one thread and each tick is atomic with respect
/// to input handling.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeEvent {
    /// Raw bytes from the terminal, UTF-8 decoded.
    Input(String),
    /// Elapsed wall-clock seconds since the previous tick.
    Tick(f64),
    Resize,
}
