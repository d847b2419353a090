//! Indicator output trait

/// A single on/off indicator
///
/// `on` is the logical state. Implementations own the translation to an
/// electrical level (active-high or active-low wiring).
pub trait IndicatorOutput {
    /// Turn the indicator on or off
    fn set_on(&mut self, on: bool);

    /// Check if the indicator is currently on
    fn is_on(&self) -> bool;
}
