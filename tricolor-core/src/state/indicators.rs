//! Logical indicator state
//!
//! All state here is logical (`true` = lit). Electrical polarity is applied
//! by the output drivers, never in this module.

use tricolor_protocol::Command;

/// Number of indicator lines
pub const LINE_COUNT: usize = 3;

/// One of the three indicator lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Output 1
    Red,
    /// Output 2
    Green,
    /// Output 3
    Blue,
}

impl Line {
    /// All lines in output order
    pub const ALL: [Line; LINE_COUNT] = [Line::Red, Line::Green, Line::Blue];

    /// Position of this line in output arrays
    pub const fn index(self) -> usize {
        match self {
            Line::Red => 0,
            Line::Green => 1,
            Line::Blue => 2,
        }
    }
}

/// Which indicators are lit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorState {
    lit: [bool; LINE_COUNT],
}

impl IndicatorState {
    /// Everything off (power-up state)
    pub const OFF: Self = Self { lit: [false; LINE_COUNT] };

    /// Everything on
    pub const ALL_ON: Self = Self { lit: [true; LINE_COUNT] };

    /// Exactly one line lit
    pub const fn only(line: Line) -> Self {
        let mut lit = [false; LINE_COUNT];
        lit[line.index()] = true;
        Self { lit }
    }

    /// State selected by `command`
    ///
    /// Depends on the command alone: there is no prior-state input, so the
    /// same command always yields the same pattern.
    pub const fn for_command(command: Command) -> Self {
        match command {
            Command::Red => Self::only(Line::Red),
            Command::Green => Self::only(Line::Green),
            Command::Blue => Self::only(Line::Blue),
            Command::AllOn => Self::ALL_ON,
            Command::AllOff => Self::OFF,
        }
    }

    /// Check if `line` is lit
    pub const fn is_on(&self, line: Line) -> bool {
        self.lit[line.index()]
    }

    /// Number of lit lines
    pub fn lit_count(&self) -> usize {
        self.lit.iter().filter(|&&on| on).count()
    }
}
