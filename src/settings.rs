//! Settings defining how a program is run

/// Number of tape cells when nothing else is requested.
pub const DEFAULT_CELL_COUNT: usize = 300_000;

/// How `.` renders the current cell
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// Write the cell as a single raw byte
    #[default]
    Raw,
    /// Write a line with the decimal value, a space, and the raw byte
    Debug,
}

/// What `,` does once the input stream is exhausted
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, clap::ValueEnum)]
pub enum EofBehaviour {
    /// Store 0 in the current cell
    #[default]
    Zero,
    /// Leave the current cell as it is
    Unchanged,
}

/// Configuration for a single run.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Settings {
    /// Length of the tape. Fixed for the whole run.
    pub cell_count: usize,
    pub output_mode: OutputMode,
    pub eof: EofBehaviour,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_count: DEFAULT_CELL_COUNT,
            output_mode: OutputMode::default(),
            eof: EofBehaviour::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.cell_count, 300_000);
        assert_eq!(settings.output_mode, OutputMode::Raw);
        assert_eq!(settings.eof, EofBehaviour::Zero);
    }
}
