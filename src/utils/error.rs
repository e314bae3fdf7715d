use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Input cannot be empty")]
    EmptyInput,

    #[error("\"{token}\" is not a valid range. A correct range will look like \"elf001...elf003\"")]
    MalformedRange { token: String },

    #[error("Range seems incorrect. Correct range will look like \"elf001...elf003\"")]
    RangeOrder { token: String },

    #[error("Page request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("No result could be read from the page at {url}")]
    Scrape { url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad user input; fixable by correcting the ID list or flags.
    Input,
    /// A fetch step failed mid-run; the run was aborted.
    Fetch,
    /// Local failure: filesystem, serialization, configuration.
    System,
}

impl FinderError {
    pub fn malformed_range(token: &str) -> Self {
        Self::MalformedRange {
            token: token.to_string(),
        }
    }

    pub fn range_order(token: &str) -> Self {
        Self::RangeOrder {
            token: token.to_string(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyInput | Self::MalformedRange { .. } | Self::RangeOrder { .. } => {
                ErrorSeverity::Input
            }
            Self::Request(_) | Self::Scrape { .. } => ErrorSeverity::Fetch,
            Self::Io(_)
            | Self::Serialization(_)
            | Self::Csv(_)
            | Self::InvalidConfigValue { .. }
            | Self::MissingConfig { .. } => ErrorSeverity::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.severity() {
            ErrorSeverity::Input => format!("{}\nPlease fix the input data and try again..", self),
            ErrorSeverity::Fetch => format!(
                "{}.\nThis is probably our fault, but there is also a chance that \
                 something is not right with the data you entered.",
                self
            ),
            ErrorSeverity::System => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.severity() {
            ErrorSeverity::Input => {
                "Provide a comma-separated list of minifigure IDs, e.g. \
                 \"col001\" or \"elf001...elf003\""
                    .to_string()
            }
            ErrorSeverity::Fetch => "Here are some things that you can try:\n\
                 - Check if the generated list of minifigure IDs is correct. \
                 If not, please correct the input data.\n\
                 - Do all the items in the list exist?\n\
                 - Try a smaller list."
                .to_string(),
            ErrorSeverity::System => {
                "Check that the output path is writable and the configuration is valid".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
