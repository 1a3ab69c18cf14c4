use std::fmt::{Display, Formatter};

pub type ScanResult<T> = Result<T, NociError>;

/// Every scan failure is fatal: the run aborts with the category's exit
/// code and no partial report is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NociErrorCategory {
    UsageError,
    IoSystemError,
    MissingSectionError,
    OrderingError,
    RangeError,
}

impl NociErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::UsageError => 2,
            Self::IoSystemError => 3,
            Self::MissingSectionError => 4,
            Self::OrderingError => 5,
            Self::RangeError => 6,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UsageError => "UsageError",
            Self::IoSystemError => "IoSystemError",
            Self::MissingSectionError => "MissingSectionError",
            Self::OrderingError => "OrderingError",
            Self::RangeError => "RangeError",
        }
    }
}

impl Display for NociErrorCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{category} [{placeholder}] {message}")]
pub struct NociError {
    category: NociErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl NociError {
    pub fn new(
        category: NociErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn usage(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(NociErrorCategory::UsageError, placeholder, message)
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(NociErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn missing_section(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(NociErrorCategory::MissingSectionError, placeholder, message)
    }

    pub fn ordering(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(NociErrorCategory::OrderingError, placeholder, message)
    }

    pub fn range(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(NociErrorCategory::RangeError, placeholder, message)
    }

    pub const fn category(&self) -> NociErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}
