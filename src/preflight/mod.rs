//! Preflight checks module.

pub mod pinecone;

use colored::Colorize;

/// Why a check failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// No API key configured; nothing was sent.
    MissingKey,
    /// The client or the request failed with this message.
    ExceptionMessage(String),
}

/// Result of a connectivity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Success { index_count: usize },
    Failure(FailureReason),
}

impl CheckResult {
    pub fn success(index_count: usize) -> Self {
        CheckResult::Success { index_count }
    }

    pub fn missing_key() -> Self {
        CheckResult::Failure(FailureReason::MissingKey)
    }

    pub fn exception<S: Into<String>>(message: S) -> Self {
        CheckResult::Failure(FailureReason::ExceptionMessage(message.into()))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckResult::Success { .. })
    }

    pub fn index_count(&self) -> Option<usize> {
        match self {
            CheckResult::Success { index_count } => Some(*index_count),
            CheckResult::Failure(_) => None,
        }
    }

    /// Message shown to the user.
    pub fn message(&self) -> String {
        match self {
            CheckResult::Success { index_count } => {
                format!("✅ Connection successful! Found {} indexes.", index_count)
            }
            CheckResult::Failure(FailureReason::MissingKey) => {
                "API key not found in .env file".to_string()
            }
            CheckResult::Failure(FailureReason::ExceptionMessage(text)) => {
                format!("❌ Connection failed: {}", text)
            }
        }
    }

    /// What to do next, for failures that have an obvious fix.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CheckResult::Failure(FailureReason::MissingKey) => {
                Some("Add PINECONE_API_KEY=your_key_here to your .env file")
            }
            _ => None,
        }
    }
}

/// Steps shown in the setup instructions panel.
pub const SETUP_STEPS: [&str; 3] = [
    "Make sure you have a `.env` file in your project root",
    "Add your Pinecone API key: `PINECONE_API_KEY=your_key_here`",
    "Run the app: `pinecone-checker serve`",
];

/// Print a check result.
pub fn print_result(result: &CheckResult) {
    if result.is_success() {
        println!("{} {}: {}", "[OK]".green(), "Pinecone API".bold(), result.message());
    } else {
        println!("{} {}: {}", "[FAIL]".red(), "Pinecone API".bold(), result.message());
        if let Some(hint) = result.hint() {
            println!("  {} {}", "->".yellow(), hint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CheckResult::success(3).message(),
            "✅ Connection successful! Found 3 indexes."
        );
        assert_eq!(
            CheckResult::missing_key().message(),
            "API key not found in .env file"
        );
        assert_eq!(
            CheckResult::exception("invalid key").message(),
            "❌ Connection failed: invalid key"
        );
    }

    #[test]
    fn test_count_only_on_success() {
        assert_eq!(CheckResult::success(0).index_count(), Some(0));
        assert_eq!(CheckResult::missing_key().index_count(), None);
        assert_eq!(CheckResult::exception("x").index_count(), None);
    }

    #[test]
    fn test_hint_only_for_missing_key() {
        assert!(CheckResult::missing_key().hint().is_some());
        assert!(CheckResult::exception("x").hint().is_none());
        assert!(CheckResult::success(1).hint().is_none());
    }
}
