//! Text checks: emptiness, whitespace, and affix/substring predicates
//! with an optional comparison mode.

use crate::claim::Claim;
use crate::error::CheckError;

/// Comparison mode for affix and substring checks.
///
/// `Exact` compares byte-for-byte; `IgnoreCase` folds both sides with
/// Unicode simple case mapping before comparing. There is no locale
/// dimension here: text semantics are the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextCompare {
    #[default]
    Exact,
    IgnoreCase,
}

impl TextCompare {
    fn fold(self, s: &str) -> String {
        match self {
            TextCompare::Exact => s.to_string(),
            TextCompare::IgnoreCase => s.to_lowercase(),
        }
    }
}

fn invalid<T>(claim: &Claim<T>, message: Option<String>) -> CheckError {
    CheckError::InvalidArgument {
        name: claim.name().to_string(),
        message,
    }
}

/// Checks over any string-like value.
pub trait TextChecks: Sized {
    /// Assert that the text is empty.
    fn is_empty(self) -> Result<Self, CheckError>;

    /// Assert that the text is empty or consists only of whitespace.
    fn is_whitespace(self) -> Result<Self, CheckError>;

    /// Assert that the text starts with `prefix` (exact comparison).
    fn starts_with(self, prefix: &str) -> Result<Self, CheckError>;

    /// Assert that the text starts with `prefix` under `mode`.
    fn starts_with_using(self, prefix: &str, mode: TextCompare) -> Result<Self, CheckError>;

    /// Assert that the text ends with `suffix` (exact comparison).
    fn ends_with(self, suffix: &str) -> Result<Self, CheckError>;

    /// Assert that the text ends with `suffix` under `mode`.
    fn ends_with_using(self, suffix: &str, mode: TextCompare) -> Result<Self, CheckError>;

    /// Assert that the text contains `needle` (exact comparison).
    fn contains_text(self, needle: &str) -> Result<Self, CheckError>;

    /// Assert that the text contains `needle` under `mode`.
    fn contains_text_using(self, needle: &str, mode: TextCompare) -> Result<Self, CheckError>;
}

impl<S: AsRef<str>> TextChecks for Claim<S> {
    fn is_empty(self) -> Result<Self, CheckError> {
        let holds = self.value().as_ref().is_empty();
        self.judge(holds, invalid)
    }

    fn is_whitespace(self) -> Result<Self, CheckError> {
        let holds = self.value().as_ref().chars().all(char::is_whitespace);
        self.judge(holds, invalid)
    }

    fn starts_with(self, prefix: &str) -> Result<Self, CheckError> {
        self.starts_with_using(prefix, TextCompare::Exact)
    }

    fn starts_with_using(self, prefix: &str, mode: TextCompare) -> Result<Self, CheckError> {
        let holds = mode
            .fold(self.value().as_ref())
            .starts_with(&mode.fold(prefix));
        self.judge(holds, invalid)
    }

    fn ends_with(self, suffix: &str) -> Result<Self, CheckError> {
        self.ends_with_using(suffix, TextCompare::Exact)
    }

    fn ends_with_using(self, suffix: &str, mode: TextCompare) -> Result<Self, CheckError> {
        let holds = mode.fold(self.value().as_ref()).ends_with(&mode.fold(suffix));
        self.judge(holds, invalid)
    }

    fn contains_text(self, needle: &str) -> Result<Self, CheckError> {
        self.contains_text_using(needle, TextCompare::Exact)
    }

    fn contains_text_using(self, needle: &str, mode: TextCompare) -> Result<Self, CheckError> {
        let holds = mode.fold(self.value().as_ref()).contains(&mode.fold(needle));
        self.judge(holds, invalid)
    }
}

/// Combined presence-and-content checks over optional text.
///
/// The raising kind depends on which side triggered: raising over an
/// absent value is `NullArgument`, over a present one `InvalidArgument`.
pub trait OptionTextChecks: Sized {
    /// Assert that the text is absent or empty.
    fn is_none_or_empty(self) -> Result<Self, CheckError>;

    /// Assert that the text is absent, empty, or whitespace-only.
    fn is_none_or_whitespace(self) -> Result<Self, CheckError>;
}

impl<S: AsRef<str>> OptionTextChecks for Claim<Option<S>> {
    fn is_none_or_empty(self) -> Result<Self, CheckError> {
        let holds = match self.value() {
            None => true,
            Some(s) => s.as_ref().is_empty(),
        };
        self.judge(holds, |claim, message| match claim.value() {
            None => CheckError::NullArgument {
                name: claim.name().to_string(),
                message,
            },
            Some(_) => CheckError::InvalidArgument {
                name: claim.name().to_string(),
                message,
            },
        })
    }

    fn is_none_or_whitespace(self) -> Result<Self, CheckError> {
        let holds = match self.value() {
            None => true,
            Some(s) => s.as_ref().chars().all(char::is_whitespace),
        };
        self.judge(holds, |claim, message| match claim.value() {
            None => CheckError::NullArgument {
                name: claim.name().to_string(),
                message,
            },
            Some(_) => CheckError::InvalidArgument {
                name: claim.name().to_string(),
                message,
            },
        })
    }
}
