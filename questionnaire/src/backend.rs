use crate::Session;

/// Trait for input surfaces that fill in a session.
///
/// Backends decide how to present the catalog (wizard-style, form-style,
/// etc.). They read the active questions from the session and answer them
/// through [`Session::answer`], which validates every value and hides
/// follow-ups whose condition no longer holds. Submission stays with the
/// caller.
pub trait FormBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Collect answers into `session`.
    ///
    /// Returns once the respondent is done (or on error/cancellation).
    fn collect(&self, session: &mut Session<'_>) -> Result<(), Self::Error>;
}
