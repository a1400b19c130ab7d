use thiserror::Error;

/// A placement or rendering parameter is outside of its valid range.
///
/// These are reported when the configuration is set up rather than while drawing,
/// so that a misconfiguration fails loudly instead of silently producing nothing.
#[non_exhaustive]
#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum InvalidConfiguration {
    #[error("Step size must be a positive number, got {0}.")]
    StepSize(f32),
    #[error("Phase offset must be in [0, 1), got {0}.")]
    PhaseOffset(f32),
    #[error("Image clip inset must be a non-negative number, got {0}.")]
    ClipInset(f32),
    #[error("Viewport padding must be a non-negative number, got {0}.")]
    Padding(f32),
    #[error("Nothing to draw: neither a symbol nor a label is configured.")]
    MissingStamp,
}

#[test]
fn messages() {
    use std::string::ToString;

    assert_eq!(
        InvalidConfiguration::StepSize(-1.0).to_string(),
        "Step size must be a positive number, got -1."
    );
    assert_eq!(
        InvalidConfiguration::PhaseOffset(1.5).to_string(),
        "Phase offset must be in [0, 1), got 1.5."
    );
}
