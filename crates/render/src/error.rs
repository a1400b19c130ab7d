use crate::stamp::ImageId;
use crate::InvalidConfiguration;

use thiserror::Error;

/// An error that can happen while setting up or drawing a decoration.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum DecorationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] InvalidConfiguration),
    /// The image of an image stamp is not decoded yet.
    ///
    /// Only the affected stamp is skipped.
    #[error("Image {0:?} is not ready to be drawn.")]
    AssetNotReady(ImageId),
}

#[test]
fn from_configuration_error() {
    use std::string::ToString;

    let err: DecorationError = InvalidConfiguration::StepSize(0.0).into();
    assert_eq!(err, DecorationError::InvalidConfiguration(InvalidConfiguration::StepSize(0.0)));
    assert_eq!(
        err.to_string(),
        "Invalid configuration: Step size must be a positive number, got 0."
    );
    assert_eq!(
        DecorationError::AssetNotReady(ImageId(3)).to_string(),
        "Image ImageId(3) is not ready to be drawn."
    );
}
