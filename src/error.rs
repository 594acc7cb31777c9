use thiserror::Error;

/// Errors that can occur while validating a bank definition into a catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Duplicate connection point id '{point_id}' in bank definition")]
    DuplicatePointId { point_id: String },

    #[error(
        "Required connection references point '{missing_point_id}', which does not exist in the bank's point set"
    )]
    PointNotFound { missing_point_id: String },

    #[error("Required connection from '{point_id}' to itself is not a valid wiring")]
    SelfConnection { point_id: String },

    #[error("Required connection between '{a}' and '{b}' is listed more than once")]
    DuplicateRequiredConnection { a: String, b: String },

    #[error(
        "Step {step_number} references a connection between '{a}' and '{b}' that is not in the required set"
    )]
    StepConnectionNotRequired { step_number: u32, a: String, b: String },

    #[error("Step numbers must be unique and ascending: step {step_number} is out of sequence")]
    StepOutOfSequence { step_number: u32 },
}

/// Errors that can occur when converting a custom catalog format into a `BankDefinition`.
#[derive(Error, Debug, Clone)]
pub enum CatalogConversionError {
    #[error("Invalid custom catalog data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while saving or loading a catalog artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Artifact error: {0}")]
    Generic(String),
}
