//! Failures of a `tessella` invocation and the exit code each one maps to.
//!
//! | code | meaning |
//! |------|---------|
//! | 0    | success |
//! | 2    | argument parse failure (reported by clap) |
//! | 10   | the tiling rejected its configuration |
//! | 11   | reading a palette file or writing the output failed |
//! | 12   | a palette, format, color or JSON argument was not understood |
//! | 13   | a result could not be serialized |

use tessella_core::TilingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Tiling(TilingError),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Input(String),
    #[error("{0}")]
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Tiling(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

/// Splits core errors by who has to act: the user for unrecognized names and
/// colors, the filesystem for I/O, the tiling configuration for the rest.
impl From<TilingError> for CliError {
    fn from(e: TilingError) -> Self {
        match e {
            TilingError::Io(msg) => CliError::Io(msg),
            TilingError::InvalidColor(_)
            | TilingError::InvalidPalette(_)
            | TilingError::UnknownPalette(_)
            | TilingError::UnknownFormat(_) => CliError::Input(e.to_string()),
            other => CliError::Tiling(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_variant_has_its_own_exit_code() {
        let cases = [
            (CliError::Tiling(TilingError::EmptyChoices), 10),
            (CliError::Io("write failed".into()), 11),
            (CliError::Input("bad palette".into()), 12),
            (CliError::Serialization("json fail".into()), 13),
        ];
        for (err, code) in cases {
            assert_eq!(err.exit_code(), code, "{err:?}");
        }
    }

    #[test]
    fn core_io_failure_keeps_its_message() {
        let err = CliError::from(TilingError::Io("disk full".into()));
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn unrecognized_names_and_colors_are_user_input() {
        for e in [
            TilingError::UnknownPalette("plaid".into()),
            TilingError::UnknownFormat("gif".into()),
            TilingError::InvalidColor("#ggg".into()),
            TilingError::InvalidPalette("three colors".into()),
        ] {
            let message = e.to_string();
            let err = CliError::from(e);
            assert_eq!(err.exit_code(), 12, "{message}");
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn rejected_configuration_stays_a_tiling_error() {
        for e in [
            TilingError::InvalidSide(-1.0),
            TilingError::InvalidGutter(f64::NAN),
            TilingError::InvalidDimensions,
            TilingError::EmptyChoices,
        ] {
            let message = e.to_string();
            let err = CliError::from(e);
            assert!(matches!(err, CliError::Tiling(_)), "{message}");
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        assert_eq!(CliError::from(parse).exit_code(), 13);
    }
}
