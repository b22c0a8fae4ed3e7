use std::fmt::Display;

use thiserror::Error;

use crate::{
    frame::{Body, Frame},
    identity::{CameraNumber, IdentifierError},
    operation::{Category, Operation},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
    #[error("operation code is not a decimal integer.")]
    InvalidOperationCode,
    #[error("required speed or multiple is not a decimal integer.")]
    InvalidParameter,
}

/// One encoded camera command: the split identifiers plus the control frame
/// to send. Only ever constructed fully populated, by [PtzCommand::encode].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PtzCommand {
    pub station_id: String,
    pub camera_id: String,
    pub frame: Frame,
}

impl PtzCommand {
    /// Encodes a raw request into a control frame.
    ///
    /// `speed` is consulted only for PTZ motion codes and `multiple` only
    /// for focus/iris codes; the parameter the matched category does not
    /// need is never validated. Operation codes outside 0..=11 produce the
    /// header-only frame with an all-zero body (see [Body::Unclassified]).
    pub fn encode(
        combined_id: &str,
        operation: &str,
        speed: &str,
        multiple: &str,
    ) -> Result<Self, EncodeError> {
        let number = CameraNumber::try_from(combined_id)?;

        let code = parse_decimal(operation).ok_or(EncodeError::InvalidOperationCode)?;
        let body = match Operation::n(code) {
            Some(operation) => match operation.category() {
                Category::Ptz => Body::Ptz {
                    operation,
                    speed: require_parameter(speed)?,
                },
                Category::Fi => Body::Fi {
                    operation,
                    multiple: require_parameter(multiple)?,
                },
                Category::StopPtz => Body::StopPtz,
                Category::StopFi => Body::StopFi,
            },
            None => Body::Unclassified,
        };

        Ok(Self {
            station_id: number.station_id,
            camera_id: number.camera_id,
            frame: Frame::build(body),
        })
    }
}

impl Display for PtzCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "STATION_ID: {}\r\nCAMERA_ID: {}\r\nFRAME: {}",
            self.station_id,
            self.camera_id,
            self.frame.to_hex()
        )
    }
}

/// Signed decimal text with at least one digit. Rejects the empty string
/// and a bare sign, which the legacy pattern let through into a failing
/// integer parse.
fn parse_decimal(text: &str) -> Option<i64> {
    text.parse().ok()
}

fn require_parameter(text: &str) -> Result<u8, EncodeError> {
    let value = parse_decimal(text).ok_or(EncodeError::InvalidParameter)?;
    // Only the low 8 bits reach the frame.
    Ok(value as u8)
}
