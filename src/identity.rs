use thiserror::Error;

/// Combined identifier length, station + separator + camera.
pub const COMBINED_LEN: usize = 40;

const STATION_LEN: usize = 19;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("combined identifier must be exactly {COMBINED_LEN} characters.")]
    Length,
}

/// Station and camera identifiers split out of the 40-character combined
/// form. Character 19 is a separator and is discarded; no further content
/// validation is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraNumber {
    pub station_id: String,
    pub camera_id: String,
}

impl TryFrom<&str> for CameraNumber {
    type Error = IdentifierError;

    fn try_from(combined: &str) -> Result<Self, Self::Error> {
        let chars: Vec<char> = combined.chars().collect();
        if chars.len() != COMBINED_LEN {
            return Err(IdentifierError::Length);
        }

        Ok(Self {
            station_id: chars[..STATION_LEN].iter().collect(),
            camera_id: chars[STATION_LEN + 1..].iter().collect(),
        })
    }
}
