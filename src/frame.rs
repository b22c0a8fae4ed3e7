use crate::{
    checksum,
    operation::{Axis, Operation},
};

pub const FRAME_LEN: usize = 8;

const HEADER: [u8; 3] = [0xA5, 0x0F, 0x4D];
const TAIL_FLAG: u8 = 0x04;

/// Frame body selection. Parameters arrive already truncated to the low
/// 8 bits; which one a category needs is decided by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Ptz { operation: Operation, speed: u8 },
    Fi { operation: Operation, multiple: u8 },
    StopPtz,
    StopFi,
    /// Operation code outside the known set. The legacy encoder emitted a
    /// frame with an all-zero body for these instead of rejecting them;
    /// that outcome is kept, as an explicit branch.
    Unclassified,
}

/// One encoded 8-byte control frame: 3 header bytes, 4 body bytes and a
/// trailing mod-256 checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    pub fn build(body: Body) -> Self {
        let mut bytes = [0u8; FRAME_LEN];
        bytes[..HEADER.len()].copy_from_slice(&HEADER);

        match body {
            Body::Ptz { operation, speed } => {
                bytes[3] = operation.select_byte();
                bytes[6] = TAIL_FLAG;
                match operation.axis() {
                    Some(Axis::Horizontal) => bytes[4] = speed,
                    Some(Axis::Vertical) => bytes[5] = speed,
                    // High bits of an oversized speed fall off the byte.
                    Some(Axis::Zoom) => bytes[6] |= speed << 4,
                    _ => {}
                }
            }
            Body::Fi {
                operation,
                multiple,
            } => {
                bytes[3] = operation.select_byte();
                bytes[6] = TAIL_FLAG;
                match operation.axis() {
                    Some(Axis::Iris) => bytes[4] = multiple,
                    Some(Axis::Focus) => bytes[5] = multiple,
                    _ => {}
                }
            }
            Body::StopPtz => {
                bytes[3] = Operation::StopPtz.select_byte();
                bytes[6] = TAIL_FLAG;
            }
            Body::StopFi => {
                bytes[3] = Operation::StopFi.select_byte();
                bytes[6] = TAIL_FLAG;
            }
            // Bytes 3..=6 all stay zero, the tail flag too.
            Body::Unclassified => {}
        }

        bytes[FRAME_LEN - 1] = checksum(&bytes[..FRAME_LEN - 1]);
        Frame(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// Renders all 8 bytes as 16 uppercase hex digits, in index order.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|byte| format!("{byte:02X}")).collect()
    }
}
