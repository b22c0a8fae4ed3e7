pub mod command;
pub mod frame;
pub mod identity;
pub mod operation;

fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, &byte| sum.wrapping_add(byte))
}
