//! Hex rendering
//! Uppercase, two digits per byte, no separators

/// Digit for each nybble value
const NYBBLES: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Render bytes as an uppercase hex string, high nybble first
/// Example: [0x00, 0xFF, 0x1A] -> "00FF1A"
pub fn hex(data: &[u8]) -> String {
    data.iter()
        .flat_map(|&b| [NYBBLES[(b >> 4) as usize], NYBBLES[(b & 0x0F) as usize]])
        .collect()
}
