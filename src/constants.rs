pub const MAX_DIGITS: u8 = 8;
pub const MAX_INTENSITY: u8 = 15; // 4 bits
pub const SEGMENTS_PER_DIGIT: u8 = 8;

#[allow(dead_code)]
pub mod register {
    // Digit registers are 1-based on the wire: Digit0 lives at 0x01.
    pub const DIGIT_OFFSET: u8 = 0x01; // Digit0 - Digit7
    pub const DECODE_MODE: u8 = 0x09;
    pub const INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;
    pub const DISPLAY_TEST: u8 = 0x0F; // defined by the chip, unused by this driver

    pub mod decode_mode {
        pub const NO_DECODE: u8 = 0x00; // no decode for digits 7:0
        pub const DECODE_ALL: u8 = 0xFF; // Code-B decode for digits 7:0
    }

    pub mod shutdown_mode {
        pub const SHUTDOWN: u8 = 0x00; // bit 0 clear: shutdown mode
        pub const NORMAL_OPERATION: u8 = 0x01; // bit 0 set: normal operation
    }
}
