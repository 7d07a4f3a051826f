pub const NUM_DIGITS: u8 = 5;
pub const NUM_GRIDS: u8 = 7;
pub const KEY_BYTES: usize = 5;
pub const MAX_BRIGHTNESS: u8 = 7; // 3 bits
pub const DEFAULT_BIT_DELAY_US: u32 = 5;
pub const FONT_SIZE: usize = 21;

/// Segment masks per character code; codes 0-15 are digits and hex
/// letters, [`DIGIT_BLANK`] and friends name the symbol entries.
pub type Font = [u8; FONT_SIZE];

// Segment bits of one character position; bit 7 is unused on this chip.
pub const SEG_A: u8 = 0b0000_0001;
pub const SEG_B: u8 = 0b0000_0010;
pub const SEG_C: u8 = 0b0000_0100;
pub const SEG_D: u8 = 0b0000_1000;
pub const SEG_E: u8 = 0b0001_0000;
pub const SEG_F: u8 = 0b0010_0000;
pub const SEG_G: u8 = 0b0100_0000;

// Segment output lines SG1-SG12, one bit per line in a grid word.
pub const SG1: u16 = 0x001;
pub const SG2: u16 = 0x002;
pub const SG3: u16 = 0x004;
pub const SG4: u16 = 0x008;
pub const SG5: u16 = 0x010;
pub const SG6: u16 = 0x020;
pub const SG7: u16 = 0x040;
pub const SG8: u16 = 0x080;
pub const SG9: u16 = 0x100;
pub const SG10: u16 = 0x200;
pub const SG11: u16 = 0x400;
pub const SG12: u16 = 0x800;

// Font codes for the symbol entries after 0-9 and A-F.
pub const DIGIT_BLANK: u8 = 16;
pub const DIGIT_MINUS: u8 = 17;
pub const DIGIT_DEGREE: u8 = 18;
pub const DIGIT_C: u8 = 19;
pub const DIGIT_QUESTION: u8 = 20;

pub const NORMAL_FONT: Font = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,         // 0
    SEG_B | SEG_C,                                         // 1
    SEG_A | SEG_B | SEG_G | SEG_E | SEG_D,                 // 2
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_G,                 // 3
    SEG_F | SEG_G | SEG_B | SEG_C,                         // 4
    SEG_A | SEG_F | SEG_G | SEG_C | SEG_D,                 // 5
    SEG_A | SEG_F | SEG_E | SEG_D | SEG_C | SEG_G,         // 6
    SEG_A | SEG_B | SEG_C,                                 // 7
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G, // 8
    SEG_G | SEG_F | SEG_A | SEG_B | SEG_C | SEG_D,         // 9
    SEG_E | SEG_F | SEG_A | SEG_B | SEG_C | SEG_G,         // A
    SEG_F | SEG_E | SEG_D | SEG_C | SEG_G,                 // b
    SEG_G | SEG_E | SEG_D,                                 // c
    SEG_G | SEG_E | SEG_D | SEG_C | SEG_B,                 // d
    SEG_A | SEG_F | SEG_E | SEG_D | SEG_G,                 // E
    SEG_A | SEG_F | SEG_E | SEG_G,                         // F
    0,                                                     // blank
    SEG_G,                                                 // -
    SEG_A | SEG_B | SEG_G | SEG_F,                         // degree
    SEG_A | SEG_F | SEG_E | SEG_D,                         // C
    SEG_A | SEG_B | SEG_G | SEG_E,                         // ?
];

pub const INVERTED_FONT: Font = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,         // 0
    SEG_E | SEG_F,                                         // 1
    SEG_A | SEG_B | SEG_G | SEG_E | SEG_D,                 // 2
    SEG_A | SEG_F | SEG_E | SEG_D | SEG_G,                 // 3
    SEG_C | SEG_G | SEG_F | SEG_E,                         // 4
    SEG_A | SEG_F | SEG_G | SEG_C | SEG_D,                 // 5
    SEG_D | SEG_E | SEG_F | SEG_A | SEG_B | SEG_G,         // 6
    SEG_D | SEG_E | SEG_F,                                 // 7
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G, // 8
    SEG_G | SEG_C | SEG_D | SEG_E | SEG_F | SEG_A,         // 9
    SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,         // A
    SEG_C | SEG_B | SEG_A | SEG_F | SEG_G,                 // b
    SEG_G | SEG_B | SEG_A,                                 // c
    SEG_G | SEG_B | SEG_A | SEG_F | SEG_D,                 // d
    SEG_D | SEG_C | SEG_B | SEG_A | SEG_G,                 // E
    SEG_D | SEG_C | SEG_B | SEG_G,                         // F
    0,                                                     // blank
    SEG_G,                                                 // -
    SEG_D | SEG_C | SEG_G | SEG_E,                         // degree
    SEG_D | SEG_C | SEG_B | SEG_A,                         // C
    SEG_D | SEG_E | SEG_G | SEG_B,                         // ?
];

pub mod command {
    pub const DISPLAY_MODE: u8 = 0x00;
    pub const DATA_WRITE: u8 = 0x40;
    pub const DATA_READ: u8 = 0x42;
    pub const DISPLAY_CONTROL: u8 = 0x80;
    pub const ADDRESS_SET: u8 = 0xC0;

    pub mod display_mode {
        pub const GRID6_SEG12: u8 = 2;
        pub const GRID7_SEG11: u8 = 3;
        pub const FIXED_ADDR: u8 = 4;
        pub const INCREMENT_ADDR: u8 = 0;
    }

    pub mod display_control {
        pub const POWER_ON: u8 = 0x08; // bit 3: display on, bits 0-2: intensity
    }
}
