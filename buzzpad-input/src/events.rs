//! Key-press events from the handheld's button pad

/// Physical keys on the handheld
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// D-pad up
    Up,
    /// D-pad down
    Down,
    /// D-pad left
    Left,
    /// D-pad right
    Right,
    /// Center confirm button
    Ok,
    /// Back/cancel button
    Back,
}

/// Edge kind carried by an input event
///
/// The input service reports every edge; apps that only care about
/// discrete activations filter on [`InputKind::Press`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputKind {
    /// Key went down
    Press,
    /// Key came back up
    Release,
    /// Key held long enough for auto-repeat
    Repeat,
}

/// A single input event: which key, and which edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    pub key: Key,
    pub kind: InputKind,
}

// Wire format: key identifier in the low nibble
const KEY_UP: u8 = 0x01;
const KEY_DOWN: u8 = 0x02;
const KEY_LEFT: u8 = 0x03;
const KEY_RIGHT: u8 = 0x04;
const KEY_OK: u8 = 0x05;
const KEY_BACK: u8 = 0x06;

// Wire format: edge kind in the high nibble
const KIND_PRESS: u8 = 0x10;
const KIND_RELEASE: u8 = 0x20;
const KIND_REPEAT: u8 = 0x30;

impl Key {
    /// Parse a key from its wire nibble
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            KEY_UP => Some(Key::Up),
            KEY_DOWN => Some(Key::Down),
            KEY_LEFT => Some(Key::Left),
            KEY_RIGHT => Some(Key::Right),
            KEY_OK => Some(Key::Ok),
            KEY_BACK => Some(Key::Back),
            _ => None,
        }
    }

    /// Convert to the wire nibble
    pub fn to_byte(self) -> u8 {
        match self {
            Key::Up => KEY_UP,
            Key::Down => KEY_DOWN,
            Key::Left => KEY_LEFT,
            Key::Right => KEY_RIGHT,
            Key::Ok => KEY_OK,
            Key::Back => KEY_BACK,
        }
    }

}

impl InputKind {
    /// Parse an edge kind from its wire nibble
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            KIND_PRESS => Some(InputKind::Press),
            KIND_RELEASE => Some(InputKind::Release),
            KIND_REPEAT => Some(InputKind::Repeat),
            _ => None,
        }
    }

    /// Convert to the wire nibble
    pub fn to_byte(self) -> u8 {
        match self {
            InputKind::Press => KIND_PRESS,
            InputKind::Release => KIND_RELEASE,
            InputKind::Repeat => KIND_REPEAT,
        }
    }
}

impl InputEvent {
    /// Shorthand for a press edge on `key`
    pub fn press(key: Key) -> Self {
        Self {
            key,
            kind: InputKind::Press,
        }
    }

    /// Parse an event from its packed wire byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        let key = Key::from_byte(byte & 0x0F)?;
        let kind = InputKind::from_byte(byte & 0xF0)?;
        Some(Self { key, kind })
    }

    /// Convert to the packed wire byte
    pub fn to_byte(self) -> u8 {
        self.key.to_byte() | self.kind.to_byte()
    }

    /// Returns true if this is a press edge
    pub fn is_press(&self) -> bool {
        self.kind == InputKind::Press
    }
}
