use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyComboError {
    #[error("empty key combination")]
    Empty,
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

/// A key plus modifiers, e.g. `mod+k` or `ctrl+shift+p`.
///
/// `mod` is the platform primary modifier: it matches either Ctrl or
/// Super (Cmd), so `mod+k` covers both Ctrl+K and Cmd+K.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub primary: bool,
}

impl KeyCombo {
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            code,
            modifiers,
            primary: false,
        }
    }

    #[must_use]
    pub const fn primary(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
            primary: true,
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        if normalize(event.code) != normalize(self.code) {
            return false;
        }

        let mut mods = event.modifiers;
        // Terminals report uppercase letters with SHIFT; only compare it when asked for.
        if matches!(event.code, KeyCode::Char(_)) && !self.modifiers.contains(KeyModifiers::SHIFT) {
            mods.remove(KeyModifiers::SHIFT);
        }

        if self.primary {
            let primary = KeyModifiers::CONTROL | KeyModifiers::SUPER;
            if !mods.intersects(primary) {
                return false;
            }
            mods.remove(primary);
        }

        mods == self.modifiers
    }
}

impl Default for KeyCombo {
    fn default() -> Self {
        Self::primary(KeyCode::Char('k'))
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

impl FromStr for KeyCombo {
    type Err = KeyComboError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let (key, mods) = match parts.split_last() {
            Some((key, mods)) if !key.is_empty() => (*key, mods),
            _ => return Err(KeyComboError::Empty),
        };

        let mut combo = KeyCombo::new(parse_key(key)?, KeyModifiers::NONE);
        for m in mods {
            match m.to_ascii_lowercase().as_str() {
                "mod" | "primary" => combo.primary = true,
                "ctrl" | "control" => combo.modifiers |= KeyModifiers::CONTROL,
                "cmd" | "super" | "meta" => combo.modifiers |= KeyModifiers::SUPER,
                "alt" | "option" => combo.modifiers |= KeyModifiers::ALT,
                "shift" => combo.modifiers |= KeyModifiers::SHIFT,
                other => return Err(KeyComboError::UnknownModifier(other.to_string())),
            }
        }
        Ok(combo)
    }
}

fn parse_key(key: &str) -> Result<KeyCode, KeyComboError> {
    let lower = key.to_ascii_lowercase();
    let code = match lower.as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "backspace" => KeyCode::Backspace,
        _ => {
            let mut chars = lower.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                (Some('f'), Some(_)) => lower[1..]
                    .parse::<u8>()
                    .map(KeyCode::F)
                    .map_err(|_| KeyComboError::UnknownKey(key.to_string()))?,
                _ => return Err(KeyComboError::UnknownKey(key.to_string())),
            }
        }
    };
    Ok(code)
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.primary {
            f.write_str("mod+")?;
        }
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::SUPER) {
            f.write_str("cmd+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("shift+")?;
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::Esc => f.write_str("esc"),
            KeyCode::Enter => f.write_str("enter"),
            KeyCode::Tab => f.write_str("tab"),
            KeyCode::Up => f.write_str("up"),
            KeyCode::Down => f.write_str("down"),
            KeyCode::Left => f.write_str("left"),
            KeyCode::Right => f.write_str("right"),
            KeyCode::Backspace => f.write_str("backspace"),
            KeyCode::F(n) => write!(f, "f{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}

impl Serialize for KeyCombo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KeyCombo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
