//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action
//! types, key bindings, and the default keymap. User bindings from the config
//! file are merged over the defaults.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Browse actions
    NavigateNext,
    NavigatePrev,
    CategoryNext,
    CategoryPrev,
    ResetFilter,
    ToggleExpand,
    SwitchFocus,
    ScreenNext,
    ScreenPrev,
    EnterSearch,
    ToggleLog,
    CycleTheme,
    Quit,

    // Search mode actions
    SearchModeExit,
    SearchModeConfirm,
    SearchModeBackspace,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    /// Unmodified key.
    ///
    pub fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Unmodified character key.
    ///
    pub fn char(c: char) -> Self {
        Hotkey::plain(KeyCode::Char(c))
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(_) => KeyCodeSerde::Char,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Maps hotkey actions to their key bindings per input mode.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(default)]
    pub browse: HashMap<HotkeyAction, Hotkey>,
    #[serde(default)]
    pub search_mode: HashMap<HotkeyAction, Hotkey>,
}

impl Default for Keymap {
    fn default() -> Self {
        default_keymap()
    }
}

impl Keymap {
    /// Return the default keymap with this keymap's bindings laid over it.
    ///
    pub fn merged_over_defaults(&self) -> Keymap {
        let mut keymap = default_keymap();
        keymap
            .browse
            .extend(self.browse.iter().map(|(a, h)| (*a, h.clone())));
        keymap
            .search_mode
            .extend(self.search_mode.iter().map(|(a, h)| (*a, h.clone())));
        keymap
    }
}

/// Specifying the input modes that have their own bindings.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
}

/// Returns default hotkey mappings for all input modes.
///
pub fn default_keymap() -> Keymap {
    let browse = HashMap::from([
        (HotkeyAction::NavigateNext, Hotkey::char('j')),
        (HotkeyAction::NavigatePrev, Hotkey::char('k')),
        (HotkeyAction::CategoryNext, Hotkey::char('l')),
        (HotkeyAction::CategoryPrev, Hotkey::char('h')),
        (HotkeyAction::ResetFilter, Hotkey::char('0')),
        (HotkeyAction::ToggleExpand, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::SwitchFocus, Hotkey::plain(KeyCode::Tab)),
        (HotkeyAction::ScreenNext, Hotkey::char(']')),
        (HotkeyAction::ScreenPrev, Hotkey::char('[')),
        (HotkeyAction::EnterSearch, Hotkey::char('/')),
        (HotkeyAction::ToggleLog, Hotkey::char('d')),
        (HotkeyAction::CycleTheme, Hotkey::char('t')),
        (HotkeyAction::Quit, Hotkey::char('q')),
    ]);

    let search_mode = HashMap::from([
        (HotkeyAction::SearchModeExit, Hotkey::plain(KeyCode::Esc)),
        (HotkeyAction::SearchModeConfirm, Hotkey::plain(KeyCode::Enter)),
        (
            HotkeyAction::SearchModeBackspace,
            Hotkey::plain(KeyCode::Backspace),
        ),
    ]);

    Keymap {
        browse,
        search_mode,
    }
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code && event.modifiers == hotkey.modifiers
}

/// Gets the action bound to a KeyEvent in the given mode.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    mode: InputMode,
    keymap: &Keymap,
) -> Option<HotkeyAction> {
    let bindings = match mode {
        InputMode::Browse => &keymap.browse,
        InputMode::Search => &keymap.search_mode,
    };

    bindings
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action)
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let mut parts = Vec::new();

    for (action, description, paired_action) in actions {
        let Some(hotkey) = hotkeys.get(action) else {
            continue;
        };
        match paired_action.and_then(|paired| hotkeys.get(&paired)) {
            Some(paired_hotkey) => parts.push(format!(
                " {}/{}: {}",
                format_hotkey_display(hotkey),
                format_hotkey_display(paired_hotkey),
                description
            )),
            None => parts.push(format!(
                " {}: {}",
                format_hotkey_display(hotkey),
                description
            )),
        }
    }

    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
