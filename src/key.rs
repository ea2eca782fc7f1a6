//! Type-safe key bindings for keyboard navigation.
//!
//! A [`Binding`] groups the key presses that trigger one action together
//! with the help text shown for it. Bindings are built either directly with
//! [`Binding::new`] or from option lists with [`new_binding`]:
//!
//! ```rust
//! use company_table::key;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let next = key::new_binding(vec![
//!     key::with_keys_str(&["pgdown", "right", "l"]),
//!     key::with_help("→/l", "next page"),
//! ]);
//!
//! let msg = KeyMsg { key: KeyCode::Right, modifiers: KeyModifiers::NONE };
//! assert!(next.matches(&msg));
//! assert_eq!(next.help().desc, "next page");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Parses a key name such as `"left"`, `"pgdown"`, `"l"`, or `"ctrl+n"`.
    ///
    /// Returns `None` for names that do not map to a single key.
    pub fn parse(name: &str) -> Option<Self> {
        let (modifiers, base) = match name.rsplit_once('+') {
            Some((prefix, base)) if !base.is_empty() => {
                let mut modifiers = KeyModifiers::NONE;
                for part in prefix.split('+') {
                    modifiers |= match part {
                        "ctrl" => KeyModifiers::CONTROL,
                        "alt" => KeyModifiers::ALT,
                        "shift" => KeyModifiers::SHIFT,
                        _ => return None,
                    };
                }
                (modifiers, base)
            }
            _ => (KeyModifiers::NONE, name),
        };

        let code = match base {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => KeyCode::Char(ch),
                    _ => return None,
                }
            }
        };

        Some(Self { code, modifiers })
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"←/h"`.
    pub key: String,
    /// Action description, e.g. `"prev page"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key codes or `(code, modifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the help label and description (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns false if the binding has been disabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true if `key_msg` is one of this binding's key presses.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.enabled()
            && self
                .keys
                .iter()
                .any(|press| press.code == key_msg.key && press.modifiers == key_msg.modifiers)
    }
}

/// A deferred change applied to a binding by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Binds the given key names; names [`KeyPress::parse`] rejects are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let presses: Vec<KeyPress> = keys
        .iter()
        .filter_map(|name| {
            let press = KeyPress::parse(name);
            if press.is_none() {
                log::warn!("ignoring unknown key name '{}'", name);
            }
            press
        })
        .collect();
    Box::new(move |binding: &mut Binding| binding.keys = presses)
}

/// Binds the given key presses.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |binding: &mut Binding| binding.keys = keys)
}

/// Sets the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |binding: &mut Binding| binding.help = help)
}

/// Starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|binding: &mut Binding| binding.disabled = true)
}

/// Returns true if `key_msg` matches any of `bindings`.
pub fn matches(key_msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|binding| binding.matches(key_msg))
}

/// Components that describe their key bindings for help views.
pub trait KeyMap {
    /// Bindings shown in the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings shown in the expanded help, grouped in columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
