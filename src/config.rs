//! User configuration: API endpoint, request timeout, and keybindings.
//!
//! Stored as TOML at `$XDG_CONFIG_HOME/employee-table/config.toml`
//! (default `~/.config/employee-table/config.toml`).  Every key is optional;
//! anything missing or unparsable falls back to the built-in default.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::core::fetch::EMPLOYEE_API;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    DismissAlert,
    Quit,
}

impl Action {
    pub const ALL: &[Action] = &[
        Action::PrevPage,
        Action::NextPage,
        Action::FirstPage,
        Action::LastPage,
        Action::DismissAlert,
        Action::Quit,
    ];

    fn from_config_key(s: &str) -> Option<Self> {
        match s {
            "prev_page" => Some(Action::PrevPage),
            "next_page" => Some(Action::NextPage),
            "first_page" => Some(Action::FirstPage),
            "last_page" => Some(Action::LastPage),
            "dismiss_alert" => Some(Action::DismissAlert),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding: key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT are compared.  SHIFT is folded into the character for
    /// `Char` keys (`G` arrives as `Shift+G` on most terminals) and compared
    /// for everything else.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mut mask = KeyModifiers::CONTROL | KeyModifiers::ALT;
        if !matches!(self.code, KeyCode::Char(_)) {
            mask |= KeyModifiers::SHIFT;
        }
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// Short display string for the status bar (e.g. `"←"`, `"PgDn"`, `"q"`).
    pub fn display(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PgUp".into(),
            KeyCode::PageDown => "PgDn".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Alt+Left"`, `"q"`, `"PageDown"`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?.trim();

        for part in &parts[..parts.len() - 1] {
            match part.trim().to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        // Single characters keep their case so `G` and `g` stay distinct.
        let mut chars = key_part.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(KeyBind::new(KeyCode::Char(c), modifiers));
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" | "bksp" => KeyCode::Backspace,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') && s.len() > 1 => KeyCode::F(s[1..].parse().ok()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── file format ───────

/// On-disk shape.  Everything optional so partial files work.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    api_url: Option<String>,
    timeout_secs: Option<u64>,
    bindings: HashMap<String, Vec<String>>,
}

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Endpoint serving the employee JSON array.
    pub api_url: String,
    /// Client-level request timeout.
    pub timeout: Duration,
    pub bindings: HashMap<Action, Vec<KeyBind>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: EMPLOYEE_API.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            bindings: Self::default_bindings(),
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(
            PrevPage,
            vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n), KeyBind::new(PageUp, n)],
        );
        m.insert(
            NextPage,
            vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n), KeyBind::new(PageDown, n)],
        );
        m.insert(FirstPage, vec![KeyBind::new(Home, n), KeyBind::new(Char('g'), n)]);
        m.insert(LastPage, vec![KeyBind::new(End, n), KeyBind::new(Char('G'), n)]);
        m.insert(DismissAlert, vec![KeyBind::new(Enter, n), KeyBind::new(Esc, n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    /// Find the action bound to a key event.  When several bindings match,
    /// the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for &action in Action::ALL {
            let Some(binds) = self.bindings.get(&action) else {
                continue;
            };
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Short display of the first binding only (for the status bar).
    pub fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: page | {}/{}: first/last | 0-9 Enter: go to page | {}: quit",
            self.short_binding(Action::PrevPage),
            self.short_binding(Action::NextPage),
            self.short_binding(Action::FirstPage),
            self.short_binding(Action::LastPage),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from `path` (or the default location), falling back to
    /// defaults.  A missing file is silent; a broken one is logged.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        if !path.exists() {
            return Self::default();
        }
        match Self::read(&path) {
            Ok(config) => {
                tracing::debug!("loaded config from {}", path.display());
                config
            }
            Err(err) => {
                tracing::warn!("ignoring config {}: {err:#}", path.display());
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&contents)
    }

    /// Parse TOML config text on top of the defaults.
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        let file: FileConfig = toml::from_str(s).context("invalid config TOML")?;
        let mut config = Self::default();

        if let Some(url) = file.api_url.filter(|u| !u.trim().is_empty()) {
            config.api_url = url;
        }
        if let Some(secs) = file.timeout_secs {
            // Keep this bounded for predictable UX.
            config.timeout = Duration::from_secs(secs.clamp(1, 300));
        }

        for (key, values) in &file.bindings {
            let Some(action) = Action::from_config_key(key) else {
                tracing::warn!("unknown action in config: {key}");
                continue;
            };
            let parsed: Vec<KeyBind> = values.iter().filter_map(|v| KeyBind::parse(v)).collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        Ok(config)
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/employee-table/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join(env!("CARGO_PKG_NAME")).join("config.toml")
}
