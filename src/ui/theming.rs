// SPDX-License-Identifier: MPL-2.0
//! Colour mode, the root style sink, and the provider that ties them to
//! persisted preferences.
//!
//! The provider is an owned value: the application constructs it with a
//! [`ColorModeStore`], hydrates it once at boot and then routes every mode
//! change through [`ColorModeProvider::toggle`]. Anything that must follow the
//! mode registers an observer with [`ColorModeProvider::subscribe`].

use crate::error::Result;
use crate::routing::Locale;
use crate::ui::design_tokens::{font, palette, root};
use iced::theme::Palette;
use iced::{Color, Font, Shadow, Theme, Vector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    /// Mode used before any preference has been read.
    #[default]
    Dark,
}

impl ColorMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Root style variables for this mode.
    #[must_use]
    pub fn tokens(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ColorMode::Light => root::LIGHT,
            ColorMode::Dark => root::DARK,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Persistence
// ============================================================================

/// Where the chosen colour mode survives between sessions.
pub trait ColorModeStore {
    /// The stored mode, or `None` when nothing usable is stored.
    fn load(&self) -> Option<ColorMode>;

    fn save(&mut self, mode: ColorMode) -> Result<()>;
}

/// In-memory store, for tests and for runs without a data directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    stored: Option<ColorMode>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn with(mode: ColorMode) -> Self {
        Self {
            stored: Some(mode),
            writes: 0,
        }
    }

    #[must_use]
    pub fn stored(&self) -> Option<ColorMode> {
        self.stored
    }

    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ColorModeStore for MemoryStore {
    fn load(&self) -> Option<ColorMode> {
        self.stored
    }

    fn save(&mut self, mode: ColorMode) -> Result<()> {
        self.stored = Some(mode);
        self.writes += 1;
        Ok(())
    }
}

// ============================================================================
// Root style sink
// ============================================================================

/// The root every view reads its colours from.
pub trait RootStyle {
    fn set_theme_attribute(&mut self, mode: ColorMode);

    fn set_property(&mut self, name: &str, value: &str);
}

/// Style variables currently applied to the application root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootStyles {
    theme_attribute: Option<ColorMode>,
    properties: BTreeMap<String, String>,
}

impl RootStyle for RootStyles {
    fn set_theme_attribute(&mut self, mode: ColorMode) {
        self.theme_attribute = Some(mode);
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }
}

impl RootStyles {
    /// The `data-theme` value, once a mode has been applied.
    #[must_use]
    pub fn theme_attribute(&self) -> Option<ColorMode> {
        self.theme_attribute
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// A variable parsed as a colour; `None` if unset or not a colour.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<Color> {
        self.property(name).and_then(parse_css_color)
    }

    #[must_use]
    pub fn color_or(&self, name: &str, fallback: Color) -> Color {
        self.color(name).unwrap_or(fallback)
    }

    /// Builds the Iced theme matching the applied variables.
    #[must_use]
    pub fn to_theme(&self) -> Theme {
        let mode = self.theme_attribute.unwrap_or_default();
        let (base, primary) = match mode {
            ColorMode::Dark => (Palette::DARK, palette::BRAND_PRIMARY_DARK),
            ColorMode::Light => (Palette::LIGHT, palette::BRAND_PRIMARY_LIGHT),
        };

        let colors = Palette {
            background: self.color_or("--app-background", base.background),
            text: self.color_or("--app-text-primary", base.text),
            primary,
            success: self.color_or("--chip-status-active-dot", base.success),
            danger: self.color_or("--chip-status-inactive-dot", base.danger),
            ..base
        };

        Theme::custom(format!("Farda {mode}"), colors)
    }
}

/// Parses `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
///
/// Compound values such as box shadows yield `None`.
#[must_use]
pub fn parse_css_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let (body, expects_alpha) = if let Some(rest) = value.strip_prefix("rgba(") {
        (rest.strip_suffix(')')?, true)
    } else if let Some(rest) = value.strip_prefix("rgb(") {
        (rest.strip_suffix(')')?, false)
    } else {
        return None;
    };

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let channel = |index: usize| parts.get(index)?.parse::<u8>().ok();

    match (expects_alpha, parts.len()) {
        (true, 4) => {
            let alpha = parts[3].parse::<f32>().ok()?;
            if !(0.0..=1.0).contains(&alpha) {
                return None;
            }
            Some(Color::from_rgba8(channel(0)?, channel(1)?, channel(2)?, alpha))
        }
        (false, 3) => Some(Color::from_rgb8(channel(0)?, channel(1)?, channel(2)?)),
        _ => None,
    }
}

/// Parses a single `x y blur color` box shadow; spread is not supported.
#[must_use]
pub fn parse_css_shadow(value: &str) -> Option<Shadow> {
    let value = value.trim();
    let color_start = value.find("rgb").or_else(|| value.find('#'))?;
    let color = parse_css_color(&value[color_start..])?;

    let lengths: Vec<f32> = value[..color_start]
        .split_whitespace()
        .map(|part| part.trim_end_matches("px").parse::<f32>())
        .collect::<std::result::Result<_, _>>()
        .ok()?;

    match lengths.as_slice() {
        [x, y, blur] => Some(Shadow {
            color,
            offset: Vector::new(*x, *y),
            blur_radius: *blur,
        }),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        6 => Some(Color::from_rgb8(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
        )),
        3 => {
            let short = |i: usize| byte(&hex[i..=i]).map(|v| v * 17);
            Some(Color::from_rgb8(short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

// ============================================================================
// Provider
// ============================================================================

/// Handle returned by [`ColorModeProvider::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(ColorMode)>;

/// Single owner of the colour mode.
pub struct ColorModeProvider<S: ColorModeStore> {
    mode: ColorMode,
    store: S,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl<S: ColorModeStore> fmt::Debug for ColorModeProvider<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorModeProvider")
            .field("mode", &self.mode)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<S: ColorModeStore> ColorModeProvider<S> {
    /// Starts in [`ColorMode::Dark`]; call [`Self::hydrate`] to pick up the
    /// stored preference.
    pub fn new(store: S) -> Self {
        Self {
            mode: ColorMode::default(),
            store,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-evaluates the mode against the store and applies it to `root`.
    pub fn hydrate(&mut self, root: &mut impl RootStyle) -> ColorMode {
        if let Some(stored) = self.store.load() {
            if stored != self.mode {
                self.mode = stored;
                self.notify();
            }
        }
        self.apply(root);
        self.mode
    }

    /// Flips the mode, persists it and applies the new palette.
    ///
    /// A failed write is logged; the in-memory mode still changes.
    pub fn toggle(&mut self, root: &mut impl RootStyle) -> ColorMode {
        self.mode = self.mode.toggled();

        if let Err(err) = self.store.save(self.mode) {
            tracing::warn!(mode = %self.mode, "failed to persist color mode: {err}");
        }

        self.apply(root);
        self.notify();
        self.mode
    }

    /// Writes the theme attribute and every variable of the current mode.
    pub fn apply(&self, root: &mut impl RootStyle) {
        root.set_theme_attribute(self.mode);
        for (name, value) in self.mode.tokens() {
            root.set_property(name, value);
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut(ColorMode) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        let mode = self.mode;
        for (_, observer) in &mut self.observers {
            observer(mode);
        }
    }
}

// ============================================================================
// Fonts
// ============================================================================

/// Font families for `locale`, most preferred first.
#[must_use]
pub fn font_stack(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::Fa => font::PERSIAN_FIRST,
        Locale::En => font::LATIN_FIRST,
    }
}

/// The preferred face of [`font_stack`] as an Iced font.
#[must_use]
pub fn font_for(locale: Locale) -> Font {
    font_stack(locale)
        .first()
        .copied()
        .map_or(Font::DEFAULT, Font::with_name)
}
