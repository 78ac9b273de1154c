// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every colour, spacing step and size the console draws with.

## Organization

- **Palette**: Fixed colours (brand, presence dots)
- **Root**: Named style variables per colour mode, written to the root sink
- **Font**: Font stacks per script
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use farda_console::ui::design_tokens::{palette, root, spacing};

assert_eq!(root::DARK.len(), root::LIGHT.len());
let padding = spacing::MD; // 16px
let online = palette::EMERALD_400;
# let _ = (padding, online);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Brand, per colour mode
    pub const BRAND_PRIMARY_DARK: Color = Color::from_rgb8(0x1d, 0x4e, 0xd8);
    pub const BRAND_PRIMARY_LIGHT: Color = Color::from_rgb8(0x1a, 0x6c, 0xf0);
    pub const BRAND_SECONDARY_DARK: Color = Color::from_rgb8(0x63, 0x66, 0xf1);
    pub const BRAND_SECONDARY_LIGHT: Color = Color::from_rgb8(0x4f, 0x46, 0xe5);

    // Avatar ring
    pub const INDIGO_500: Color = Color::from_rgb8(0x63, 0x66, 0xf1);

    // Presence dots
    pub const EMERALD_400: Color = Color::from_rgb8(0x34, 0xd3, 0x99);
    pub const AMBER_400: Color = Color::from_rgb8(0xfb, 0xbf, 0x24);
    pub const SLATE_500: Color = Color::from_rgb8(0x64, 0x74, 0x8b);
}

// ============================================================================
// Root style variables
// ============================================================================

pub mod root {
    //! Values written to the root on every colour-mode change. Names keep
    //! their custom-property spelling so the tables stay greppable.

    pub const DARK: &[(&str, &str)] = &[
        ("--app-background", "#0d1b2a"),
        ("--app-surface", "#0b2545"),
        ("--app-surface-muted", "#10315a"),
        ("--app-text-primary", "#f8fafc"),
        ("--app-text-secondary", "#cbd5f5"),
        ("--app-text-muted", "#94a3b8"),
        ("--app-border", "rgba(148, 163, 184, 0.22)"),
        ("--app-border-strong", "rgba(148, 163, 184, 0.35)"),
        ("--app-shadow", "0 18px 40px rgba(5, 20, 45, 0.45)"),
        ("--app-shadow-strong", "0 22px 48px rgba(5, 20, 45, 0.6)"),
        ("--app-card-gradient-from", "rgba(15, 44, 79, 0.85)"),
        ("--app-card-gradient-to", "rgba(29, 78, 216, 0.25)"),
        ("--app-chip-bg", "rgba(148, 163, 184, 0.16)"),
        ("--app-chip-text", "#e2e8f0"),
        ("--btn-success-bg", "rgba(16, 185, 129, 0.12)"),
        ("--btn-success-bg-hover", "rgba(16, 185, 129, 0.22)"),
        ("--btn-success-border", "rgba(16, 185, 129, 0.45)"),
        ("--btn-success-border-hover", "rgba(16, 185, 129, 0.6)"),
        ("--btn-success-color", "#bbf7d0"),
        ("--btn-primary-bg", "rgba(79, 70, 229, 0.16)"),
        ("--btn-primary-bg-hover", "rgba(79, 70, 229, 0.28)"),
        ("--btn-primary-border", "rgba(79, 70, 229, 0.45)"),
        ("--btn-primary-border-hover", "rgba(79, 70, 229, 0.6)"),
        ("--btn-primary-color", "#e0e7ff"),
        ("--btn-info-bg", "rgba(14, 165, 233, 0.14)"),
        ("--btn-info-bg-hover", "rgba(14, 165, 233, 0.24)"),
        ("--btn-info-border", "rgba(14, 165, 233, 0.42)"),
        ("--btn-info-border-hover", "rgba(14, 165, 233, 0.58)"),
        ("--btn-info-color", "#bae6fd"),
        ("--btn-danger-bg", "rgba(244, 63, 94, 0.15)"),
        ("--btn-danger-bg-hover", "rgba(244, 63, 94, 0.26)"),
        ("--btn-danger-border", "rgba(244, 63, 94, 0.42)"),
        ("--btn-danger-border-hover", "rgba(244, 63, 94, 0.58)"),
        ("--btn-danger-color", "#fecdd3"),
        ("--chip-status-active-bg", "rgba(16, 185, 129, 0.18)"),
        ("--chip-status-active-border", "rgba(16, 185, 129, 0.38)"),
        ("--chip-status-active-text", "#bbf7d0"),
        ("--chip-status-active-dot", "#34d399"),
        ("--chip-status-inactive-bg", "rgba(244, 63, 94, 0.2)"),
        ("--chip-status-inactive-border", "rgba(244, 63, 94, 0.4)"),
        ("--chip-status-inactive-text", "#fecdd3"),
        ("--chip-status-inactive-dot", "#fb7185"),
        ("--chip-status-maintenance-bg", "rgba(250, 204, 21, 0.22)"),
        ("--chip-status-maintenance-border", "rgba(250, 204, 21, 0.44)"),
        ("--chip-status-maintenance-text", "#fde68a"),
        ("--chip-status-maintenance-dot", "#facc15"),
    ];

    pub const LIGHT: &[(&str, &str)] = &[
        ("--app-background", "#f5f7fb"),
        ("--app-surface", "#ffffff"),
        ("--app-surface-muted", "#f1f4ff"),
        ("--app-text-primary", "#0f172a"),
        ("--app-text-secondary", "#334155"),
        ("--app-text-muted", "#64748b"),
        ("--app-border", "rgba(15, 23, 42, 0.12)"),
        ("--app-border-strong", "rgba(15, 23, 42, 0.2)"),
        ("--app-shadow", "0 12px 28px rgba(148, 163, 184, 0.2)"),
        ("--app-shadow-strong", "0 16px 36px rgba(148, 163, 184, 0.28)"),
        ("--app-card-gradient-from", "rgba(229, 239, 255, 0.9)"),
        ("--app-card-gradient-to", "rgba(191, 219, 254, 0.6)"),
        ("--app-chip-bg", "rgba(15, 23, 42, 0.08)"),
        ("--app-chip-text", "#0f172a"),
        ("--btn-success-bg", "rgba(16, 185, 129, 0.18)"),
        ("--btn-success-bg-hover", "rgba(16, 185, 129, 0.3)"),
        ("--btn-success-border", "rgba(16, 185, 129, 0.48)"),
        ("--btn-success-border-hover", "rgba(16, 185, 129, 0.65)"),
        ("--btn-success-color", "#047857"),
        ("--btn-primary-bg", "rgba(79, 70, 229, 0.2)"),
        ("--btn-primary-bg-hover", "rgba(79, 70, 229, 0.32)"),
        ("--btn-primary-border", "rgba(79, 70, 229, 0.5)"),
        ("--btn-primary-border-hover", "rgba(79, 70, 229, 0.68)"),
        ("--btn-primary-color", "#3730a3"),
        ("--btn-info-bg", "rgba(14, 165, 233, 0.2)"),
        ("--btn-info-bg-hover", "rgba(14, 165, 233, 0.32)"),
        ("--btn-info-border", "rgba(14, 165, 233, 0.48)"),
        ("--btn-info-border-hover", "rgba(14, 165, 233, 0.65)"),
        ("--btn-info-color", "#0369a1"),
        ("--btn-danger-bg", "rgba(244, 63, 94, 0.18)"),
        ("--btn-danger-bg-hover", "rgba(244, 63, 94, 0.3)"),
        ("--btn-danger-border", "rgba(244, 63, 94, 0.48)"),
        ("--btn-danger-border-hover", "rgba(244, 63, 94, 0.65)"),
        ("--btn-danger-color", "#b91c1c"),
        ("--chip-status-active-bg", "rgba(16, 185, 129, 0.24)"),
        ("--chip-status-active-border", "rgba(16, 185, 129, 0.5)"),
        ("--chip-status-active-text", "#046c4e"),
        ("--chip-status-active-dot", "#0ea47a"),
        ("--chip-status-inactive-bg", "rgba(248, 113, 113, 0.24)"),
        ("--chip-status-inactive-border", "rgba(248, 113, 113, 0.5)"),
        ("--chip-status-inactive-text", "#9f1239"),
        ("--chip-status-inactive-dot", "#f43f5e"),
        ("--chip-status-maintenance-bg", "rgba(251, 191, 36, 0.32)"),
        ("--chip-status-maintenance-border", "rgba(251, 191, 36, 0.6)"),
        ("--chip-status-maintenance-text", "#92400e"),
        ("--chip-status-maintenance-dot", "#f59e0b"),
    ];
}

// ============================================================================
// Font stacks
// ============================================================================

pub mod font {
    /// Farsi faces first.
    pub const PERSIAN_FIRST: &[&str] = &[
        "IRANSansXVF",
        "IRANSansX",
        "Tahoma",
        "system-ui",
        "-apple-system",
        "Segoe UI",
        "Roboto",
        "Helvetica Neue",
        "Arial",
        "sans-serif",
    ];

    /// Latin faces first.
    pub const LATIN_FIRST: &[&str] = &[
        "Segoe UI",
        "Roboto",
        "Helvetica Neue",
        "IRANSansXVF",
        "IRANSansX",
        "Arial",
        "sans-serif",
    ];
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const TINT: f32 = 0.1;
    pub const RING: f32 = 0.4;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    pub const NAVBAR_HEIGHT: f32 = 56.0;
    pub const AVATAR: f32 = 48.0;
    pub const STATUS_DOT: f32 = 10.0;
    pub const PREVIEW_FRAME_HEIGHT: f32 = 112.0;
    pub const MENU_WIDTH: f32 = 220.0;
    pub const LOCALE_PICKER_WIDTH: f32 = 120.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Section headings and brand
    pub const TITLE_MD: f32 = 20.0;

    /// Card names
    pub const TITLE_SM: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Chips, detail labels, timestamps
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);

    assert!(root::DARK.len() == root::LIGHT.len());
};
