use crate::types::Rgba;

/// Named color palette applied uniformly to a scene.
///
/// The tree gradient endpoints depend on how dark the background is: the
/// near-black backdrop of the classic theme takes the deeper green pair,
/// the lighter backdrops take the brighter pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub ground: Rgba,
    pub snow: Rgba,
    pub text: Rgba,
    pub tree_base: [f32; 3],
    pub tree_tip: [f32; 3],
}

const DARK_TREE_BASE: [f32; 3] = [0.2, 0.6, 0.2];
const DARK_TREE_TIP: [f32; 3] = [0.4, 0.8, 0.4];
const LIGHT_TREE_BASE: [f32; 3] = [0.3, 0.7, 0.3];
const LIGHT_TREE_TIP: [f32; 3] = [0.5, 0.9, 0.5];

fn classic_green() -> Theme {
    Theme {
        name: "classic-green",
        background: Rgba::opaque(10.0 / 255.0, 10.0 / 255.0, 42.0 / 255.0), // #0a0a2a
        ground: Rgba::opaque(1.0, 1.0, 1.0),
        snow: Rgba::opaque(1.0, 1.0, 1.0),
        text: Rgba::opaque(1.0, 217.0 / 255.0, 61.0 / 255.0), // #FFD93D
        tree_base: DARK_TREE_BASE,
        tree_tip: DARK_TREE_TIP,
    }
}

fn winter_blue() -> Theme {
    Theme {
        name: "winter-blue",
        background: Rgba::opaque(26.0 / 255.0, 26.0 / 255.0, 58.0 / 255.0), // #1a1a3a
        ground: Rgba::opaque(224.0 / 255.0, 246.0 / 255.0, 1.0),            // #E0F6FF
        snow: Rgba::opaque(224.0 / 255.0, 246.0 / 255.0, 1.0),
        text: Rgba::opaque(135.0 / 255.0, 206.0 / 255.0, 235.0 / 255.0), // #87CEEB
        tree_base: LIGHT_TREE_BASE,
        tree_tip: LIGHT_TREE_TIP,
    }
}

fn warm_orange() -> Theme {
    Theme {
        name: "warm-orange",
        background: Rgba::opaque(42.0 / 255.0, 26.0 / 255.0, 10.0 / 255.0), // #2a1a0a
        ground: Rgba::opaque(1.0, 248.0 / 255.0, 220.0 / 255.0),            // #FFF8DC
        snow: Rgba::opaque(1.0, 248.0 / 255.0, 220.0 / 255.0),
        text: Rgba::opaque(1.0, 179.0 / 255.0, 71.0 / 255.0), // #FFB347
        tree_base: LIGHT_TREE_BASE,
        tree_tip: LIGHT_TREE_TIP,
    }
}

fn mystic_purple() -> Theme {
    Theme {
        name: "mystic-purple",
        background: Rgba::opaque(42.0 / 255.0, 10.0 / 255.0, 42.0 / 255.0), // #2a0a2a
        ground: Rgba::opaque(240.0 / 255.0, 230.0 / 255.0, 1.0),            // #F0E6FF
        snow: Rgba::opaque(240.0 / 255.0, 230.0 / 255.0, 1.0),
        text: Rgba::opaque(221.0 / 255.0, 160.0 / 255.0, 221.0 / 255.0), // #DDA0DD
        tree_base: LIGHT_TREE_BASE,
        tree_tip: LIGHT_TREE_TIP,
    }
}

/// All theme names accepted by [`theme_by_name`].
pub const THEME_NAMES: [&str; 4] = [
    "classic-green",
    "winter-blue",
    "warm-orange",
    "mystic-purple",
];

/// Looks up a theme by name, case-insensitively.
///
/// Unrecognized names fall back to the classic green palette.
pub fn theme_by_name(name: &str) -> Theme {
    match name.to_ascii_lowercase().as_str() {
        "winter-blue" => winter_blue(),
        "warm-orange" => warm_orange(),
        "mystic-purple" => mystic_purple(),
        _ => classic_green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_name_resolves_to_itself() {
        for name in THEME_NAMES {
            assert_eq!(theme_by_name(name).name, name);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(theme_by_name("Winter-Blue").name, "winter-blue");
    }

    #[test]
    fn test_unknown_name_falls_back_to_classic() {
        assert_eq!(theme_by_name("neon-pink").name, "classic-green");
        assert_eq!(theme_by_name("").name, "classic-green");
    }

    #[test]
    fn test_classic_uses_dark_gradient() {
        let theme = theme_by_name("classic-green");
        assert_eq!(theme.tree_base, DARK_TREE_BASE);
        let theme = theme_by_name("warm-orange");
        assert_eq!(theme.tree_base, LIGHT_TREE_BASE);
    }
}
