use crate::basic::{
    Dir::{self, *},
    GridPoint,
};
use ggez::input::keyboard::{KeyCode, KeyMods};

/// Key identifiers and the direction they steer in
const KEY_MAP: [(&str, Dir); 8] = [
    ("ArrowUp", U),
    ("ArrowDown", D),
    ("ArrowLeft", L),
    ("ArrowRight", R),
    ("w", U),
    ("s", D),
    ("a", L),
    ("d", R),
];

/// Single-character keys are lowercased before the lookup, longer key
/// names have to match exactly
pub fn key_to_direction(key: &str) -> Option<Dir> {
    let mut chars = key.chars();
    let normalized = match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_lowercase().collect::<String>(),
        _ => key.to_string(),
    };
    KEY_MAP
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|&(_, dir)| dir)
}

/// Whether `candidate` points exactly the opposite way of `current`
pub fn is_reverse(current: Dir, candidate: Dir) -> bool {
    current.unit() + candidate.unit() == GridPoint::ZERO
}

macro_rules! letter_keys {
    [ $( $code:ident $lower:literal $upper:literal ),* $(,)? ] => {
        [ $( (KeyCode::$code, $lower, $upper) ),* ]
    };
}

const LETTERS: [(KeyCode, &str, &str); 26] = letter_keys![
    A "a" "A", B "b" "B", C "c" "C", D "d" "D", E "e" "E", F "f" "F", G "g" "G",
    H "h" "H", I "i" "I", J "j" "J", K "k" "K", L "l" "L", M "m" "M", N "n" "N",
    O "o" "O", P "p" "P", Q "q" "Q", R "r" "R", S "s" "S", T "t" "T", U "u" "U",
    V "v" "V", W "w" "W", X "x" "X", Y "y" "Y", Z "z" "Z",
];

/// The identifier of a physical key as understood by [`key_to_direction`],
/// letters are upper case while shift is held
pub fn key_name(key: KeyCode, mods: KeyMods) -> Option<&'static str> {
    let name = match key {
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        _ => {
            let &(_, lower, upper) = LETTERS.iter().find(|(code, _, _)| *code == key)?;
            if mods.contains(KeyMods::SHIFT) {
                upper
            } else {
                lower
            }
        }
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_arrow_keys_and_wasd() {
        for (key, dir) in [
            ("ArrowUp", U),
            ("ArrowDown", D),
            ("ArrowLeft", L),
            ("ArrowRight", R),
            ("w", U),
            ("s", D),
            ("a", L),
            ("d", R),
        ] {
            assert_eq!(key_to_direction(key), Some(dir), "{}", key);
        }
    }

    #[test]
    fn test_single_characters_are_lowercased() {
        assert_eq!(key_to_direction("W"), Some(U));
        assert_eq!(key_to_direction("A"), Some(L));
        assert_eq!(key_to_direction("S"), Some(D));
        assert_eq!(key_to_direction("D"), Some(R));
    }

    #[test]
    fn test_long_names_are_verbatim() {
        for key in ["arrowup", "ARROWUP", "Arrowup", "ArrowUp ", "Up", "ww", ""] {
            assert_eq!(key_to_direction(key), None, "{:?}", key);
        }
    }

    #[test]
    fn test_unknown_keys() {
        for key in ["q", "Q", " ", "1", "Escape", "Enter"] {
            assert_eq!(key_to_direction(key), None, "{:?}", key);
        }
    }

    #[test]
    fn test_is_reverse() {
        assert!(is_reverse(L, R));
        assert!(is_reverse(U, D));
        assert!(!is_reverse(U, L));
        for dir in Dir::iter() {
            assert!(!is_reverse(dir, dir), "{:?}", dir);
            assert!(is_reverse(dir, -dir), "{:?}", dir);
        }
    }

    #[test]
    fn test_key_name() {
        let none = KeyMods::empty();
        assert_eq!(key_name(KeyCode::Up, none), Some("ArrowUp"));
        assert_eq!(key_name(KeyCode::Right, none), Some("ArrowRight"));
        assert_eq!(key_name(KeyCode::W, none), Some("w"));
        assert_eq!(key_name(KeyCode::W, KeyMods::SHIFT), Some("W"));
        assert_eq!(key_name(KeyCode::Q, none), Some("q"));
        assert_eq!(key_name(KeyCode::Space, none), None);
        assert_eq!(key_name(KeyCode::Key1, none), None);
    }

    #[test]
    fn test_physical_keys_steer() {
        for (code, dir) in [
            (KeyCode::Up, U),
            (KeyCode::Down, D),
            (KeyCode::Left, L),
            (KeyCode::Right, R),
            (KeyCode::W, U),
            (KeyCode::S, D),
            (KeyCode::A, L),
            (KeyCode::D, R),
        ] {
            for mods in [KeyMods::empty(), KeyMods::SHIFT] {
                let dir_from_key = key_name(code, mods).and_then(key_to_direction);
                assert_eq!(dir_from_key, Some(dir), "{:?}", code);
            }
        }
    }
}
