//! ASCII art for the key fob and the delivery vault.
//!
//! The vault door follows the simulation's unlock flag; the Lab view
//! highlights whichever device the current phase involves.

/// The courier key fob.
pub fn key_fob() -> &'static [&'static str] {
    &[
        "  ┌─────────┐  ",
        "  │  PORTA  │  ",
        "  │  ◉ KEY  │  ",
        "  │ ▓▓▓▓▓▓▓ │  ",
        "  └────┬────┘  ",
        "       ○       ",
    ]
}

/// The delivery vault, door open or closed.
pub fn vault(open: bool) -> &'static [&'static str] {
    if open {
        &[
            "┌─────────────┐",
            "│ ┌─────────┐ │",
            "│ │  OPEN   │ │",
            "│ │ ░░░░░░░ │ │",
            "│ └─────────┘ │",
            "│    PORTA    │",
            "└─────────────┘",
        ]
    } else {
        &[
            "┌─────────────┐",
            "│ ┌─────────┐ │",
            "│ │ ▓▓▓▓▓▓▓ │ │",
            "│ │ ▓▓▓▓▓▓▓ │ │",
            "│ └────◉────┘ │",
            "│    PORTA    │",
            "└─────────────┘",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vault_door_follows_the_flag() {
        assert!(vault(true).iter().any(|line| line.contains("OPEN")));
        assert!(!vault(false).iter().any(|line| line.contains("OPEN")));
    }
}
