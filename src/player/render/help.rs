//! Running command reference.
//!
//! Printed by `--list_commands`; kept next to the renderers so the text
//! stays in step with the key bindings.

use crate::palette::ColorName;

/// Key column and description for every running command.
pub const COMMANDS: &[(&str, &str)] = &[
    ("Q or q", "To quit"),
    ("b", "Toggle black and white mode"),
    ("C", "Enable color mode (default mode)"),
    ("c", "Toggle cycle color mode"),
    ("a", "Toggle additive mode (r,t,y,u,i,o) to add and remove colors"),
    ("d or D", "Reset to default settings"),
    ("0 - 9", "Delay. 0-Fast, 4-Default, 9-Slow"),
    ("shift 1 - 5", "Color cycle time. 1-Fast, 4-Default, 5-Slow"),
    ("r,t,y,u,i,o", "Set single color"),
    ("f", "Freeze screen until 'f' is pressed again."),
    ("l", "Clear the screen wait 2 seconds and start again"),
    ("p", "Next test pattern (wraps back to static)"),
    ("s", "Toggle the stand-by banner"),
];

/// Width of the key column.
pub const KEY_COLUMN_WIDTH: usize = 16;

/// Text printed by `--list_commands`.
pub fn command_list() -> String {
    let mut out = String::from("List of running commands:\n");
    for (keys, description) in COMMANDS {
        out.push_str(&format!(
            " {:<width$} {}\n",
            keys,
            description,
            width = KEY_COLUMN_WIDTH
        ));
    }
    out
}

/// Text printed by `--list_colors`.
pub fn color_list() -> String {
    let names: Vec<&str> = ColorName::HUES.iter().map(|c| c.as_str()).collect();
    format!("Color List:\n{}\n", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DELAY;

    #[test]
    fn command_list_has_title() {
        assert!(command_list().starts_with("List of running commands:\n"));
    }

    #[test]
    fn command_list_has_quit_instruction() {
        let has_quit = command_list()
            .lines()
            .any(|line| line.contains("Q or q") && line.contains("quit"));
        assert!(has_quit);
    }

    #[test]
    fn command_list_mentions_default_delay() {
        assert!(command_list().contains(&format!("{}-Default", DEFAULT_DELAY)));
    }

    #[test]
    fn command_list_aligns_descriptions() {
        for line in command_list().lines().skip(1) {
            assert_eq!(line.chars().nth(KEY_COLUMN_WIDTH + 1), Some(' '), "{line}");
        }
    }

    #[test]
    fn color_list_names_every_hue() {
        assert_eq!(
            color_list(),
            "Color List:\nred, green, blue, yellow, cyan, magenta\n"
        );
    }
}
