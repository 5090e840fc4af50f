//! Registered colon commands (spec.md §6). Unmatched input sets the
//! status-line error message — with the corrected spelling `"Not an editor
//! command: …"` (the original source's `"Not and editor command: …"` is a
//! typo, not a behavior to preserve; see spec.md §9 Design Notes).

use core_state::Editor;

pub fn execute(editor: &mut Editor, line: &str) {
    match line {
        "q" | "quit" => {
            editor.exit_requested = true;
        }
        _ => {
            editor.status_message = format!("Not an editor command: {line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_config::Config;
    use core_model::{Point, Rect};

    fn editor() -> Editor {
        Editor::new("", b"", Config::default(), Rect::root(Point::new(0, 0), Point::new(80, 25)))
    }

    #[test]
    fn quit_sets_exit_flag() {
        let mut editor = editor();
        execute(&mut editor, "quit");
        assert!(editor.exit_requested);
    }

    #[test]
    fn unknown_command_sets_status_message() {
        let mut editor = editor();
        execute(&mut editor, "xyz");
        assert!(!editor.exit_requested);
        assert_eq!(editor.status_message, "Not an editor command: xyz");
    }
}
