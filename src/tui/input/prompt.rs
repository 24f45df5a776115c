use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Priority;
use crate::tui::app::{App, ChoiceTarget, Mode, TextTarget};
use crate::tui::command_actions::{add_task, update_priority, update_title};
use crate::util::unicode::pop_grapheme;

use super::typed_char;

/// Line editing for the text prompt: type, Backspace, Enter, Esc
pub(super) fn handle_text_prompt(app: &mut App, key: KeyEvent) {
    let Mode::PromptText { buffer, .. } = &mut app.mode else {
        return;
    };

    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => {
            pop_grapheme(buffer);
        }
        KeyCode::Enter => {
            // Blank input is not accepted; the prompt stays open
            if buffer.trim().is_empty() {
                return;
            }
            confirm_text(app);
        }
        _ => {
            if let Some(c) = typed_char(&key) {
                buffer.push(c);
            }
        }
    }
}

fn confirm_text(app: &mut App) {
    let Mode::PromptText { target, buffer } = std::mem::replace(&mut app.mode, Mode::Navigate)
    else {
        return;
    };
    match target {
        TextTarget::NewTask => {
            app.mode = Mode::PromptChoice {
                target: ChoiceTarget::NewTask {
                    title: buffer.trim().to_string(),
                },
            };
        }
        TextTarget::Title { index, original } => {
            update_title(app, index, &original, &buffer);
        }
    }
}

/// Single-key choice: `1`/`2`/`3` commit a priority, Esc cancels, anything
/// else is ignored.
pub(super) fn handle_choice_prompt(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.mode = Mode::Navigate;
        return;
    }
    let Some(priority) = typed_char(&key).and_then(Priority::from_choice_key) else {
        return;
    };
    let Mode::PromptChoice { target } = std::mem::replace(&mut app.mode, Mode::Navigate) else {
        return;
    };
    match target {
        ChoiceTarget::NewTask { title } => add_task(app, &title, priority),
        ChoiceTarget::Priority { index, current } => {
            update_priority(app, index, current, priority);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Priority, TaskStatus};
    use crate::tui::app::{ChoiceTarget, Mode, TextTarget};
    use crate::tui::input::handle_key;
    use crate::tui::test_helpers::*;
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    fn buffer(app: &crate::tui::app::App) -> &str {
        match &app.mode {
            Mode::PromptText { buffer, .. } => buffer,
            _ => panic!("not in a text prompt: {:?}", app.mode),
        }
    }

    #[test]
    fn add_flow_creates_task() {
        let (mut app, saves) = app_with_tasks(sample_tasks());
        handle_key(&mut app, ch('a'));
        type_text(&mut app, "Water plants");
        assert_eq!(buffer(&app), "Water plants");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(
            app.mode,
            Mode::PromptChoice {
                target: ChoiceTarget::NewTask {
                    title: "Water plants".into(),
                },
            }
        );
        assert_eq!(saves.get(), 0);

        handle_key(&mut app, ch('2'));
        assert_eq!(app.mode, Mode::Navigate);
        let last = app.tasks().last().unwrap();
        assert_eq!(last.title, "Water plants");
        assert_eq!(last.priority, Priority::Medium);
        assert_eq!(last.status, TaskStatus::Todo);
        assert_eq!(app.tasks().len(), 4);
        assert_eq!(saves.get(), 1);
        // New task is not auto-selected
        assert_eq!(app.selection.current_row, 0);
    }

    #[test]
    fn typed_letters_do_not_trigger_commands() {
        let (mut app, saves) = app_with_tasks(sample_tasks());
        handle_key(&mut app, ch('a'));
        type_text(&mut app, "qdj tfsc");
        assert_eq!(buffer(&app), "qdj tfsc");
        assert!(!app.should_quit);
        assert_eq!(app.tasks().len(), 3);
        assert_eq!(saves.get(), 0);
    }

    #[test]
    fn blank_title_keeps_prompt_open() {
        let mut app = sample_app();
        handle_key(&mut app, ch('a'));
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(matches!(app.mode, Mode::PromptText { .. }));
        type_text(&mut app, "   ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(buffer(&app), "   ");
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut app = sample_app();
        handle_key(&mut app, ch('a'));
        type_text(&mut app, "abc");
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(buffer(&app), "ab");
        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(buffer(&app), "");
    }

    #[test]
    fn esc_during_add_discards_everything() {
        let (mut app, saves) = app_with_tasks(sample_tasks());
        handle_key(&mut app, ch('a'));
        type_text(&mut app, "Never mind");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);

        // Cancelling at the priority step as well
        handle_key(&mut app, ch('a'));
        type_text(&mut app, "Also no");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);

        assert_eq!(app.tasks().len(), 3);
        assert_eq!(saves.get(), 0);
    }

    #[test]
    fn choice_ignores_other_keys() {
        let mut app = sample_app();
        handle_key(&mut app, ch('p'));
        for c in ['4', '0', 'h', 'q'] {
            handle_key(&mut app, ch(c));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(matches!(app.mode, Mode::PromptChoice { .. }));
        assert!(!app.should_quit);
    }

    #[test]
    fn edit_title_commits_change() {
        let (mut app, saves) = app_with_tasks(sample_tasks());
        handle_key(&mut app, ch('e'));
        for _ in 0.."bug".len() {
            handle_key(&mut app, key(KeyCode::Backspace));
        }
        type_text(&mut app, "login crash");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tasks()[1].title, "Fix login crash");
        assert_eq!(saves.get(), 1);
    }

    #[test]
    fn edit_title_cancel_leaves_title_and_store_untouched() {
        let (mut app, saves) = app_with_tasks(sample_tasks());
        handle_key(&mut app, ch('e'));
        type_text(&mut app, " today");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tasks()[1].title, "Fix bug");
        assert_eq!(saves.get(), 0);
    }

    #[test]
    fn edit_title_unchanged_does_not_persist() {
        let (mut app, saves) = app_with_tasks(sample_tasks());
        handle_key(&mut app, ch('e'));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(saves.get(), 0);
    }

    #[test]
    fn edit_of_padded_title_without_typing_does_not_persist() {
        let (mut app, saves) = app_with_tasks(vec![task(
            "  Padded  ",
            Priority::Low,
            TaskStatus::Todo,
            1,
        )]);
        handle_key(&mut app, ch('e'));
        assert_eq!(buffer(&app), "  Padded  ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tasks()[0].title, "  Padded  ");
        assert_eq!(saves.get(), 0);

        // A real change still goes through, trimmed
        handle_key(&mut app, ch('e'));
        type_text(&mut app, "!");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.tasks()[0].title, "Padded  !");
        assert_eq!(saves.get(), 1);
    }

    #[test]
    fn edit_priority_commits_and_resorts() {
        let (mut app, saves) = app_with_tasks(sample_tasks());
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('p'));
        assert_eq!(
            app.mode,
            Mode::PromptChoice {
                target: ChoiceTarget::Priority {
                    index: 0,
                    current: Priority::Low,
                },
            }
        );
        handle_key(&mut app, ch('3'));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tasks()[0].priority, Priority::High);
        assert_eq!(saves.get(), 1);
        // Both HIGH now: store order decides
        assert_eq!(titles(&app), vec!["Buy milk", "Fix bug"]);
    }

    #[test]
    fn edit_priority_same_value_does_not_persist() {
        let (mut app, saves) = app_with_tasks(sample_tasks());
        handle_key(&mut app, ch('p'));
        handle_key(&mut app, ch('3'));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(saves.get(), 0);
    }

    #[test]
    fn edit_priority_cancel() {
        let (mut app, saves) = app_with_tasks(sample_tasks());
        handle_key(&mut app, ch('p'));
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tasks()[1].priority, Priority::High);
        assert_eq!(saves.get(), 0);
    }

    #[test]
    fn prompt_target_is_fixed_before_typing() {
        let (mut app, _saves) = app_with_tasks(sample_tasks());
        handle_key(&mut app, ch('e'));
        let Mode::PromptText { target, .. } = &app.mode else {
            panic!("expected text prompt");
        };
        assert_eq!(
            target,
            &TextTarget::Title {
                index: 1,
                original: "Fix bug".into(),
            }
        );
    }
}
