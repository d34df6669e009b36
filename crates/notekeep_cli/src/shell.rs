//! Line-oriented presentation shell over `NoteStore`.
//!
//! # Responsibility
//! - Model list/add/edit screens and navigation between them.
//! - Hold form drafts until `save` commits them to the store.
//! - Render toasts, field errors and the delete undo banner as text.
//!
//! # Invariants
//! - The shell never mutates notes directly; only store calls do.
//! - Navigating to a missing edit target is a silent no-op.

use log::debug;
use notekeep_core::{EditError, NoteId, NoteStore, RemovedNote, UndoError, ValidationError};
use std::io::{self, BufRead, Write};

const HELP: &str = "commands: list | add | edit <id> | title <text> | desc <text> | save | back \
| toggle <id> | delete <id> | undo | dismiss | help | quit";

/// Unsaved form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Draft {
    title: String,
    description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Screen {
    List,
    Add(Draft),
    Edit { id: NoteId, draft: Draft },
}

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<W: Write> {
    store: NoteStore,
    screen: Screen,
    last_removed: Option<RemovedNote>,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(store: NoteStore, out: W) -> Self {
        Self {
            store,
            screen: Screen::List,
            last_removed: None,
            out,
        }
    }

    /// Reads commands until EOF or `quit`.
    pub fn run(&mut self, input: impl BufRead) -> io::Result<()> {
        writeln!(self.out, "{HELP}")?;
        for line in input.lines() {
            if self.handle_line(&line?)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out
    }

    fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        if self.store.poll_undo_window() {
            self.last_removed = None;
        }

        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        debug!("event=shell_command module=cli command={command}");

        match command {
            "" => {}
            "list" | "back" => self.show_list()?,
            "add" => self.open_add()?,
            "edit" => match parse_id(arg) {
                Some(id) => self.open_edit(id)?,
                None => writeln!(self.out, "usage: edit <id>")?,
            },
            "title" => self.update_draft(|draft| draft.title = arg.to_string())?,
            "desc" => self.update_draft(|draft| draft.description = arg.to_string())?,
            "save" => self.save()?,
            "toggle" => match parse_id(arg) {
                Some(id) => self.toggle(id)?,
                None => writeln!(self.out, "usage: toggle <id>")?,
            },
            "delete" => match parse_id(arg) {
                Some(id) => self.delete(id)?,
                None => writeln!(self.out, "usage: delete <id>")?,
            },
            "undo" => self.undo()?,
            "dismiss" => {
                if self.store.close_undo_window() {
                    self.last_removed = None;
                }
            }
            "help" => writeln!(self.out, "{HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => writeln!(self.out, "unknown command `{other}`; try `help`")?,
        }
        Ok(Flow::Continue)
    }

    fn show_list(&mut self) -> io::Result<()> {
        self.screen = Screen::List;
        let notes = self.store.list();
        writeln!(self.out, "== Note List ==")?;
        if notes.is_empty() {
            writeln!(self.out, "(no notes)")?;
        }
        for note in notes {
            let mark = if note.completed { "x" } else { " " };
            writeln!(
                self.out,
                "[{mark}] #{} {} - {}",
                note.id, note.title, note.description
            )?;
        }
        Ok(())
    }

    fn open_add(&mut self) -> io::Result<()> {
        self.screen = Screen::Add(Draft::default());
        writeln!(self.out, "== Add Note ==")
    }

    fn open_edit(&mut self, id: NoteId) -> io::Result<()> {
        let Some(note) = self.store.get(id) else {
            debug!("event=shell_open_edit module=cli status=missing id={id}");
            return Ok(());
        };
        writeln!(self.out, "== Edit Note #{id} ==")?;
        writeln!(self.out, "title: {}", note.title)?;
        writeln!(self.out, "desc: {}", note.description)?;
        self.screen = Screen::Edit {
            id,
            draft: Draft {
                title: note.title,
                description: note.description,
            },
        };
        Ok(())
    }

    fn update_draft(&mut self, apply: impl FnOnce(&mut Draft)) -> io::Result<()> {
        match &mut self.screen {
            Screen::Add(draft) | Screen::Edit { draft, .. } => {
                apply(draft);
                Ok(())
            }
            Screen::List => writeln!(self.out, "no form open; use `add` or `edit <id>`"),
        }
    }

    fn save(&mut self) -> io::Result<()> {
        match self.screen.clone() {
            Screen::List => writeln!(self.out, "no form open; use `add` or `edit <id>`"),
            Screen::Add(draft) => match self.store.add(draft.title, draft.description) {
                Ok(_) => {
                    self.show_list()?;
                    writeln!(self.out, "Note added")
                }
                Err(err) => self.print_field_errors(&err),
            },
            Screen::Edit { id, draft } => {
                match self.store.edit(id, draft.title, draft.description) {
                    Ok(_) => {
                        self.show_list()?;
                        writeln!(self.out, "Note edited")
                    }
                    Err(EditError::Invalid(err)) => self.print_field_errors(&err),
                    Err(EditError::NotFound(_)) => self.show_list(),
                }
            }
        }
    }

    fn toggle(&mut self, id: NoteId) -> io::Result<()> {
        match self.store.toggle_completed(id) {
            Ok(_) => self.show_list(),
            Err(err) => writeln!(self.out, "{err}"),
        }
    }

    fn delete(&mut self, id: NoteId) -> io::Result<()> {
        match self.store.remove(id) {
            Ok(removed) => {
                self.last_removed = Some(removed);
                self.show_list()?;
                writeln!(self.out, "Note deleted [undo]")
            }
            Err(err) => writeln!(self.out, "{err}"),
        }
    }

    fn undo(&mut self) -> io::Result<()> {
        let Some(removed) = self.last_removed.take() else {
            return writeln!(self.out, "nothing to undo");
        };
        match self.store.undo_remove(&removed) {
            Ok(_) => {
                self.show_list()?;
                writeln!(self.out, "Note restored")
            }
            Err(UndoError::AlreadyRestored(_)) => writeln!(self.out, "nothing to undo"),
            Err(err @ UndoError::WindowClosed(_)) => writeln!(self.out, "{err}"),
        }
    }

    fn print_field_errors(&mut self, err: &ValidationError) -> io::Result<()> {
        if let Some(title) = err.title_error() {
            writeln!(self.out, "title: {title}")?;
        }
        if let Some(description) = err.description_error() {
            writeln!(self.out, "desc: {description}")?;
        }
        Ok(())
    }
}

fn parse_id(arg: &str) -> Option<NoteId> {
    arg.trim_start_matches('#').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::Shell;
    use notekeep_core::{NoteStore, StoreConfig};
    use std::time::Duration;

    fn run_script(store: NoteStore, script: &str) -> (String, usize) {
        let mut shell = Shell::new(store, Vec::new());
        shell.run(script.as_bytes()).expect("in-memory io");
        let remaining = shell.store.len();
        let output = String::from_utf8(shell.into_output()).expect("utf-8 output");
        (output, remaining)
    }

    #[test]
    fn add_flow_saves_and_returns_to_list() {
        let (output, count) = run_script(
            NoteStore::new(),
            "add\ntitle Groceries\ndesc milk and eggs\nsave\n",
        );
        assert_eq!(count, 1);
        assert!(output.contains("[ ] #1 Groceries - milk and eggs"));
        assert!(output.contains("Note added"));
    }

    #[test]
    fn invalid_save_keeps_form_open_with_errors() {
        let (output, count) = run_script(NoteStore::new(), "add\ntitle ab\nsave\n");
        assert_eq!(count, 0);
        assert!(output.contains("title: Title must be at least 3 characters"));
        assert!(output.contains("desc: Description is required"));
        assert!(!output.contains("Note added"));
    }

    #[test]
    fn edit_of_missing_id_is_silent() {
        let (output, _) = run_script(NoteStore::new(), "edit 9\ntitle whatever\n");
        assert!(!output.contains("Edit Note"));
        assert!(output.contains("no form open"));
    }

    #[test]
    fn edit_flow_updates_note() {
        let mut store = NoteStore::new();
        store.add("first", "body").expect("valid note");
        let (output, _) = run_script(store, "edit 1\ntitle renamed\nsave\n");
        assert!(output.contains("== Edit Note #1 =="));
        assert!(output.contains("[ ] #1 renamed - body"));
        assert!(output.contains("Note edited"));
    }

    #[test]
    fn delete_then_undo_restores_note() {
        let mut store = NoteStore::new();
        store.add("first", "body").expect("valid note");
        let (output, count) = run_script(store, "toggle 1\ndelete 1\nundo\nundo\n");
        assert_eq!(count, 1);
        assert!(output.contains("Note deleted [undo]"));
        assert!(output.contains("Note restored"));
        assert!(output.contains("[x] #1 first - body"));
        assert!(output.contains("nothing to undo"));
    }

    #[test]
    fn undo_after_window_closes_is_refused() {
        let mut store = NoteStore::with_config(StoreConfig {
            undo_window: Duration::ZERO,
            ..StoreConfig::default()
        });
        store.add("first", "body").expect("valid note");
        let (output, count) = run_script(store, "delete 1\nundo\n");
        assert_eq!(count, 0);
        assert!(output.contains("nothing to undo"));
    }

    #[test]
    fn quit_stops_reading() {
        let (output, count) = run_script(NoteStore::new(), "quit\nadd\n");
        assert_eq!(count, 0);
        assert!(!output.contains("Add Note"));
    }
}
