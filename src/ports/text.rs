// src/ports/text.rs
use crate::constants::PREVIEW_MAX_CHARS;
use crate::domain::{Note, NotesPage};
use crate::util::text::preview;
use std::num::NonZeroU32;

/// Plain-text rendering of notes for the terminal
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// One line per note, then a page footer
    pub fn render_page(&self, page: &NotesPage, current: NonZeroU32) -> String {
        if page.notes.is_empty() {
            return format!("No notes found (page {} of {})\n", current, page.total_pages);
        }

        let id_width = page
            .notes
            .iter()
            .map(|n| n.id.to_string().len())
            .max()
            .unwrap_or(1);

        let mut out = String::new();
        for note in &page.notes {
            let summary = preview(&note.content, PREVIEW_MAX_CHARS);
            out.push_str(&format!(
                "{:>width$}  [{}] {}",
                note.id,
                note.tag,
                note.title,
                width = id_width
            ));
            if !summary.is_empty() {
                out.push_str(&format!(" - {}", summary));
            }
            out.push('\n');
        }
        out.push_str(&format!("page {} of {}\n", current, page.total_pages));
        out
    }

    pub fn render_note(&self, note: &Note) -> String {
        let mut out = format!(
            "id:      {}\ntitle:   {}\ntag:     {}\n",
            note.id, note.title, note.tag
        );
        if let Some(created) = &note.created_at {
            out.push_str(&format!("created: {}\n", created));
        }
        if let Some(updated) = &note.updated_at {
            out.push_str(&format!("updated: {}\n", updated));
        }
        out.push('\n');
        out.push_str(&note.content);
        out.push('\n');
        out
    }
}
