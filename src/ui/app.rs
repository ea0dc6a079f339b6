use crate::controller::CatalogController;
use crate::movies::{DraftField, MovieId};
use crate::ui::catalog::CatalogState;

/// What keys currently act on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Browse,
    /// Editing the new-movie draft; `field` has the cursor.
    Compose { field: DraftField },
}

pub struct App {
    should_quit: bool,
    mode: Mode,
    selection: usize,
    animation_tick: u8,
    controller: CatalogController,
}

impl App {
    pub fn new(controller: CatalogController) -> Self {
        Self {
            should_quit: false,
            mode: Mode::Browse,
            selection: 0,
            animation_tick: 0,
            controller,
        }
    }

    /// Initial fetch, the terminal equivalent of mounting the view.
    pub fn start(&mut self) {
        self.controller.fetch_movies();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn catalog(&self) -> &CatalogState {
        self.controller.state()
    }

    pub fn controller_mut(&mut self) -> &mut CatalogController {
        &mut self.controller
    }

    pub fn on_tick(&mut self) {
        if self.catalog().is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    /// Keep the selection inside the list after it changed underneath us.
    pub fn on_catalog_changed(&mut self) {
        let len = self.catalog().movies.len();
        if self.selection >= len {
            self.selection = len.saturating_sub(1);
        }
    }

    pub fn request_fetch(&mut self) {
        if self.catalog().can_fetch() {
            self.controller.fetch_movies();
        }
    }

    pub fn request_cancel_retry(&mut self) {
        self.controller.cancel_retrying();
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.catalog().movies.len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        let next = self.selection as isize + delta;
        self.selection = next.clamp(0, len as isize - 1) as usize;
    }

    pub fn selected_id(&self) -> Option<MovieId> {
        self.catalog()
            .movies
            .get(self.selection)
            .map(|movie| movie.id.clone())
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.controller.delete_movie(id);
            self.on_catalog_changed();
        }
    }

    pub fn begin_compose(&mut self) {
        self.mode = Mode::Compose {
            field: DraftField::Title,
        };
    }

    /// Leave the form; the draft keeps whatever was typed.
    pub fn abort_compose(&mut self) {
        self.mode = Mode::Browse;
    }

    pub fn next_field(&mut self) {
        if let Mode::Compose { field } = self.mode {
            self.mode = Mode::Compose {
                field: field.next(),
            };
        }
    }

    pub fn type_char(&mut self, ch: char) {
        if let Mode::Compose { field } = self.mode {
            let mut value = self.catalog().draft.field(field).to_string();
            value.push(ch);
            self.controller.edit_draft(field, value);
        }
    }

    pub fn backspace(&mut self) {
        if let Mode::Compose { field } = self.mode {
            let mut value = self.catalog().draft.field(field).to_string();
            if value.pop().is_some() {
                self.controller.edit_draft(field, value);
            }
        }
    }

    pub fn submit_draft(&mut self) {
        if matches!(self.mode, Mode::Compose { .. }) {
            self.controller.add_movie();
            self.mode = Mode::Browse;
        }
    }
}
