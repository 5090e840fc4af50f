//! `Editor`: the single process-wide aggregate the main loop threads
//! through every iteration — buffer registry, tabs, input pipeline state,
//! both command queues, configuration, and the exit flag. Nothing here is
//! global; it all lives in one value owned by `gridvi-bin`'s main loop.

use core_config::Config;
use core_events::{EditorCommand, RingQueue, UserCommand};
use core_input::InputPipeline;
use core_model::{BufferId, BufferRegistry, Point, Rect, Tab, Window};

pub struct Editor {
    pub buffers: BufferRegistry,
    pub tabs: Vec<Tab>,
    pub current_tab: usize,
    pub input: InputPipeline,
    pub user_queue: RingQueue<UserCommand>,
    pub editor_queue: RingQueue<EditorCommand>,
    pub config: Config,
    pub exit_requested: bool,
    pub status_message: String,
}

impl Editor {
    /// A fresh editor with one tab, one window, opened on `filename`
    /// (empty for an unnamed buffer) holding `initial_bytes`.
    pub fn new(filename: &str, initial_bytes: &[u8], config: Config, screen: Rect) -> Self {
        let mut buffers = BufferRegistry::new();
        let buffer_id = buffers.get_or_create(filename, initial_bytes);
        let window = Window::new(buffer_id, &buffers.get(buffer_id).text, screen);
        let tab = Tab::new(window);
        Self {
            buffers,
            tabs: vec![tab],
            current_tab: 0,
            input: InputPipeline::new(),
            user_queue: RingQueue::new(),
            editor_queue: RingQueue::new(),
            config,
            exit_requested: false,
            status_message: String::new(),
        }
    }

    pub fn current_tab(&self) -> &Tab {
        &self.tabs[self.current_tab]
    }

    pub fn current_tab_mut(&mut self) -> &mut Tab {
        &mut self.tabs[self.current_tab]
    }

    pub fn focused_window(&self) -> &Window {
        self.current_tab().focused_window()
    }

    pub fn focused_window_mut(&mut self) -> &mut Window {
        self.current_tab_mut().focused_window_mut()
    }

    pub fn focused_buffer_id(&self) -> BufferId {
        self.focused_window().buffer
    }

    /// Open a window onto `filename` in the current tab's layout region,
    /// reusing a buffer already open on that path (spec.md §4.7).
    pub fn open_window(&mut self, filename: &str, bytes: &[u8], layout: Rect) -> Window {
        let buffer_id = self.buffers.get_or_create(filename, bytes);
        Window::new(buffer_id, &self.buffers.get(buffer_id).text, layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::root(Point::new(0, 0), Point::new(190, 80))
    }

    #[test]
    fn opening_same_filename_twice_reuses_buffer() {
        let mut editor = Editor::new("notes.txt", b"hello\n", Config::default(), screen());
        let first = editor.focused_buffer_id();
        let second_window = editor.open_window("notes.txt", b"ignored\n", screen());
        assert_eq!(second_window.buffer, first);
    }

    #[test]
    fn opening_empty_filename_always_allocates_fresh_buffer() {
        let mut editor = Editor::new("", b"", Config::default(), screen());
        let first = editor.focused_buffer_id();
        let second_window = editor.open_window("", b"", screen());
        assert_ne!(second_window.buffer, first);
    }

    #[test]
    fn new_window_starts_at_buffer_head_with_zero_offsets() {
        let editor = Editor::new("", b"abc\n", Config::default(), screen());
        let window = editor.focused_window();
        assert_eq!(window.x_offset, 0);
        assert_eq!(window.y_offset, 0);
        assert_eq!(window.cursor.pos, core_nav::Pos::origin());
    }
}
