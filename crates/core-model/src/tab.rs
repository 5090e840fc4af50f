//! A `Tab`: a 2-D adjacency graph of windows. Each `TabItem` owns one
//! `Window` and up to four neighbor links; the tab tracks its head item and
//! the currently focused one.

use crate::window::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabItemId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug)]
struct TabItem {
    window: Window,
    left: Option<TabItemId>,
    right: Option<TabItemId>,
    up: Option<TabItemId>,
    down: Option<TabItemId>,
}

#[derive(Debug)]
pub struct Tab {
    items: Vec<TabItem>,
    head: TabItemId,
    focused: TabItemId,
}

impl Tab {
    /// A tab holding a single window, focused on itself.
    pub fn new(window: Window) -> Self {
        Self {
            items: vec![TabItem {
                window,
                left: None,
                right: None,
                up: None,
                down: None,
            }],
            head: TabItemId(0),
            focused: TabItemId(0),
        }
    }

    pub fn head(&self) -> TabItemId {
        self.head
    }

    pub fn focused(&self) -> TabItemId {
        self.focused
    }

    pub fn window(&self, id: TabItemId) -> &Window {
        &self.items[id.0 as usize].window
    }

    pub fn window_mut(&mut self, id: TabItemId) -> &mut Window {
        &mut self.items[id.0 as usize].window
    }

    pub fn focused_window(&self) -> &Window {
        self.window(self.focused)
    }

    pub fn focused_window_mut(&mut self) -> &mut Window {
        self.window_mut(self.focused)
    }

    fn neighbor(&self, id: TabItemId, dir: Direction) -> Option<TabItemId> {
        let item = &self.items[id.0 as usize];
        match dir {
            Direction::Left => item.left,
            Direction::Right => item.right,
            Direction::Up => item.up,
            Direction::Down => item.down,
        }
    }

    /// Link `a` and `b` as neighbors in `dir` (and the reverse direction on
    /// `b`), for building a layout grid as windows split.
    pub fn link(&mut self, a: TabItemId, dir: Direction, b: TabItemId) {
        let reverse = match dir {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        };
        self.set_neighbor(a, dir, Some(b));
        self.set_neighbor(b, reverse, Some(a));
    }

    fn set_neighbor(&mut self, id: TabItemId, dir: Direction, value: Option<TabItemId>) {
        let item = &mut self.items[id.0 as usize];
        match dir {
            Direction::Left => item.left = value,
            Direction::Right => item.right = value,
            Direction::Up => item.up = value,
            Direction::Down => item.down = value,
        }
    }

    /// Move focus to the neighbor in `dir`, if one exists. Returns whether
    /// focus moved.
    pub fn switch_window(&mut self, dir: Direction) -> bool {
        match self.neighbor(self.focused, dir) {
            Some(target) => {
                self.focused = target;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::BufferRegistry;
    use crate::rect::{Point, Rect};
    use core_text::TextModel;

    fn window() -> Window {
        let mut reg = BufferRegistry::new();
        let id = reg.fresh_empty();
        let model = TextModel::empty();
        let layout = Rect::root(Point::new(0, 0), Point::new(80, 25));
        Window::new(id, &model, layout)
    }

    #[test]
    fn switch_window_noop_without_neighbor() {
        let mut tab = Tab::new(window());
        assert!(!tab.switch_window(Direction::Left));
        assert_eq!(tab.focused(), tab.head());
    }

    #[test]
    fn linked_neighbors_switch_both_ways() {
        let mut tab = Tab::new(window());
        let second_id = {
            tab.items.push(TabItem {
                window: window(),
                left: None,
                right: None,
                up: None,
                down: None,
            });
            TabItemId((tab.items.len() - 1) as u32)
        };
        tab.link(tab.head(), Direction::Right, second_id);
        assert!(tab.switch_window(Direction::Right));
        assert_eq!(tab.focused(), second_id);
        assert!(tab.switch_window(Direction::Left));
        assert_eq!(tab.focused(), tab.head());
    }
}
