//! Tab bar widget: an ordered set of switchable content panes.

use crate::core::content::Content;
use crate::core::key::Key;
use crate::core::message::{Cmd, Msg};
use crate::core::text::{fit_to_height, visible_width};

const SEPARATOR: &str = "\x1b[2m│\x1b[22m";
const CLOSE_MARK: &str = "×";

/// One switchable pane.
pub struct Tab {
    pub id: String,
    pub label: String,
    pub badge: Option<String>,
    pub content: Option<Box<dyn Content>>,
    pub closable: bool,
    pub hidden: bool,
    /// Key id (for example `"ctrl+l"`) that jumps straight to this tab.
    pub shortcut: Option<String>,
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            badge: None,
            content: None,
            closable: false,
            hidden: false,
            shortcut: None,
        }
    }

    pub fn with_content(mut self, content: impl Content + 'static) -> Self {
        self.content = Some(Box::new(content));
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_shortcut(mut self, key_id: impl AsRef<str>) -> Self {
        self.shortcut = Some(Key::new(key_id).id().to_string());
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Fire `on_activate` if the content implements the tab lifecycle.
    pub fn activate(&mut self) -> Option<Cmd> {
        self.content
            .as_mut()
            .and_then(|content| content.as_tab_content())
            .and_then(|hooks| hooks.on_activate())
    }

    /// Fire `on_deactivate` if the content implements the tab lifecycle.
    pub fn deactivate(&mut self) {
        if let Some(hooks) = self
            .content
            .as_mut()
            .and_then(|content| content.as_tab_content())
        {
            hooks.on_deactivate();
        }
    }

    fn label_segment(&self) -> String {
        let mut segment = format!(" {}", self.label);
        if let Some(badge) = self.badge.as_deref().filter(|badge| !badge.is_empty()) {
            segment.push_str(&format!(" ({badge})"));
        }
        if self.closable {
            segment.push(' ');
            segment.push_str(CLOSE_MARK);
        }
        segment.push(' ');
        segment
    }
}

/// Ordered tabs with a single active index.
///
/// `active` is always within `0..len`, or `0` when the bar is empty. None of the
/// selection methods fire lifecycle hooks; the shell owns activation.
#[derive(Default)]
pub struct TabBar {
    tabs: Vec<Tab>,
    active: usize,
    width: usize,
    height: usize,
}

impl TabBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tab. The first tab added becomes active.
    pub fn add_tab(&mut self, mut tab: Tab) {
        if let Some(content) = tab.content.as_mut() {
            content.set_size(self.width, self.height);
        }
        self.tabs.push(tab);
        if self.tabs.len() == 1 {
            self.active = 0;
        }
    }

    /// Remove a tab by id. Unknown ids are a no-op.
    ///
    /// The active index is only clamped into range, so removing a tab at or before it
    /// hands the active slot to whichever tab now occupies that index.
    pub fn remove_tab(&mut self, id: &str) -> Option<Tab> {
        let index = self.index_of(id)?;
        let removed = self.tabs.remove(index);
        if index <= self.active {
            self.active = self.active.min(self.tabs.len().saturating_sub(1));
        }
        Some(removed)
    }

    /// Remove the active tab if it is closable.
    pub fn close_active(&mut self) -> Option<Tab> {
        let id = self
            .active_tab()
            .filter(|tab| tab.closable)
            .map(|tab| tab.id.clone())?;
        self.remove_tab(&id)
    }

    pub fn set_active(&mut self, id: &str) {
        if let Some(index) = self.index_of(id) {
            self.active = index;
        }
    }

    /// Out-of-range indices are ignored.
    pub fn set_active_by_index(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active = index;
        }
    }

    pub fn next_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active = (self.active + 1) % self.tabs.len();
        }
    }

    pub fn prev_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.get(self.active)
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        self.tabs.get_mut(self.active)
    }

    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn tab_mut(&mut self, id: &str) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|tab| tab.id == id)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    /// Index of the first tab whose shortcut matches `key`.
    pub fn shortcut_index(&self, key: &Key) -> Option<usize> {
        self.tabs
            .iter()
            .position(|tab| tab.shortcut.as_deref() == Some(key.id()))
    }

    pub fn set_badge(&mut self, id: &str, badge: Option<String>) {
        if let Some(tab) = self.tab_mut(id) {
            tab.badge = badge;
        }
    }

    /// Size of the content region, forwarded to every tab's content.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        for content in self.tabs.iter_mut().filter_map(|tab| tab.content.as_mut()) {
            content.set_size(width, height);
        }
    }

    /// Batched `init` of every tab's content.
    pub fn init(&mut self) -> Option<Cmd> {
        Cmd::batch(
            self.tabs
                .iter_mut()
                .filter_map(|tab| tab.content.as_mut())
                .map(|content| content.init())
                .collect::<Vec<_>>(),
        )
    }

    /// Cycle on `tab`/`shift+tab`/`ctrl+tab`, then deliver the key to the active content.
    ///
    /// The content sees the key even when it was used for cycling.
    pub fn handle_key(&mut self, key: &Key) -> Option<Cmd> {
        if key.is_any(&["tab", "ctrl+tab"]) {
            self.next_tab();
        } else if key.is("shift+tab") {
            self.prev_tab();
        }
        self.update(&Msg::Key(key.clone()))
    }

    /// Forward a message to the active tab's content.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        self.active_tab_mut()
            .and_then(|tab| tab.content.as_mut())
            .and_then(|content| content.update(msg))
    }

    /// Render the bar itself on one line.
    pub fn render(&self, width: usize) -> String {
        let mut line = String::new();
        let mut used = 0;
        for (index, tab) in self.tabs.iter().enumerate() {
            if tab.hidden {
                continue;
            }
            let segment = tab.label_segment();
            let separator_width = usize::from(used > 0);
            let segment_width = visible_width(&segment);
            if used + separator_width + segment_width > width {
                break;
            }
            if used > 0 {
                line.push_str(SEPARATOR);
            }
            if index == self.active {
                line.push_str(&format!("\x1b[7m{segment}\x1b[27m"));
            } else {
                line.push_str(&segment);
            }
            used += separator_width + segment_width;
        }
        line
    }

    /// Render the active tab's content as exactly `height` lines.
    ///
    /// Tabs without content render blank lines.
    pub fn render_active_content(&self, _width: usize, height: usize) -> String {
        let view = self
            .active_tab()
            .and_then(|tab| tab.content.as_ref())
            .map(|content| content.view())
            .unwrap_or_default();
        fit_to_height(&view, height).join("\n")
    }
}
