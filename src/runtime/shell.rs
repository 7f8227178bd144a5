//! Top-level shell: focus routing, key arbitration and frame composition.
//!
//! Key priority, first match wins:
//! 1. the top modal's own `handle_key`;
//! 2. `escape` the modal left unclaimed pops it;
//! 3. global keys (`ctrl+c`/`ctrl+q`, `ctrl+e`, `escape`, `?`, `:`);
//! 4. `alt+1`..`alt+9` select a tab;
//! 5. `ctrl+` keys registered as tab shortcuts;
//! 6. whatever the focus target names (input box or tab bar).
//!
//! While any modal is on the stack, steps 3-6 are skipped entirely.

use crate::config::ShellConfig;
use crate::core::key::Key;
use crate::core::message::{Cmd, Msg};
use crate::core::content::{Content, Focusable};
use crate::core::modal::Modal;
use crate::core::text::fit_to_height;
use crate::runtime::focus::FocusTarget;
use crate::runtime::overlay::ModalManager;
use crate::widgets::help::HelpModal;
use crate::widgets::input::{Input, INPUT_HEIGHT};
use crate::widgets::status_bar::StatusBar;
use crate::widgets::tab_bar::{Tab, TabBar};

/// Frame returned by [`Shell::view`] until the first resize arrives.
pub const LOADING: &str = "Loading...";

/// Application shell: tab bar, active tab content, input box, status bar and modal stack.
pub struct Shell {
    config: ShellConfig,
    width: usize,
    height: usize,
    ready: bool,
    activated: bool,
    focus: FocusTarget,
    focus_before_modal: FocusTarget,
    modals: ModalManager,
    tab_bar: TabBar,
    input: Input,
    status_bar: StatusBar,
}

impl Shell {
    /// Build a shell. Input-related options (prefix, placeholder, history, autocomplete,
    /// suggestions) are moved into the input box.
    pub fn new(mut config: ShellConfig) -> Self {
        let mut input = Input::new();
        input.set_prompt(config.input_prefix.clone());
        input.set_placeholder(config.input_placeholder.clone());
        input.set_history_provider(config.history_provider.take());
        input.set_autocomplete(config.autocomplete.take());
        input.set_suggestion_renderer(config.suggestions.take());
        input.set_focused(true);

        Self {
            config,
            width: 0,
            height: 0,
            ready: false,
            activated: false,
            focus: FocusTarget::Input,
            focus_before_modal: FocusTarget::Input,
            modals: ModalManager::new(),
            tab_bar: TabBar::new(),
            input,
            status_bar: StatusBar::new(),
        }
    }

    /// Startup commands of every tab's content.
    pub fn init(&mut self) -> Option<Cmd> {
        self.tab_bar.init()
    }

    /// Apply one message and return the follow-up command, if any.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        match msg {
            Msg::Resize { width, height } => self.handle_resize(width, height),
            Msg::Key(key) => self.handle_key(&key),
            // Both modal messages go straight to the stack; focus stays where it was.
            Msg::PopModal => {
                self.modals.pop();
                None
            }
            Msg::PushModal(modal) => {
                self.modals.push(modal);
                None
            }
            Msg::InputSubmit { value } => self
                .config
                .on_input_submit
                .as_mut()
                .and_then(|callback| callback(value)),
            Msg::Refresh => None,
            msg @ Msg::Custom(_) => self.tab_bar.update(&msg),
        }
    }

    fn handle_resize(&mut self, width: usize, height: usize) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.modals.set_size(width, height);
        self.input.set_size(width, INPUT_HEIGHT);
        self.ready = true;
        let content_height = self.content_height();
        self.tab_bar.set_size(width, content_height);

        if self.activated {
            return None;
        }
        self.activated = true;
        tracing::info!(width, height, content_height, "shell ready");
        self.tab_bar.active_tab_mut().and_then(Tab::activate)
    }

    fn handle_key(&mut self, key: &Key) -> Option<Cmd> {
        if self.modals.has_active() {
            let (handled, cmd) = self.modals.handle_key(key);
            if handled {
                return cmd;
            }
            if key.is("escape") {
                self.pop_modal();
            }
            return None;
        }

        if key.is_any(&["ctrl+c", "ctrl+q"]) {
            tracing::info!(key = key.id(), "quit requested");
            return Some(Cmd::Quit);
        }
        if key.is("ctrl+e") {
            if let Some(callback) = self.config.on_show_errors.as_mut() {
                return callback();
            }
        }
        if key.is("escape") {
            self.set_focus(self.focus.toggled());
            return None;
        }
        if key.is("?") && !self.config.help_categories.is_empty() {
            let help = HelpModal::new(self.config.help_categories.clone());
            self.push_modal(Box::new(help));
            return None;
        }
        if key.is(":") && self.input.is_empty() {
            if let Some(callback) = self.config.on_quick_actions.as_mut() {
                return callback();
            }
        }

        if let Some(digit) = key.alt_digit() {
            return self.activate_index(digit - 1);
        }

        if key.is_ctrl() {
            if let Some(index) = self.tab_bar.shortcut_index(key) {
                return self.activate_index(index);
            }
        }

        match self.focus {
            FocusTarget::Input => self.input.handle_key(key),
            FocusTarget::Tab => self.tab_bar.handle_key(key),
            FocusTarget::Modal => None,
        }
    }

    /// Select the tab at `index` and fire its activation hook.
    ///
    /// The previously active tab is deactivated when the selection changes.
    /// Out-of-range indices are ignored.
    fn activate_index(&mut self, index: usize) -> Option<Cmd> {
        if index >= self.tab_bar.len() {
            return None;
        }
        if index != self.tab_bar.active_index() {
            if let Some(previous) = self.tab_bar.active_tab_mut() {
                previous.deactivate();
            }
            self.tab_bar.set_active_by_index(index);
        }
        let tab = self.tab_bar.active_tab_mut()?;
        tracing::debug!(tab = %tab.id, index, "tab activated");
        tab.activate()
    }

    /// Activate a tab by id through the lifecycle path. Unknown ids are ignored.
    pub fn activate_tab(&mut self, id: &str) -> Option<Cmd> {
        let index = self.tab_bar.index_of(id)?;
        self.activate_index(index)
    }

    /// Append a tab. The first tab added becomes active.
    pub fn add_tab(&mut self, tab: Tab) {
        self.tab_bar.add_tab(tab);
    }

    /// Remove a tab by id.
    ///
    /// When the removal changes which tab is active, the previous one is deactivated and
    /// the new one activated.
    pub fn remove_tab(&mut self, id: &str) -> Option<Cmd> {
        let previous = self.active_tab().map(|tab| tab.id.clone());
        let mut removed = self.tab_bar.remove_tab(id)?;
        let current = self.active_tab().map(|tab| tab.id.clone());
        if previous == current {
            return None;
        }
        match previous.as_deref() {
            Some(previous) if previous == removed.id => removed.deactivate(),
            Some(previous) => {
                if let Some(tab) = self.tab_bar.tab_mut(previous) {
                    tab.deactivate();
                }
            }
            None => {}
        }
        let tab = self.tab_bar.active_tab_mut()?;
        tracing::debug!(tab = %tab.id, "tab activated after removal");
        tab.activate()
    }

    /// The currently selected tab.
    pub fn active_tab(&self) -> Option<&Tab> {
        self.tab_bar.active_tab()
    }

    /// Push a modal and move focus onto it.
    pub fn push_modal(&mut self, modal: Box<dyn Modal>) {
        if self.focus != FocusTarget::Modal {
            self.focus_before_modal = self.focus;
        }
        self.set_focus(FocusTarget::Modal);
        self.modals.push(modal);
    }

    /// Pop the top modal; focus returns to its pre-modal target once the stack is empty.
    pub fn pop_modal(&mut self) -> Option<Box<dyn Modal>> {
        let popped = self.modals.pop();
        if !self.modals.has_active() && self.focus == FocusTarget::Modal {
            self.set_focus(self.focus_before_modal);
        }
        popped
    }

    /// Where unclaimed keys are routed.
    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    /// Move focus. The input box shows its cursor only while it holds focus.
    pub fn set_focus(&mut self, target: FocusTarget) {
        if self.focus == target {
            return;
        }
        tracing::debug!(from = ?self.focus, to = ?target, "focus changed");
        self.focus = target;
        self.input.set_focused(target == FocusTarget::Input);
    }

    /// Whether the first resize has arrived.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Last viewport size as `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Rows left for tab content after the enabled bars, never less than one.
    pub fn content_height(&self) -> usize {
        let mut reserved = 0;
        if self.config.show_tab_bar {
            reserved += 1;
        }
        if self.config.show_status_bar {
            reserved += 1;
        }
        if self.config.show_input {
            reserved += INPUT_HEIGHT;
        }
        self.height.saturating_sub(reserved).max(1)
    }

    /// Compose the frame.
    ///
    /// An active modal replaces the whole base view with its centered overlay.
    pub fn view(&self) -> String {
        if !self.ready {
            return LOADING.to_string();
        }
        if self.modals.has_active() {
            return self.modals.render(self.width, self.height);
        }

        let mut sections = Vec::with_capacity(4);
        if self.config.show_tab_bar {
            sections.push(self.tab_bar.render(self.width));
        }

        let content_height = self.content_height();
        let content = self
            .tab_bar
            .render_active_content(self.width, content_height);
        let mut content_lines = fit_to_height(&content, content_height);
        if self.config.show_input && self.focus == FocusTarget::Input {
            // Suggestions sit directly above the input, over the bottom of the content.
            let suggestions = self.input.suggestion_lines(self.width);
            let shown = suggestions.len().min(content_height);
            let start = content_height - shown;
            for (slot, line) in content_lines[start..]
                .iter_mut()
                .zip(suggestions.into_iter().take(shown))
            {
                *slot = line;
            }
        }
        sections.push(content_lines.join("\n"));

        if self.config.show_input {
            sections.push(self.input.view());
        }
        if self.config.show_status_bar {
            sections.push(self.status_bar.render(self.width));
        }
        sections.join("\n")
    }

    /// Shell options. Input-related providers have already moved into the input box.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Mutable shell options, e.g. to swap callbacks at runtime.
    pub fn config_mut(&mut self) -> &mut ShellConfig {
        &mut self.config
    }

    /// The overlay stack.
    pub fn modals(&self) -> &ModalManager {
        &self.modals
    }

    /// Direct stack access. Pushes and pops here do not move focus.
    pub fn modals_mut(&mut self) -> &mut ModalManager {
        &mut self.modals
    }

    /// The tab bar and its tabs.
    pub fn tab_bar(&self) -> &TabBar {
        &self.tab_bar
    }

    /// Mutable tab bar. Selection changes made here skip the lifecycle hooks.
    pub fn tab_bar_mut(&mut self) -> &mut TabBar {
        &mut self.tab_bar
    }

    /// The input box.
    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Mutable input box.
    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    /// The status bar.
    pub fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    /// Mutable status bar, for updating its segments.
    pub fn status_bar_mut(&mut self) -> &mut StatusBar {
        &mut self.status_bar
    }
}
