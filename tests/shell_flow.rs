use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use tui_shell::{
    Cmd, Content, FocusTarget, HelpCategory, Key, Modal, ModalManager, Msg, Shell, ShellConfig,
    Size, Tab, TabBar, TabContent,
};

type Log = Arc<Mutex<Vec<String>>>;

struct Pane {
    name: &'static str,
    log: Log,
}

impl Pane {
    fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: Arc::clone(log),
        }
    }
}

impl Content for Pane {
    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(key) = msg.as_key() {
            self.log
                .lock()
                .expect("log")
                .push(format!("{} key {}", self.name, key));
        }
        None
    }

    fn view(&self) -> String {
        format!("pane {}", self.name)
    }

    fn as_tab_content(&mut self) -> Option<&mut dyn TabContent> {
        Some(self)
    }
}

impl TabContent for Pane {
    fn on_activate(&mut self) -> Option<Cmd> {
        self.log
            .lock()
            .expect("log")
            .push(format!("activate {}", self.name));
        Some(Cmd::msg(Msg::Refresh))
    }

    fn on_deactivate(&mut self) {
        self.log
            .lock()
            .expect("log")
            .push(format!("deactivate {}", self.name));
    }
}

struct Deaf {
    id: String,
    pops: Log,
}

impl Deaf {
    fn new(id: &str, pops: &Log) -> Self {
        Self {
            id: id.to_string(),
            pops: Arc::clone(pops),
        }
    }
}

impl Modal for Deaf {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        "Deaf"
    }

    fn size(&self) -> Size {
        Size::Small
    }

    fn render(&self, _width: usize, _height: usize) -> String {
        format!("[{}]", self.id)
    }

    fn on_pop(&mut self) {
        self.pops.lock().expect("pops").push(self.id.clone());
    }

    fn handle_key(&mut self, _key: &Key) -> (bool, Option<Cmd>) {
        (false, None)
    }
}

fn activations(log: &Log) -> usize {
    log.lock()
        .expect("log")
        .iter()
        .filter(|entry| entry.starts_with("activate"))
        .count()
}

#[test]
fn tiny_viewport_activates_first_tab_exactly_once() {
    let log = Log::default();
    let mut shell = Shell::new(ShellConfig {
        show_tab_bar: true,
        show_status_bar: true,
        show_input: true,
        ..ShellConfig::default()
    });
    shell.add_tab(Tab::new("a", "A").with_content(Pane::new("a", &log)));
    shell.add_tab(Tab::new("b", "B").with_content(Pane::new("b", &log)));

    let first = shell.update(Msg::resize(80, 3));
    assert!(first.is_some());
    assert_eq!(shell.active_tab().map(|tab| tab.id.as_str()), Some("a"));
    assert_eq!(shell.content_height(), 1);
    assert_eq!(activations(&log), 1);

    assert!(shell.update(Msg::resize(80, 3)).is_none());
    assert_eq!(activations(&log), 1);

    // Rendering must cope with a viewport smaller than the chrome.
    assert!(!shell.view().is_empty());
}

#[test]
fn loading_until_sized() {
    let shell = Shell::new(ShellConfig::default());
    assert_eq!(shell.view(), "Loading...");
}

#[test]
fn modal_owns_keys_until_escape() {
    let pops = Log::default();
    let mut shell = Shell::new(ShellConfig::default());
    shell.update(Msg::resize(60, 20));
    shell.push_modal(Box::new(Deaf::new("deaf", &pops)));

    assert!(shell.update(Msg::key("ctrl+c")).is_none());
    assert!(shell.update(Msg::key("q")).is_none());
    assert_eq!(shell.modals().count(), 1);
    assert_eq!(shell.input().value(), "");

    shell.update(Msg::key("esc"));
    assert_eq!(shell.modals().count(), 0);
    assert_eq!(*pops.lock().expect("pops"), vec!["deaf".to_string()]);
    assert_eq!(shell.focus(), FocusTarget::Input);
    assert!(matches!(shell.update(Msg::key("ctrl+c")), Some(Cmd::Quit)));
}

#[test]
fn help_overlay_round_trip() {
    let mut shell = Shell::new(ShellConfig {
        help_categories: vec![HelpCategory::new("Global")
            .binding("ctrl+c", "Quit")
            .binding("esc", "Toggle focus")],
        ..ShellConfig::default()
    });
    shell.update(Msg::resize(60, 20));

    shell.update(Msg::key("?"));
    assert!(shell.view().contains("Keyboard Shortcuts"));

    let Some(Cmd::Msg(close)) = shell.update(Msg::key("q")) else {
        panic!("help should ask to close itself");
    };
    shell.update(close);
    assert!(!shell.modals().has_active());
    assert!(!shell.view().contains("Keyboard Shortcuts"));

    // Closing by message leaves focus parked on the modal target until escape.
    assert_eq!(shell.focus(), FocusTarget::Modal);
    shell.update(Msg::key("escape"));
    assert_eq!(shell.focus(), FocusTarget::Input);
}

#[test]
fn tab_focus_cycles_and_forwards_the_cycling_key() {
    let log = Log::default();
    let mut shell = Shell::new(ShellConfig::default());
    shell.add_tab(Tab::new("a", "A").with_content(Pane::new("a", &log)));
    shell.add_tab(Tab::new("b", "B").with_content(Pane::new("b", &log)));
    shell.update(Msg::resize(60, 20));
    shell.update(Msg::key("escape"));
    assert_eq!(shell.focus(), FocusTarget::Tab);

    shell.update(Msg::key("tab"));
    assert_eq!(shell.active_tab().map(|tab| tab.id.as_str()), Some("b"));
    assert_eq!(
        log.lock().expect("log").last().map(String::as_str),
        Some("b key tab")
    );
}

#[test]
fn frame_shows_tabs_content_input_and_status() {
    let log = Log::default();
    let mut shell = Shell::new(ShellConfig {
        input_placeholder: "Ask anything".to_string(),
        ..ShellConfig::default()
    });
    shell.add_tab(Tab::new("a", "Chat").with_content(Pane::new("a", &log)));
    shell.status_bar_mut().set_left("ready");
    shell.update(Msg::resize(30, 10));

    let frame = shell.view();
    let lines: Vec<&str> = frame.split('\n').collect();
    assert_eq!(lines.len(), 10);
    assert!(lines[0].contains("Chat"));
    assert_eq!(lines[1], "pane a");
    assert!(lines[7].contains("Ask anything"));
    assert!(lines[9].starts_with("ready"));
}

#[test]
fn manager_counts_and_versions_track_successful_operations() {
    let pops = Log::default();
    let mut manager = ModalManager::new();
    let mut expected_count = 0;
    let mut expected_version = 0;
    for step in 0..12 {
        if step % 3 == 2 {
            if manager.pop().is_some() {
                expected_count -= 1;
                expected_version += 1;
            }
        } else {
            manager.push(Box::new(Deaf::new(&format!("m{step}"), &pops)));
            expected_count += 1;
            expected_version += 1;
        }
        assert_eq!(manager.count(), expected_count);
        assert_eq!(manager.version(), expected_version);
    }

    pops.lock().expect("pops").clear();
    manager.clear();
    assert_eq!(
        *pops.lock().expect("pops"),
        vec!["m9", "m6", "m3", "m0"]
    );
    manager.pop();
    assert_eq!(manager.version(), expected_version + 4);
}

#[test]
fn cycling_a_full_lap_returns_to_start() {
    for len in 1..5 {
        let mut bar = TabBar::new();
        for index in 0..len {
            bar.add_tab(Tab::new(format!("t{index}"), format!("T{index}")));
        }
        bar.set_active_by_index(len / 2);
        let start = bar.active_index();
        for _ in 0..len {
            bar.next_tab();
        }
        assert_eq!(bar.active_index(), start);
        for _ in 0..len {
            bar.prev_tab();
        }
        assert_eq!(bar.active_index(), start);
    }
}

#[test]
fn removing_tabs_keeps_active_in_range() {
    let mut bar = TabBar::new();
    for id in ["a", "b", "c"] {
        bar.add_tab(Tab::new(id, id));
    }
    bar.set_active_by_index(1);
    bar.remove_tab("a");
    assert_eq!(bar.active_index(), 1);
    assert_eq!(bar.active_tab().map(|tab| tab.id.as_str()), Some("c"));
    bar.remove_tab("c");
    assert_eq!(bar.active_index(), 0);
    bar.add_tab(Tab::new("c", "c"));
    bar.set_active_by_index(1);
    bar.remove_tab("b");
    assert_eq!(bar.active_index(), 0);
    assert_eq!(bar.active_tab().map(|tab| tab.id.as_str()), Some("c"));
    bar.remove_tab("c");
    assert_eq!(bar.active_index(), 0);
    assert!(bar.active_tab().is_none());
}
