//! DarkCTF entry point
//!
//! The web build renders into the page skeleton in `index.html`; the native
//! build runs the terminal front end.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlInputElement};

    use dark_ctf::game::{Game, SubmitOutcome};
    use dark_ctf::persistence::ProgressStore;
    use dark_ctf::platform::{LocalStorage, MemoryStorage, Storage};
    use dark_ctf::progress::StageState;
    use dark_ctf::puzzle::View;
    use dark_ctf::settings::Settings;
    use dark_ctf::ui::{self, MasterPanel, StageCard, Toast};

    /// App instance holding all state
    struct App {
        game: Game<Box<dyn Storage>>,
        settings: Settings,
        /// Bumped on every toast so an older timeout doesn't hide a newer one
        toast_seq: u32,
    }

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", hidden);
        }
    }

    fn open_storage() -> Box<dyn Storage> {
        match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{} - progress will not persist", e);
                Box::new(MemoryStorage::new())
            }
        }
    }

    impl App {
        fn new() -> Self {
            let storage = open_storage();
            let mut settings = Settings::load(&storage);
            // <body data-backend-url="..."> wins over stored settings
            if let Some(url) = document()
                .body()
                .and_then(|b| b.get_attribute("data-backend-url"))
                .filter(|url| !url.trim().is_empty())
            {
                settings.backend_url = Some(url);
            }
            Self {
                game: Game::new(ProgressStore::new(storage)),
                settings,
                toast_seq: 0,
            }
        }

        /// Update DOM to match game state
        fn render(&self) {
            let document = document();

            let pct = self.game.completion_percent();
            set_text(&document, "progress-label", &ui::progress_label(&self.game));
            if let Some(bar) = document.get_element_by_id("progress-fill") {
                let _ = bar.set_attribute("style", &format!("width: {}%", pct));
            }

            for entry in self.game.nav() {
                let id = format!("nav-{}", entry.view.as_str());
                if let Some(el) = document.get_element_by_id(&id) {
                    let mut class = String::from("nav-item");
                    if entry.active {
                        class.push_str(" active");
                    }
                    class.push_str(if entry.unlocked { " unlocked" } else { " locked" });
                    let _ = el.set_attribute("class", &class);
                }
                set_text(
                    &document,
                    &format!("{}-icon", id),
                    if entry.unlocked { "🔓" } else { "🔒" },
                );
                set_hidden(&document, &format!("{}-solved", id), !entry.solved);
            }

            match self.game.active() {
                View::Stage(id) => {
                    set_hidden(&document, "stage-card", false);
                    set_hidden(&document, "master-view", true);

                    let card = StageCard::new(&self.game, id, self.settings.show_hints);
                    set_text(&document, "stage-title", card.title);
                    if let Some(el) = document.get_element_by_id("stage-title") {
                        let _ = el.set_attribute("style", &format!("color: {}", card.color));
                    }
                    set_text(&document, "stage-difficulty", card.difficulty);
                    set_text(&document, "stage-prompt", card.prompt);
                    set_text(&document, "stage-payload", &card.payload_block);
                    set_text(&document, "stage-hint", card.hint.unwrap_or_default());
                    set_hidden(&document, "stage-hint", card.hint.is_none());
                    set_text(
                        &document,
                        "stage-status-icon",
                        if card.state == StageState::Solved { "🛡" } else { "🔐" },
                    );

                    set_text(&document, "stage-locked", ui::LOCKED_STAGE_TEXT);
                    set_hidden(&document, "stage-locked", card.accepts_input());
                    set_hidden(&document, "answer-form", !card.accepts_input());
                    set_text(&document, "stage-solved", ui::SOLVED_STAGE_TEXT);
                    set_hidden(&document, "stage-solved", card.state != StageState::Solved);
                }
                View::Master => {
                    set_hidden(&document, "stage-card", true);
                    set_hidden(&document, "master-view", false);

                    let panel = MasterPanel::new(&self.game);
                    set_text(&document, "master-locked", ui::LOCKED_MASTER_TEXT);
                    set_hidden(&document, "master-locked", panel.flag.is_some());
                    set_text(&document, "master-flag", panel.flag.unwrap_or_default());
                    set_hidden(&document, "master-unlocked", panel.flag.is_none());
                }
            }

            for tile in ui::flag_tiles(&self.game) {
                set_text(&document, &format!("flag-{}", tile.view.as_str()), &tile.value);
            }
        }
    }

    /// Show a toast and schedule it to disappear
    fn show_toast(app: &Rc<RefCell<App>>, toast: &Toast) {
        let document = document();
        set_text(&document, "toast-title", &toast.title);
        set_text(&document, "toast-description", &toast.description);
        set_hidden(&document, "toast", false);

        let (seq, delay) = {
            let mut a = app.borrow_mut();
            a.toast_seq = a.toast_seq.wrapping_add(1);
            (a.toast_seq, a.settings.toast_ms as i32)
        };
        let app = app.clone();
        let closure = Closure::once_into_js(move || {
            if app.borrow().toast_seq == seq {
                set_hidden(&document, "toast", true);
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.unchecked_ref(),
                delay,
            );
        }
    }

    fn setup_nav(app: Rc<RefCell<App>>) {
        let document = document();
        for view in View::ALL {
            let Some(el) = document.get_element_by_id(&format!("nav-{}", view.as_str())) else {
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().game.select(view);
                app.borrow().render();
            });
            let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_answer_form(app: Rc<RefCell<App>>) {
        let document = document();
        let Some(form) = document.get_element_by_id("answer-form") else {
            log::warn!("No #answer-form in page");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let document = self::document();
            let Some(input) = document
                .get_element_by_id("answer-input")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };

            let outcome = app.borrow_mut().game.submit(&input.value());
            if let SubmitOutcome::Solved { stage, .. } = &outcome {
                log::info!("Stage {} cleared", stage.as_str());
                input.set_value("");
            }
            if let Some(toast) = Toast::for_outcome(&outcome) {
                show_toast(&app, &toast);
            }
            app.borrow().render();
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();

        if let Some(input) = document.get_element_by_id("answer-input") {
            let _ = input.set_attribute("placeholder", ui::INPUT_PLACEHOLDER);
        }
    }

    fn setup_reset_button(app: Rc<RefCell<App>>) {
        let document = document();
        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().game.reset();
                show_toast(&app, &Toast::reset());
                app.borrow().render();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("DarkCTF starting...");

        let app = Rc::new(RefCell::new(App::new()));
        let document = document();

        // Hide loading indicator
        set_hidden(&document, "loading", true);

        setup_nav(app.clone());
        setup_answer_form(app.clone());
        setup_reset_button(app.clone());
        app.borrow().render();
        set_hidden(&document, "app", false);

        if let Some(url) = app.borrow().settings.health_url() {
            dark_ctf::health::spawn(url);
        }

        log::info!("DarkCTF running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    log::info!("DarkCTF (native) starting...");
    dark_ctf::cli::run(dark_ctf::cli::Cli::parse())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
