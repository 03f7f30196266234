pub mod actions;
pub mod copy;
pub mod events;
pub mod state;

use std::time::Duration;

use crate::clipboard::ClipboardService;
use crate::config::Config;
use crate::input::{self, InputSubscription};
use crate::tui::{self, TuiTerminal};
use actions::{Action, ViewAction};
use events::InputEvent;
use rand::SeedableRng;
use rand::rngs::StdRng;
use state::{AppState, ViewState};
use tokio::sync::mpsc;
use tracing::{debug, info};

pub struct App {
    cfg: Config,
    state: AppState,
    rng: StdRng,
    clipboard: Box<dyn ClipboardService>,
}

impl App {
    pub fn new(cfg: Config, seed: Option<u64>, clipboard: Box<dyn ClipboardService>) -> Self {
        let mut rng = match seed.or(cfg.generator.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        // Initial load: a setting change into the configured defaults.
        let view = ViewState::load(cfg.generator.gradient_type, cfg.generator.color_style, &mut rng);
        let mut state = AppState::new(view);
        state.grid.tile_height = cfg.ui.effective_tile_height();

        Self {
            cfg,
            state,
            rng,
            clipboard,
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<InputEvent>(256);

        // Dropped on every exit path, which stops the reader task.
        let _input = InputSubscription::spawn(tx, self.cfg.input.mouse);

        info!(
            gradient_type = %self.state.view.gradient_type(),
            color_style = %self.state.view.color_style(),
            "gradient grid started"
        );

        tui::draw(terminal, &self.cfg, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            if let Some(action) = input::map_input_to_action(&self.state, ev) {
                self.handle_action(action);
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.cfg, &mut self.state)?;
        }

        Ok(())
    }

    fn toast_ttl(&self) -> Duration {
        Duration::from_secs(self.cfg.ui.toast_secs)
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::Tick | Action::Resize => {}
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,

            Action::SetType(t) => self.dispatch(ViewAction::SetType(t)),
            Action::SetStyle(s) => self.dispatch(ViewAction::SetStyle(s)),
            Action::CycleType => {
                let next = self.state.view.gradient_type().next();
                self.dispatch(ViewAction::SetType(next));
            }
            Action::CycleTypeBack => {
                let prev = self.state.view.gradient_type().prev();
                self.dispatch(ViewAction::SetType(prev));
            }
            Action::CycleStyle => {
                let next = self.state.view.color_style().next();
                self.dispatch(ViewAction::SetStyle(next));
            }
            Action::CycleStyleBack => {
                let prev = self.state.view.color_style().prev();
                self.dispatch(ViewAction::SetStyle(prev));
            }
            Action::Refresh => self.dispatch(ViewAction::Refresh),

            Action::Select(index) => self.state.select(index),
            Action::Nav(nav) => {
                self.state.navigate(nav);
                // Every scroll gesture is a scroll event, even when already
                // pinned at the bottom.
                let geometry = self.state.scroll_geometry(self.cfg.ui.scroll_threshold);
                self.dispatch(ViewAction::Scrolled(geometry));
            }
            Action::Copy { index, format } => {
                let ttl = self.toast_ttl();
                let Some(descriptor) = self.state.view.items().get(index) else {
                    return;
                };
                let toast = copy::copy_snippet(self.clipboard.as_mut(), descriptor, format, ttl);
                self.state.selected = index;
                self.state.toast = Some(toast);
            }
        }
    }

    fn dispatch(&mut self, action: ViewAction) {
        debug!(?action, "view action");
        self.state.apply_view(action, &mut self.rng);
    }
}
