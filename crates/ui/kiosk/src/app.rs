use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use site::{ContactRecord, PageKey, UserRecord};
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::{
    action::Action,
    cli::Cli,
    components::{
        Component, footer::Footer, nav_bar::NavBar,
        popups::{PopupComponent, confirm::ConfirmPopup, render_backdrop},
    },
    config::Config,
    router::Router,
    style::Theme,
    tui::{Event, Tui},
};

/// The application shell. Owns the router, the chrome components, the popup
/// slot and the record sinks; everything else talks to it through actions.
pub struct App {
    pub config: Config,
    theme: Theme,
    router: Router,
    nav: NavBar,
    footer: Footer,
    popup: Option<Box<dyn PopupComponent>>,
    /// Page requested on the command line, if its path resolved.
    initial: Option<PageKey>,
    /// Session singletons, overwritten wholesale on each successful submit.
    last_contact: Option<ContactRecord>,
    last_user: Option<UserRecord>,
    tick_rate: f64,
    frame_rate: f64,
    should_quit: bool,
    should_suspend: bool,
}

impl App {
    pub fn new(args: Cli) -> Result<Self> {
        let config = Config::new()?;
        let theme = Theme::from_choice(args.theme);

        // An unrecognized path is reported, not fatal; the app stays on the
        // default page.
        let initial = match Router::resolve(&args.path) {
            Ok(key) => Some(key),
            Err(err) => {
                error!("{err}");
                None
            }
        };

        Ok(Self {
            config,
            theme,
            router: Router::new(),
            nav: NavBar::new(),
            footer: Footer::new(),
            popup: None,
            initial,
            last_contact: None,
            last_user: None,
            tick_rate: args.tick_rate,
            frame_rate: args.frame_rate,
            should_quit: false,
            should_suspend: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

        let mut tui = Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        let area = tui.size()?;
        let theme = self.theme.clone();
        self.router.for_each_page(|page| {
            page.register_action_handler(action_tx.clone())?;
            page.register_theme(theme.clone())?;
            page.init(area)
        })?;
        self.nav.register_theme(self.theme.clone())?;
        self.footer.register_theme(self.theme.clone())?;

        if let Some(key) = self.initial {
            action_tx.send(Action::Navigate(key))?;
        } else {
            // Keep the chrome consistent with the default page.
            action_tx.send(Action::Navigate(self.router.active_key()))?;
        }

        loop {
            if let Some(event) = tui.next().await {
                let mut consumed = false;
                if let Some(popup) = &mut self.popup {
                    if let Some(action) = popup.handle_events(Some(event.clone()))? {
                        action_tx.send(action)?;
                    }
                    // A modal popup swallows keys; the page never sees them.
                    consumed = popup.is_modal() && matches!(event, Event::Key(_));
                }
                if !consumed {
                    if let Some(action) =
                        self.router.active_mut().handle_events(Some(event.clone()))?
                    {
                        action_tx.send(action)?;
                    }
                }

                match event {
                    Event::Quit => action_tx.send(Action::Quit)?,
                    Event::Tick => action_tx.send(Action::Tick)?,
                    Event::Render => action_tx.send(Action::Render)?,
                    Event::Resize(w, h) => action_tx.send(Action::Resize(w, h))?,
                    Event::Key(key) if !consumed => {
                        if let Some(action) = self.global_key(key) {
                            action_tx.send(action)?;
                        }
                    }
                    _ => {}
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    tracing::debug!("{action:?}");
                }
                match &action {
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::Error(msg) => tracing::error!("{msg}"),
                    Action::Navigate(key) => self.router.navigate(*key)?,
                    Action::ConfirmReset => {
                        self.popup = Some(Box::new(
                            ConfirmPopup::new("Reset Form", "Are You Sure?")
                                .ok_label("Yes")
                                .cancel_label("No"),
                        ));
                    }
                    Action::ClosePopup => self.popup = None,
                    Action::ContactSubmitted(record) => {
                        info!("contact message recorded from {}", record.email);
                        self.last_contact = Some(record.clone());
                    }
                    Action::UserRegistered(record) => {
                        info!("user registered: {}", record.email);
                        self.last_user = Some(record.clone());
                    }
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, *w, *h))?;
                        tui.draw(|f| {
                            self.render(f).unwrap_or_else(|err| {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {err:?}")))
                                    .ok();
                            })
                        })?;
                    }
                    Action::Render => {
                        tui.draw(|f| {
                            self.render(f).unwrap_or_else(|err| {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {err:?}")))
                                    .ok();
                            })
                        })?;
                    }
                    _ => {}
                }

                // Fan the action out. The popup and the active page both see
                // it: a popup result closes the popup and is acted on by the
                // form that requested it.
                if let Some(popup) = &mut self.popup {
                    if let Some(next) = popup.update(action.clone())? {
                        action_tx.send(next)?;
                    }
                }
                if let Some(next) = self.router.active_mut().update(action.clone())? {
                    action_tx.send(next)?;
                }
                if let Some(next) = self.nav.update(action.clone())? {
                    action_tx.send(next)?;
                }
                if let Some(next) = self.footer.update(action.clone())? {
                    action_tx.send(next)?;
                }
            }

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui = Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    /// The last committed contact submission, if any.
    pub fn last_contact(&self) -> Option<&ContactRecord> {
        self.last_contact.as_ref()
    }

    /// The last committed registration, if any.
    pub fn last_user(&self) -> Option<&UserRecord> {
        self.last_user.as_ref()
    }

    /// Keys that work everywhere, after the page had its chance.
    fn global_key(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('z') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Suspend)
            }
            // Page switching mirrors the nav bar, Alt + first letter.
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => {
                let key = match c {
                    'h' => PageKey::Home,
                    'p' => PageKey::Products,
                    's' => PageKey::Services,
                    'a' => PageKey::About,
                    'j' => PageKey::Projects,
                    'c' => PageKey::Contact,
                    'l' => PageKey::Login,
                    'r' => PageKey::Register,
                    _ => return None,
                };
                Some(Action::Navigate(key))
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame<'_>) -> Result<()> {
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.nav.draw(frame, rows[0])?;
        self.router.active_mut().draw(frame, rows[1])?;
        self.footer.draw(frame, rows[2])?;

        if let Some(popup) = &mut self.popup {
            render_backdrop(frame, frame.area());
            popup.draw(frame, frame.area())?;
        }
        Ok(())
    }
}
