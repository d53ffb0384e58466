use color_eyre::Result;
use ratatui::{
    Frame,
    layout::{Rect, Size},
};
use tokio::sync::mpsc::UnboundedSender;

use crate::{action::Action, style::Theme, tui::Event};

mod contact;
mod home;
mod info;
mod login;
mod register;

pub use contact::ContactPage;
pub use home::HomePage;
pub use info::InfoPage;
pub use login::LoginPage;
pub use register::RegisterPage;

/// A `Page` composes multiple `Component`s and exposes a lifecycle similar to
/// the `Component` trait but at the page level. The router owns one page per
/// page key and the app drives whichever one is active.
pub trait Page {
    #[allow(dead_code)]
    fn name(&self) -> &str;

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        let _ = tx;
        Ok(())
    }

    fn register_theme(&mut self, theme: Theme) -> Result<()> {
        let _ = theme;
        Ok(())
    }

    fn init(&mut self, area: Size) -> Result<()> {
        let _ = area;
        Ok(())
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<Action>> {
        let _ = event;
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the page using the provided `Frame` and `area`.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;

    /// Called when the page becomes active.
    fn on_enter(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called when the page is leaving / being replaced.
    fn on_exit(&mut self) -> Result<()> {
        Ok(())
    }
}
