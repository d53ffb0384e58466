use serde::{Deserialize, Serialize};
use site::{ContactRecord, PageKey, UserRecord};
use strum::Display;

/// Outcome of a modal popup, re-injected into the action loop so the page
/// that requested the popup can react to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopupResult {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    /// Swap the mounted page and re-mark the nav link.
    Navigate(PageKey),
    /// The contact form's reset control was activated; the app opens the
    /// confirmation popup in response.
    ConfirmReset,
    ClosePopup,
    PopupResult(PopupResult),
    /// A contact submission passed the native-validity gate.
    ContactSubmitted(ContactRecord),
    /// A registration was committed (never gated, see the register form).
    UserRegistered(UserRecord),
    /// The login form was submitted; carries the entered username. Purely a
    /// cosmetic session indicator, no credentials are checked.
    LoggedIn(String),
}
