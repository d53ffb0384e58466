use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "kiosk", version, about = "Storefront terminal site shell")]
pub struct Cli {
    /// Path of the page to open, e.g. /contact.html
    #[arg(default_value = "/home.html")]
    pub path: String,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    pub theme: ThemeChoice,

    /// Tick rate, i.e. number of ticks per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 4.0)]
    pub tick_rate: f64,

    /// Frame rate, i.e. number of frames per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 60.0)]
    pub frame_rate: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    HighContrast,
}
