use color_eyre::Result;

fn main() -> Result<()> {
    kiosk::run()
}
