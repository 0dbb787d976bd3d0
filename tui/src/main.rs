use anyhow::Result;

mod app;
mod ui;

fn main() -> Result<()> {
    env_logger::init();
    app::run::run()
}
