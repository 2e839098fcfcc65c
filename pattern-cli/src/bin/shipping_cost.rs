use std::io;

use anyhow::Result;
use common::sink;
use pattern_cli::shipping_menu::ShippingMenu;

fn main() -> Result<()> {
    pattern_cli::config::log::init();

    ShippingMenu::new(io::stdin().lock(), sink::stdout()).run()?;
    Ok(())
}
