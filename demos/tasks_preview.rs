//! Prints the empty tasks screen as plain text.
//!
//! Run with `cargo run --example tasks_preview [width] [height]`.

use makeitso::icons::{IconService, IconTheme};
use makeitso::ui::screens::tasks::preview::{buffer_to_string, render_preview};
use makeitso::ui::Theme;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let width = args.next().map(|w| w.parse()).transpose()?.unwrap_or(60);
    let height = args.next().map(|h| h.parse()).transpose()?.unwrap_or(20);

    let theme = Theme::new(IconService::new(IconTheme::Unicode));
    let buffer = render_preview(width, height, &theme)?;
    print!("{}", buffer_to_string(&buffer));
    Ok(())
}
