//! Podlink CLI entry point.

use podlink::ui::output;

fn main() {
    if let Err(err) = podlink::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
