//! ttcard main entrypoint.

use ttcard::run;
use ttcard::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
