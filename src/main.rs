//! abstracker main entrypoint.

use abstracker::run;
use abstracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
