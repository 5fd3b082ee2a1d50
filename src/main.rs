use std::process::ExitCode;

use cryptar::app::App;
use cryptar::ui::display;

fn main() -> ExitCode {
    match App::init().execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            display::show_error(&err);
            ExitCode::from(err.exit_code())
        }
    }
}
