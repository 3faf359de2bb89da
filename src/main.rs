use shelf_check::auth::user_interface::{login_flow, LoginOutcome};
use shelf_check::catalog::user_interface::run_desk_session;
use shelf_check::catalog::Catalog;
use shelf_check::utils::logging::initialize_logging;

fn main() {
    // Logging failure is not fatal; the desk still works without a log file
    if let Err(e) = initialize_logging() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    // Fixed at startup, read-only for the life of the process
    let catalog = Catalog::builtin();

    // Gate first, then the query session; the session never returns to the gate
    match login_flow() {
        LoginOutcome::Granted(username) => run_desk_session(&catalog, &username),
        LoginOutcome::Exit => {}
    }
}
