// src/modules/auth/user_interface.rs
use std::io::{self, Write};

use super::gate::authenticate;
use super::password::read_password;
use crate::modules::utils::io::read_line;

/// Result of the interactive login flow
#[derive(Debug)]
pub enum LoginOutcome {
    Granted(String), // Successful login with the username
    Exit,            // Operator chose to quit at the gate
}

/// Function to show the login screen header and the password rule hint
fn show_login_screen() {
    println!("\n=== Login ===");
    println!(
        "Password must contain at least 8 characters, including one uppercase \
         letter, one lowercase letter, one digit, and one special character."
    );
    println!("(Type 'exit' as username to quit)");
}

// Interactive credential gate. Loops until the operator either logs in or
// quits; a denied attempt prints a generic message and re-prompts.
// Returns: LoginOutcome::Granted(username) on success, LoginOutcome::Exit
// if the operator leaves without logging in.
pub fn login_flow() -> LoginOutcome {
    loop {
        show_login_screen();

        print!("Username: ");
        if let Err(e) = io::stdout().flush() {
            println!("Error writing prompt: {}", e);
            continue;
        }
        let username = match read_line() {
            Ok(input) => input,
            Err(e) => {
                println!("Error reading input: {}", e);
                continue;
            }
        };

        if username.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            return LoginOutcome::Exit;
        }

        print!("Password: ");
        if let Err(e) = io::stdout().flush() {
            println!("Error writing prompt: {}", e);
            continue;
        }
        let password = match read_password() {
            Ok(input) => input,
            Err(e) => {
                println!("Error reading password: {}", e);
                continue;
            }
        };

        if authenticate(&username, &password) {
            println!("\nLogin successful!");
            return LoginOutcome::Granted(username);
        }

        // Same message for a bad username and a bad password
        println!("\nInvalid username or password.");
    }
}
