//! Status command implementation.

use crate::models::config::Credentials;
use crate::preflight::SETUP_STEPS;
use colored::Colorize;

/// Print key presence and setup instructions.
pub fn status() {
    let key_status = Credentials::from_env().key_status();

    println!("{}", "🔐 Environment Status".bold());
    if key_status.is_present() {
        println!("  {}", key_status.message().green());
    } else {
        println!("  {}", key_status.message().red());
    }
    println!();

    println!("{}", "📝 Setup Instructions".bold());
    for (i, step) in SETUP_STEPS.iter().enumerate() {
        println!("  {}. {}", i + 1, step.replace('`', ""));
    }
}
