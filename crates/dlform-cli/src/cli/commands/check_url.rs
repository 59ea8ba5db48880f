//! `dlform check-url` – URL validity check, exit code 0/1.

use anyhow::Result;
use dlform_core::urlcheck::is_valid_url;

pub fn run_check_url(url: &str) -> Result<()> {
    if is_valid_url(url) {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        std::process::exit(1);
    }
}
