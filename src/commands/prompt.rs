//! Interactive app name prompt

use inquire::Text;
use inquire::validator::Validation;

use crate::bundle::AppName;
use crate::error::{Result, SappError};

/// Ask for the app name on the terminal, re-asking until it is a valid name
pub fn prompt_app_name() -> Result<AppName> {
    println!();

    let name = Text::new("Enter the name of your app:")
        .with_validator(|input: &str| Ok(validate_app_name(input)))
        .prompt()?;

    println!();
    AppName::new(name)
}

fn validate_app_name(input: &str) -> Validation {
    match AppName::new(input) {
        Ok(_) => Validation::Valid,
        Err(SappError::InvalidAppName { reason, .. }) => Validation::Invalid(reason.into()),
        Err(e) => Validation::Invalid(e.to_string().into()),
    }
}
