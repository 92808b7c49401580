use std::io::{self, Read};

use crate::clipboard::{CopyTarget, SystemClipboard, copy};
use crate::error::AppError;

pub struct CopyOptions {
    pub target: CopyTarget,
    /// Read from stdin when absent.
    pub text: Option<String>,
}

pub fn execute_copy(options: CopyOptions) -> Result<(), AppError> {
    let text = match options.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    copy(&SystemClipboard, options.target, &text)?;
    println!("Copied");
    Ok(())
}
