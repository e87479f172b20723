mod cli;
mod commands;
mod render;

use karar_hesap::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
