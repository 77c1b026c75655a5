//! Maintenance utility. `products-db --clear` drops and recreates the `products` table.

use clap::Parser;
use products_api::{connect, init_tracing, reset_schema, AppError, Config};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "products-db", version, about = "Database maintenance for the products API")]
struct Cli {
    /// Destroy and recreate the schema. All rows are lost.
    #[arg(long)]
    clear: bool,
}

async fn clear_db() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let pool = connect(&config).await?;
    reset_schema(&pool).await?;
    pool.close().await;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    if !cli.clear {
        return ExitCode::SUCCESS;
    }
    match clear_db().await {
        Ok(()) => {
            println!("¡Datos eliminados correctamente!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_flag_is_optional() {
        assert!(!Cli::try_parse_from(["products-db"]).unwrap().clear);
        assert!(Cli::try_parse_from(["products-db", "--clear"]).unwrap().clear);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["products-db", "--drop"]).is_err());
    }
}
