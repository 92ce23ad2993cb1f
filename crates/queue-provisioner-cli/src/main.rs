use queue_provisioner_cli::run_cli;
use tracing::error;

fn main() {
    // Run CLI and handle errors
    if let Err(e) = run_cli() {
        error!("CLI error: {}", e);

        // Exit with appropriate code based on error type
        let exit_code = match e {
            queue_provisioner_cli::CliError::Configuration(_) => 1,
            queue_provisioner_cli::CliError::Validation(_) => 2,
            queue_provisioner_cli::CliError::Outputs(_) => 3,
            queue_provisioner_cli::CliError::InvalidArgument { .. } => 4,
            queue_provisioner_cli::CliError::Io(_) => 5,
            queue_provisioner_cli::CliError::Serialization { .. } => 6,
        };

        std::process::exit(exit_code);
    }
}
