use flacsync_lib::cli::{ResolvedCommand, parse_args, resolve_command, run_list, run_mirror};
use flacsync_lib::error::FlacSyncError;

// The whole process runs on one thread: entries are checked and downloaded
// strictly one after another.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), FlacSyncError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Mirror(params) => run_mirror(params).await?,
        ResolvedCommand::List(params) => run_list(params).await?,
    }

    Ok(())
}
