use crate::cli::commands::{open_pool, system_clock};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{DirectoryDestination, ExportEngine};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        selfies,
        dir,
    } = cmd
    {
        let out_dir = match dir {
            Some(d) => expand_tilde(d),
            None => cfg.export_path(),
        };

        let engine = ExportEngine::new(
            open_pool(cfg)?,
            system_clock(),
            Box::new(DirectoryDestination::new(out_dir)),
        );
        let artifact = engine.export(*format, *selfies)?;
        println!("{}", artifact.path.display());
    }
    Ok(())
}
