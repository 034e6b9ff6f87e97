use crate::cli::commands::open_pool;
use crate::cli::parser::{Commands, TemplateAction};
use crate::config::Config;
use crate::core::templates::ShiftTemplateCatalog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success};
use crate::utils::time::parse_hhmm;

fn catalog(cfg: &Config) -> AppResult<ShiftTemplateCatalog> {
    Ok(ShiftTemplateCatalog::new(open_pool(cfg)?))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Template { action } = cmd {
        match action {
            TemplateAction::Add {
                name,
                start,
                end,
                grace,
            } => {
                // validate times before opening the database
                let (start, end) = (parse_hhmm(start)?, parse_hhmm(end)?);
                let t = catalog(cfg)?.create(name, start, end, *grace)?;
                success(format!("Template #{} created: {}", t.id, t.describe()));
            }
            TemplateAction::List => {
                let templates = catalog(cfg)?.list()?;
                if templates.is_empty() {
                    info("No shift templates.");
                    return Ok(());
                }
                header("Shift templates");
                for t in templates {
                    println!("#{:<4} {}", t.id, t.describe());
                }
            }
            TemplateAction::Del { id } => {
                if !catalog(cfg)?.delete(*id)? {
                    return Err(AppError::TemplateNotFound(*id));
                }
                success(format!("Template #{id} deleted."));
            }
            TemplateAction::Apply { id } => {
                let s = catalog(cfg)?.apply(*id)?;
                success(format!("Template #{id} applied. {}", s.describe()));
            }
        }
    }
    Ok(())
}
