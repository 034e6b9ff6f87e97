use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::settings::{ensure_settings, save_settings};
use crate::db::templates::{delete_template, insert_template, load_template, load_templates};
use crate::errors::{AppError, AppResult};
use crate::models::settings::Settings;
use crate::models::shift_template::ShiftTemplate;
use chrono::NaiveTime;

pub const DEFAULT_TEMPLATE_GRACE: u32 = 5;

/// Named shift configurations that can be copied into the live settings.
pub struct ShiftTemplateCatalog {
    pool: DbPool,
}

impl ShiftTemplateCatalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(
        &self,
        name: &str,
        start: NaiveTime,
        end: NaiveTime,
        grace: u32,
    ) -> AppResult<ShiftTemplate> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidName("template name must not be blank".into()));
        }

        self.pool.with_conn(|conn| {
            let id = insert_template(conn, name, start, end, grace)?;
            let t = load_template(conn, id)?.ok_or(AppError::TemplateNotFound(id))?;
            ttlog_quiet(conn, "template_add", &format!("#{id}"), &t.describe());
            Ok(t)
        })
    }

    /// All templates, alphabetical by name.
    pub fn list(&self) -> AppResult<Vec<ShiftTemplate>> {
        self.pool.with_conn(|conn| load_templates(conn))
    }

    /// Remove a template. Settings and the ledger are never touched.
    pub fn delete(&self, id: i64) -> AppResult<bool> {
        self.pool.with_conn(|conn| {
            let removed = delete_template(conn, id)? > 0;
            if removed {
                ttlog_quiet(conn, "template_del", &format!("#{id}"), "Shift template deleted");
            }
            Ok(removed)
        })
    }

    /// Copy the template's start, end and grace into the live settings.
    /// The selfie flag keeps its current value.
    pub fn apply(&self, id: i64) -> AppResult<Settings> {
        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            let t = load_template(&tx, id)?.ok_or(AppError::TemplateNotFound(id))?;
            let next = ensure_settings(&tx)?.with_template(&t);
            save_settings(&tx, &next)?;
            ttlog_quiet(&tx, "template_apply", &format!("#{id}"), &next.describe());
            tx.commit()?;
            Ok(next)
        })
    }
}
