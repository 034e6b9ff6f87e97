use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

/// ANSI colour per audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "sign_in" => Colour::Green,
        "sign_out" => Colour::Cyan,
        "delete" | "clear" | "template_del" => Colour::Red,
        "rename" | "settings" | "template_apply" => Colour::Yellow,
        "template_add" => Colour::Green,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print: true } = cmd {
        let pool = open_pool(cfg)?;
        let rows = pool.with_conn(|conn| load_log(conn))?;

        if rows.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let labels: Vec<String> = rows
            .iter()
            .map(|r| {
                if r.target.is_empty() {
                    r.operation.clone()
                } else {
                    format!("{} ({})", r.operation, r.target)
                }
            })
            .collect();

        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.date.width()).max().unwrap_or(10);
        let op_w = labels.iter().map(|l| l.width()).max().unwrap_or(10).min(60);

        println!("📜 Internal log:\n");

        for (r, label) in rows.iter().zip(&labels) {
            let padding = " ".repeat(op_w.saturating_sub(label.width()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                r.id,
                r.date,
                color_for_operation(&r.operation).paint(label.as_str()),
                padding,
                r.message,
            );
        }
    }
    Ok(())
}
