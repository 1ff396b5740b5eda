use warden_compliance::{DashboardView, GuardSelection, MetricFilter};

use crate::cli::{DashboardArgs, GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render, render_array_table};
use crate::ui;

/// Handle `warden dashboard`.
pub fn handle(args: &DashboardArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = build(args, ctx)?;
    match flags.format {
        OutputFormat::Json | OutputFormat::Raw => output(&view, flags.format),
        OutputFormat::Table => {
            println!("{}", render(&view.stats, OutputFormat::Table)?);
            println!();
            let rows = serde_json::to_value(&view.rows)?;
            let rows = rows.as_array().map_or(&[][..], Vec::as_slice);
            println!("{}", render_array_table(rows, ui::prefs().table_color));
            Ok(())
        }
    }
}

/// Unset flags fall back to `general.default_period` / `general.default_guard`.
fn build(args: &DashboardArgs, ctx: &AppContext) -> anyhow::Result<DashboardView> {
    let viewer = ctx.require_user(&args.viewer)?;
    let general = &ctx.config.general;
    let filter = MetricFilter::new(
        args.period.unwrap_or(general.default_period),
        args.guard
            .clone()
            .unwrap_or_else(|| GuardSelection::from(general.default_guard.clone())),
    );

    Ok(DashboardView::build(
        viewer,
        ctx.store.users(),
        ctx.store.metrics(),
        ctx.store.activities(),
        &filter,
    ))
}
