//! Human-readable terminal renderer.

use crate::application::services::install::{InstallPlan, InstallReport};
use crate::output::OutputContext;

/// Renders install results as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the locations of a finished install.
    pub fn render_report(&self, report: &InstallReport) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.kv("Image:      ", &report.paths.installed_image.display().to_string());
        self.ctx.kv("Module file:", &report.paths.module_file.display().to_string());
        self.ctx.info(&format!("Load with: module load {}", report.package));
    }

    /// Render the actions a dry run would take.
    pub fn render_plan(&self, plan: &InstallPlan) {
        if self.ctx.quiet {
            return;
        }
        self.ctx.header(&format!("Dry run for {}", plan.package));
        self.ctx.kv("Create:", &plan.paths.install_dir.display().to_string());
        self.ctx.kv("Write: ", &plan.paths.module_file.display().to_string());
        self.ctx.kv(
            "Move:  ",
            &format!(
                "{} -> {}",
                plan.paths.staged_image.display(),
                plan.paths.installed_image.display()
            ),
        );
        if !plan.staged_image_present {
            self.ctx.warn(&format!(
                "No staged image at {}",
                plan.paths.staged_image.display()
            ));
        }
        println!();
        print!("{}", plan.modulefile);
    }
}
